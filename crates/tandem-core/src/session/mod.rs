//! Session state machine.
//!
//! Tracks which batch of scenarios is active, which scenario and language
//! are selected, the in-progress turn sequence, and the feedback flow.

mod batch;
mod controller;
mod meta;

pub use batch::BatchState;
pub use controller::SessionController;
pub use meta::SessionMeta;
