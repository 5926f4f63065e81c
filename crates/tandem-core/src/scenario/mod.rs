//! Role-play scenario definitions.
//!
//! A scenario pairs learner-facing instructions with a hidden persona
//! script for the simulated partner, in both supported languages. The
//! catalog is static data compiled into the binary.

mod catalog;
mod model;

pub use catalog::{all, find, ids_for_phase, learner_header};
pub use model::{CommunicationType, Scenario};
