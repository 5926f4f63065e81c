pub mod chat_api_partner;

pub use crate::chat_api_partner::ChatApiPartner;
