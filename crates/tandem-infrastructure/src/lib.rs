pub mod config_service;
pub mod fallback_log;
pub mod gateway;
pub mod paths;
pub mod secret_service;
pub mod supabase_store;

pub use crate::config_service::ConfigService;
pub use crate::fallback_log::FallbackLog;
pub use crate::gateway::PersistenceGateway;
pub use crate::secret_service::FileSecretService;
pub use crate::supabase_store::SupabaseStore;
