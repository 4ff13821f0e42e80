pub mod devto;
pub mod sync;

pub use devto::DevtoClient;
pub use sync::{SyncConfig, SyncJob};
