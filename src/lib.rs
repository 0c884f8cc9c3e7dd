pub mod cli;
pub mod config;
pub mod errors;
pub mod implementations;
pub mod models;
pub mod traits;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ConfigError, RegistryConfig, GOVERNMENT_IDENTITY_VAR};
pub use errors::{RegistryError, RegistryResult};
pub use implementations::{
    AccessControlGuard, FileLedgerStore, LedgerRegistry, LoggingSink, MemoryLedgerStore,
    RecordingSink,
};
pub use models::{
    event::RegistryEvent,
    identity::{Identity, Role, RoleCheck},
    property::{Amount, Property, PropertyId, PropertyStage},
    transaction::TransactionRecord,
};
pub use traits::{EventSink, LedgerStore, PropertyRegistry};
