pub mod event;
pub mod identity;
pub mod property;
pub mod transaction;

// Re-export common model types
pub use event::RegistryEvent;
pub use identity::{Identity, Role, RoleCheck};
pub use property::{Amount, Property, PropertyId, PropertyStage};
pub use transaction::TransactionRecord;
