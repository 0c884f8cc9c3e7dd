pub mod access_control;
pub mod event_log;
pub mod file_store;
pub mod memory_store;
pub mod registry;

// Re-export implementations
pub use access_control::AccessControlGuard;
pub use event_log::{LoggingSink, RecordingSink};
pub use file_store::FileLedgerStore;
pub use memory_store::MemoryLedgerStore;
pub use registry::LedgerRegistry;
