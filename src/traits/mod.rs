pub mod event_sink;
pub mod ledger_store;
pub mod registry;

// Re-export traits
pub use event_sink::EventSink;
pub use ledger_store::LedgerStore;
pub use registry::PropertyRegistry;
