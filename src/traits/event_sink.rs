use async_trait::async_trait;

use crate::errors::RegistryResult;
use crate::models::event::RegistryEvent;

/// Outbound boundary for the append-only stream of state changes.
///
/// The registry publishes exactly one event per successful mutating
/// operation, after the store write commits. A failing sink is logged
/// and ignored: downstream read models sync from this stream, but the
/// ledger itself never depends on a consumer succeeding.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn publish(&self, event: RegistryEvent) -> RegistryResult<()>;
}
