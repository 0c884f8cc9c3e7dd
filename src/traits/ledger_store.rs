use async_trait::async_trait;

use crate::errors::RegistryResult;
use crate::models::property::{Property, PropertyId};
use crate::models::transaction::TransactionRecord;

/// Persistence boundary for property records and the transaction log.
///
/// Pure data access, no business rules: the state machine validates
/// preconditions and calls `put` exactly once per mutation, so a store
/// only has to make that single write atomic. Ids are monotonic and
/// never reused. Implementable against any durable key-value or
/// relational backend.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Fetch a property record, `NotFound` for unknown ids.
    async fn get(&self, id: PropertyId) -> RegistryResult<Property>;

    /// Full replace of a record. Called only by the state machine under
    /// its check-then-act guarantee.
    async fn put(&self, property: Property) -> RegistryResult<()>;

    /// Allocate the next property id.
    async fn next_id(&self) -> RegistryResult<PropertyId>;

    /// Append a completed purchase to the transaction log, returning
    /// the record with its sequence number filled in.
    async fn append_transaction(
        &self,
        record: TransactionRecord,
    ) -> RegistryResult<TransactionRecord>;

    /// Commit a purchase: replace the property record and append its
    /// transaction record as one write. Either both take effect or
    /// neither does, so a failed purchase never leaves the ownership
    /// transfer durable without its transaction record.
    async fn commit_purchase(
        &self,
        property: Property,
        record: TransactionRecord,
    ) -> RegistryResult<TransactionRecord>;

    /// All property records, in id order.
    async fn all_properties(&self) -> RegistryResult<Vec<Property>>;

    /// The full transaction log, in append order.
    async fn transactions(&self) -> RegistryResult<Vec<TransactionRecord>>;
}
