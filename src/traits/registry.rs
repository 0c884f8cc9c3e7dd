use async_trait::async_trait;

use crate::errors::RegistryResult;
use crate::models::identity::Identity;
use crate::models::property::{Amount, Property, PropertyId};
use crate::models::transaction::TransactionRecord;

/// Command facade for the property registry.
///
/// Every command takes the caller identity explicitly; authorization is
/// resolved inside the registry, never assumed from context. All
/// mutating operations are atomic per property: a failed command leaves
/// the record exactly as it was.
#[async_trait]
pub trait PropertyRegistry {
    /// Create a new record owned by `registrant`, unverified and not
    /// for sale. Returns the stored record with its assigned id.
    async fn register(
        &self,
        name: &str,
        location: &str,
        price: Amount,
        document_hash: &str,
        registrant: &Identity,
    ) -> RegistryResult<Property>;

    /// Approve or reject a property's documentation. Government
    /// authority only. Re-approving a verified record is a no-op
    /// success.
    async fn verify(
        &self,
        id: PropertyId,
        authority: &Identity,
        approve: bool,
    ) -> RegistryResult<Property>;

    /// Put a verified property on the market at `price`. Owner only.
    async fn list_for_sale(
        &self,
        id: PropertyId,
        caller: &Identity,
        price: Amount,
    ) -> RegistryResult<Property>;

    /// Take a listed property off the market. Owner only.
    async fn delist(&self, id: PropertyId, caller: &Identity) -> RegistryResult<Property>;

    /// Purchase a listed property with exact payment. Transfers
    /// ownership, clears the listing and appends a transaction record
    /// in one atomic step.
    async fn buy(
        &self,
        id: PropertyId,
        buyer: &Identity,
        payment: Amount,
    ) -> RegistryResult<TransactionRecord>;

    /// Fetch one property record.
    async fn property(&self, id: PropertyId) -> RegistryResult<Property>;

    /// All registered properties.
    async fn properties(&self) -> RegistryResult<Vec<Property>>;

    /// Properties currently on the market.
    async fn listings(&self) -> RegistryResult<Vec<Property>>;

    /// Properties owned by `owner`.
    async fn holdings(&self, owner: &Identity) -> RegistryResult<Vec<Property>>;

    /// Properties awaiting government verification.
    async fn pending_verification(&self) -> RegistryResult<Vec<Property>>;

    /// Purchase history for one property, oldest first.
    async fn history(&self, id: PropertyId) -> RegistryResult<Vec<TransactionRecord>>;

    /// The full transaction log.
    async fn transactions(&self) -> RegistryResult<Vec<TransactionRecord>>;
}
