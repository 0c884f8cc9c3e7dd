use async_trait::async_trait;
use log::info;
use tokio::test;

use crate::errors::{RegistryError, RegistryResult};
use crate::implementations::access_control::AccessControlGuard;
use crate::implementations::event_log::RecordingSink;
use crate::implementations::memory_store::MemoryLedgerStore;
use crate::implementations::registry::LedgerRegistry;
use crate::models::event::RegistryEvent;
use crate::models::identity::Identity;
use crate::models::property::{Property, PropertyId, PropertyStage};
use crate::models::transaction::TransactionRecord;
use crate::traits::ledger_store::LedgerStore;
use crate::traits::registry::PropertyRegistry;

// Setup function to initialize logging
fn setup() {
    match env_logger::try_init() {
        Ok(_) => {
            info!("Logger initialized");
        }
        Err(_) => {
            // Logger already initialized, which is fine
        }
    }
}

const PRICE: u128 = 1_000_000_000_000_000_000; // 1 ETH in wei

fn government() -> Identity {
    Identity::from("gov")
}

fn test_registry() -> LedgerRegistry<MemoryLedgerStore, RecordingSink> {
    setup();
    LedgerRegistry::new(
        MemoryLedgerStore::new(),
        RecordingSink::new(),
        AccessControlGuard::new(government()),
    )
}

#[test]
async fn register_creates_unverified_unlisted_record() {
    let registry = test_registry();
    let owner = Identity::from("alice");

    let property = registry
        .register("House", "City A", PRICE, "docHash123", &owner)
        .await
        .unwrap();

    assert_eq!(property.id, 1);
    assert_eq!(property.owner, owner);
    assert!(!property.for_sale);
    assert!(!property.verified);
    assert_eq!(property.stage(), PropertyStage::Unverified);

    // The record round-trips through the store with the same fields
    let stored = registry.property(1).await.unwrap();
    assert_eq!(stored, property);
}

#[test]
async fn register_rejects_bad_input() {
    let registry = test_registry();
    let owner = Identity::from("alice");

    let err = registry
        .register("", "City A", PRICE, "docHash123", &owner)
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidInput(_)));

    let err = registry
        .register("House", "City A", 0, "docHash123", &owner)
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidInput(_)));

    let err = registry
        .register("House", "City A", PRICE, "  ", &owner)
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidInput(_)));

    // Nothing was stored
    assert!(registry.properties().await.unwrap().is_empty());
}

#[test]
async fn ids_are_monotonic_and_never_reused() {
    let registry = test_registry();
    let owner = Identity::from("alice");

    let a = registry
        .register("House", "City A", PRICE, "hash-a", &owner)
        .await
        .unwrap();
    let b = registry
        .register("Flat", "City B", PRICE, "hash-b", &owner)
        .await
        .unwrap();
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);
}

#[test]
async fn verify_requires_government_authority() {
    let registry = test_registry();
    let owner = Identity::from("alice");
    registry
        .register("House", "City A", PRICE, "docHash123", &owner)
        .await
        .unwrap();

    // The owner cannot verify their own property
    let err = registry.verify(1, &owner, true).await.unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized(_)));
    assert!(!registry.property(1).await.unwrap().verified);

    let property = registry.verify(1, &government(), true).await.unwrap();
    assert!(property.verified);
}

#[test]
async fn verify_is_idempotent() {
    let registry = test_registry();
    let owner = Identity::from("alice");
    registry
        .register("House", "City A", PRICE, "docHash123", &owner)
        .await
        .unwrap();

    let once = registry.verify(1, &government(), true).await.unwrap();
    let twice = registry.verify(1, &government(), true).await.unwrap();
    assert_eq!(once, twice);
    assert!(twice.verified);
}

#[test]
async fn rejection_clears_verification_explicitly() {
    let registry = test_registry();
    let owner = Identity::from("alice");
    registry
        .register("House", "City A", PRICE, "docHash123", &owner)
        .await
        .unwrap();

    registry.verify(1, &government(), true).await.unwrap();
    let rejected = registry.verify(1, &government(), false).await.unwrap();
    assert!(!rejected.verified);
}

#[test]
async fn listing_requires_owner_verification_and_positive_price() {
    let registry = test_registry();
    let owner = Identity::from("alice");
    registry
        .register("House", "City A", PRICE, "docHash123", &owner)
        .await
        .unwrap();

    // Unverified records cannot be listed
    let err = registry.list_for_sale(1, &owner, PRICE).await.unwrap_err();
    assert!(matches!(err, RegistryError::InvalidState(_)));
    assert!(!registry.property(1).await.unwrap().for_sale);

    registry.verify(1, &government(), true).await.unwrap();

    // Non-owners cannot list
    let err = registry
        .list_for_sale(1, &Identity::from("mallory"), PRICE)
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized(_)));
    assert!(!registry.property(1).await.unwrap().for_sale);

    // Zero price is rejected
    let err = registry.list_for_sale(1, &owner, 0).await.unwrap_err();
    assert!(matches!(err, RegistryError::InvalidInput(_)));

    let listed = registry.list_for_sale(1, &owner, 2 * PRICE).await.unwrap();
    assert!(listed.for_sale);
    assert_eq!(listed.price, 2 * PRICE);
    assert_eq!(listed.stage(), PropertyStage::VerifiedListed);
}

#[test]
async fn delist_requires_owner_and_active_listing() {
    let registry = test_registry();
    let owner = Identity::from("alice");
    registry
        .register("House", "City A", PRICE, "docHash123", &owner)
        .await
        .unwrap();
    registry.verify(1, &government(), true).await.unwrap();

    // Delisting an unlisted property is an invalid state
    let err = registry.delist(1, &owner).await.unwrap_err();
    assert!(matches!(err, RegistryError::InvalidState(_)));

    registry.list_for_sale(1, &owner, PRICE).await.unwrap();

    // Non-owner delist leaves the listing untouched
    let err = registry
        .delist(1, &Identity::from("mallory"))
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized(_)));
    assert!(registry.property(1).await.unwrap().for_sale);

    let delisted = registry.delist(1, &owner).await.unwrap();
    assert!(!delisted.for_sale);
}

#[test]
async fn buy_transfers_ownership_atomically() {
    let registry = test_registry();
    let owner = Identity::from("alice");
    let buyer = Identity::from("bob");
    registry
        .register("House", "City A", PRICE, "docHash123", &owner)
        .await
        .unwrap();
    registry.verify(1, &government(), true).await.unwrap();
    registry.list_for_sale(1, &owner, PRICE).await.unwrap();

    let record = registry.buy(1, &buyer, PRICE).await.unwrap();
    assert_eq!(record.property_id, 1);
    assert_eq!(record.buyer, buyer);
    assert_eq!(record.seller, owner);
    assert_eq!(record.amount, PRICE);

    let property = registry.property(1).await.unwrap();
    assert_eq!(property.owner, buyer);
    assert!(!property.for_sale);
    assert!(property.verified);

    let history = registry.history(1).await.unwrap();
    assert_eq!(history, vec![record]);
}

#[test]
async fn buy_enforces_exact_payment_and_distinct_buyer() {
    let registry = test_registry();
    let owner = Identity::from("alice");
    let buyer = Identity::from("bob");
    registry
        .register("House", "City A", PRICE, "docHash123", &owner)
        .await
        .unwrap();
    registry.verify(1, &government(), true).await.unwrap();
    registry.list_for_sale(1, &owner, PRICE).await.unwrap();

    // Underpayment and overpayment are both rejected
    let err = registry.buy(1, &buyer, PRICE - 1).await.unwrap_err();
    assert!(matches!(err, RegistryError::InvalidInput(_)));
    let err = registry.buy(1, &buyer, PRICE + 1).await.unwrap_err();
    assert!(matches!(err, RegistryError::InvalidInput(_)));

    // The owner cannot buy their own property
    let err = registry.buy(1, &owner, PRICE).await.unwrap_err();
    assert!(matches!(err, RegistryError::InvalidInput(_)));

    // No transaction was recorded and the record is unchanged
    assert!(registry.transactions().await.unwrap().is_empty());
    let property = registry.property(1).await.unwrap();
    assert_eq!(property.owner, owner);
    assert!(property.for_sale);
}

#[test]
async fn buy_fails_when_not_for_sale() {
    let registry = test_registry();
    let owner = Identity::from("alice");
    let buyer = Identity::from("bob");
    registry
        .register("House", "City A", PRICE, "docHash123", &owner)
        .await
        .unwrap();

    let err = registry.buy(1, &buyer, PRICE).await.unwrap_err();
    assert!(matches!(err, RegistryError::InvalidState(_)));
    assert!(registry.transactions().await.unwrap().is_empty());
}

#[test]
async fn unknown_property_is_not_found() {
    let registry = test_registry();
    let caller = Identity::from("alice");

    assert!(matches!(
        registry.property(42).await.unwrap_err(),
        RegistryError::NotFound(42)
    ));
    assert!(matches!(
        registry.verify(42, &government(), true).await.unwrap_err(),
        RegistryError::NotFound(42)
    ));
    assert!(matches!(
        registry.delist(42, &caller).await.unwrap_err(),
        RegistryError::NotFound(42)
    ));
    assert!(matches!(
        registry.history(42).await.unwrap_err(),
        RegistryError::NotFound(42)
    ));
}

#[test]
async fn full_lifecycle_emits_ordered_events() {
    let registry = test_registry();
    let owner = Identity::from("alice");
    let buyer = Identity::from("bob");

    registry
        .register("House", "City A", PRICE, "docHash123", &owner)
        .await
        .unwrap();
    registry.verify(1, &government(), true).await.unwrap();
    registry.list_for_sale(1, &owner, PRICE).await.unwrap();
    registry.buy(1, &buyer, PRICE).await.unwrap();

    let events = registry.sink().events();
    assert_eq!(
        events,
        vec![
            RegistryEvent::Registered {
                property_id: 1,
                owner: owner.clone(),
            },
            RegistryEvent::Verified {
                property_id: 1,
                approved: true,
            },
            RegistryEvent::Listed {
                property_id: 1,
                price: PRICE,
            },
            RegistryEvent::Purchased {
                property_id: 1,
                buyer: buyer.clone(),
                seller: owner,
                amount: PRICE,
            },
        ]
    );

    // Failed operations publish nothing
    let before = registry.sink().events().len();
    registry.buy(1, &buyer, PRICE).await.unwrap_err();
    assert_eq!(registry.sink().events().len(), before);
}

/// Store whose purchase commit always fails, as a full disk would.
/// Everything else delegates to the in-memory ledger.
#[derive(Default)]
struct BrokenCommitStore {
    inner: MemoryLedgerStore,
}

#[async_trait]
impl LedgerStore for BrokenCommitStore {
    async fn get(&self, id: PropertyId) -> RegistryResult<Property> {
        self.inner.get(id).await
    }

    async fn put(&self, property: Property) -> RegistryResult<()> {
        self.inner.put(property).await
    }

    async fn next_id(&self) -> RegistryResult<PropertyId> {
        self.inner.next_id().await
    }

    async fn append_transaction(
        &self,
        record: TransactionRecord,
    ) -> RegistryResult<TransactionRecord> {
        self.inner.append_transaction(record).await
    }

    async fn commit_purchase(
        &self,
        _property: Property,
        _record: TransactionRecord,
    ) -> RegistryResult<TransactionRecord> {
        Err(RegistryError::Storage("disk full".to_string()))
    }

    async fn all_properties(&self) -> RegistryResult<Vec<Property>> {
        self.inner.all_properties().await
    }

    async fn transactions(&self) -> RegistryResult<Vec<TransactionRecord>> {
        self.inner.transactions().await
    }
}

#[test]
async fn failed_purchase_commit_leaves_record_unchanged() {
    setup();
    let registry = LedgerRegistry::new(
        BrokenCommitStore::default(),
        RecordingSink::new(),
        AccessControlGuard::new(government()),
    );
    let owner = Identity::from("alice");
    let buyer = Identity::from("bob");

    registry
        .register("House", "City A", PRICE, "docHash123", &owner)
        .await
        .unwrap();
    registry.verify(1, &government(), true).await.unwrap();
    registry.list_for_sale(1, &owner, PRICE).await.unwrap();

    let err = registry.buy(1, &buyer, PRICE).await.unwrap_err();
    assert!(matches!(err, RegistryError::Storage(_)));

    // The ownership transfer did not become durable without its
    // transaction record: the property reads exactly as listed.
    let property = registry.property(1).await.unwrap();
    assert_eq!(property.owner, owner);
    assert!(property.for_sale);
    assert_eq!(property.price, PRICE);
    assert!(registry.transactions().await.unwrap().is_empty());

    // And no purchase event went out.
    assert!(registry
        .sink()
        .events()
        .iter()
        .all(|e| !matches!(e, RegistryEvent::Purchased { .. })));
}

#[test]
async fn read_side_views_filter_correctly() {
    let registry = test_registry();
    let alice = Identity::from("alice");
    let bob = Identity::from("bob");

    registry
        .register("House", "City A", PRICE, "hash-a", &alice)
        .await
        .unwrap();
    registry
        .register("Flat", "City B", PRICE, "hash-b", &bob)
        .await
        .unwrap();
    registry.verify(1, &government(), true).await.unwrap();
    registry.list_for_sale(1, &alice, PRICE).await.unwrap();

    let listings = registry.listings().await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id, 1);

    let holdings = registry.holdings(&bob).await.unwrap();
    assert_eq!(holdings.len(), 1);
    assert_eq!(holdings[0].id, 2);

    let pending = registry.pending_verification().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, 2);

    // Direct store access sees both records in id order
    let all = registry.store().all_properties().await.unwrap();
    assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
}
