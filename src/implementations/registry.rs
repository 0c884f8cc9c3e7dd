use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::errors::{RegistryError, RegistryResult};
use crate::implementations::access_control::AccessControlGuard;
use crate::models::event::RegistryEvent;
use crate::models::identity::Identity;
use crate::models::property::{Amount, Property, PropertyId};
use crate::models::transaction::TransactionRecord;
use crate::traits::event_sink::EventSink;
use crate::traits::ledger_store::LedgerStore;
use crate::traits::registry::PropertyRegistry;

/// The registry state machine over an injectable store and event sink.
///
/// Each mutating command runs snapshot -> validate -> single `put`
/// under the commit lock, so no other write interleaves between the
/// check and the apply. A failed command never reaches `put` and leaves
/// the record unchanged. Events are published after the write commits;
/// a failing sink is logged and ignored.
pub struct LedgerRegistry<S, E> {
    store: S,
    sink: E,
    guard: AccessControlGuard,
    // Serializes check-then-act across commands. Coarse, but commands
    // are short and the host ledger orders conflicting writes anyway.
    commit: Mutex<()>,
}

impl<S, E> LedgerRegistry<S, E>
where
    S: LedgerStore,
    E: EventSink,
{
    pub fn new(store: S, sink: E, guard: AccessControlGuard) -> Self {
        LedgerRegistry {
            store,
            sink,
            guard,
            commit: Mutex::new(()),
        }
    }

    pub fn guard(&self) -> &AccessControlGuard {
        &self.guard
    }

    /// Direct access to the underlying store, read side only.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    async fn emit(&self, event: RegistryEvent) {
        if let Err(e) = self.sink.publish(event.clone()).await {
            // The ledger state is already committed; consumers resync
            // from the store if they miss an event.
            warn!("event sink failed for {}: {}", event.kind(), e);
        }
    }
}

fn require_field(value: &str, field: &str) -> RegistryResult<()> {
    if value.trim().is_empty() {
        return Err(RegistryError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_price(price: Amount) -> RegistryResult<()> {
    if price == 0 {
        return Err(RegistryError::InvalidInput("price must be greater than zero".to_string()));
    }
    Ok(())
}

#[async_trait]
impl<S, E> PropertyRegistry for LedgerRegistry<S, E>
where
    S: LedgerStore,
    E: EventSink,
{
    async fn register(
        &self,
        name: &str,
        location: &str,
        price: Amount,
        document_hash: &str,
        registrant: &Identity,
    ) -> RegistryResult<Property> {
        require_field(name, "name")?;
        require_field(location, "location")?;
        require_field(document_hash, "document hash")?;
        require_price(price)?;

        let _commit = self.commit.lock().await;
        let id = self.store.next_id().await?;
        let property = Property {
            id,
            name: name.to_string(),
            location: location.to_string(),
            document_hash: document_hash.to_string(),
            price,
            owner: registrant.clone(),
            for_sale: false,
            verified: false,
        };
        self.store.put(property.clone()).await?;

        info!("registered property {} for {}", id, registrant);
        self.emit(RegistryEvent::Registered {
            property_id: id,
            owner: registrant.clone(),
        })
        .await;
        Ok(property)
    }

    async fn verify(
        &self,
        id: PropertyId,
        authority: &Identity,
        approve: bool,
    ) -> RegistryResult<Property> {
        if !self.guard.is_government(authority) {
            debug!("verify {} denied for {}", id, authority);
            return Err(RegistryError::Unauthorized(format!(
                "{authority} is not the government authority"
            )));
        }

        let _commit = self.commit.lock().await;
        let mut property = self.store.get(id).await?;
        if property.verified != approve {
            property.verified = approve;
            self.store.put(property.clone()).await?;
        }
        // Re-approving a verified record is a no-op success; the event
        // still goes out, one per successful operation.

        info!(
            "property {} {}",
            id,
            if approve { "verified" } else { "rejected" }
        );
        self.emit(RegistryEvent::Verified {
            property_id: id,
            approved: approve,
        })
        .await;
        Ok(property)
    }

    async fn list_for_sale(
        &self,
        id: PropertyId,
        caller: &Identity,
        price: Amount,
    ) -> RegistryResult<Property> {
        require_price(price)?;

        let _commit = self.commit.lock().await;
        let mut property = self.store.get(id).await?;
        let check = self.guard.check(&property, caller);
        if !check.is_owner {
            debug!("list {} denied for {} (role {:?})", id, caller, check.role());
            return Err(RegistryError::Unauthorized(format!(
                "{caller} does not own property {id}"
            )));
        }
        // Policy: a record must pass government verification before it
        // can go on the market.
        if !property.verified {
            return Err(RegistryError::InvalidState(format!(
                "property {id} is not verified"
            )));
        }

        property.for_sale = true;
        property.price = price;
        self.store.put(property.clone()).await?;

        info!("property {} listed at {}", id, price);
        self.emit(RegistryEvent::Listed {
            property_id: id,
            price,
        })
        .await;
        Ok(property)
    }

    async fn delist(&self, id: PropertyId, caller: &Identity) -> RegistryResult<Property> {
        let _commit = self.commit.lock().await;
        let mut property = self.store.get(id).await?;
        let check = self.guard.check(&property, caller);
        if !check.is_owner {
            debug!("delist {} denied for {} (role {:?})", id, caller, check.role());
            return Err(RegistryError::Unauthorized(format!(
                "{caller} does not own property {id}"
            )));
        }
        if !property.for_sale {
            return Err(RegistryError::InvalidState(format!(
                "property {id} is not listed for sale"
            )));
        }

        property.for_sale = false;
        self.store.put(property.clone()).await?;

        info!("property {} delisted", id);
        self.emit(RegistryEvent::Delisted { property_id: id }).await;
        Ok(property)
    }

    async fn buy(
        &self,
        id: PropertyId,
        buyer: &Identity,
        payment: Amount,
    ) -> RegistryResult<TransactionRecord> {
        let _commit = self.commit.lock().await;
        let mut property = self.store.get(id).await?;
        if !property.for_sale {
            return Err(RegistryError::InvalidState(format!(
                "property {id} is not for sale"
            )));
        }
        if buyer == &property.owner {
            return Err(RegistryError::InvalidInput(
                "buyer already owns this property".to_string(),
            ));
        }
        // Exact-payment policy: no change given, no partial payment.
        if payment != property.price {
            return Err(RegistryError::InvalidInput(format!(
                "payment {} does not match asking price {}",
                payment, property.price
            )));
        }

        let seller = property.owner.clone();
        property.owner = buyer.clone();
        property.for_sale = false;

        // Ownership transfer and transaction record are one store
        // commit; a failure here leaves the record as it was.
        let record = self
            .store
            .commit_purchase(
                property,
                TransactionRecord {
                    id: 0,
                    property_id: id,
                    buyer: buyer.clone(),
                    seller: seller.clone(),
                    amount: payment,
                    timestamp: Utc::now(),
                },
            )
            .await?;

        info!("property {} sold by {} to {} for {}", id, seller, buyer, payment);
        self.emit(RegistryEvent::Purchased {
            property_id: id,
            buyer: buyer.clone(),
            seller,
            amount: payment,
        })
        .await;
        Ok(record)
    }

    async fn property(&self, id: PropertyId) -> RegistryResult<Property> {
        self.store.get(id).await
    }

    async fn properties(&self) -> RegistryResult<Vec<Property>> {
        self.store.all_properties().await
    }

    async fn listings(&self) -> RegistryResult<Vec<Property>> {
        let properties = self.store.all_properties().await?;
        Ok(properties.into_iter().filter(|p| p.for_sale).collect())
    }

    async fn holdings(&self, owner: &Identity) -> RegistryResult<Vec<Property>> {
        let properties = self.store.all_properties().await?;
        Ok(properties.into_iter().filter(|p| &p.owner == owner).collect())
    }

    async fn pending_verification(&self) -> RegistryResult<Vec<Property>> {
        let properties = self.store.all_properties().await?;
        Ok(properties.into_iter().filter(|p| !p.verified).collect())
    }

    async fn history(&self, id: PropertyId) -> RegistryResult<Vec<TransactionRecord>> {
        // Surface NotFound for unknown ids rather than an empty log.
        self.store.get(id).await?;
        let log = self.store.transactions().await?;
        Ok(log.into_iter().filter(|t| t.property_id == id).collect())
    }

    async fn transactions(&self) -> RegistryResult<Vec<TransactionRecord>> {
        self.store.transactions().await
    }
}
