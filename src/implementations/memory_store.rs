use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::errors::{RegistryError, RegistryResult};
use crate::models::property::{Property, PropertyId};
use crate::models::transaction::TransactionRecord;
use crate::traits::ledger_store::LedgerStore;

/// In-memory ledger store for tests and embedded use.
///
/// A `BTreeMap` keeps iteration in id order; the id counter only ever
/// moves forward, so ids are never reused even after a record is
/// overwritten.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    inner: RwLock<MemoryLedger>,
}

#[derive(Debug, Default)]
struct MemoryLedger {
    properties: BTreeMap<PropertyId, Property>,
    transactions: Vec<TransactionRecord>,
    next_id: PropertyId,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RegistryResult<std::sync::RwLockReadGuard<'_, MemoryLedger>> {
        self.inner
            .read()
            .map_err(|e| RegistryError::Storage(format!("ledger lock poisoned: {e}")))
    }

    fn write(&self) -> RegistryResult<std::sync::RwLockWriteGuard<'_, MemoryLedger>> {
        self.inner
            .write()
            .map_err(|e| RegistryError::Storage(format!("ledger lock poisoned: {e}")))
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn get(&self, id: PropertyId) -> RegistryResult<Property> {
        self.read()?
            .properties
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    async fn put(&self, property: Property) -> RegistryResult<()> {
        self.write()?.properties.insert(property.id, property);
        Ok(())
    }

    async fn next_id(&self) -> RegistryResult<PropertyId> {
        let mut ledger = self.write()?;
        ledger.next_id += 1;
        Ok(ledger.next_id)
    }

    async fn append_transaction(
        &self,
        mut record: TransactionRecord,
    ) -> RegistryResult<TransactionRecord> {
        let mut ledger = self.write()?;
        record.id = ledger.transactions.len() as u64 + 1;
        ledger.transactions.push(record.clone());
        Ok(record)
    }

    async fn commit_purchase(
        &self,
        property: Property,
        mut record: TransactionRecord,
    ) -> RegistryResult<TransactionRecord> {
        // One write lock covers both mutations.
        let mut ledger = self.write()?;
        ledger.properties.insert(property.id, property);
        record.id = ledger.transactions.len() as u64 + 1;
        ledger.transactions.push(record.clone());
        Ok(record)
    }

    async fn all_properties(&self) -> RegistryResult<Vec<Property>> {
        Ok(self.read()?.properties.values().cloned().collect())
    }

    async fn transactions(&self) -> RegistryResult<Vec<TransactionRecord>> {
        Ok(self.read()?.transactions.clone())
    }
}
