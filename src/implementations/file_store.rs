use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::{RegistryError, RegistryResult};
use crate::models::property::{Property, PropertyId};
use crate::models::transaction::TransactionRecord;
use crate::traits::ledger_store::LedgerStore;

/// On-disk snapshot of the ledger.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerFile {
    properties: BTreeMap<PropertyId, Property>,
    transactions: Vec<TransactionRecord>,
    next_id: PropertyId,
}

/// JSON file-backed ledger store used by the CLI.
///
/// The whole ledger is loaded on open and rewritten on every mutation.
/// The file is written to a sibling temp path and renamed over the
/// original, so a crash mid-write leaves the previous snapshot intact.
#[derive(Debug)]
pub struct FileLedgerStore {
    path: PathBuf,
    inner: RwLock<LedgerFile>,
}

impl FileLedgerStore {
    /// Open a ledger file, creating an empty ledger if the file does
    /// not exist yet.
    pub fn open(path: &Path) -> RegistryResult<Self> {
        let ledger = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let ledger: LedgerFile = serde_json::from_str(&contents)?;
            info!(
                "Opened ledger {} with {} properties, {} transactions",
                path.display(),
                ledger.properties.len(),
                ledger.transactions.len()
            );
            ledger
        } else {
            info!("Ledger {} does not exist, starting empty", path.display());
            LedgerFile::default()
        };

        Ok(FileLedgerStore {
            path: path.to_path_buf(),
            inner: RwLock::new(ledger),
        })
    }

    fn read(&self) -> RegistryResult<std::sync::RwLockReadGuard<'_, LedgerFile>> {
        self.inner
            .read()
            .map_err(|e| RegistryError::Storage(format!("ledger lock poisoned: {e}")))
    }

    fn write(&self) -> RegistryResult<std::sync::RwLockWriteGuard<'_, LedgerFile>> {
        self.inner
            .write()
            .map_err(|e| RegistryError::Storage(format!("ledger lock poisoned: {e}")))
    }

    fn persist(&self, ledger: &LedgerFile) -> RegistryResult<()> {
        let contents = serde_json::to_string_pretty(ledger)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!("Persisted ledger to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl LedgerStore for FileLedgerStore {
    async fn get(&self, id: PropertyId) -> RegistryResult<Property> {
        self.read()?
            .properties
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    async fn put(&self, property: Property) -> RegistryResult<()> {
        let mut ledger = self.write()?;
        let id = property.id;
        let previous = ledger.properties.insert(id, property);
        if let Err(e) = self.persist(&ledger) {
            // Keep the in-memory view matching the file.
            match previous {
                Some(p) => ledger.properties.insert(id, p),
                None => ledger.properties.remove(&id),
            };
            return Err(e);
        }
        Ok(())
    }

    async fn next_id(&self) -> RegistryResult<PropertyId> {
        let mut ledger = self.write()?;
        ledger.next_id += 1;
        if let Err(e) = self.persist(&ledger) {
            ledger.next_id -= 1;
            return Err(e);
        }
        Ok(ledger.next_id)
    }

    async fn append_transaction(
        &self,
        mut record: TransactionRecord,
    ) -> RegistryResult<TransactionRecord> {
        let mut ledger = self.write()?;
        record.id = ledger.transactions.len() as u64 + 1;
        ledger.transactions.push(record.clone());
        if let Err(e) = self.persist(&ledger) {
            ledger.transactions.pop();
            return Err(e);
        }
        Ok(record)
    }

    async fn commit_purchase(
        &self,
        property: Property,
        mut record: TransactionRecord,
    ) -> RegistryResult<TransactionRecord> {
        // Both mutations go into one snapshot and one file write, so a
        // failed write leaves neither the owner swap nor the record.
        let mut ledger = self.write()?;
        let id = property.id;
        let previous = ledger.properties.insert(id, property);
        record.id = ledger.transactions.len() as u64 + 1;
        ledger.transactions.push(record.clone());
        if let Err(e) = self.persist(&ledger) {
            ledger.transactions.pop();
            match previous {
                Some(p) => ledger.properties.insert(id, p),
                None => ledger.properties.remove(&id),
            };
            return Err(e);
        }
        Ok(record)
    }

    async fn all_properties(&self) -> RegistryResult<Vec<Property>> {
        Ok(self.read()?.properties.values().cloned().collect())
    }

    async fn transactions(&self) -> RegistryResult<Vec<TransactionRecord>> {
        Ok(self.read()?.transactions.clone())
    }
}
