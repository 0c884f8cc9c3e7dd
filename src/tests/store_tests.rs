use tokio::test;

use crate::config::RegistryConfig;
use crate::errors::RegistryError;
use crate::implementations::access_control::AccessControlGuard;
use crate::implementations::event_log::LoggingSink;
use crate::implementations::file_store::FileLedgerStore;
use crate::implementations::registry::LedgerRegistry;
use crate::models::identity::Identity;
use crate::traits::ledger_store::LedgerStore;
use crate::traits::registry::PropertyRegistry;

const PRICE: u128 = 1_000_000_000_000_000_000;

// Tests run in parallel threads but the process environment is shared.
// Any test that touches GOVERNMENT_IDENTITY must hold this lock.
static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[test]
async fn file_store_round_trips_ledger_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let government = Identity::from("gov");

    {
        let store = FileLedgerStore::open(&path).unwrap();
        let registry = LedgerRegistry::new(
            store,
            LoggingSink::new(),
            AccessControlGuard::new(government.clone()),
        );
        registry
            .register("House", "City A", PRICE, "docHash123", &Identity::from("alice"))
            .await
            .unwrap();
        registry.verify(1, &government, true).await.unwrap();
        registry
            .list_for_sale(1, &Identity::from("alice"), PRICE)
            .await
            .unwrap();
        registry.buy(1, &Identity::from("bob"), PRICE).await.unwrap();
    }

    // Reopen from disk: same records, same transaction log, same counter
    let store = FileLedgerStore::open(&path).unwrap();
    let property = store.get(1).await.unwrap();
    assert_eq!(property.owner, Identity::from("bob"));
    assert!(!property.for_sale);
    assert!(property.verified);

    let log = store.transactions().await.unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].amount, PRICE);

    // The id counter survives reopen, so ids are never reused
    assert_eq!(store.next_id().await.unwrap(), 2);
}

#[test]
async fn file_store_reports_unknown_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileLedgerStore::open(&dir.path().join("ledger.json")).unwrap();
    assert!(matches!(
        store.get(7).await.unwrap_err(),
        RegistryError::NotFound(7)
    ));
}

#[test]
async fn config_falls_back_to_environment() {
    let _env = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

    let config = RegistryConfig {
        government_identity: Some("gov".to_string()),
        ledger_path: None,
    };
    assert_eq!(config.government_identity().unwrap(), Identity::from("gov"));
    assert_eq!(config.ledger_path(), std::path::PathBuf::from("ledger.json"));

    let config = RegistryConfig::default();
    std::env::set_var(crate::config::GOVERNMENT_IDENTITY_VAR, "env-gov");
    assert_eq!(
        config.government_identity().unwrap(),
        Identity::from("env-gov")
    );
    std::env::remove_var(crate::config::GOVERNMENT_IDENTITY_VAR);
}
