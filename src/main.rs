use anyhow::Result;
use clap::Parser;
use log::info;

use landledger::cli::{commands, ui, Commands, LandledgerCli};
use landledger::config::RegistryConfig;
use landledger::errors::RegistryError;
use landledger::implementations::access_control::AccessControlGuard;
use landledger::implementations::event_log::LoggingSink;
use landledger::implementations::file_store::FileLedgerStore;
use landledger::implementations::registry::LedgerRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = LandledgerCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // Environment variables may carry the government identity
    dotenv::dotenv().ok();

    // Load configuration
    let config = match &cli.config {
        Some(path) => RegistryConfig::from_file(path)?,
        None => RegistryConfig::default(),
    };

    let government = config.government_identity()?;
    let ledger_path = cli.ledger.clone().unwrap_or_else(|| config.ledger_path());
    info!("Using ledger file {}", ledger_path.display());

    let store = FileLedgerStore::open(&ledger_path)?;
    let guard = AccessControlGuard::new(government);
    let registry = LedgerRegistry::new(store, LoggingSink::new(), guard);

    // Handle commands
    let outcome = match &cli.command {
        Commands::Register {
            caller,
            name,
            location,
            price,
            document_hash,
        } => {
            commands::register::execute(&registry, caller, name, location, *price, document_hash)
                .await
        }

        Commands::Verify { caller, id, reject } => {
            commands::verify::execute(&registry, caller, *id, *reject).await
        }

        Commands::List { caller, id, price } => {
            commands::market::list(&registry, caller, *id, *price).await
        }

        Commands::Delist { caller, id } => {
            commands::market::delist(&registry, caller, *id).await
        }

        Commands::Buy {
            caller,
            id,
            payment,
            yes,
        } => commands::buy::execute(&registry, caller, *id, *payment, *yes).await,

        Commands::Show { id } => commands::query::show(&registry, *id).await,

        Commands::Listings { all, owner, pending } => {
            commands::query::listings(&registry, *all, owner.as_deref(), *pending).await
        }

        Commands::History { id } => commands::query::history(&registry, *id).await,
    };

    if let Err(e) = &outcome {
        ui::print_error(&e.to_string());
        let retriable = e
            .downcast_ref::<RegistryError>()
            .map(RegistryError::is_retriable)
            .unwrap_or(false);
        if retriable {
            ui::print_info("The ledger write failed; retrying the same command may succeed");
        }
    }
    outcome
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
