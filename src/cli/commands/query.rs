use anyhow::Result;

use crate::cli::ui;
use crate::models::identity::Identity;
use crate::models::property::PropertyId;
use crate::traits::registry::PropertyRegistry;

/// Show command: display one property record
pub async fn show<R: PropertyRegistry>(registry: &R, id: PropertyId) -> Result<()> {
    let property = registry.property(id).await?;
    ui::display_property(&property);
    Ok(())
}

/// Listings command: display market listings or filtered views
pub async fn listings<R: PropertyRegistry>(
    registry: &R,
    all: bool,
    owner: Option<&str>,
    pending: bool,
) -> Result<()> {
    let (title, properties) = if let Some(owner) = owner {
        let owner = Identity::from(owner);
        ("Holdings", registry.holdings(&owner).await?)
    } else if pending {
        ("Awaiting Verification", registry.pending_verification().await?)
    } else if all {
        ("All Properties", registry.properties().await?)
    } else {
        ("Properties For Sale", registry.listings().await?)
    };

    ui::print_header(title);
    if properties.is_empty() {
        ui::print_info("No matching properties");
        return Ok(());
    }
    for property in &properties {
        ui::display_property_row(property);
    }
    ui::print_result("Total", &properties.len().to_string());
    Ok(())
}

/// History command: display the transaction log
pub async fn history<R: PropertyRegistry>(registry: &R, id: Option<PropertyId>) -> Result<()> {
    let records = match id {
        Some(id) => {
            ui::print_header(&format!("Transactions for Property #{}", id));
            registry.history(id).await?
        }
        None => {
            ui::print_header("Transaction Log");
            registry.transactions().await?
        }
    };

    if records.is_empty() {
        ui::print_info("No transactions recorded");
        return Ok(());
    }
    for record in &records {
        ui::display_transaction(record);
    }
    Ok(())
}
