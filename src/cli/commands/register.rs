use anyhow::Result;

use crate::cli::ui;
use crate::models::identity::Identity;
use crate::models::property::Amount;
use crate::traits::registry::PropertyRegistry;

/// Register command: create a new property owned by the caller
pub async fn execute<R: PropertyRegistry>(
    registry: &R,
    caller: &str,
    name: &str,
    location: &str,
    price: Amount,
    document_hash: &str,
) -> Result<()> {
    ui::print_header("Registering Property");

    let registrant = Identity::new(caller);
    let property = registry
        .register(name, location, price, document_hash, &registrant)
        .await?;

    ui::print_success(&format!("Property registered with id {}", property.id));
    ui::display_property(&property);
    Ok(())
}
