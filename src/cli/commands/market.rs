use anyhow::Result;

use crate::cli::ui;
use crate::models::identity::Identity;
use crate::models::property::{Amount, PropertyId};
use crate::traits::registry::PropertyRegistry;

/// List command: put a property on the market
pub async fn list<R: PropertyRegistry>(
    registry: &R,
    caller: &str,
    id: PropertyId,
    price: Amount,
) -> Result<()> {
    ui::print_header("Listing Property For Sale");

    let owner = Identity::new(caller);
    let property = registry.list_for_sale(id, &owner, price).await?;

    ui::print_success(&format!("Property {} listed at {}", id, price));
    ui::display_property(&property);
    Ok(())
}

/// Delist command: take a property off the market
pub async fn delist<R: PropertyRegistry>(
    registry: &R,
    caller: &str,
    id: PropertyId,
) -> Result<()> {
    ui::print_header("Delisting Property");

    let owner = Identity::new(caller);
    let property = registry.delist(id, &owner).await?;

    ui::print_success(&format!("Property {} removed from sale", id));
    ui::display_property(&property);
    Ok(())
}
