use anyhow::Result;

use crate::cli::ui;
use crate::models::identity::Identity;
use crate::models::property::{Amount, PropertyId};
use crate::traits::registry::PropertyRegistry;

/// Buy command: purchase a listed property with exact payment
pub async fn execute<R: PropertyRegistry>(
    registry: &R,
    caller: &str,
    id: PropertyId,
    payment: Amount,
    assume_yes: bool,
) -> Result<()> {
    ui::print_header("Buying Property");

    let buyer = Identity::new(caller);
    let property = registry.property(id).await?;
    ui::display_property(&property);

    if !assume_yes {
        let prompt = format!(
            "Transfer ownership of property {} to {} for {}? This cannot be undone",
            id, buyer, payment
        );
        if !ui::confirm_action(&prompt)? {
            ui::print_info("Purchase cancelled");
            return Ok(());
        }
    }

    let record = registry.buy(id, &buyer, payment).await?;

    ui::print_success(&format!(
        "Property {} transferred from {} to {}",
        id, record.seller, record.buyer
    ));
    ui::display_transaction(&record);
    Ok(())
}
