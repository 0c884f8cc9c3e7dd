use anyhow::Result;

use crate::cli::ui;
use crate::models::identity::Identity;
use crate::models::property::PropertyId;
use crate::traits::registry::PropertyRegistry;

/// Verify command: approve or reject a property's documentation
pub async fn execute<R: PropertyRegistry>(
    registry: &R,
    caller: &str,
    id: PropertyId,
    reject: bool,
) -> Result<()> {
    ui::print_header(if reject {
        "Rejecting Property"
    } else {
        "Verifying Property"
    });

    let authority = Identity::new(caller);
    let property = registry.verify(id, &authority, !reject).await?;

    if reject {
        ui::print_warning(&format!("Property {} rejected", id));
    } else {
        ui::print_success(&format!("Property {} verified", id));
    }
    ui::display_property(&property);
    Ok(())
}
