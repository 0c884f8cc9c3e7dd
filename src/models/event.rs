use serde::{Deserialize, Serialize};

use crate::models::identity::Identity;
use crate::models::property::{Amount, PropertyId};

/// One event per successful mutating operation, in operation order.
///
/// Consumers (database projectors, notifiers) subscribe through an
/// `EventSink`; the registry never depends on a consumer succeeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    Registered {
        property_id: PropertyId,
        owner: Identity,
    },
    Verified {
        property_id: PropertyId,
        approved: bool,
    },
    Listed {
        property_id: PropertyId,
        price: Amount,
    },
    Delisted {
        property_id: PropertyId,
    },
    Purchased {
        property_id: PropertyId,
        buyer: Identity,
        seller: Identity,
        amount: Amount,
    },
}

impl RegistryEvent {
    pub fn property_id(&self) -> PropertyId {
        match self {
            RegistryEvent::Registered { property_id, .. }
            | RegistryEvent::Verified { property_id, .. }
            | RegistryEvent::Listed { property_id, .. }
            | RegistryEvent::Delisted { property_id }
            | RegistryEvent::Purchased { property_id, .. } => *property_id,
        }
    }

    /// Short operation name for logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryEvent::Registered { .. } => "registered",
            RegistryEvent::Verified { .. } => "verified",
            RegistryEvent::Listed { .. } => "listed",
            RegistryEvent::Delisted { .. } => "delisted",
            RegistryEvent::Purchased { .. } => "purchased",
        }
    }
}
