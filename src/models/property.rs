use serde::{Deserialize, Serialize};

use crate::models::identity::Identity;

/// Monotonically increasing property identifier, assigned by the ledger
/// store and never reused.
pub type PropertyId = u64;

/// Amount in base units (wei). Never a float.
pub type Amount = u128;

/// A registered property record, the unit of ownership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub location: String,
    /// Hash binding this record to an off-chain ownership document.
    pub document_hash: String,
    /// Asking price; meaningful only while `for_sale` is true.
    pub price: Amount,
    /// Current controlling party. Changes only via a completed purchase.
    pub owner: Identity,
    pub for_sale: bool,
    pub verified: bool,
}

impl Property {
    /// Lifecycle stage derived from the verification/listing flags.
    pub fn stage(&self) -> PropertyStage {
        match (self.verified, self.for_sale) {
            (false, _) => PropertyStage::Unverified,
            (true, false) => PropertyStage::VerifiedNotListed,
            (true, true) => PropertyStage::VerifiedListed,
        }
    }
}

/// States a property moves through after registration.
///
/// Listing requires prior verification, so there is no unverified-listed
/// stage. A rejection after listing does not implicitly delist; such a
/// record reads as `Unverified` until the flags are changed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyStage {
    Unverified,
    VerifiedNotListed,
    VerifiedListed,
}
