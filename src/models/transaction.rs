use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::identity::Identity;
use crate::models::property::{Amount, PropertyId};

/// Record of a completed purchase, appended to the ledger atomically
/// with the ownership transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Sequence number within the ledger, assigned on append.
    pub id: u64,
    pub property_id: PropertyId,
    pub buyer: Identity,
    pub seller: Identity,
    pub amount: Amount,
    pub timestamp: DateTime<Utc>,
}
