use crate::domain::a001_customer::CustomerId;
use crate::domain::common::{AggregateId, RawId};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TransactionId(pub i64);

impl TransactionId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawId::deserialize(deserializer)?;
        raw.into_i64()
            .map(TransactionId)
            .map_err(serde::de::Error::custom)
    }
}

impl AggregateId for TransactionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(TransactionId)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A monetary event belonging to a customer.
///
/// `date` is a calendar-date string used as an opaque grouping key; it is
/// never parsed. `amount` is a signed decimal in currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub customer_id: CustomerId,
    pub date: String,
    pub amount: f64,
}
