use crate::domain::common::{AggregateId, RawId};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CustomerId(pub i64);

impl CustomerId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for CustomerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawId::deserialize(deserializer)?;
        raw.into_i64().map(CustomerId).map_err(serde::de::Error::custom)
    }
}

impl AggregateId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(CustomerId)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_and_string_ids() {
        let from_number: Customer = serde_json::from_str(r#"{"id": 1, "name": "Alice"}"#).unwrap();
        let from_string: Customer =
            serde_json::from_str(r#"{"id": "1", "name": "Alice"}"#).unwrap();

        assert_eq!(from_number, from_string);
        assert_eq!(from_number.id, CustomerId(1));
    }

    #[test]
    fn ignores_unknown_fields() {
        let customer: Customer =
            serde_json::from_str(r#"{"id": 2, "name": "Bob", "email": "bob@example.com"}"#)
                .unwrap();
        assert_eq!(customer.name, "Bob");
    }

    #[test]
    fn rejects_non_numeric_id() {
        let result: Result<Customer, _> =
            serde_json::from_str(r#"{"id": "abc", "name": "Alice"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_id_as_plain_number() {
        let customer = Customer {
            id: CustomerId(7),
            name: "Carol".to_string(),
        };
        let json = serde_json::to_string(&customer).unwrap();
        assert_eq!(json, r#"{"id":7,"name":"Carol"}"#);
    }

    #[test]
    fn id_zero_is_distinct_from_no_selection() {
        // 0 is a valid id; an optional selection must not conflate it with None.
        let selected: Option<CustomerId> = Some(CustomerId(0));
        assert_ne!(selected, None);
        assert_eq!(selected.unwrap().value(), 0);
    }

    #[test]
    fn id_round_trips_through_strings() {
        let id = CustomerId::from_string("15").unwrap();
        assert_eq!(id, CustomerId(15));
        assert_eq!(id.as_string(), "15");
        assert!(CustomerId::from_string("").is_err());
    }
}
