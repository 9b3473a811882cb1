use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the ID to a string
    fn as_string(&self) -> String;

    /// Create an ID from a string
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>().map_err(|e| format!("Invalid i64: {}", e))
    }
}

/// Wire representation of an identifier.
///
/// Some upstream APIs emit ids as JSON numbers, others as numeric strings.
/// Id newtypes deserialize through this and normalize to `i64` once, so that
/// every comparison downstream is plain typed integer equality.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    pub fn into_i64(self) -> Result<i64, String> {
        match self {
            RawId::Number(n) => Ok(n),
            RawId::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("Invalid id '{}': {}", s, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_id_accepts_numbers_and_numeric_strings() {
        let n: RawId = serde_json::from_str("42").unwrap();
        assert_eq!(n.into_i64().unwrap(), 42);

        let s: RawId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(s.into_i64().unwrap(), 42);
    }

    #[test]
    fn raw_id_rejects_non_numeric_text() {
        let s: RawId = serde_json::from_str("\"forty-two\"").unwrap();
        assert!(s.into_i64().is_err());
    }
}
