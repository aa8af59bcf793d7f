//! Payment records
//!
//! Payments are passed through exactly as the wallet returns them. The
//! accessors below only read well-known LNbits keys for display and return
//! `None` when a key is missing or has an unexpected type.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transaction(Map<String, Value>);

impl Transaction {
    /// Amount in sats; LNbits reports millisats, negative for outgoing.
    pub fn amount_sats(&self) -> Option<f64> {
        self.0
            .get("amount")
            .and_then(Value::as_f64)
            .map(|msat| msat / crate::consts::cli_consts::wallet::MSATS_PER_SAT)
    }

    pub fn memo(&self) -> Option<&str> {
        self.0.get("memo").and_then(Value::as_str)
    }

    pub fn is_pending(&self) -> Option<bool> {
        self.0.get("pending").and_then(Value::as_bool)
    }

    /// Creation time. LNbits has sent both unix seconds and ISO-8601 strings.
    pub fn time(&self) -> Option<DateTime<Local>> {
        match self.0.get("time")? {
            Value::Number(n) => {
                DateTime::from_timestamp(n.as_i64()?, 0).map(|t| t.with_timezone(&Local))
            }
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|t| t.with_timezone(&Local)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tx(value: Value) -> Transaction {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_accessors_read_known_keys() {
        let t = tx(json!({
            "amount": -21000,
            "memo": "pizza",
            "pending": false,
            "time": 1_700_000_000
        }));
        assert_eq!(t.amount_sats(), Some(-21.0));
        assert_eq!(t.memo(), Some("pizza"));
        assert_eq!(t.is_pending(), Some(false));
        assert_eq!(t.time().map(|t| t.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn test_accessors_tolerate_missing_or_odd_fields() {
        let t = tx(json!({ "amount": "lots", "time": [] }));
        assert_eq!(t.amount_sats(), None);
        assert_eq!(t.memo(), None);
        assert_eq!(t.is_pending(), None);
        assert_eq!(t.time(), None);
    }

    #[test]
    fn test_iso_time_is_parsed() {
        let t = tx(json!({ "time": "2024-01-01T00:00:00Z" }));
        assert_eq!(t.time().map(|t| t.timestamp()), Some(1_704_067_200));
    }

    #[test]
    // Serialising returns the record unchanged, unknown keys included.
    fn test_round_trips_unmodified() {
        let raw = json!({ "checking_id": "abc", "nested": { "k": [1, 2] } });
        let t = tx(raw.clone());
        assert_eq!(serde_json::to_value(&t).unwrap(), raw);
    }
}
