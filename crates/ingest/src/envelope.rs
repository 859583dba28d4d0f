//! The upstream JSON envelope: `{ "data": T | [T] | null }`.
//!
//! Sibling fields (`subscription`, `rate_limit`, `timezone`, ...) are
//! ignored; only the presence of `data` matters.

use serde::Deserialize;

/// Envelope wrapping a list payload (leagues, squad players).
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub data: Option<Vec<T>>,
}

/// Envelope wrapping a single-entity payload (league detail).
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DetailEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: i64,
    }

    #[test]
    fn list_envelope_ignores_sibling_fields() {
        let body = r#"{
            "data": [{"id": 1}, {"id": 2}],
            "subscription": [{"plans": []}],
            "rate_limit": {"remaining": 2999},
            "timezone": "UTC"
        }"#;
        let envelope: ListEnvelope<Record> = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.data,
            Some(vec![Record { id: 1 }, Record { id: 2 }])
        );
    }

    #[test]
    fn null_data_parses_as_none() {
        let envelope: ListEnvelope<Record> = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn missing_data_parses_as_none() {
        let envelope: DetailEnvelope<Record> =
            serde_json::from_str(r#"{"timezone": "UTC"}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn detail_envelope_holds_one_record() {
        let envelope: DetailEnvelope<Record> =
            serde_json::from_str(r#"{"data": {"id": 271}}"#).unwrap();
        assert_eq!(envelope.data, Some(Record { id: 271 }));
    }
}
