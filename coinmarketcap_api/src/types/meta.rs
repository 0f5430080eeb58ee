//! Envelope-level types shared by every endpoint: [`Status`], [`Response`] and [`OneOrMany`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The status block returned with every provider response.
///
/// Every field is optional. The v4 DEX endpoints report `error_code`,
/// `elapsed` and `credit_count` as strings, so those accept numeric text too.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Status {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
    /// Server-side processing time in milliseconds.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub elapsed: Option<i64>,
    /// API credits consumed by the call.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub credit_count: Option<i64>,
    #[serde(default)]
    pub notice: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total_count: Option<i64>,
}

impl Status {
    /// True when the provider reported a positive `error_code`.
    pub fn is_error(&self) -> bool {
        self.error_code.is_some_and(|code| code > 0)
    }

    /// Reads a raw status block field by field.
    ///
    /// Fields that are present with an unusable value come back as `None`,
    /// and the returned flag is `false` so the caller can reject the block.
    /// `error_code` is read on its own, so a bad `timestamp` never hides a
    /// real error code.
    pub(crate) fn decode(raw: &Value) -> (Status, bool) {
        let mut clean = true;
        let status = Status {
            timestamp: text_field(raw, "timestamp", &mut clean),
            error_code: number_field(raw, "error_code", &mut clean),
            error_message: text_field(raw, "error_message", &mut clean),
            elapsed: number_field(raw, "elapsed", &mut clean),
            credit_count: number_field(raw, "credit_count", &mut clean),
            notice: text_field(raw, "notice", &mut clean),
            total_count: number_field(raw, "total_count", &mut clean),
        };
        (status, clean)
    }

    /// Parses `timestamp` as an RFC 3339 instant.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

/// A successful call: the unwrapped payload plus the status it came with.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Response<T> {
    pub data: T,
    pub status: Status,
}

impl<T> Response<T> {
    pub fn into_data(self) -> T {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            data: f(self.data),
            status: self.status,
        }
    }
}

/// Keyed responses hold a single object when queried by id and an array
/// when queried by symbol (symbols are not unique).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }

    /// The first entry, which for symbol lookups is the highest ranked asset.
    pub fn first(&self) -> Option<&T> {
        match self {
            OneOrMany::One(item) => Some(item),
            OneOrMany::Many(items) => items.first(),
        }
    }
}

/// Payload keyed by the id, slug or symbol that was requested.
pub type Keyed<T> = HashMap<String, OneOrMany<T>>;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Integer(i64),
    Float(f64),
    Text(String),
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<NumberOrText>::deserialize(deserializer)? {
            None => None,
            Some(NumberOrText::Integer(n)) => Some(n),
            Some(NumberOrText::Float(f)) => Some(f as i64),
            Some(NumberOrText::Text(s)) => s.trim().parse::<f64>().ok().map(|f| f as i64),
        },
    )
}

fn text_field(raw: &Value, key: &str, clean: &mut bool) -> Option<String> {
    match raw.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            *clean = false;
            None
        }
    }
}

fn number_field(raw: &Value, key: &str, clean: &mut bool) -> Option<i64> {
    let parsed = match raw.get(key) {
        None | Some(Value::Null) => return None,
        Some(Value::String(s)) if s.trim().is_empty() => return None,
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f as i64),
        Some(_) => None,
    };
    if parsed.is_none() {
        *clean = false;
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_full() {
        let status: Status = serde_json::from_value(json!({
            "timestamp": "2024-05-01T12:30:00.123Z",
            "error_code": 0,
            "error_message": null,
            "elapsed": 12,
            "credit_count": 1,
            "notice": null
        }))
        .unwrap();
        assert_eq!(status.error_code, Some(0));
        assert_eq!(status.elapsed, Some(12));
        assert_eq!(status.credit_count, Some(1));
        assert!(!status.is_error());
        assert_eq!(
            status.timestamp_utc().unwrap().to_rfc3339(),
            "2024-05-01T12:30:00.123+00:00"
        );
    }

    #[test]
    fn status_accepts_numeric_strings() {
        let status: Status = serde_json::from_value(json!({
            "timestamp": "2024-05-01T12:30:00.123Z",
            "error_code": "0",
            "error_message": "SUCCESS",
            "elapsed": "229",
            "credit_count": 1
        }))
        .unwrap();
        assert_eq!(status.error_code, Some(0));
        assert_eq!(status.elapsed, Some(229));
    }

    #[test]
    fn status_tolerates_missing_fields() {
        let status: Status = serde_json::from_value(json!({})).unwrap();
        assert_eq!(status, Status::default());
        assert!(!status.is_error());
        assert!(status.timestamp_utc().is_none());
    }

    #[test]
    fn status_positive_code_is_error() {
        let status: Status = serde_json::from_value(json!({ "error_code": 1008 })).unwrap();
        assert!(status.is_error());
    }

    #[test]
    fn decode_keeps_error_code_next_to_bad_field() {
        let (status, clean) = Status::decode(&json!({
            "timestamp": 5,
            "error_code": 1008,
            "error_message": "minute limit",
            "credit_count": "2"
        }));
        assert!(!clean);
        assert!(status.is_error());
        assert_eq!(status.error_code, Some(1008));
        assert_eq!(status.error_message.as_deref(), Some("minute limit"));
        assert_eq!(status.credit_count, Some(2));
        assert_eq!(status.timestamp, None);
    }

    #[test]
    fn decode_flags_unreadable_error_code() {
        let (status, clean) = Status::decode(&json!({ "error_code": "E1008" }));
        assert!(!clean);
        assert_eq!(status.error_code, None);

        let (status, clean) = Status::decode(&json!({ "error_code": "0", "elapsed": "" }));
        assert!(clean);
        assert_eq!(status.error_code, Some(0));
        assert_eq!(status.elapsed, None);
    }

    #[test]
    fn one_or_many() {
        let one: OneOrMany<i64> = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(one.first(), Some(&7));
        assert_eq!(one.into_vec(), vec![7]);

        let many: OneOrMany<i64> = serde_json::from_value(json!([3, 4])).unwrap();
        assert_eq!(many.first(), Some(&3));
        assert_eq!(many.into_vec(), vec![3, 4]);
    }
}
