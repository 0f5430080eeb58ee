//! Normalization of the provider's response envelope.
//!
//! | `body.data.status` object | `body.status` object | shape        |
//! |---------------------------|----------------------|--------------|
//! | yes                       | any                  | Nested       |
//! | no                        | yes                  | Flat         |
//! | no                        | no                   | Unenveloped  |
//!
//! Flat `{ "status", "data" }` is what the v1/v2/v3/v4 endpoints document.
//! Nested `{ "data": { "status", "data" } }` is a whole envelope wrapped in
//! an outer `data` and is checked first. A bare `{ "status" }` is the flat
//! shape without a payload, which is how error responses look.
//! `/v2/tools/postman` returns no envelope and is only reachable through
//! `Client::send_raw`.

use serde_json::{Map, Value};

#[derive(Debug, PartialEq)]
pub(crate) enum Envelope {
    /// `{ "data": { "data": ..., "status": {...} } }`
    Nested { data: Value, status: Value },
    /// `{ "data": ..., "status": {...} }` or bare `{ "status": {...} }`
    Flat { data: Value, status: Value },
    /// No status block anywhere.
    Unenveloped,
}

impl Envelope {
    pub(crate) fn classify(body: &Value) -> Envelope {
        let root = body.as_object();
        let inner = root.and_then(|o| o.get("data")).and_then(Value::as_object);

        if let Some(status) = inner.and_then(status_of) {
            return Envelope::Nested {
                data: inner.and_then(|o| o.get("data")).cloned().unwrap_or(Value::Null),
                status: status.clone(),
            };
        }
        if let Some(status) = root.and_then(status_of) {
            return Envelope::Flat {
                data: root.and_then(|o| o.get("data")).cloned().unwrap_or(Value::Null),
                status: status.clone(),
            };
        }
        Envelope::Unenveloped
    }
}

fn status_of(object: &Map<String, Value>) -> Option<&Value> {
    object.get("status").filter(|s| s.is_object())
}
