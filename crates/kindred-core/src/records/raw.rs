//! Raw remote row access.
//!
//! The hosted source returns loosely-shaped rows: fields may be absent,
//! null, or carry the wrong type. `RawRow` centralizes the defaulting and
//! coercion rules so each domain's `from_row` stays declarative.

use serde_json::{Map, Value};

use super::{Domain, RejectReason, Rejection};
use crate::types::{RecordId, Timestamp};

#[derive(Debug)]
pub(crate) struct RawRow<'a> {
    domain: Domain,
    map: &'a Map<String, Value>,
}

impl<'a> RawRow<'a> {
    pub fn new(domain: Domain, value: &'a Value) -> Result<Self, Rejection> {
        match value.as_object() {
            Some(map) => Ok(Self { domain, map }),
            None => Err(Rejection {
                domain,
                reason: RejectReason::NotAnObject,
            }),
        }
    }

    fn reject(&self, reason: RejectReason) -> Rejection {
        Rejection {
            domain: self.domain,
            reason,
        }
    }

    /// The required `id` field. Numeric ids are accepted and stringified.
    pub fn id(&self) -> Result<RecordId, Rejection> {
        let value = self
            .map
            .get("id")
            .ok_or_else(|| self.reject(RejectReason::MissingField("id")))?;

        let s = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return Err(self.reject(RejectReason::EmptyField("id"))),
        };

        RecordId::new(&s).map_err(|_| self.reject(RejectReason::EmptyField("id")))
    }

    /// A required non-empty string field, trimmed.
    pub fn required_str(&self, key: &'static str) -> Result<String, Rejection> {
        let value = self
            .map
            .get(key)
            .filter(|v| !v.is_null())
            .ok_or_else(|| self.reject(RejectReason::MissingField(key)))?;

        let s = value
            .as_str()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        if s.is_empty() {
            return Err(self.reject(RejectReason::EmptyField(key)));
        }

        Ok(s)
    }

    /// An optional string field, defaulting when absent, null, or empty.
    pub fn str_or(&self, key: &str, default: &str) -> String {
        self.opt_str(key).unwrap_or_else(|| default.to_string())
    }

    /// An optional string field, trimmed; `None` when absent or empty.
    pub fn opt_str(&self, key: &str) -> Option<String> {
        self.map
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// An array-of-strings field; null or wrong-typed values become empty.
    /// Entries are trimmed and empty entries dropped.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        self.map
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A non-negative counter; absent, non-numeric, or negative becomes 0.
    pub fn count(&self, key: &str) -> u32 {
        self.map
            .get(key)
            .and_then(Value::as_i64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0)
    }

    /// A boolean field with a default. Matches the source convention of
    /// treating anything but an explicit `false` as the default.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.map.get(key) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    /// The required creation timestamp, read from the first present key.
    /// Remote rows use `created_at`; locally persisted records historically
    /// used `createdAt`.
    pub fn timestamp(&self, keys: &[&'static str]) -> Result<Timestamp, Rejection> {
        for key in keys {
            if let Some(value) = self.map.get(*key).filter(|v| !v.is_null()) {
                let s = value.as_str().unwrap_or_default();
                return Timestamp::parse(s).map_err(|_| {
                    self.reject(RejectReason::BadTimestamp {
                        value: s.to_string(),
                    })
                });
            }
        }
        Err(self.reject(RejectReason::MissingField(keys[0])))
    }

    /// An optional timestamp; unparseable values are dropped, not rejected.
    pub fn opt_timestamp(&self, key: &str) -> Option<Timestamp> {
        self.map
            .get(key)
            .and_then(Value::as_str)
            .and_then(|s| Timestamp::parse(s).ok())
    }

    /// A string field inside an embedded object, e.g. `businesses.name`
    /// from a joined select.
    pub fn nested_str(&self, key: &str, inner: &str) -> Option<String> {
        self.map
            .get(key)
            .and_then(Value::as_object)
            .and_then(|obj| obj.get(inner))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// A reply count from an embedded aggregate, shaped either as
    /// `[{"count": n}]` (count select) or as a plain array of rows.
    pub fn nested_count(&self, key: &str) -> u32 {
        match self.map.get(key) {
            Some(Value::Array(items)) => items
                .first()
                .and_then(Value::as_object)
                .and_then(|obj| obj.get("count"))
                .and_then(Value::as_i64)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(items.len() as u32),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object() {
        let row = json!(["not", "an", "object"]);
        let err = RawRow::new(Domain::Story, &row).unwrap_err();
        assert_eq!(err.reason, RejectReason::NotAnObject);
    }

    #[test]
    fn numeric_id_is_stringified() {
        let row = json!({"id": 42});
        let raw = RawRow::new(Domain::Business, &row).unwrap();
        assert_eq!(raw.id().unwrap().as_str(), "42");
    }

    #[test]
    fn required_str_trims_and_rejects_empty() {
        let row = json!({"title": "  Tech Leap  ", "excerpt": "   "});
        let raw = RawRow::new(Domain::Story, &row).unwrap();
        assert_eq!(raw.required_str("title").unwrap(), "Tech Leap");
        assert_eq!(
            raw.required_str("excerpt").unwrap_err().reason,
            RejectReason::EmptyField("excerpt")
        );
        assert_eq!(
            raw.required_str("body").unwrap_err().reason,
            RejectReason::MissingField("body")
        );
    }

    #[test]
    fn string_list_coerces_null() {
        let row = json!({"skills": null, "tags": [" a ", "", "b"]});
        let raw = RawRow::new(Domain::Profile, &row).unwrap();
        assert!(raw.string_list("skills").is_empty());
        assert_eq!(raw.string_list("tags"), vec!["a", "b"]);
    }

    #[test]
    fn count_defaults_on_junk() {
        let row = json!({"likes": "many", "replies": -3, "views": 7});
        let raw = RawRow::new(Domain::Story, &row).unwrap();
        assert_eq!(raw.count("likes"), 0);
        assert_eq!(raw.count("replies"), 0);
        assert_eq!(raw.count("views"), 7);
    }

    #[test]
    fn timestamp_prefers_first_present_key() {
        let row = json!({"createdAt": "2024-01-15"});
        let raw = RawRow::new(Domain::Story, &row).unwrap();
        let ts = raw.timestamp(&["created_at", "createdAt"]).unwrap();
        assert_eq!(ts.as_str(), "2024-01-15");
    }

    #[test]
    fn nested_count_handles_both_shapes() {
        let aggregated = json!({"forum_replies": [{"count": 25}]});
        let raw = RawRow::new(Domain::ForumTopic, &aggregated).unwrap();
        assert_eq!(raw.nested_count("forum_replies"), 25);

        let rows = json!({"forum_replies": [{}, {}, {}]});
        let raw = RawRow::new(Domain::ForumTopic, &rows).unwrap();
        assert_eq!(raw.nested_count("forum_replies"), 3);

        let absent = json!({});
        let raw = RawRow::new(Domain::ForumTopic, &absent).unwrap();
        assert_eq!(raw.nested_count("forum_replies"), 0);
    }
}
