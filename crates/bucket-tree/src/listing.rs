//! Extracting object keys from untyped listing responses
//!
//! Listing calls hand back JSON of a few shapes:
//!
//! - a plain array of keys: `["a/", "a/b.txt"]`
//! - an array of object summaries: `[{"Key": "a/b.txt", "Size": 3}]`
//! - a ListObjectsV2 page: `{"Name": "bucket", "Contents": [{"Key": ...}]}`
//!
//! Every element is checked before any key is returned, so a bad entry
//! never leaves a half-read listing behind.

use crate::error::{Result, TreeError};
use serde_json::Value;

/// Field naming the object key in a summary object
const KEY_FIELD: &str = "Key";
/// Field holding the summaries in a ListObjectsV2 page
const CONTENTS_FIELD: &str = "Contents";

/// Collect every key from a listing value, in listing order
pub fn keys_from_value(listing: &Value) -> Result<Vec<&str>> {
    let entries = match listing {
        Value::Array(entries) => entries,
        Value::Object(page) => match page.get(CONTENTS_FIELD) {
            Some(Value::Array(entries)) => entries,
            // An empty page omits Contents entirely
            None => return Ok(Vec::new()),
            Some(other) => {
                return Err(TreeError::InvalidArgument(format!(
                    "'{CONTENTS_FIELD}' should be an array, found {}",
                    type_name(other)
                )))
            }
        },
        other => {
            return Err(TreeError::InvalidArgument(format!(
                "object listing should be an array or a listing page, found {}",
                type_name(other)
            )))
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| key_of(index, entry))
        .collect()
}

fn key_of(index: usize, entry: &Value) -> Result<&str> {
    match entry {
        Value::String(key) => Ok(key.as_str()),
        Value::Object(summary) => match summary.get(KEY_FIELD) {
            Some(Value::String(key)) => Ok(key.as_str()),
            _ => Err(TreeError::InvalidArgument(format!(
                "object list entry {index} has no string '{KEY_FIELD}' field"
            ))),
        },
        other => Err(TreeError::InvalidArgument(format!(
            "object list entry {index} should be a string key, found {}",
            type_name(other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_array() {
        let listing = json!(["source/", "source/a.txt"]);
        assert_eq!(keys_from_value(&listing).unwrap(), vec!["source/", "source/a.txt"]);
    }

    #[test]
    fn test_summaries_and_page() {
        let summaries = json!([{"Key": "a.txt", "Size": 1}, {"Key": "b/"}]);
        assert_eq!(keys_from_value(&summaries).unwrap(), vec!["a.txt", "b/"]);

        let page = json!({"Name": "bucket", "KeyCount": 1, "Contents": [{"Key": "c.csv"}]});
        assert_eq!(keys_from_value(&page).unwrap(), vec!["c.csv"]);

        let empty_page = json!({"Name": "bucket", "KeyCount": 0});
        assert!(keys_from_value(&empty_page).unwrap().is_empty());
    }

    #[test]
    fn test_non_string_entry_is_rejected() {
        let listing = json!(["a.txt", 42, "b.txt"]);
        let err = keys_from_value(&listing).unwrap_err();
        assert_eq!(
            err,
            TreeError::InvalidArgument(
                "object list entry 1 should be a string key, found a number".to_string()
            )
        );
    }

    #[test]
    fn test_summary_without_key_is_rejected() {
        let listing = json!([{"Key": "a.txt"}, {"Size": 3}]);
        assert!(matches!(
            keys_from_value(&listing),
            Err(TreeError::InvalidArgument(msg)) if msg.contains("entry 1")
        ));
    }

    #[test]
    fn test_wrong_top_level_shape() {
        assert!(keys_from_value(&json!("a.txt")).is_err());
        assert!(keys_from_value(&json!({"Contents": "a.txt"})).is_err());
    }
}
