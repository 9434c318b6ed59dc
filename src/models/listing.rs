//! List responses and their normalization.
//!
//! List endpoints answer either with a bare JSON array or with a paginated
//! envelope `{count, next, previous, results}`. [`normalize_listing`] is the
//! one place that resolves this ambiguity; every list fetch goes through it.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A page of resources plus whatever pagination metadata the server sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    /// Total across all pages (envelope only).
    pub count: Option<u64>,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl<T> Listing<T> {
    /// A listing with no items and no metadata.
    pub fn empty() -> Self {
        Self::from_items(Vec::new())
    }

    /// A listing from a bare sequence.
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items,
            count: None,
            next: None,
            previous: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the server reported further pages.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Normalize a list response body.
///
/// - a JSON array yields its items;
/// - an object whose `results` is an array yields those items plus `count`,
///   `next` and `previous`;
/// - anything else yields an empty listing.
///
/// Items that fail to decode are skipped with a warning instead of failing
/// the whole page.
pub fn normalize_listing<T: DeserializeOwned>(value: Value, resource: &'static str) -> Listing<T> {
    match value {
        Value::Array(items) => Listing::from_items(decode_items(items, resource)),
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => Listing {
                items: decode_items(items, resource),
                count: map.get("count").and_then(Value::as_u64),
                next: map.get("next").and_then(Value::as_str).map(str::to_string),
                previous: map
                    .get("previous")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            _ => {
                tracing::warn!(resource, "list response object has no results array");
                Listing::empty()
            }
        },
        other => {
            tracing::warn!(resource, kind = json_kind(&other), "unexpected list response shape");
            Listing::empty()
        }
    }
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>, resource: &'static str) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(resource, index, error = %e, "skipping malformed list item");
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
