//
//  cloudinary-admin
//  api/options.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Schema-less option maps.
//!
//! Admin operations take a free-form map of optional parameters. Each
//! operation reads only the keys it recognizes and forwards an allow-listed
//! subset to the remote service; everything else is silently ignored. Values
//! are validated only by key presence, never by type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ordered map from option name to JSON value.
///
/// `Options` is deliberately lenient: values may be strings, numbers,
/// booleans, lists or nested maps, and no key is ever required by the client.
///
/// # Example
///
/// ```rust
/// use cloudinary_admin::{options, Options};
///
/// let options = options! { "max_results" => 10, "prefix" => "sample", "colors" => true };
/// let filtered = options.only(&["max_results", "prefix", "next_cursor"]);
///
/// assert_eq!(filtered.len(), 2);
/// assert!(!filtered.contains_key("colors"));
/// assert_eq!(options.str_or("resource_type", "image"), "image");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    /// Creates an empty option map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts a value, returning the previous one for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Copies every entry of `other` into this map, overwriting existing keys.
    pub fn extend(&mut self, other: Options) {
        self.0.extend(other.0);
    }

    /// Returns a new map holding only the entries whose key is listed.
    ///
    /// Listed keys missing from the source are skipped. The source map is
    /// left untouched.
    pub fn only(&self, keys: &[&str]) -> Options {
        keys.iter()
            .filter_map(|key| {
                self.0
                    .get(*key)
                    .map(|value| ((*key).to_string(), value.clone()))
            })
            .collect()
    }

    /// String form of a scalar option, `None` when absent or null.
    pub fn str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_as_string)
    }

    /// String form of a scalar option, falling back to `default`.
    pub fn str_or(&self, key: &str, default: &str) -> String {
        self.str(key).unwrap_or_else(|| default.to_string())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// Renders a JSON value the way it is sent as a single request parameter.
///
/// Strings are returned as-is, numbers and booleans via their JSON text, and
/// lists or maps as JSON text. `null` has no parameter form.
pub fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Options {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Options {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds an [`Options`] map from `key => value` pairs.
///
/// Values may be anything convertible into a `serde_json::Value`.
///
/// ```rust
/// use cloudinary_admin::options;
///
/// let empty = options! {};
/// assert!(empty.is_empty());
///
/// let listing = options! { "type" => "upload", "max_results" => 500 };
/// assert_eq!(listing.str("max_results").as_deref(), Some("500"));
/// ```
#[macro_export]
macro_rules! options {
    () => {
        $crate::api::Options::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut options = $crate::api::Options::new();
        $(
            options.insert($key, $value);
        )+
        options
    }};
}
