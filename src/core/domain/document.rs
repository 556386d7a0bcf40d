//! SecretDocument type.
//!
//! The remote store's payload for a path, normalized to a field → value map.

use std::collections::BTreeMap;

use zeroize::Zeroize;

use crate::core::constants::VALUE_FIELD;

/// A fetched secret document.
///
/// Values are wiped from memory when the document is dropped.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretDocument {
    fields: BTreeMap<String, String>,
}

impl SecretDocument {
    /// Normalize a raw payload.
    ///
    /// A JSON object whose values are all strings becomes the document as-is;
    /// `null` values read as empty strings and a top-level `null` is an empty
    /// document. Anything else (plain text, arrays, numbers, nested objects)
    /// becomes a single `value` entry holding the raw payload.
    pub fn parse(payload: &str) -> Self {
        match serde_json::from_str::<Option<BTreeMap<String, Option<String>>>>(payload) {
            Ok(fields) => Self {
                fields: fields
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(k, v)| (k, v.unwrap_or_default()))
                    .collect(),
            },
            Err(_) => Self::from_raw(payload),
        }
    }

    /// Wrap a raw payload under the `value` key.
    pub fn from_raw(payload: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(VALUE_FIELD.to_string(), payload.to_string());
        Self { fields }
    }

    /// Value of a field, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Field names in sorted order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SecretDocument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl std::fmt::Debug for SecretDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretDocument")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Drop for SecretDocument {
    fn drop(&mut self) {
        for value in self.fields.values_mut() {
            value.zeroize();
        }
    }
}
