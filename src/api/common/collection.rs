//
//  geoserver-rest
//  api/common/collection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Collection envelopes returned by GeoServer list endpoints.
//!
//! GeoServer lists are wrapped twice: an outer key naming the collection and
//! an inner key naming the element type.
//!
//! ```json
//! {"workspaces": {"workspace": [{"name": "topp", "href": "..."}]}}
//! ```
//!
//! When the collection is empty the inner envelope is replaced by an empty
//! string instead of an empty array:
//!
//! ```json
//! {"workspaces": ""}
//! ```
//!
//! [`Collection`] models that inner part and keeps the sentinel visible as
//! [`Collection::Empty`], so callers check for it explicitly rather than
//! relying on array semantics.

use std::fmt;

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// The inner part of a GeoServer list envelope.
///
/// # Variants
///
/// * `Empty` - GeoServer sent its empty-string sentinel (or `null`)
/// * `Items` - GeoServer sent the element array
///
/// # Example
///
/// ```rust
/// use geoserver_rest::api::common::{Collection, ResourceRef};
///
/// let empty: Collection<ResourceRef> = serde_json::from_str(r#""""#).unwrap();
/// assert!(empty.is_sentinel());
///
/// let full: Collection<ResourceRef> =
///     serde_json::from_str(r#"{"workspace": [{"name": "topp"}]}"#).unwrap();
/// assert_eq!(full.len(), 1);
/// assert_eq!(full.items()[0].name, "topp");
/// ```
///
/// # Notes
///
/// - Keys starting with `@` (such as `@class`) are metadata and skipped
/// - A single element object instead of an array is accepted as one item
#[derive(Debug, Clone, PartialEq)]
pub enum Collection<T> {
    /// The empty-string sentinel.
    Empty,
    /// The decoded elements.
    Items(Vec<T>),
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> Collection<T> {
    /// True when GeoServer sent the empty-collection sentinel.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True when there are no elements, sentinel or not.
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// The elements as a slice; empty for the sentinel.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Empty => &[],
            Self::Items(items) => items,
        }
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items().iter()
    }

    /// Consumes the collection into a vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Empty => Vec::new(),
            Self::Items(items) => items,
        }
    }
}

impl<T: DeserializeOwned> Collection<T> {
    /// Decodes a collection from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Null => Ok(Self::Empty),
            Value::String(s) if s.is_empty() => Ok(Self::Empty),
            Value::Array(items) => decode_items(items),
            Value::Object(map) => {
                let inner = map
                    .into_iter()
                    .find(|(key, _)| !key.starts_with('@'))
                    .map(|(_, v)| v);
                match inner {
                    None | Some(Value::Null) => Ok(Self::Empty),
                    Some(Value::String(s)) if s.is_empty() => Ok(Self::Empty),
                    Some(Value::Array(items)) => decode_items(items),
                    Some(single) => Ok(Self::Items(vec![serde_json::from_value(single)?])),
                }
            }
            other => Err(serde_json::Error::custom(format!(
                "unexpected collection representation: {other}"
            ))),
        }
    }
}

fn decode_items<T: DeserializeOwned>(
    items: Vec<Value>,
) -> Result<Collection<T>, serde_json::Error> {
    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map(Collection::Items)
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Collection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let items = self.items();
        let mut seq = serializer.serialize_seq(Some(items.len()))?;
        for item in items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "(empty)"),
            Self::Items(items) => write!(f, "{} item(s)", items.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ResourceRef;
    use serde_json::json;

    #[test]
    fn test_sentinel_is_empty() {
        let collection: Collection<ResourceRef> = Collection::from_value(json!("")).unwrap();
        assert!(collection.is_sentinel());
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }

    #[test]
    fn test_skips_class_metadata() {
        let value = json!({
            "@class": "linked-hash-set",
            "style": [{"name": "point"}, {"name": "line"}]
        });
        let collection: Collection<ResourceRef> = Collection::from_value(value).unwrap();
        let names: Vec<_> = collection.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["point", "line"]);
    }

    #[test]
    fn test_single_object_is_one_item() {
        let value = json!({"workspace": {"name": "topp"}});
        let collection: Collection<ResourceRef> = Collection::from_value(value).unwrap();
        assert_eq!(collection.into_vec()[0].name, "topp");
    }

    #[test]
    fn test_rejects_non_empty_string() {
        let result = Collection::<ResourceRef>::from_value(json!("nope"));
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_as_array() {
        let collection: Collection<ResourceRef> = Collection::Empty;
        assert_eq!(serde_json::to_value(&collection).unwrap(), json!([]));
    }
}
