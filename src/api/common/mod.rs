//
//  geoserver-rest
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Common API Types shared by every GeoServer sub-client
//!
//! This module provides the error type, the collection envelope and the
//! lightweight reference types that every resource family of the GeoServer
//! REST API has in common.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Collection`] - List envelope that understands GeoServer's empty-string sentinel
//! - [`ResourceRef`] - `{name, href}` entry found in every list response
//! - [`Resource`] - A named resource whose remaining properties are kept verbatim
//! - [`Lookup`] / [`lookup`] - The shared "get one, then check liveness" helper
//!
//! # Example
//!
//! ```rust
//! use geoserver_rest::api::common::ApiError;
//!
//! fn describe(result: Result<Option<String>, ApiError>) -> String {
//!     match result {
//!         Ok(Some(name)) => format!("found {name}"),
//!         Ok(None) => "confirmed absent".to_string(),
//!         Err(e) if e.is_conflict() => format!("rejected: {e}"),
//!         Err(e) => format!("failed: {e}"),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

mod collection;
mod lookup;

pub use collection::*;
pub use lookup::*;

/// Message used when GeoServer gives no structured reason for a failure.
pub const DEFAULT_ERROR_MESSAGE: &str = "GeoServer Response Error";

/// Unified error type for all GeoServer API operations.
///
/// Every failed call surfaces as one of these variants. The two variants that
/// come from a non-success HTTP status ([`ApiError::Response`] and
/// [`ApiError::Rejected`]) carry the raw body GeoServer returned, which is
/// usually a plain-text stack trace or message and is the most useful thing
/// to log when debugging.
///
/// # Variants
///
/// | Variant | Description | Origin |
/// |---------|-------------|--------|
/// | `Response` | Non-success status without a known meaning | remote |
/// | `Rejected` | Non-success status with a documented meaning (conflict, dependents, ...) | remote |
/// | `UnexpectedStatus` | Success status other than the one the operation requires | remote |
/// | `NotFound` | A resource required by a composite operation is absent | remote |
/// | `MissingProperty` | A read-modify-write target lacks the subtree to modify | local |
/// | `InvalidInput` | Arguments that cannot form a valid request | local |
/// | `Network` | Transport failure, GeoServer unreachable | transport |
/// | `Json` | Body could not be decoded | local |
/// | `Io` | A local upload file could not be read | local |
#[derive(Error, Debug)]
pub enum ApiError {
    /// GeoServer answered with a failure status and no documented meaning.
    ///
    /// `message` defaults to [`DEFAULT_ERROR_MESSAGE`].
    #[error("{message} (HTTP {status})")]
    Response {
        /// The HTTP status code returned by GeoServer
        status: StatusCode,
        /// Human readable summary
        message: String,
        /// Raw response body, empty when it could not be read
        geoserver_output: String,
    },

    /// GeoServer refused the request for a documented, status-specific reason.
    ///
    /// Examples are a create on a name that already exists, or a delete on a
    /// store that still has dependent layers while `recurse` is off.
    #[error("{message} (HTTP {status})")]
    Rejected {
        /// The HTTP status code returned by GeoServer
        status: StatusCode,
        /// The operation-specific explanation of the status
        message: String,
        /// Raw response body, empty when it could not be read
        geoserver_output: String,
    },

    /// The call succeeded with a status the operation does not document.
    #[error("Unexpected response status {status}")]
    UnexpectedStatus {
        /// The status GeoServer actually returned
        status: StatusCode,
        /// Raw response body
        geoserver_output: String,
    },

    /// A resource that a composite operation depends on does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The fetched representation lacks the property a modification targets.
    #[error("{resource} misses the property '{property}'")]
    MissingProperty {
        /// Description of the resource that was fetched
        resource: String,
        /// The JSON property that was expected
        property: String,
    },

    /// The arguments cannot form a meaningful request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A network-level error occurred during the request.
    ///
    /// Connection refused, DNS failures and timeouts of the underlying
    /// transport all land here.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response body could not be decoded into the expected shape.
    #[error("Failed to decode GeoServer response: {0}")]
    Json(#[from] serde_json::Error),

    /// A local file handed to an upload operation could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Returns the HTTP status for errors that originate from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Response { status, .. }
            | Self::Rejected { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the raw GeoServer output attached to the error, if any.
    pub fn geoserver_output(&self) -> Option<&str> {
        match self {
            Self::Response {
                geoserver_output, ..
            }
            | Self::Rejected {
                geoserver_output, ..
            }
            | Self::UnexpectedStatus {
                geoserver_output, ..
            } => Some(geoserver_output.as_str()),
            _ => None,
        }
    }

    /// True when GeoServer rejected the call for a documented reason.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// True when the error came from a non-success HTTP status.
    ///
    /// Only these errors are candidates for the "resource absent" downgrade
    /// performed by [`lookup`].
    pub fn is_status_failure(&self) -> bool {
        matches!(self, Self::Response { .. } | Self::Rejected { .. })
    }
}

/// Lightweight `{name, href}` reference used in every GeoServer list.
///
/// # Example
///
/// ```rust
/// use geoserver_rest::api::common::ResourceRef;
///
/// let json = r#"{"name": "topp", "href": "http://localhost:8080/geoserver/rest/workspaces/topp.json"}"#;
/// let reference: ResourceRef = serde_json::from_str(json).unwrap();
/// assert_eq!(reference.name, "topp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// The resource name, qualified with `workspace:` where GeoServer does so.
    pub name: String,

    /// Link to the full representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A named resource whose remaining fields are kept as raw JSON.
///
/// Feature types, coverages, stores, layer groups and styles all come back
/// with dozens of server-defined fields. Only the name is interpreted; the
/// rest is preserved so that callers can read it or send it back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// The resource name.
    pub name: String,

    /// Every other property, exactly as GeoServer returned it.
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl Resource {
    /// Returns a property by its JSON key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Returns a string property by its JSON key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

/// Extracts and decodes the object stored under `key`.
///
/// GeoServer wraps single resources in a one-key envelope, e.g.
/// `{"workspace": {...}}`.
pub fn unwrap_envelope<T: serde::de::DeserializeOwned>(
    mut value: Value,
    key: &str,
) -> Result<T, ApiError> {
    match value.get_mut(key).map(Value::take) {
        Some(inner) if !inner.is_null() => Ok(serde_json::from_value(inner)?),
        _ => Err(ApiError::MissingProperty {
            resource: "GeoServer response".to_string(),
            property: key.to_string(),
        }),
    }
}

/// Renders a boolean query flag the way GeoServer expects it.
pub(crate) fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Qualifies a name with its workspace prefix when one is given.
pub(crate) fn qualified_name(workspace: Option<&str>, name: &str) -> String {
    match workspace {
        Some(ws) if !ws.is_empty() => format!("{ws}:{name}"),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope() {
        let value = json!({"workspace": {"name": "topp", "isolated": false}});
        let resource: Resource = unwrap_envelope(value, "workspace").unwrap();
        assert_eq!(resource.name, "topp");
        assert_eq!(resource.get("isolated"), Some(&json!(false)));
    }

    #[test]
    fn test_unwrap_envelope_missing_key() {
        let err = unwrap_envelope::<Resource>(json!({"other": {}}), "workspace").unwrap_err();
        assert!(matches!(
            err,
            ApiError::MissingProperty { ref property, .. } if property == "workspace"
        ));
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(qualified_name(Some("topp"), "states"), "topp:states");
        assert_eq!(qualified_name(None, "states"), "states");
        assert_eq!(qualified_name(Some(""), "states"), "states");
    }

    #[test]
    fn test_error_accessors() {
        let err = ApiError::Rejected {
            status: StatusCode::CONFLICT,
            message: "already exists".to_string(),
            geoserver_output: "Workspace 'topp' already exists".to_string(),
        };
        assert!(err.is_conflict());
        assert!(err.is_status_failure());
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
        assert_eq!(err.geoserver_output(), Some("Workspace 'topp' already exists"));
        assert_eq!(err.to_string(), "already exists (HTTP 409 Conflict)");

        let local = ApiError::InvalidInput("empty band list".to_string());
        assert!(!local.is_status_failure());
        assert_eq!(local.status(), None);
    }
}
