//
//  geoserver-rest
//  api/common/lookup.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Existence-vs-error disambiguation for single-resource reads.
//!
//! GeoServer answers a GET for a missing resource with an error status, the
//! same way it answers when something is actually broken. [`lookup`] tells
//! the two apart by asking a [`LivenessCheck`] whether the server itself is
//! healthy after a failed read:
//!
//! ```text
//! fetch ──ok──────────────────────────────▶ Found(value)
//!   │
//!   └─status failure──▶ still alive? ──yes─▶ NotFound
//!   │                        │
//!   │                        └──no─────────▶ Unreachable(original error)
//!   └─any other error─────────────────────▶ Unreachable(error)
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{unwrap_envelope, ApiError};
use crate::api::about::AboutClient;
use crate::api::client::{read_json, Connection, Expectation};

/// Something that can tell whether GeoServer is up and answering.
///
/// [`AboutClient`](crate::api::about::AboutClient) is the production
/// implementation; tests substitute fixed answers.
#[async_trait]
pub trait LivenessCheck: Send + Sync {
    /// Returns `true` when the server is reachable and responding.
    async fn is_alive(&self) -> bool;
}

/// Tagged result of a single-resource read.
#[derive(Debug)]
pub enum Lookup<T> {
    /// The resource exists.
    Found(T),
    /// The server is alive but the resource does not exist.
    NotFound,
    /// The read failed for a reason other than absence.
    Unreachable(ApiError),
}

impl<T> Lookup<T> {
    /// Converts into the `Ok(Some)` / `Ok(None)` / `Err` convention used by
    /// every get-one operation.
    pub fn into_option(self) -> Result<Option<T>, ApiError> {
        match self {
            Self::Found(value) => Ok(Some(value)),
            Self::NotFound => Ok(None),
            Self::Unreachable(err) => Err(err),
        }
    }

    /// Maps the found value, leaving the other outcomes untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::NotFound => Lookup::NotFound,
            Self::Unreachable(err) => Lookup::Unreachable(err),
        }
    }

    /// True for [`Lookup::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Runs `fetch` and classifies its failure by asking `liveness`.
///
/// Only failures caused by a non-success status are candidates for the
/// absence downgrade; transport and decoding errors are never reinterpreted
/// and the liveness check is not consulted for them.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use geoserver_rest::api::about::AboutClient;
/// use geoserver_rest::api::client::Connection;
/// use geoserver_rest::api::common::lookup;
///
/// # async fn example() -> Result<(), geoserver_rest::ApiError> {
/// let connection = Arc::new(Connection::new("http://localhost:8080/geoserver/rest", "admin", "geoserver"));
/// let liveness = AboutClient::new(Arc::clone(&connection));
/// let found: Option<serde_json::Value> =
///     lookup(&liveness, || connection.get_json("workspaces/topp.json")).await.into_option()?;
/// # Ok(())
/// # }
/// ```
pub async fn lookup<T, F, Fut>(liveness: &dyn LivenessCheck, fetch: F) -> Lookup<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    match fetch().await {
        Ok(value) => Lookup::Found(value),
        Err(err) if err.is_status_failure() => {
            if liveness.is_alive().await {
                tracing::debug!("GeoServer is alive, treating failed read as absent: {}", err);
                Lookup::NotFound
            } else {
                tracing::warn!(
                    "GeoServer request failed: {} {}",
                    err,
                    err.geoserver_output().unwrap_or_default()
                );
                Lookup::Unreachable(err)
            }
        }
        Err(err) => Lookup::Unreachable(err),
    }
}

/// GETs `path`, unwraps the `envelope` key and checks liveness on failure.
///
/// This is the body of every get-one operation of the sub-clients. The GET
/// itself logs quietly; [`lookup`] warns only when the failure stands.
pub(crate) async fn find_one<T: DeserializeOwned>(
    connection: &Arc<Connection>,
    path: &str,
    envelope: &str,
) -> Result<Option<T>, ApiError> {
    let liveness = AboutClient::new(Arc::clone(connection));
    lookup(&liveness, || async {
        let request = connection.request(Method::GET, path);
        let response = connection
            .execute(request, &Expectation::success().quiet())
            .await?;
        let value: Value = read_json(response).await?;
        unwrap_envelope(value, envelope)
    })
    .await
    .into_option()
}
