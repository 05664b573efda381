//
//  geoserver-rest
//  api/namespaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Namespace operations.
//!
//! Every workspace has a namespace with the same prefix. Creating a namespace
//! through this client also creates the matching workspace on the server.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::{Connection, Expectation};
use super::common::{find_one, ApiError, Collection, ResourceRef};

/// Response of `namespaces.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamespaceList {
    /// The namespace references, or the empty sentinel.
    #[serde(default)]
    pub namespaces: Collection<ResourceRef>,
}

/// A namespace: prefix plus URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// The prefix, identical to the workspace name.
    pub prefix: String,

    /// The namespace URI used in GML output.
    pub uri: String,

    #[serde(default)]
    pub isolated: bool,
}

/// Client for the `namespaces` resource family.
#[derive(Debug, Clone)]
pub struct NamespaceClient {
    connection: Arc<Connection>,
}

impl NamespaceClient {
    /// Creates a new namespace client over a shared connection.
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Lists all namespaces.
    pub async fn get_all(&self) -> Result<NamespaceList, ApiError> {
        self.connection.get_json("namespaces.json").await
    }

    /// Fetches one namespace, `Ok(None)` when it does not exist.
    pub async fn get(&self, prefix: &str) -> Result<Option<Namespace>, ApiError> {
        find_one(&self.connection, &format!("namespaces/{prefix}.json"), "namespace").await
    }

    /// Creates a namespace and returns the prefix echoed by GeoServer.
    pub async fn create(&self, prefix: &str, uri: &str) -> Result<String, ApiError> {
        let body = json!({ "namespace": { "prefix": prefix, "uri": uri } });
        let expect = Expectation::status(StatusCode::CREATED).hint(
            StatusCode::CONFLICT,
            "Unable to add namespace as it already exists",
        );
        self.connection
            .send_json(Method::POST, "namespaces", &body, &expect)
            .await
    }

    /// Deletes a namespace.
    pub async fn delete(&self, prefix: &str) -> Result<(), ApiError> {
        let expect = Expectation::success()
            .hint(
                StatusCode::FORBIDDEN,
                "Namespace or related Workspace is not empty (and recurse not true)",
            )
            .hint(StatusCode::NOT_FOUND, "Namespace doesn't exist");
        self.connection
            .send_empty(Method::DELETE, &format!("namespaces/{prefix}"), &[], &expect)
            .await
    }
}
