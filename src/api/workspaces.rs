//
//  geoserver-rest
//  api/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Workspace API types and operations.
//!
//! Workspaces are the top-level container of the GeoServer catalog. Every
//! store, layer and workspace-specific style lives inside exactly one.
//!
//! # Workspace Hierarchy
//!
//! ```text
//! Workspace (1:1 with a Namespace)
//! ├── Data stores ── Feature types
//! ├── Coverage stores ── Coverages
//! ├── WMS / WMTS stores ── Cascaded layers
//! ├── Layer groups
//! └── Styles
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use geoserver_rest::api::client::Connection;
//! use geoserver_rest::api::workspaces::WorkspaceClient;
//!
//! # async fn example() -> Result<(), geoserver_rest::ApiError> {
//! let connection = Arc::new(Connection::new("http://localhost:8080/geoserver/rest", "admin", "geoserver"));
//! let workspaces = WorkspaceClient::new(connection);
//!
//! let created = workspaces.create("topp").await?;
//! assert_eq!(created, "topp");
//!
//! for ws in workspaces.get_all().await?.workspaces.iter() {
//!     println!("{}", ws.name);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::client::{Connection, Expectation};
use super::common::{find_one, flag, ApiError, Collection, ResourceRef};

/// Response of `workspaces.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceList {
    /// The workspace references, or the empty sentinel.
    #[serde(default)]
    pub workspaces: Collection<ResourceRef>,
}

/// A GeoServer workspace.
///
/// # Fields
///
/// * `name` - Unique workspace name, also used as the namespace prefix
/// * `isolated` - Whether the workspace is only reachable through its virtual service
/// * `links` - Store collection links and any other server-defined fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Unique workspace name.
    pub name: String,

    /// Isolated workspaces are hidden from the global services.
    #[serde(default)]
    pub isolated: bool,

    /// Remaining fields such as `dataStores` and `coverageStores` links.
    #[serde(flatten)]
    pub links: Map<String, Value>,
}

/// Client for the `workspaces` resource family.
#[derive(Debug, Clone)]
pub struct WorkspaceClient {
    connection: Arc<Connection>,
}

impl WorkspaceClient {
    /// Creates a new workspace client over a shared connection.
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Lists all workspaces.
    ///
    /// An empty catalog yields [`Collection::Empty`].
    pub async fn get_all(&self) -> Result<WorkspaceList, ApiError> {
        self.connection.get_json("workspaces.json").await
    }

    /// Fetches a single workspace.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when GeoServer is reachable but has no such workspace.
    pub async fn get(&self, name: &str) -> Result<Option<Workspace>, ApiError> {
        find_one(&self.connection, &format!("workspaces/{name}.json"), "workspace").await
    }

    /// Creates a workspace and returns its name as echoed by GeoServer.
    ///
    /// # Errors
    ///
    /// `Rejected` with status 409 when the workspace already exists.
    pub async fn create(&self, name: &str) -> Result<String, ApiError> {
        let body = json!({ "workspace": { "name": name } });
        let expect = Expectation::status(StatusCode::CREATED).hint(
            StatusCode::CONFLICT,
            "Unable to add workspace as it already exists",
        );
        self.connection
            .send_json(Method::POST, "workspaces", &body, &expect)
            .await
    }

    /// Deletes a workspace.
    ///
    /// With `recurse` set, every store, layer and style inside the workspace
    /// is removed as well.
    ///
    /// # Errors
    ///
    /// | Status | Meaning |
    /// |--------|---------|
    /// | 400 | Workspace not empty and `recurse` is off |
    /// | 403 | Workspace is the default workspace |
    /// | 404 | No such workspace |
    ///
    /// # Notes
    ///
    /// GeoServer reads the text after the last `.` of a path as the response
    /// format, so dotted names such as `it.geosolutions` get an explicit
    /// `.json` suffix.
    pub async fn delete(&self, name: &str, recurse: bool) -> Result<(), ApiError> {
        let expect = Expectation::success()
            .hint(
                StatusCode::BAD_REQUEST,
                "Workspace or related Namespace is not empty (and recurse not true)",
            )
            .hint(
                StatusCode::FORBIDDEN,
                "Workspace is the default workspace and cannot be deleted",
            )
            .hint(StatusCode::NOT_FOUND, "Workspace doesn't exist");
        let path = if name.contains('.') {
            format!("workspaces/{name}.json")
        } else {
            format!("workspaces/{name}")
        };
        self.connection
            .send_empty(
                Method::DELETE,
                &path,
                &[("recurse", flag(recurse))],
                &expect,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};

    async fn setup() -> (ServerGuard, WorkspaceClient) {
        let server = Server::new_async().await;
        let url = format!("{}/geoserver/rest", server.url());
        let client = WorkspaceClient::new(Arc::new(Connection::new(&url, "admin", "geoserver")));
        (server, client)
    }

    #[tokio::test]
    async fn test_create_list_delete() {
        let (mut server, client) = setup().await;

        let create = server
            .mock("POST", "/geoserver/rest/workspaces")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({"workspace": {"name": "topp"}})))
            .with_status(201)
            .with_body("topp")
            .create_async()
            .await;
        assert_eq!(client.create("topp").await.unwrap(), "topp");
        create.assert_async().await;

        let listed = server
            .mock("GET", "/geoserver/rest/workspaces.json")
            .with_status(200)
            .with_body(
                r#"{"workspaces":{"workspace":[{"name":"topp","href":"http://gs/rest/workspaces/topp.json"}]}}"#,
            )
            .create_async()
            .await;
        let list = client.get_all().await.unwrap();
        assert_eq!(list.workspaces.len(), 1);
        assert_eq!(list.workspaces.items()[0].name, "topp");
        listed.remove_async().await;

        let delete = server
            .mock(
                "DELETE",
                Matcher::Regex(r"^/geoserver/rest/workspaces/topp(\?.*)?$".to_string()),
            )
            .match_query(Matcher::UrlEncoded("recurse".into(), "true".into()))
            .with_status(200)
            .create_async()
            .await;
        client.delete("topp", true).await.unwrap();
        delete.assert_async().await;

        let emptied = server
            .mock("GET", "/geoserver/rest/workspaces.json")
            .with_status(200)
            .with_body(r#"{"workspaces":""}"#)
            .create_async()
            .await;
        let list = client.get_all().await.unwrap();
        emptied.assert_async().await;
        assert!(list.workspaces.is_sentinel());
        assert!(list.workspaces.items().is_empty());
    }

    #[tokio::test]
    async fn test_empty_catalog_sentinel() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/geoserver/rest/workspaces.json")
            .with_status(200)
            .with_body(r#"{"workspaces":""}"#)
            .create_async()
            .await;

        let list = client.get_all().await.unwrap();
        assert!(list.workspaces.is_sentinel());
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let (mut server, client) = setup().await;
        server
            .mock("POST", "/geoserver/rest/workspaces")
            .with_status(409)
            .with_body("Workspace named 'topp' already exists.")
            .create_async()
            .await;

        let err = client.create("topp").await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
        assert!(err.to_string().contains("already exists"));
        assert_eq!(err.geoserver_output(), Some("Workspace named 'topp' already exists."));
    }

    #[tokio::test]
    async fn test_get_found() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/geoserver/rest/workspaces/topp.json")
            .with_status(200)
            .with_body(
                r#"{"workspace":{"name":"topp","isolated":false,"dataStores":"http://gs/rest/workspaces/topp/datastores.json"}}"#,
            )
            .create_async()
            .await;

        let ws = client.get("topp").await.unwrap().unwrap();
        assert_eq!(ws.name, "topp");
        assert!(!ws.isolated);
        assert!(ws.links.contains_key("dataStores"));
    }

    #[tokio::test]
    async fn test_get_absent_when_server_alive() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/geoserver/rest/workspaces/fantasy.json")
            .with_status(404)
            .with_body("No such workspace: 'fantasy' found")
            .create_async()
            .await;
        let version = server
            .mock("GET", "/geoserver/rest/about/version.json")
            .with_status(200)
            .with_body(r#"{"about":{"resource":[{"@name":"GeoServer","Version":"2.24.1"}]}}"#)
            .create_async()
            .await;

        assert!(client.get("fantasy").await.unwrap().is_none());
        version.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_error_when_server_refuses() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/geoserver/rest/workspaces/topp.json")
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;
        server
            .mock("GET", "/geoserver/rest/about/version.json")
            .with_status(503)
            .create_async()
            .await;

        let err = client.get("topp").await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(err.geoserver_output(), Some("Service Unavailable"));
    }

    #[tokio::test]
    async fn test_delete_not_empty() {
        let (mut server, client) = setup().await;
        server
            .mock("DELETE", Matcher::Regex(r"^/geoserver/rest/workspaces/topp(\?.*)?$".to_string()))
            .match_query(Matcher::UrlEncoded("recurse".into(), "false".into()))
            .with_status(400)
            .with_body("Workspace not empty")
            .create_async()
            .await;

        let err = client.delete("topp", false).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Rejected { ref message, .. } if message.contains("not empty")
        ));
    }

    #[tokio::test]
    async fn test_delete_dotted_name_keeps_suffix() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock(
                "DELETE",
                Matcher::Regex(
                    r"^/geoserver/rest/workspaces/it\.geosolutions\.json(\?.*)?$".to_string(),
                ),
            )
            .match_query(Matcher::UrlEncoded("recurse".into(), "true".into()))
            .with_status(200)
            .create_async()
            .await;

        client.delete("it.geosolutions", true).await.unwrap();
        mock.assert_async().await;
    }
}
