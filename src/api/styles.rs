//
//  geoserver-rest
//  api/styles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Style API types and operations.
//!
//! Styles are either global ("default" styles under `styles/`) or scoped to a
//! workspace (under `workspaces/<ws>/styles/`). Bodies are SLD 1.0 documents
//! sent as [`SLD_MEDIA_TYPE`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use geoserver_rest::api::client::Connection;
//! use geoserver_rest::api::styles::StyleClient;
//!
//! # async fn example() -> Result<(), geoserver_rest::ApiError> {
//! let connection = Arc::new(Connection::new("http://localhost:8080/geoserver/rest", "admin", "geoserver"));
//! let styles = StyleClient::new(connection);
//!
//! let sld = std::fs::read_to_string("roads.sld").unwrap_or_default();
//! styles.publish("osm", "roads", &sld).await?;
//! styles.assign_style_to_layer("osm", "roads", Some("osm"), "roads", true).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::{Connection, Expectation, SLD_MEDIA_TYPE};
use super::common::{find_one, flag, qualified_name, ApiError, Collection, Resource, ResourceRef};
use super::workspaces::WorkspaceClient;

/// Response of `styles.json` and `workspaces/<ws>/styles.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleList {
    /// The style references, or the empty sentinel.
    #[serde(default)]
    pub styles: Collection<ResourceRef>,
}

/// Client for global and workspace styles.
#[derive(Debug, Clone)]
pub struct StyleClient {
    connection: Arc<Connection>,
}

impl StyleClient {
    /// Creates a new style client over a shared connection.
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Lists the global styles.
    pub async fn get_defaults(&self) -> Result<StyleList, ApiError> {
        self.connection.get_json("styles.json").await
    }

    /// Lists the styles of one workspace.
    pub async fn get_in_workspace(&self, workspace: &str) -> Result<StyleList, ApiError> {
        self.connection
            .get_json(&format!("workspaces/{workspace}/styles.json"))
            .await
    }

    /// Lists the styles of every workspace.
    ///
    /// Issues one request for the workspace list and one per workspace. The
    /// first failure aborts the walk; partial results are never returned.
    pub async fn get_all_workspace_styles(&self) -> Result<Vec<ResourceRef>, ApiError> {
        let workspaces = WorkspaceClient::new(Arc::clone(&self.connection))
            .get_all()
            .await?
            .workspaces;

        let mut styles = Vec::new();
        for ws in workspaces.iter() {
            let in_ws = self.get_in_workspace(&ws.name).await?;
            styles.extend(in_ws.styles.into_vec());
        }
        Ok(styles)
    }

    /// Lists the global styles followed by every workspace style.
    pub async fn get_all(&self) -> Result<Vec<ResourceRef>, ApiError> {
        let mut styles = self.get_defaults().await?.styles.into_vec();
        styles.extend(self.get_all_workspace_styles().await?);
        Ok(styles)
    }

    /// Publishes an SLD document as a new workspace style.
    pub async fn publish(
        &self,
        workspace: &str,
        name: &str,
        sld_body: &str,
    ) -> Result<(), ApiError> {
        let expect = Expectation::status(StatusCode::CREATED)
            .hint(StatusCode::FORBIDDEN, "Unable to add style as it already exists");
        self.connection
            .send_text(
                Method::POST,
                &format!("workspaces/{workspace}/styles"),
                &[("name", name)],
                SLD_MEDIA_TYPE,
                sld_body,
                &expect,
            )
            .await?;
        Ok(())
    }

    /// Deletes a style.
    ///
    /// # Parameters
    ///
    /// * `workspace` - The style's workspace, `None` for a global style
    /// * `recurse` - Also detach the style from layers still using it
    /// * `purge` - Also remove the SLD file and its resources from disk
    ///
    /// # Errors
    ///
    /// `Rejected` with 403 when layers still use the style and `recurse` is
    /// off.
    pub async fn delete(
        &self,
        workspace: Option<&str>,
        name: &str,
        recurse: bool,
        purge: bool,
    ) -> Result<(), ApiError> {
        let expect = Expectation::success().hint(
            StatusCode::FORBIDDEN,
            "there are dependent layers to this style; delete them first or retry with recursion enabled",
        );
        self.connection
            .send_empty(
                Method::DELETE,
                &style_path(workspace, name),
                &[("recurse", flag(recurse)), ("purge", flag(purge))],
                &expect,
            )
            .await
    }

    /// Attaches a style to a layer.
    ///
    /// # Parameters
    ///
    /// * `workspace` / `layer` - The layer
    /// * `style_workspace` - The style's workspace, `None` for a global style
    /// * `style` - The style name
    /// * `is_default` - Make it the layer's default style
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the style does not exist.
    pub async fn assign_style_to_layer(
        &self,
        workspace: &str,
        layer: &str,
        style_workspace: Option<&str>,
        style: &str,
        is_default: bool,
    ) -> Result<(), ApiError> {
        let info = self
            .get_style_information(style_workspace, style)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("style {}", qualified_name(style_workspace, style)))
            })?;

        let qualified = qualified_name(Some(workspace), layer);
        let request = self
            .connection
            .request(Method::POST, &format!("layers/{qualified}/styles"))
            .query(&[("default", flag(is_default))])
            .json(&json!({ "style": info }));
        self.connection
            .execute(request, &Expectation::status(StatusCode::CREATED))
            .await?;
        Ok(())
    }

    /// Fetches the description of a style, `Ok(None)` when it does not exist.
    pub async fn get_style_information(
        &self,
        workspace: Option<&str>,
        name: &str,
    ) -> Result<Option<Resource>, ApiError> {
        let path = format!("{}.json", style_path(workspace, name));
        find_one(&self.connection, &path, "style").await
    }
}

fn style_path(workspace: Option<&str>, name: &str) -> String {
    match workspace {
        Some(ws) => format!("workspaces/{ws}/styles/{name}"),
        None => format!("styles/{name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};

    const SLD: &str = r#"<?xml version="1.0"?><StyledLayerDescriptor version="1.0.0"/>"#;

    fn path_with_query(path: &str) -> Matcher {
        Matcher::Regex(format!(r"^/geoserver/rest/{path}(\?.*)?$"))
    }

    async fn setup() -> (ServerGuard, StyleClient) {
        let server = Server::new_async().await;
        let url = format!("{}/geoserver/rest", server.url());
        let client = StyleClient::new(Arc::new(Connection::new(&url, "admin", "geoserver")));
        (server, client)
    }

    #[test]
    fn test_style_path() {
        assert_eq!(style_path(None, "point"), "styles/point");
        assert_eq!(style_path(Some("osm"), "roads"), "workspaces/osm/styles/roads");
    }

    #[tokio::test]
    async fn test_publish_sends_sld() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("POST", path_with_query("workspaces/osm/styles"))
            .match_query(Matcher::UrlEncoded("name".into(), "roads".into()))
            .match_header("content-type", SLD_MEDIA_TYPE)
            .match_body(SLD)
            .with_status(201)
            .with_body("roads")
            .create_async()
            .await;

        client.publish("osm", "roads", SLD).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_all_combines_defaults_and_workspaces() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/geoserver/rest/styles.json")
            .with_status(200)
            .with_body(r#"{"styles":{"style":[{"name":"point"},{"name":"line"}]}}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/geoserver/rest/workspaces.json")
            .with_status(200)
            .with_body(r#"{"workspaces":{"workspace":[{"name":"osm"},{"name":"empty"}]}}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/geoserver/rest/workspaces/osm/styles.json")
            .with_status(200)
            .with_body(r#"{"styles":{"style":[{"name":"roads"}]}}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/geoserver/rest/workspaces/empty/styles.json")
            .with_status(200)
            .with_body(r#"{"styles":""}"#)
            .create_async()
            .await;

        let all = client.get_all().await.unwrap();
        let names: Vec<String> = all.into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["point", "line", "roads"]);
    }

    #[tokio::test]
    async fn test_workspace_styles_first_error_propagates() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/geoserver/rest/workspaces.json")
            .with_status(200)
            .with_body(r#"{"workspaces":{"workspace":[{"name":"broken"},{"name":"osm"}]}}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/geoserver/rest/workspaces/broken/styles.json")
            .with_status(500)
            .create_async()
            .await;
        let never = server
            .mock("GET", "/geoserver/rest/workspaces/osm/styles.json")
            .expect(0)
            .create_async()
            .await;

        let err = client.get_all_workspace_styles().await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        never.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_with_dependent_layers() {
        let (mut server, client) = setup().await;
        server
            .mock("DELETE", path_with_query("styles/population"))
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("recurse".into(), "false".into()),
                Matcher::UrlEncoded("purge".into(), "true".into()),
            ]))
            .with_status(403)
            .create_async()
            .await;

        let err = client.delete(None, "population", false, true).await.unwrap_err();
        assert!(err.is_conflict());
        assert!(err.to_string().contains("dependent layers"));
    }

    #[tokio::test]
    async fn test_assign_style_to_layer() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/geoserver/rest/workspaces/osm/styles/roads.json")
            .with_status(200)
            .with_body(r#"{"style":{"name":"roads","format":"sld","filename":"roads.sld"}}"#)
            .create_async()
            .await;
        let assign = server
            .mock("POST", path_with_query("layers/osm:highways/styles"))
            .match_query(Matcher::UrlEncoded("default".into(), "true".into()))
            .match_body(Matcher::PartialJson(json!({
                "style": {"name": "roads", "filename": "roads.sld"}
            })))
            .with_status(201)
            .create_async()
            .await;

        client
            .assign_style_to_layer("osm", "highways", Some("osm"), "roads", true)
            .await
            .unwrap();
        assign.assert_async().await;
    }
}
