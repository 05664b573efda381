//
//  geoserver-rest
//  api/layergroups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Layer group operations.
//!
//! A layer group renders several layers as one, each with an optional style.
//! Groups created here use `SINGLE` mode and live inside a workspace.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use super::client::{Connection, Expectation};
use super::common::{find_one, ApiError, Collection, Resource, ResourceRef};
use super::layers::BoundingBox;

/// Client for the layer groups of a workspace.
#[derive(Debug, Clone)]
pub struct LayerGroupClient {
    connection: Arc<Connection>,
}

impl LayerGroupClient {
    /// Creates a new layer group client over a shared connection.
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Fetches a layer group, `Ok(None)` when it does not exist.
    pub async fn get(&self, workspace: &str, name: &str) -> Result<Option<Resource>, ApiError> {
        let path = format!("workspaces/{workspace}/layergroups/{name}.json");
        find_one(&self.connection, &path, "layerGroup").await
    }

    /// Lists the layer groups of a workspace.
    pub async fn get_all(&self, workspace: &str) -> Result<Collection<ResourceRef>, ApiError> {
        let mut value: Value = self
            .connection
            .get_json(&format!("workspaces/{workspace}/layergroups.json"))
            .await?;
        let inner = value
            .get_mut("layerGroups")
            .map(Value::take)
            .unwrap_or(Value::Null);
        Ok(Collection::from_value(inner)?)
    }

    /// Creates a layer group from qualified layer names.
    ///
    /// # Parameters
    ///
    /// * `layers` - Qualified layer names, bottom layer first
    /// * `styles` - One style per layer, or empty for every layer's default;
    ///   an empty string also selects the default for that layer
    /// * `bounds` - Group extent; GeoServer computes one when `None`
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidInput`] when `styles` is non-empty and its length
    /// differs from `layers`, or when `layers` is empty.
    pub async fn create(
        &self,
        workspace: &str,
        name: &str,
        layers: &[&str],
        styles: &[&str],
        bounds: Option<&BoundingBox>,
    ) -> Result<String, ApiError> {
        let body = group_body(name, layers, styles, bounds)?;
        let expect = Expectation::status(StatusCode::CREATED)
            .hint(StatusCode::CONFLICT, "Unable to add layer group as it already exists");
        self.connection
            .send_json(
                Method::POST,
                &format!("workspaces/{workspace}/layergroups"),
                &body,
                &expect,
            )
            .await
    }

    /// Replaces the definition of a layer group.
    ///
    /// `definition` is sent as is and usually is the modified result of
    /// [`get`](Self::get), wrapped in `{"layerGroup": ...}`.
    pub async fn modify(
        &self,
        workspace: &str,
        name: &str,
        definition: &Value,
    ) -> Result<(), ApiError> {
        let path = format!("workspaces/{workspace}/layergroups/{name}.json");
        self.connection
            .send_json(Method::PUT, &path, definition, &Expectation::success())
            .await?;
        Ok(())
    }

    /// Deletes a layer group. The grouped layers are untouched.
    pub async fn delete(&self, workspace: &str, name: &str) -> Result<(), ApiError> {
        let expect =
            Expectation::success().hint(StatusCode::NOT_FOUND, "Layer group doesn't exist");
        self.connection
            .send_empty(
                Method::DELETE,
                &format!("workspaces/{workspace}/layergroups/{name}"),
                &[],
                &expect,
            )
            .await
    }
}

fn group_body(
    name: &str,
    layers: &[&str],
    styles: &[&str],
    bounds: Option<&BoundingBox>,
) -> Result<Value, ApiError> {
    if layers.is_empty() {
        return Err(ApiError::InvalidInput("a layer group needs at least one layer".to_string()));
    }
    if !styles.is_empty() && styles.len() != layers.len() {
        return Err(ApiError::InvalidInput(format!(
            "{} layer(s) but {} style(s) given",
            layers.len(),
            styles.len()
        )));
    }

    let published: Vec<Value> = layers
        .iter()
        .map(|layer| json!({ "@type": "layer", "name": layer }))
        .collect();
    let style_entries: Vec<Value> = (0..layers.len())
        .map(|i| match styles.get(i) {
            Some(style) if !style.is_empty() => json!({ "name": style }),
            _ => json!(""),
        })
        .collect();

    let mut group = json!({
        "name": name,
        "mode": "SINGLE",
        "title": name,
        "publishables": { "published": published },
        "styles": { "style": style_entries },
    });
    if let Some(bounds) = bounds {
        group["bounds"] = json!(bounds);
    }
    Ok(json!({ "layerGroup": group }))
}
