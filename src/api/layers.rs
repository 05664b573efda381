//
//  geoserver-rest
//  api/layers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Layer API types and operations.
//!
//! A GeoServer layer is the published face of a resource: a feature type
//! (vector), a coverage (raster) or a cascaded WMS/WMTS layer. This module
//! publishes those resources, reads them back and modifies a few well-known
//! parts of their configuration.
//!
//! # Resource Paths
//!
//! ```text
//! layers/<ws>:<name>.json                                        layer
//! workspaces/<ws>/datastores/<store>/featuretypes/<name>.json    feature type
//! workspaces/<ws>/coveragestores/<store>/coverages/<name>.json   coverage
//! workspaces/<ws>/wmsstores/<store>/wmslayers/<name>.json        WMS layer
//! workspaces/<ws>/wmtsstores/<store>/layers/<name>.json          WMTS layer
//! ```
//!
//! # Read-Modify-Write
//!
//! [`LayerClient::modify_attribution`] and [`LayerClient::rename_coverage_bands`]
//! fetch the current representation, change one subtree and PUT the whole
//! document back. There is no concurrency control; the last write wins.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use geoserver_rest::api::client::Connection;
//! use geoserver_rest::api::layers::{LayerClient, LayerSpec};
//!
//! # async fn example() -> Result<(), geoserver_rest::ApiError> {
//! let url = "http://localhost:8080/geoserver/rest";
//! let connection = Arc::new(Connection::new(url, "admin", "geoserver"));
//! let layers = LayerClient::new(connection);
//!
//! let spec = LayerSpec::new("roads").with_title("Roads").with_srs("EPSG:3857");
//! layers.publish_feature_type("osm", "postgis", &spec).await?;
//!
//! layers
//!     .modify_attribution(
//!         "osm",
//!         "roads",
//!         Some("© OpenStreetMap contributors"),
//!         Some("https://osm.org/copyright"),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::client::{Connection, Expectation};
use super::common::{find_one, flag, qualified_name, ApiError, Collection, Resource, ResourceRef};

/// Response of `layers.json` and `workspaces/<ws>/layers.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerList {
    /// The layer references, or the empty sentinel.
    #[serde(default)]
    pub layers: Collection<ResourceRef>,
}

/// A published layer.
///
/// # Fields
///
/// * `name` - The layer name, without workspace prefix
/// * `layer_type` - `VECTOR`, `RASTER`, `REMOTE` or `WMS`
/// * `default_style` - Style applied when a request names none
/// * `styles` - Additional styles the layer may be rendered with
/// * `attribution` - Attribution shown by clients
/// * `extra` - Every other field GeoServer returned
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub layer_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_style: Option<ResourceRef>,

    #[serde(default)]
    pub styles: Collection<ResourceRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Attribution>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The attribution block of a layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(rename = "logoURL", default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub logo_width: u32,

    #[serde(default)]
    pub logo_height: u32,
}

/// A native bounding box in the given CRS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub minx: f64,
    pub maxx: f64,
    pub miny: f64,
    pub maxy: f64,
    pub crs: String,
}

/// What to publish: the description shared by feature types, coverages and
/// cascaded layers.
///
/// `name` defaults to `native_name` and `title` to the resulting name.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub native_name: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub srs: String,
    pub enabled: bool,
    pub abstract_text: Option<String>,
    pub native_bounding_box: Option<BoundingBox>,
}

impl LayerSpec {
    /// Describes the resource with the given native name, in `EPSG:4326`,
    /// enabled.
    pub fn new(native_name: &str) -> Self {
        Self {
            native_name: native_name.to_string(),
            name: None,
            title: None,
            srs: "EPSG:4326".to_string(),
            enabled: true,
            abstract_text: None,
            native_bounding_box: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    #[must_use]
    pub fn with_srs(mut self, srs: &str) -> Self {
        self.srs = srs.to_string();
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_abstract(mut self, text: &str) -> Self {
        self.abstract_text = Some(text.to_string());
        self
    }

    #[must_use]
    pub fn with_native_bounding_box(mut self, bbox: BoundingBox) -> Self {
        self.native_bounding_box = Some(bbox);
        self
    }

    /// The published name.
    pub fn published_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.native_name)
    }

    /// Builds the JSON body, wrapped in `envelope`.
    fn to_body(&self, envelope: &str) -> Value {
        let name = self.published_name();
        let mut inner = json!({
            "name": name,
            "nativeName": self.native_name,
            "title": self.title.as_deref().unwrap_or(name),
            "srs": self.srs,
            "enabled": self.enabled,
        });
        if let Some(text) = &self.abstract_text {
            inner["abstract"] = json!(text);
        }
        if let Some(bbox) = &self.native_bounding_box {
            inner["nativeBoundingBox"] = json!(bbox);
        }
        let mut outer = Map::new();
        outer.insert(envelope.to_string(), inner);
        Value::Object(outer)
    }
}

/// How the TIME dimension is advertised in capabilities documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Presentation {
    /// Every available time is listed
    List,
    /// Start, end and resolution
    DiscreteInterval,
    /// Start and end only
    ContinuousInterval,
}

/// Which time is used when a request names none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefaultValueStrategy {
    /// The earliest available time
    Minimum,
    /// The latest available time
    Maximum,
    /// The available time closest to now
    Nearest,
    /// A configured reference time
    Fixed,
}

/// Configuration of a TIME dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDimension {
    pub presentation: Presentation,
    /// Resolution in milliseconds, e.g. 3600000 for one hour
    pub resolution: Option<u64>,
    pub default_value: DefaultValueStrategy,
    pub nearest_match_enabled: bool,
    pub raw_nearest_match_enabled: bool,
    /// Tolerance for nearest match, e.g. `PT30M`
    pub acceptable_interval: Option<String>,
}

impl Default for TimeDimension {
    fn default() -> Self {
        Self {
            presentation: Presentation::List,
            resolution: None,
            default_value: DefaultValueStrategy::Maximum,
            nearest_match_enabled: false,
            raw_nearest_match_enabled: false,
            acceptable_interval: None,
        }
    }
}

impl TimeDimension {
    fn to_metadata(&self, attribute: Option<&str>) -> Value {
        let mut info = json!({
            "enabled": true,
            "presentation": self.presentation,
            "units": "ISO8601",
            "defaultValue": { "strategy": self.default_value },
            "nearestMatchEnabled": self.nearest_match_enabled,
            "rawNearestMatchEnabled": self.raw_nearest_match_enabled,
        });
        if let Some(resolution) = self.resolution {
            info["resolution"] = json!(resolution);
        }
        if let Some(attribute) = attribute {
            info["attribute"] = json!(attribute);
        }
        if let Some(interval) = &self.acceptable_interval {
            info["acceptableInterval"] = json!(interval);
        }
        json!({ "entry": [ { "@key": "time", "dimensionInfo": info } ] })
    }
}

/// Client for layers and the resources they publish.
#[derive(Debug, Clone)]
pub struct LayerClient {
    connection: Arc<Connection>,
}

impl LayerClient {
    /// Creates a new layer client over a shared connection.
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Fetches a layer by workspace and name, `Ok(None)` when it does not exist.
    pub async fn get(&self, workspace: &str, name: &str) -> Result<Option<Layer>, ApiError> {
        let qualified = qualified_name(Some(workspace), name);
        find_one(&self.connection, &format!("layers/{qualified}.json"), "layer").await
    }

    /// Lists every layer of the server.
    pub async fn get_all(&self) -> Result<LayerList, ApiError> {
        self.connection.get_json("layers.json").await
    }

    /// Lists the layers of one workspace.
    pub async fn get_layers(&self, workspace: &str) -> Result<LayerList, ApiError> {
        self.connection
            .get_json(&format!("workspaces/{workspace}/layers.json"))
            .await
    }

    /// Fetches a cascaded WMS layer.
    pub async fn get_wms_layer(
        &self,
        workspace: &str,
        store: &str,
        name: &str,
    ) -> Result<Option<Resource>, ApiError> {
        let path = format!("workspaces/{workspace}/wmsstores/{store}/wmslayers/{name}.json");
        find_one(&self.connection, &path, "wmsLayer").await
    }

    /// Fetches a cascaded WMTS layer.
    pub async fn get_wmts_layer(
        &self,
        workspace: &str,
        store: &str,
        name: &str,
    ) -> Result<Option<Resource>, ApiError> {
        let path = format!("workspaces/{workspace}/wmtsstores/{store}/layers/{name}.json");
        find_one(&self.connection, &path, "wmtsLayer").await
    }

    /// Fetches a feature type.
    pub async fn get_feature_type(
        &self,
        workspace: &str,
        store: &str,
        name: &str,
    ) -> Result<Option<Resource>, ApiError> {
        let path = format!("workspaces/{workspace}/datastores/{store}/featuretypes/{name}.json");
        find_one(&self.connection, &path, "featureType").await
    }

    /// Fetches a coverage.
    pub async fn get_coverage(
        &self,
        workspace: &str,
        store: &str,
        name: &str,
    ) -> Result<Option<Resource>, ApiError> {
        let path = format!("workspaces/{workspace}/coveragestores/{store}/coverages/{name}.json");
        find_one(&self.connection, &path, "coverage").await
    }

    /// Publishes a feature type from the default data store of a workspace.
    pub async fn publish_feature_type_default_data_store(
        &self,
        workspace: &str,
        spec: &LayerSpec,
    ) -> Result<(), ApiError> {
        let path = format!("workspaces/{workspace}/featuretypes");
        self.publish(&path, &spec.to_body("featureType")).await
    }

    /// Publishes a feature type from the given data store.
    pub async fn publish_feature_type(
        &self,
        workspace: &str,
        store: &str,
        spec: &LayerSpec,
    ) -> Result<(), ApiError> {
        let path = format!("workspaces/{workspace}/datastores/{store}/featuretypes");
        self.publish(&path, &spec.to_body("featureType")).await
    }

    /// Publishes a layer of a cascaded WMS store.
    pub async fn publish_wms_layer(
        &self,
        workspace: &str,
        store: &str,
        spec: &LayerSpec,
    ) -> Result<(), ApiError> {
        let path = format!("workspaces/{workspace}/wmsstores/{store}/wmslayers");
        self.publish(&path, &spec.to_body("wmsLayer")).await
    }

    /// Publishes a layer of a cascaded WMTS store.
    pub async fn publish_wmts_layer(
        &self,
        workspace: &str,
        store: &str,
        spec: &LayerSpec,
    ) -> Result<(), ApiError> {
        let path = format!("workspaces/{workspace}/wmtsstores/{store}/layers");
        self.publish(&path, &spec.to_body("wmtsLayer")).await
    }

    /// Publishes a raster held in a database backed coverage store.
    pub async fn publish_db_raster(
        &self,
        workspace: &str,
        coverage_store: &str,
        spec: &LayerSpec,
    ) -> Result<(), ApiError> {
        let path = format!("workspaces/{workspace}/coveragestores/{coverage_store}/coverages");
        self.publish(&path, &spec.to_body("coverage")).await
    }

    /// Deletes a feature type; with `recurse` its layer goes too.
    pub async fn delete_feature_type(
        &self,
        workspace: &str,
        store: &str,
        name: &str,
        recurse: bool,
    ) -> Result<(), ApiError> {
        let path = format!("workspaces/{workspace}/datastores/{store}/featuretypes/{name}");
        self.connection
            .send_empty(
                Method::DELETE,
                &path,
                &[("recurse", flag(recurse))],
                &Expectation::success(),
            )
            .await
    }

    /// Sets the attribution title and link of a layer.
    ///
    /// Arguments left `None` keep their current value.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] when the layer does not exist
    /// - [`ApiError::MissingProperty`] when the layer has no attribution
    ///   block; nothing is written in that case
    pub async fn modify_attribution(
        &self,
        workspace: &str,
        name: &str,
        title: Option<&str>,
        href: Option<&str>,
    ) -> Result<(), ApiError> {
        let qualified = qualified_name(Some(workspace), name);
        let path = format!("layers/{qualified}.json");
        let mut layer: Value = find_one(&self.connection, &path, "layer")
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("layer {qualified}")))?;

        let attribution = layer
            .get_mut("attribution")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| ApiError::MissingProperty {
                resource: "layer".to_string(),
                property: "attribution".to_string(),
            })?;
        if let Some(title) = title {
            attribution.insert("title".to_string(), json!(title));
        }
        if let Some(href) = href {
            attribution.insert("href".to_string(), json!(href));
        }

        self.connection
            .send_json(Method::PUT, &path, &json!({ "layer": layer }), &Expectation::success())
            .await?;
        Ok(())
    }

    /// Renames the bands of a coverage, in order.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] when the coverage does not exist
    /// - [`ApiError::MissingProperty`] when it has no band description
    /// - [`ApiError::InvalidInput`] when the number of names differs from
    ///   the number of bands
    pub async fn rename_coverage_bands(
        &self,
        workspace: &str,
        store: &str,
        name: &str,
        band_names: &[&str],
    ) -> Result<(), ApiError> {
        let path = format!("workspaces/{workspace}/coveragestores/{store}/coverages/{name}.json");
        let mut coverage: Value = find_one(&self.connection, &path, "coverage")
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("coverage {workspace}:{name}")))?;

        let dimensions = coverage
            .pointer_mut("/dimensions/coverageDimension")
            .ok_or_else(|| ApiError::MissingProperty {
                resource: "coverage".to_string(),
                property: "dimensions.coverageDimension".to_string(),
            })?;
        // A single band comes back as an object instead of an array
        if dimensions.is_object() {
            let single = dimensions.take();
            *dimensions = Value::Array(vec![single]);
        }
        let bands = dimensions.as_array_mut().ok_or_else(|| ApiError::MissingProperty {
            resource: "coverage".to_string(),
            property: "dimensions.coverageDimension".to_string(),
        })?;

        if bands.len() != band_names.len() {
            return Err(ApiError::InvalidInput(format!(
                "coverage has {} band(s) but {} name(s) were given",
                bands.len(),
                band_names.len()
            )));
        }
        for (band, new_name) in bands.iter_mut().zip(band_names) {
            band["name"] = json!(new_name);
        }

        let body = json!({ "coverage": coverage });
        self.connection
            .send_json(Method::PUT, &path, &body, &Expectation::success())
            .await?;
        Ok(())
    }

    /// Enables the TIME dimension of a coverage.
    pub async fn enable_time_coverage(
        &self,
        workspace: &str,
        store: &str,
        name: &str,
        time: &TimeDimension,
    ) -> Result<(), ApiError> {
        let path = format!("workspaces/{workspace}/coveragestores/{store}/coverages/{name}.json");
        let body = json!({ "coverage": { "metadata": time.to_metadata(None) } });
        self.connection
            .send_json(Method::PUT, &path, &body, &Expectation::success())
            .await?;
        Ok(())
    }

    /// Enables the TIME dimension of a feature type, read from `attribute`.
    pub async fn enable_time_feature_type(
        &self,
        workspace: &str,
        store: &str,
        name: &str,
        attribute: &str,
        time: &TimeDimension,
    ) -> Result<(), ApiError> {
        let path = format!("workspaces/{workspace}/datastores/{store}/featuretypes/{name}.json");
        let body = json!({ "featureType": { "metadata": time.to_metadata(Some(attribute)) } });
        self.connection
            .send_json(Method::PUT, &path, &body, &Expectation::success())
            .await?;
        Ok(())
    }

    async fn publish(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.connection
            .send_json(Method::POST, path, body, &Expectation::status(StatusCode::CREATED))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};

    const ALIVE: &str = r#"{"about":{"resource":[{"@name":"GeoServer","Version":"2.24.1"}]}}"#;

    fn world_bbox() -> BoundingBox {
        BoundingBox {
            minx: -180.0,
            maxx: 180.0,
            miny: -90.0,
            maxy: 90.0,
            crs: "EPSG:4326".to_string(),
        }
    }

    async fn setup() -> (ServerGuard, LayerClient) {
        let server = Server::new_async().await;
        let url = format!("{}/geoserver/rest", server.url());
        let client = LayerClient::new(Arc::new(Connection::new(&url, "admin", "geoserver")));
        (server, client)
    }

    #[test]
    fn test_spec_defaults() {
        let body = LayerSpec::new("tiger_roads").to_body("featureType");
        assert_eq!(
            body,
            json!({"featureType": {
                "name": "tiger_roads",
                "nativeName": "tiger_roads",
                "title": "tiger_roads",
                "srs": "EPSG:4326",
                "enabled": true
            }})
        );
    }

    #[test]
    fn test_spec_optional_fields() {
        let body = LayerSpec::new("roads")
            .with_name("highways")
            .with_abstract("Main roads")
            .with_native_bounding_box(world_bbox())
            .to_body("wmsLayer");
        assert_eq!(body["wmsLayer"]["title"], "highways");
        assert_eq!(body["wmsLayer"]["abstract"], "Main roads");
        assert_eq!(body["wmsLayer"]["nativeBoundingBox"]["crs"], "EPSG:4326");
    }

    #[test]
    fn test_time_metadata() {
        let time = TimeDimension {
            presentation: Presentation::DiscreteInterval,
            resolution: Some(3_600_000),
            default_value: DefaultValueStrategy::Nearest,
            acceptable_interval: Some("PT30M".to_string()),
            ..TimeDimension::default()
        };
        let metadata = time.to_metadata(Some("timestamp"));
        let info = &metadata["entry"][0]["dimensionInfo"];
        assert_eq!(metadata["entry"][0]["@key"], "time");
        assert_eq!(info["presentation"], "DISCRETE_INTERVAL");
        assert_eq!(info["defaultValue"]["strategy"], "NEAREST");
        assert_eq!(info["attribute"], "timestamp");
        assert_eq!(info["resolution"], 3_600_000);
    }

    #[tokio::test]
    async fn test_get_layer() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/geoserver/rest/layers/topp:states.json")
            .with_status(200)
            .with_body(r#"{"layer":{"name":"states","type":"VECTOR",
                "defaultStyle":{"name":"population","href":"x"},
                "styles":{"@class":"linked-hash-set","style":[{"name":"pophatch"},{"name":"polygon"}]},
                "attribution":{"logoWidth":0,"logoHeight":0},
                "dateCreated":"2023-01-01"}}"#)
            .create_async()
            .await;

        let layer = client.get("topp", "states").await.unwrap().unwrap();
        assert_eq!(layer.layer_type.as_deref(), Some("VECTOR"));
        assert_eq!(layer.default_style.unwrap().name, "population");
        assert_eq!(layer.styles.len(), 2);
        assert_eq!(layer.attribution, Some(Attribution::default()));
        assert!(layer.extra.contains_key("dateCreated"));
    }

    #[tokio::test]
    async fn test_publish_feature_type() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("POST", "/geoserver/rest/workspaces/osm/datastores/pg/featuretypes")
            .match_body(Matcher::PartialJson(json!({
                "featureType": {"name": "roads", "srs": "EPSG:3857"}
            })))
            .with_status(201)
            .create_async()
            .await;

        client
            .publish_feature_type("osm", "pg", &LayerSpec::new("roads").with_srs("EPSG:3857"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_publish_wms_layer() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("POST", "/geoserver/rest/workspaces/ows/wmsstores/demis/wmslayers")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"wmsLayer": {
                "name": "countries",
                "nativeName": "Countries",
                "title": "World countries",
                "srs": "EPSG:4326",
                "enabled": true
            }})))
            .with_status(201)
            .create_async()
            .await;

        let spec = LayerSpec::new("Countries")
            .with_name("countries")
            .with_title("World countries");
        client.publish_wms_layer("ows", "demis", &spec).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_publish_db_raster() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("POST", "/geoserver/rest/workspaces/raster/coveragestores/pgraster/coverages")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"coverage": {
                "name": "elevation",
                "nativeName": "elevation",
                "title": "elevation",
                "srs": "EPSG:3857",
                "enabled": false,
                "nativeBoundingBox": {
                    "minx": -180.0, "maxx": 180.0, "miny": -90.0, "maxy": 90.0, "crs": "EPSG:4326"
                }
            }})))
            .with_status(201)
            .create_async()
            .await;

        let spec = LayerSpec::new("elevation")
            .with_srs("EPSG:3857")
            .with_enabled(false)
            .with_native_bounding_box(world_bbox());
        client.publish_db_raster("raster", "pgraster", &spec).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_publish_rejects_other_success_status() {
        let (mut server, client) = setup().await;
        server
            .mock("POST", "/geoserver/rest/workspaces/raster/coveragestores/pgraster/coverages")
            .with_status(200)
            .create_async()
            .await;

        let err = client
            .publish_db_raster("raster", "pgraster", &LayerSpec::new("elevation"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { .. }));
    }

    #[tokio::test]
    async fn test_modify_attribution_missing_property_sends_nothing() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/geoserver/rest/layers/topp:states.json")
            .with_status(200)
            .with_body(r#"{"layer":{"name":"states","type":"VECTOR"}}"#)
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/geoserver/rest/layers/topp:states.json")
            .expect(0)
            .create_async()
            .await;

        let err = client
            .modify_attribution("topp", "states", Some("Census"), None)
            .await
            .unwrap_err();

        put.assert_async().await;
        assert_eq!(err.to_string(), "layer misses the property 'attribution'");
    }

    #[tokio::test]
    async fn test_modify_attribution_writes_back() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/geoserver/rest/layers/topp:states.json")
            .with_status(200)
            .with_body(
                r#"{"layer":{"name":"states","attribution":{"logoWidth":0,"logoHeight":0}}}"#,
            )
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/geoserver/rest/layers/topp:states.json")
            .match_body(Matcher::PartialJson(json!({
                "layer": {
                    "name": "states",
                    "attribution": {"title": "Census", "href": "https://census.gov", "logoWidth": 0}
                }
            })))
            .with_status(200)
            .create_async()
            .await;

        client
            .modify_attribution("topp", "states", Some("Census"), Some("https://census.gov"))
            .await
            .unwrap();
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_modify_attribution_absent_layer() {
        let (mut server, client) = setup().await;
        server
            .mock("GET", "/geoserver/rest/layers/topp:nope.json")
            .with_status(404)
            .create_async()
            .await;
        server
            .mock("GET", "/geoserver/rest/about/version.json")
            .with_status(200)
            .with_body(ALIVE)
            .create_async()
            .await;

        let err = client.modify_attribution("topp", "nope", Some("x"), None).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rename_coverage_bands() {
        let (mut server, client) = setup().await;
        let path = "/geoserver/rest/workspaces/sf/coveragestores/sat/coverages/rgb.json";
        server
            .mock("GET", path)
            .with_status(200)
            .with_body(r#"{"coverage":{"name":"rgb","dimensions":{"coverageDimension":[
                {"name":"GRAY_INDEX"},{"name":"GRAY_INDEX_1"},{"name":"GRAY_INDEX_2"}]}}}"#)
            .create_async()
            .await;
        let put = server
            .mock("PUT", path)
            .match_body(Matcher::PartialJson(json!({
                "coverage": {"dimensions": {"coverageDimension": [
                    {"name": "red"}, {"name": "green"}, {"name": "blue"}
                ]}}
            })))
            .with_status(200)
            .create_async()
            .await;

        client
            .rename_coverage_bands("sf", "sat", "rgb", &["red", "green", "blue"])
            .await
            .unwrap();
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_rename_coverage_bands_count_mismatch() {
        let (mut server, client) = setup().await;
        let path = "/geoserver/rest/workspaces/sf/coveragestores/dem/coverages/dem.json";
        server
            .mock("GET", path)
            .with_status(200)
            .with_body(
                r#"{"coverage":{"name":"dem","dimensions":{"coverageDimension":{"name":"GRAY_INDEX"}}}}"#,
            )
            .create_async()
            .await;
        let put = server.mock("PUT", path).expect(0).create_async().await;

        let err = client
            .rename_coverage_bands("sf", "dem", "dem", &["height", "extra"])
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_enable_time_feature_type() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("PUT", "/geoserver/rest/workspaces/ws/datastores/pg/featuretypes/obs.json")
            .match_body(Matcher::Json(json!({"featureType": {"metadata": {"entry": [
                {"@key": "time", "dimensionInfo": {
                    "enabled": true,
                    "attribute": "observed_at",
                    "presentation": "LIST",
                    "units": "ISO8601",
                    "defaultValue": {"strategy": "MAXIMUM"},
                    "nearestMatchEnabled": false,
                    "rawNearestMatchEnabled": false
                }}
            ]}}})))
            .with_status(200)
            .create_async()
            .await;

        client
            .enable_time_feature_type(
                "ws",
                "pg",
                "obs",
                "observed_at",
                &TimeDimension::default(),
            )
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_enable_time_coverage() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("PUT", "/geoserver/rest/workspaces/met/coveragestores/temp/coverages/t2m.json")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"coverage": {"metadata": {"entry": [
                {"@key": "time", "dimensionInfo": {
                    "enabled": true,
                    "presentation": "DISCRETE_INTERVAL",
                    "resolution": 3_600_000,
                    "units": "ISO8601",
                    "defaultValue": {"strategy": "NEAREST"},
                    "nearestMatchEnabled": true,
                    "rawNearestMatchEnabled": false,
                    "acceptableInterval": "PT30M"
                }}
            ]}}})))
            .with_status(200)
            .create_async()
            .await;

        let time = TimeDimension {
            presentation: Presentation::DiscreteInterval,
            resolution: Some(3_600_000),
            default_value: DefaultValueStrategy::Nearest,
            nearest_match_enabled: true,
            acceptable_interval: Some("PT30M".to_string()),
            ..TimeDimension::default()
        };
        client
            .enable_time_coverage("met", "temp", "t2m", &time)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_feature_type() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock(
                "DELETE",
                Matcher::Regex(
                    r"^/geoserver/rest/workspaces/ws/datastores/pg/featuretypes/obs(\?.*)?$"
                        .to_string(),
                ),
            )
            .match_query(Matcher::UrlEncoded("recurse".into(), "true".into()))
            .with_status(200)
            .create_async()
            .await;

        client.delete_feature_type("ws", "pg", "obs", true).await.unwrap();
        mock.assert_async().await;
    }
}
