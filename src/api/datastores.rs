//
//  geoserver-rest
//  api/datastores.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Store Operations
//!
//! GeoServer distinguishes four store kinds, each with its own collection
//! inside a workspace:
//!
//! | Kind | Collection | List key | Element key |
//! |------|------------|----------|-------------|
//! | Vector data | `datastores` | `dataStores` | `dataStore` |
//! | Raster data | `coveragestores` | `coverageStores` | `coverageStore` |
//! | Cascaded WMS | `wmsstores` | `wmsStores` | `wmsStore` |
//! | Cascaded WMTS | `wmtsstores` | `wmtsStores` | `wmtsStore` |
//!
//! File based stores (GeoTIFF, image mosaic archives, GeoPackage) are created
//! by uploading the file. The upload is streamed from disk with an explicit
//! `Content-Length`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use geoserver_rest::api::client::Connection;
//! use geoserver_rest::api::datastores::DatastoreClient;
//!
//! # async fn example() -> Result<(), geoserver_rest::ApiError> {
//! let connection = Arc::new(Connection::new("http://localhost:8080/geoserver/rest", "admin", "geoserver"));
//! let stores = DatastoreClient::new(connection);
//!
//! stores
//!     .create_geotiff_from_file("sf", "dem", "sfdem", Some("San Francisco DEM"), Path::new("sfdem.tif"))
//!     .await?;
//! for store in stores.get_coverage_stores("sf").await?.iter() {
//!     println!("{}", store.name);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::client::{Connection, Expectation};
use super::common::{find_one, flag, ApiError, Collection, Resource, ResourceRef};

const DEPENDENT_OBJECTS: &str = "there are dependent objects to this store; \
     delete them first or retry with recursive deletion enabled";

/// The four kinds of store a workspace can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Vector data stores
    Data,
    /// Raster coverage stores
    Coverage,
    /// Cascaded WMS stores
    Wms,
    /// Cascaded WMTS stores
    Wmts,
}

impl StoreKind {
    /// The URL segment of the collection, e.g. `datastores`.
    pub fn collection(self) -> &'static str {
        match self {
            Self::Data => "datastores",
            Self::Coverage => "coveragestores",
            Self::Wms => "wmsstores",
            Self::Wmts => "wmtsstores",
        }
    }

    /// The outer JSON key of a list response, e.g. `dataStores`.
    pub fn list_key(self) -> &'static str {
        match self {
            Self::Data => "dataStores",
            Self::Coverage => "coverageStores",
            Self::Wms => "wmsStores",
            Self::Wmts => "wmtsStores",
        }
    }

    /// The JSON key of a single store, e.g. `dataStore`.
    pub fn item_key(self) -> &'static str {
        match self {
            Self::Data => "dataStore",
            Self::Coverage => "coverageStore",
            Self::Wms => "wmsStore",
            Self::Wmts => "wmtsStore",
        }
    }
}

/// Connection parameters of a PostGIS data store.
///
/// # Example
///
/// ```rust
/// use geoserver_rest::api::datastores::PostgisConnection;
///
/// let pg = PostgisConnection::new("localhost", "gis", "postgres", "secret")
///     .with_schema("osm")
///     .with_port(5433);
/// assert_eq!(pg.port, 5433);
/// assert_eq!(pg.schema, "osm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgisConnection {
    /// Database host name.
    pub host: String,
    /// Database port, 5432 by default.
    pub port: u16,
    /// Database name.
    pub database: String,
    /// Schema holding the tables, `public` by default.
    pub schema: String,
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: String,
    /// Publish primary key columns as attributes.
    pub expose_primary_keys: bool,
}

impl PostgisConnection {
    /// Creates connection parameters with port 5432 and schema `public`.
    pub fn new(host: &str, database: &str, user: &str, password: &str) -> Self {
        Self {
            host: host.to_string(),
            port: 5432,
            database: database.to_string(),
            schema: "public".to_string(),
            user: user.to_string(),
            password: password.to_string(),
            expose_primary_keys: false,
        }
    }

    /// Overrides the port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Overrides the schema.
    #[must_use]
    pub fn with_schema(mut self, schema: &str) -> Self {
        self.schema = schema.to_string();
        self
    }

    /// Sets whether primary key columns are published.
    #[must_use]
    pub fn with_exposed_primary_keys(mut self, expose: bool) -> Self {
        self.expose_primary_keys = expose;
        self
    }

    fn entries(&self, namespace_uri: &str) -> Value {
        json!([
            { "@key": "dbtype", "$": "postgis" },
            { "@key": "host", "$": self.host },
            { "@key": "port", "$": self.port.to_string() },
            { "@key": "database", "$": self.database },
            { "@key": "schema", "$": self.schema },
            { "@key": "user", "$": self.user },
            { "@key": "passwd", "$": self.password },
            { "@key": "namespace", "$": namespace_uri },
            { "@key": "Expose primary keys", "$": flag(self.expose_primary_keys) },
        ])
    }
}

/// Response of `coverages.json?list=all`.
#[derive(Debug, Clone, Default, Deserialize)]
struct CoverageNameList {
    #[serde(default)]
    list: Collection<String>,
}

/// Client for the store collections of a workspace.
#[derive(Debug, Clone)]
pub struct DatastoreClient {
    connection: Arc<Connection>,
}

impl DatastoreClient {
    /// Creates a new store client over a shared connection.
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Lists the stores of one kind in a workspace.
    ///
    /// # Returns
    ///
    /// [`Collection::Empty`] when the workspace holds no store of that kind.
    pub async fn get_stores(
        &self,
        workspace: &str,
        kind: StoreKind,
    ) -> Result<Collection<ResourceRef>, ApiError> {
        let path = format!("workspaces/{workspace}/{}.json", kind.collection());
        let mut value: Value = self.connection.get_json(&path).await?;
        let inner = value
            .get_mut(kind.list_key())
            .map(Value::take)
            .unwrap_or(Value::Null);
        Ok(Collection::from_value(inner)?)
    }

    /// Lists the vector data stores of a workspace.
    pub async fn get_data_stores(
        &self,
        workspace: &str,
    ) -> Result<Collection<ResourceRef>, ApiError> {
        self.get_stores(workspace, StoreKind::Data).await
    }

    /// Lists the coverage stores of a workspace.
    pub async fn get_coverage_stores(
        &self,
        workspace: &str,
    ) -> Result<Collection<ResourceRef>, ApiError> {
        self.get_stores(workspace, StoreKind::Coverage).await
    }

    /// Lists the WMS stores of a workspace.
    pub async fn get_wms_stores(
        &self,
        workspace: &str,
    ) -> Result<Collection<ResourceRef>, ApiError> {
        self.get_stores(workspace, StoreKind::Wms).await
    }

    /// Lists the WMTS stores of a workspace.
    pub async fn get_wmts_stores(
        &self,
        workspace: &str,
    ) -> Result<Collection<ResourceRef>, ApiError> {
        self.get_stores(workspace, StoreKind::Wmts).await
    }

    /// Fetches one store, `Ok(None)` when it does not exist.
    pub async fn get_store(
        &self,
        workspace: &str,
        name: &str,
        kind: StoreKind,
    ) -> Result<Option<Resource>, ApiError> {
        let path = format!("workspaces/{workspace}/{}/{name}.json", kind.collection());
        find_one(&self.connection, &path, kind.item_key()).await
    }

    /// Fetches one vector data store.
    pub async fn get_data_store(
        &self,
        workspace: &str,
        name: &str,
    ) -> Result<Option<Resource>, ApiError> {
        self.get_store(workspace, name, StoreKind::Data).await
    }

    /// Fetches one coverage store.
    pub async fn get_coverage_store(
        &self,
        workspace: &str,
        name: &str,
    ) -> Result<Option<Resource>, ApiError> {
        self.get_store(workspace, name, StoreKind::Coverage).await
    }

    /// Fetches one WMS store.
    pub async fn get_wms_store(
        &self,
        workspace: &str,
        name: &str,
    ) -> Result<Option<Resource>, ApiError> {
        self.get_store(workspace, name, StoreKind::Wms).await
    }

    /// Fetches one WMTS store.
    pub async fn get_wmts_store(
        &self,
        workspace: &str,
        name: &str,
    ) -> Result<Option<Resource>, ApiError> {
        self.get_store(workspace, name, StoreKind::Wmts).await
    }

    /// Uploads a GeoTIFF, creating the coverage store and publishing it.
    ///
    /// # Parameters
    ///
    /// * `workspace` - Target workspace
    /// * `coverage_store` - Name of the new coverage store
    /// * `layer_name` - Published name of the coverage
    /// * `layer_title` - Published title, defaults to `layer_name`
    /// * `file` - Local GeoTIFF file
    pub async fn create_geotiff_from_file(
        &self,
        workspace: &str,
        coverage_store: &str,
        layer_name: &str,
        layer_title: Option<&str>,
        file: &Path,
    ) -> Result<String, ApiError> {
        let title = layer_title.unwrap_or(layer_name);
        let path = format!("workspaces/{workspace}/coveragestores/{coverage_store}/file.geotiff");
        self.connection
            .send_file(
                Method::PUT,
                &path,
                &[("filename", title), ("coverageName", layer_name)],
                "image/tiff",
                file,
                &Expectation::status(StatusCode::CREATED),
            )
            .await
    }

    /// Creates a PostGIS data store.
    ///
    /// `namespace_uri` must be the URI of the workspace's namespace.
    pub async fn create_postgis_store(
        &self,
        workspace: &str,
        namespace_uri: &str,
        name: &str,
        connection: &PostgisConnection,
    ) -> Result<String, ApiError> {
        let body = json!({
            "dataStore": {
                "name": name,
                "type": "PostGIS",
                "enabled": true,
                "workspace": { "name": workspace },
                "connectionParameters": { "entry": connection.entries(namespace_uri) }
            }
        });
        self.create_store(workspace, StoreKind::Data, &body).await
    }

    /// Uploads a zipped image mosaic and creates the coverage store.
    ///
    /// With `auto_configure` off GeoServer only creates the store; no coverage
    /// is published until [`init_coverage_store`](Self::init_coverage_store)
    /// is called.
    pub async fn create_image_mosaic_store(
        &self,
        workspace: &str,
        coverage_store: &str,
        zip_archive: &Path,
        auto_configure: bool,
    ) -> Result<String, ApiError> {
        let path =
            format!("workspaces/{workspace}/coveragestores/{coverage_store}/file.imagemosaic");
        let query: &[(&str, &str)] = if auto_configure {
            &[]
        } else {
            &[("configure", "none")]
        };
        self.connection
            .send_file(
                Method::PUT,
                &path,
                query,
                "application/zip",
                zip_archive,
                &Expectation::status(StatusCode::CREATED),
            )
            .await
    }

    /// Creates a store cascading a remote WMS.
    pub async fn create_wms_store(
        &self,
        workspace: &str,
        name: &str,
        capabilities_url: &str,
    ) -> Result<String, ApiError> {
        let body = json!({
            "wmsStore": { "name": name, "type": "WMS", "capabilitiesURL": capabilities_url }
        });
        self.create_store(workspace, StoreKind::Wms, &body).await
    }

    /// Creates a store cascading a remote WMTS.
    pub async fn create_wmts_store(
        &self,
        workspace: &str,
        name: &str,
        capabilities_url: &str,
    ) -> Result<String, ApiError> {
        let body = json!({
            "wmtsStore": { "name": name, "type": "WMTS", "capabilitiesURL": capabilities_url }
        });
        self.create_store(workspace, StoreKind::Wmts, &body).await
    }

    /// Creates a data store reading from a remote WFS.
    pub async fn create_wfs_store(
        &self,
        workspace: &str,
        name: &str,
        capabilities_url: &str,
        namespace_uri: &str,
    ) -> Result<String, ApiError> {
        let body = json!({
            "dataStore": {
                "name": name,
                "type": "Web Feature Server (NG)",
                "connectionParameters": {
                    "entry": [
                        {
                            "@key": "WFSDataStoreFactory:GET_CAPABILITIES_URL",
                            "$": capabilities_url
                        },
                        { "@key": "namespace", "$": namespace_uri }
                    ]
                }
            }
        });
        self.create_store(workspace, StoreKind::Data, &body).await
    }

    /// Uploads a GeoPackage and creates the data store.
    pub async fn create_gpkg_store(
        &self,
        workspace: &str,
        name: &str,
        gpkg: &Path,
    ) -> Result<String, ApiError> {
        let path = format!("workspaces/{workspace}/datastores/{name}/file.gpkg");
        self.connection
            .send_file(
                Method::PUT,
                &path,
                &[],
                "application/geopackage+sqlite3",
                gpkg,
                &Expectation::status(StatusCode::CREATED),
            )
            .await
    }

    /// Publishes the first coverage available in a coverage store.
    ///
    /// Used after [`create_image_mosaic_store`](Self::create_image_mosaic_store)
    /// with auto configuration disabled. Returns the name of the published
    /// coverage.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the store offers no coverage.
    pub async fn init_coverage_store(
        &self,
        workspace: &str,
        coverage_store: &str,
    ) -> Result<String, ApiError> {
        let path = format!("workspaces/{workspace}/coveragestores/{coverage_store}/coverages");
        let available: CoverageNameList = self
            .connection
            .get_json_with_query(&format!("{path}.json"), &[("list", "all")])
            .await?;

        let name = available
            .list
            .into_vec()
            .into_iter()
            .next()
            .ok_or_else(|| {
                ApiError::NotFound(format!("no coverage available in {workspace}:{coverage_store}"))
            })?;

        let body = json!({ "coverage": { "name": name, "nativeName": name } });
        self.connection
            .send_json(Method::POST, &path, &body, &Expectation::status(StatusCode::CREATED))
            .await?;
        Ok(name)
    }

    /// Deletes a vector data store.
    pub async fn delete_data_store(
        &self,
        workspace: &str,
        name: &str,
        recurse: bool,
    ) -> Result<(), ApiError> {
        self.delete_store(workspace, name, StoreKind::Data, recurse).await
    }

    /// Deletes a coverage store.
    pub async fn delete_coverage_store(
        &self,
        workspace: &str,
        name: &str,
        recurse: bool,
    ) -> Result<(), ApiError> {
        self.delete_store(workspace, name, StoreKind::Coverage, recurse).await
    }

    /// Deletes a store of any kind.
    ///
    /// # Errors
    ///
    /// `Rejected` with a message about dependent objects for 401, 403 and
    /// 409, which GeoServer returns when layers still use the store and
    /// `recurse` is off.
    pub async fn delete_store(
        &self,
        workspace: &str,
        name: &str,
        kind: StoreKind,
        recurse: bool,
    ) -> Result<(), ApiError> {
        let expect = Expectation::success()
            .hint(StatusCode::UNAUTHORIZED, DEPENDENT_OBJECTS)
            .hint(StatusCode::FORBIDDEN, DEPENDENT_OBJECTS)
            .hint(StatusCode::CONFLICT, DEPENDENT_OBJECTS);
        self.connection
            .send_empty(
                Method::DELETE,
                &format!("workspaces/{workspace}/{}/{name}", kind.collection()),
                &[("recurse", flag(recurse))],
                &expect,
            )
            .await
    }

    async fn create_store(
        &self,
        workspace: &str,
        kind: StoreKind,
        body: &Value,
    ) -> Result<String, ApiError> {
        let path = format!("workspaces/{workspace}/{}", kind.collection());
        self.connection
            .send_json(Method::POST, &path, body, &Expectation::status(StatusCode::CREATED))
            .await
    }
}
