//
//  geoserver-rest
//  api/rest_client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! The [`GeoServerRestClient`] facade.

use std::sync::Arc;

use super::about::{AboutClient, VersionInfo};
use super::client::Connection;
use super::common::ApiError;
use super::datastores::DatastoreClient;
use super::imagemosaics::ImageMosaicClient;
use super::layergroups::LayerGroupClient;
use super::layers::LayerClient;
use super::namespaces::NamespaceClient;
use super::reset_reload::ResetReloadClient;
use super::security::SecurityClient;
use super::settings::SettingsClient;
use super::styles::StyleClient;
use super::workspaces::WorkspaceClient;

/// Entry point bundling one sub-client per resource family.
///
/// All sub-clients share a single immutable [`Connection`]. Cloning the
/// facade is cheap and clones share that connection.
///
/// # Example
///
/// ```rust,no_run
/// use geoserver_rest::GeoServerRestClient;
///
/// # async fn example() -> Result<(), geoserver_rest::ApiError> {
/// let gs = GeoServerRestClient::new("http://localhost:8080/geoserver/rest", "admin", "geoserver");
///
/// if !gs.exists().await {
///     eprintln!("GeoServer is not reachable at {}", gs.connection().base_url());
///     return Ok(());
/// }
///
/// gs.workspaces().create("demo").await?;
/// match gs.workspaces().get("demo").await? {
///     Some(ws) => println!("created {}", ws.name),
///     None => println!("not there after all"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeoServerRestClient {
    connection: Arc<Connection>,
    about: AboutClient,
    workspaces: WorkspaceClient,
    namespaces: NamespaceClient,
    datastores: DatastoreClient,
    layers: LayerClient,
    layergroups: LayerGroupClient,
    styles: StyleClient,
    security: SecurityClient,
    settings: SettingsClient,
    imagemosaics: ImageMosaicClient,
    reset_reload: ResetReloadClient,
}

impl GeoServerRestClient {
    /// Creates the facade for a GeoServer REST endpoint.
    ///
    /// No request is made; use [`exists`](Self::exists) to check the
    /// connection.
    pub fn new(url: &str, username: &str, password: &str) -> Self {
        Self::from_connection(Connection::new(url, username, password))
    }

    /// Creates the facade over a prepared connection.
    pub fn from_connection(connection: Connection) -> Self {
        let connection = Arc::new(connection);
        Self {
            about: AboutClient::new(Arc::clone(&connection)),
            workspaces: WorkspaceClient::new(Arc::clone(&connection)),
            namespaces: NamespaceClient::new(Arc::clone(&connection)),
            datastores: DatastoreClient::new(Arc::clone(&connection)),
            layers: LayerClient::new(Arc::clone(&connection)),
            layergroups: LayerGroupClient::new(Arc::clone(&connection)),
            styles: StyleClient::new(Arc::clone(&connection)),
            security: SecurityClient::new(Arc::clone(&connection)),
            settings: SettingsClient::new(Arc::clone(&connection)),
            imagemosaics: ImageMosaicClient::new(Arc::clone(&connection)),
            reset_reload: ResetReloadClient::new(Arc::clone(&connection)),
            connection,
        }
    }

    /// The shared connection context.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn about(&self) -> &AboutClient {
        &self.about
    }

    pub fn workspaces(&self) -> &WorkspaceClient {
        &self.workspaces
    }

    pub fn namespaces(&self) -> &NamespaceClient {
        &self.namespaces
    }

    pub fn datastores(&self) -> &DatastoreClient {
        &self.datastores
    }

    pub fn layers(&self) -> &LayerClient {
        &self.layers
    }

    pub fn layergroups(&self) -> &LayerGroupClient {
        &self.layergroups
    }

    pub fn styles(&self) -> &StyleClient {
        &self.styles
    }

    pub fn security(&self) -> &SecurityClient {
        &self.security
    }

    pub fn settings(&self) -> &SettingsClient {
        &self.settings
    }

    pub fn imagemosaics(&self) -> &ImageMosaicClient {
        &self.imagemosaics
    }

    pub fn reset_reload(&self) -> &ResetReloadClient {
        &self.reset_reload
    }

    /// Shortcut for [`AboutClient::exists`].
    pub async fn exists(&self) -> bool {
        self.about.exists().await
    }

    /// Shortcut for [`AboutClient::get_version`].
    pub async fn get_version(&self) -> Result<VersionInfo, ApiError> {
        self.about.get_version().await
    }
}
