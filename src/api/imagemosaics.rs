//
//  geoserver-rest
//  api/imagemosaics.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Image Mosaic Granules
//!
//! An image mosaic coverage store indexes many raster files ("granules").
//! This module reads that index and adds or removes granules.
//!
//! ## Two-Phase Remote Add
//!
//! GeoServer accepts a remote granule asynchronously (202) and harvests it
//! later. Adding and confirming are therefore two separate calls:
//!
//! ```text
//! add_granule_by_remote_file  ──POST remote.imagemosaic──▶ 202 Accepted
//!            ⋮  (harvest runs on the server)
//! verify_granule_present      ──GET index/granules.json──▶ listed? true/false
//! ```
//!
//! A `false` from the second phase right after the first may only mean the
//! harvest has not finished yet. Callers decide whether and how often to
//! check again; nothing here polls.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::client::{Connection, Expectation};
use super::common::ApiError;

/// The granule index of a mosaic, as a GeoJSON feature collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GranuleCollection {
    /// The indexed granules.
    #[serde(default)]
    pub features: Vec<Granule>,
}

/// One indexed granule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Granule {
    /// Feature id in the index, e.g. `mosaic.1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Index attributes: `location`, time and elevation columns, ...
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Granule {
    /// The file or URL the granule was read from.
    pub fn location(&self) -> Option<&str> {
        self.properties.get("location").and_then(Value::as_str)
    }
}

impl GranuleCollection {
    /// True when a granule with exactly this location is indexed.
    pub fn contains_location(&self, location: &str) -> bool {
        self.features.iter().any(|g| g.location() == Some(location))
    }
}

/// Client for image mosaic granules.
#[derive(Debug, Clone)]
pub struct ImageMosaicClient {
    connection: Arc<Connection>,
}

impl ImageMosaicClient {
    /// Creates a new image mosaic client over a shared connection.
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Reads the granule index of a mosaic coverage.
    pub async fn get_granules(
        &self,
        workspace: &str,
        coverage_store: &str,
        coverage: &str,
    ) -> Result<GranuleCollection, ApiError> {
        let path = format!("{}.json", granules_path(workspace, coverage_store, coverage));
        self.connection.get_json(&path).await
    }

    /// Harvests every granule found in a directory on the server.
    pub async fn harvest_granules(
        &self,
        workspace: &str,
        coverage_store: &str,
        server_dir: &str,
    ) -> Result<String, ApiError> {
        self.post_location(
            workspace,
            coverage_store,
            "external",
            server_dir,
            Expectation::success(),
        )
        .await
    }

    /// Adds one granule from a file already on the server.
    pub async fn add_granule_by_server_file(
        &self,
        workspace: &str,
        coverage_store: &str,
        server_file: &str,
    ) -> Result<(), ApiError> {
        self.post_location(
            workspace,
            coverage_store,
            "external",
            server_file,
            Expectation::status(StatusCode::ACCEPTED),
        )
        .await?;
        Ok(())
    }

    /// Phase one of a remote add: asks GeoServer to fetch a granule by URL.
    ///
    /// Success (202) means the request was accepted, not that the granule is
    /// indexed. Confirm with [`verify_granule_present`](Self::verify_granule_present),
    /// keeping in mind the harvest may still be running in between.
    pub async fn add_granule_by_remote_file(
        &self,
        workspace: &str,
        coverage_store: &str,
        url: &str,
    ) -> Result<(), ApiError> {
        self.post_location(
            workspace,
            coverage_store,
            "remote",
            url,
            Expectation::status(StatusCode::ACCEPTED),
        )
        .await?;
        Ok(())
    }

    /// Phase two of a remote add: checks whether `location` is indexed.
    ///
    /// A `false` shortly after
    /// [`add_granule_by_remote_file`](Self::add_granule_by_remote_file) may
    /// only mean the harvest has not completed yet.
    pub async fn verify_granule_present(
        &self,
        workspace: &str,
        coverage_store: &str,
        coverage: &str,
        location: &str,
    ) -> Result<bool, ApiError> {
        let granules = self.get_granules(workspace, coverage_store, coverage).await?;
        Ok(granules.contains_location(location))
    }

    /// Removes the granule read from `location`.
    pub async fn delete_single_granule(
        &self,
        workspace: &str,
        coverage_store: &str,
        coverage: &str,
        location: &str,
    ) -> Result<(), ApiError> {
        let filter = format!("location='{location}'");
        self.connection
            .send_empty(
                Method::DELETE,
                &format!("{}.xml", granules_path(workspace, coverage_store, coverage)),
                &[("filter", filter.as_str())],
                &Expectation::success(),
            )
            .await
    }

    async fn post_location(
        &self,
        workspace: &str,
        coverage_store: &str,
        method: &str,
        location: &str,
        expect: Expectation,
    ) -> Result<String, ApiError> {
        let path =
            format!("workspaces/{workspace}/coveragestores/{coverage_store}/{method}.imagemosaic");
        self.connection
            .send_text(Method::POST, &path, &[], "text/plain", location, &expect)
            .await
    }
}

fn granules_path(workspace: &str, coverage_store: &str, coverage: &str) -> String {
    format!(
        "workspaces/{workspace}/coveragestores/{coverage_store}/coverages/{coverage}/index/granules"
    )
}
