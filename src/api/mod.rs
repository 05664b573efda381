//
//  geoserver-rest
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides typed access to the GeoServer administrative REST API.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: Connection context (base URL, credentials) and response interpreter
//! - [`common`]: Shared types (errors, collection envelopes, the lookup helper)
//! - [`about`]: Version information and the liveness check
//! - One module per resource family: [`workspaces`], [`namespaces`],
//!   [`datastores`], [`layers`], [`layergroups`], [`styles`], [`security`],
//!   [`settings`], [`imagemosaics`], [`reset_reload`]
//! - [`GeoServerRestClient`]: facade owning the connection and every sub-client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geoserver_rest::api::GeoServerRestClient;
//!
//! # async fn example() -> Result<(), geoserver_rest::api::ApiError> {
//! let gs = GeoServerRestClient::new("http://localhost:8080/geoserver/rest/", "admin", "geoserver");
//! let layers = gs.layers().get_all().await?;
//! println!("{} layers", layers.layers.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Absence vs Failure
//!
//! Single-resource reads return `Result<Option<T>, ApiError>`:
//!
//! - `Ok(Some(value))`: the resource exists
//! - `Ok(None)`: GeoServer is reachable and the resource does not exist
//! - `Err(e)`: the request failed and GeoServer does not answer the liveness check,
//!   or the failure was not a status error at all

/// Connection context, per-operation expectations and request helpers.
pub mod client;

/// Common types shared by every sub-client.
pub mod common;

/// Version information and liveness.
pub mod about;

pub mod datastores;
pub mod imagemosaics;
pub mod layergroups;
pub mod layers;
pub mod namespaces;
pub mod reset_reload;
pub mod security;
pub mod settings;
pub mod styles;
pub mod workspaces;

mod rest_client;

pub use client::Connection;
pub use common::{ApiError, Collection, Lookup};
pub use rest_client::GeoServerRestClient;
