//
//  geoserver-rest
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # GeoServer REST Library
//!
//! A typed async client for the administrative REST API of GeoServer,
//! plus the `gsrc` operator CLI built on top of it.
//!
//! ## Overview
//!
//! GeoServer exposes its catalog (workspaces, stores, layers, styles, ...)
//! and its configuration through a REST API under `/geoserver/rest/`. This
//! library wraps that API in one sub-client per resource family, all sharing
//! a single connection context.
//!
//! ## Module Structure
//!
//! - [`api`]: The connection, error type and every sub-client
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Configuration file for the CLI
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use geoserver_rest::GeoServerRestClient;
//!
//! # async fn example() -> Result<(), geoserver_rest::ApiError> {
//! let gs = GeoServerRestClient::new("http://localhost:8080/geoserver/rest/", "admin", "geoserver");
//!
//! if gs.exists().await {
//!     for ws in gs.workspaces().get_all().await?.workspaces.items() {
//!         println!("{}", ws.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Absence
//!
//! Reads of a single named resource return `Ok(None)` when GeoServer is
//! reachable and the resource does not exist. An `Err` means GeoServer could
//! not be reached or the request failed for another reason.

/// The GeoServer REST API client.
///
/// See [`GeoServerRestClient`] for the entry point.
pub mod api;

/// Command-line interface definitions.
///
/// Contains the `gsrc` commands and arguments, defined using the clap derive API.
pub mod cli;

/// Configuration file management.
///
/// Stores the default connection of the CLI in platform-specific locations:
/// - Linux: `~/.config/gsrc/config.toml`
/// - macOS: `~/Library/Application Support/gsrc/config.toml`
/// - Windows: `%APPDATA%\gsrc\config.toml`
///
/// The library itself never reads this file.
pub mod config;

/// Output formatting for the CLI (table and JSON).
pub mod output;

/// Re-export of the facade owning every sub-client.
pub use api::GeoServerRestClient;

/// Re-export of the library error type.
pub use api::ApiError;

pub use api::{Collection, Connection};

/// Re-export of the CLI configuration struct.
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "gsrc";

/// Application version constant.
///
/// Derived from Cargo.toml at compile time. Also sent as part of the
/// `User-Agent` header.
///
/// # Example
///
/// ```rust
/// use geoserver_rest::VERSION;
///
/// println!("gsrc version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Allow scripts to detect the outcome of a `gsrc` invocation.
///
/// # Example
///
/// ```rust,no_run
/// use geoserver_rest::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::NOT_FOUND);
/// ```
pub mod exit_codes {
    /// The command completed without errors.
    pub const SUCCESS: i32 = 0;

    /// An error occurred. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// The named resource does not exist on a reachable GeoServer.
    pub const NOT_FOUND: i32 = 8;
}
