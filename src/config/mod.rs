//
//  geoserver-rest
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! The `gsrc` CLI keeps its default connection in a TOML file stored in a
//! platform-specific directory. The library never reads it; a
//! [`GeoServerRestClient`](crate::GeoServerRestClient) always receives its
//! URL and credentials explicitly.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/gsrc/config.toml`
//! - **macOS**: `~/Library/Application Support/gsrc/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\gsrc\config.toml`
//!
//! The `GSRC_CONFIG` environment variable overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [connection]
//! url = "https://maps.example.com/geoserver/rest/"
//! user = "admin"
//! password = "s3cret"
//! ```
//!
//! ## Resolution Order
//!
//! For each of `url`, `user` and `password` the CLI takes the first value
//! found in:
//!
//! 1. the command-line flag or its environment variable (`GEOSERVER_URL`,
//!    `GEOSERVER_USER`, `GEOSERVER_PASSWORD`)
//! 2. this file
//! 3. the built-in default (`http://localhost:8080/geoserver/rest/`,
//!    `admin`, `geoserver`)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV: &str = "GSRC_CONFIG";

/// REST endpoint of a stock local GeoServer.
pub const DEFAULT_URL: &str = "http://localhost:8080/geoserver/rest/";

/// Administrator name of a stock GeoServer.
pub const DEFAULT_USER: &str = "admin";

/// Administrator password of a stock GeoServer.
pub const DEFAULT_PASSWORD: &str = "geoserver";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const VALID_KEYS: &[&str] = &["url", "user", "password"];

/// Configuration container for the CLI.
///
/// # Examples
///
/// ```rust
/// use geoserver_rest::config::Config;
///
/// let config = Config::default();
/// assert!(config.connection.url.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default connection used when no flag or environment variable is given.
    #[serde(default)]
    pub connection: ConnectionConfig,
}

/// The `[connection]` table. Unset fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A fully resolved connection, ready to build a client from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConnection {
    pub url: String,
    pub user: String,
    pub password: String,
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or is not valid TOML.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Invalid configuration in {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    ///
    /// The whole file is overwritten.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a configuration value by key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geoserver_rest::config::Config;
    ///
    /// let mut config = Config::default();
    /// assert_eq!(config.get("url"), None);
    /// assert!(config.set("url", "http://gs:8080/geoserver/rest".to_string()));
    /// assert_eq!(config.get("url").as_deref(), Some("http://gs:8080/geoserver/rest"));
    /// assert_eq!(config.get("unknown_key"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "url" => self.connection.url.clone(),
            "user" => self.connection.user.clone(),
            "password" => self.connection.password.clone(),
            _ => None,
        }
    }

    /// Sets a configuration value by key.
    ///
    /// Returns `false` for an unknown key. Changes are only persisted when
    /// [`Config::save`] is called.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        let slot = match key {
            "url" => &mut self.connection.url,
            "user" => &mut self.connection.user,
            "password" => &mut self.connection.password,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Combines explicit values with this file and the defaults.
    ///
    /// Each `Some` argument wins over the file, which wins over the default.
    pub fn resolve(
        &self,
        url: Option<&str>,
        user: Option<&str>,
        password: Option<&str>,
    ) -> ResolvedConnection {
        fn pick(explicit: Option<&str>, stored: &Option<String>, default: &str) -> String {
            explicit
                .or(stored.as_deref())
                .unwrap_or(default)
                .to_string()
        }

        ResolvedConnection {
            url: pick(url, &self.connection.url, DEFAULT_URL),
            user: pick(user, &self.connection.user, DEFAULT_USER),
            password: pick(password, &self.connection.password, DEFAULT_PASSWORD),
        }
    }
}
