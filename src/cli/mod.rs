//
//  geoserver-rest
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod config;
mod layer;
mod namespace;
pub mod server;
mod style;
mod workspace;

pub use config::ConfigCommand;
pub use layer::LayerCommand;
pub use namespace::NamespaceCommand;
pub use server::PurgeArgs;
pub use style::StyleCommand;
pub use workspace::WorkspaceCommand;

use clap::{Parser, Subcommand};

use crate::api::GeoServerRestClient;
use crate::config::{Config, ResolvedConnection};
use crate::output::{OutputFormat, OutputWriter};

/// GeoServer REST CLI - Administer GeoServer from the command line
#[derive(Parser, Debug)]
#[command(
    name = "gsrc",
    version,
    about = "Administer GeoServer from the command line",
    long_about = "gsrc is a CLI for the GeoServer REST API.\n\n\
                  It manages workspaces, namespaces, styles and layers, \
                  and resets or reloads the catalog.",
    propagate_version = true,
    after_help = "Use 'gsrc <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// GeoServer REST endpoint, e.g. http://localhost:8080/geoserver/rest/
    #[arg(long, global = true, env = "GEOSERVER_URL")]
    pub url: Option<String>,

    /// Administrator user name
    #[arg(long, short = 'u', global = true, env = "GEOSERVER_USER")]
    pub user: Option<String>,

    /// Administrator password
    #[arg(long, global = true, env = "GEOSERVER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Resolves the connection from flags, the config file and defaults.
    pub fn connection(&self) -> anyhow::Result<ResolvedConnection> {
        let config = Config::load()?;
        Ok(config.resolve(
            self.url.as_deref(),
            self.user.as_deref(),
            self.password.as_deref(),
        ))
    }

    /// Builds a client for the resolved connection.
    pub fn client(&self) -> anyhow::Result<GeoServerRestClient> {
        let resolved = self.connection()?;
        tracing::debug!(url = %resolved.url, user = %resolved.user, "connecting");
        Ok(GeoServerRestClient::new(&resolved.url, &resolved.user, &resolved.password))
    }

    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json)
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(self.format())
    }
}

/// A named resource is absent on a reachable GeoServer.
///
/// Mapped to [`crate::exit_codes::NOT_FOUND`] by the binary.
#[derive(Debug, thiserror::Error)]
#[error("{kind} '{name}' not found")]
pub struct ResourceNotFound {
    pub kind: &'static str,
    pub name: String,
}

impl ResourceNotFound {
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether GeoServer is reachable
    Exists,

    /// Manage workspaces
    #[command(visible_alias = "ws")]
    Workspace(WorkspaceCommand),

    /// Manage namespaces
    #[command(visible_alias = "ns")]
    Namespace(NamespaceCommand),

    /// Manage styles
    Style(StyleCommand),

    /// Inspect layers
    Layer(LayerCommand),

    /// Drop all store, raster and schema caches
    Reset,

    /// Reload catalog and configuration from disk
    Reload,

    /// Delete every workspace and every non-builtin global style
    Purge(PurgeArgs),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print client and GeoServer version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gsrc",
            "workspace",
            "list",
            "--json",
            "--url",
            "http://gs:8080/geoserver/rest",
        ])
        .unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.url.as_deref(), Some("http://gs:8080/geoserver/rest"));
        assert!(matches!(cli.command, Commands::Workspace(_)));
    }

    #[test]
    fn test_not_found_message() {
        let err = ResourceNotFound::new("workspace", "topp");
        assert_eq!(err.to_string(), "workspace 'topp' not found");
    }
}
