//
//  geoserver-rest
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Show and change the default connection stored in the configuration file.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::config::{Config, VALID_KEYS};
use crate::output::print_field;

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show the effective connection (password masked)
    Show,

    /// Set a configuration value
    Set(SetArgs),

    /// Print the configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key: url, user or password
    pub key: String,

    /// Value to store
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Show => self.show(global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn show(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let resolved = config.resolve(
            global.url.as_deref(),
            global.user.as_deref(),
            global.password.as_deref(),
        );
        let masked = if resolved.password.is_empty() { "" } else { "********" };

        if global.json {
            let result = serde_json::json!({
                "url": resolved.url,
                "user": resolved.user,
                "password": masked,
                "path": Config::config_path()?,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            let color = console::colors_enabled();
            print_field("url", &resolved.url, color);
            print_field("user", &resolved.user, color);
            print_field("password", masked, color);
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        if !config.set(&args.key, args.value.clone()) {
            bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                args.key,
                VALID_KEYS.join(", ")
            );
        }
        config.save()?;

        if !global.json {
            println!("Set {} in {}", args.key, Config::config_path()?.display());
        }
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;
        if global.json {
            println!("{}", serde_json::json!({ "path": path }));
        } else {
            println!("{}", path.display());
        }
        Ok(())
    }
}
