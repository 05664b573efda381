//
//  geoserver-rest
//  cli/namespace.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Namespace commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::namespaces::Namespace;
use crate::output::{format_bool, print_field, print_header, TableOutput, TableRow};

use super::{GlobalOptions, ResourceNotFound};

/// Manage namespaces
#[derive(Args, Debug)]
pub struct NamespaceCommand {
    #[command(subcommand)]
    pub command: NamespaceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NamespaceSubcommand {
    /// List namespaces
    #[command(visible_alias = "ls")]
    List,

    /// Show one namespace
    Get(PrefixArgs),

    /// Create a namespace (and its workspace)
    Create(CreateArgs),

    /// Delete a namespace
    #[command(visible_alias = "rm")]
    Delete(PrefixArgs),
}

#[derive(Args, Debug)]
pub struct PrefixArgs {
    /// Namespace prefix
    pub prefix: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Namespace prefix
    pub prefix: String,

    /// Namespace URI, e.g. http://example.com/topp
    pub uri: String,
}

#[derive(Debug, Serialize)]
struct NamespaceListItem {
    name: String,
}

impl TableRow for NamespaceListItem {
    const HEADERS: &'static [&'static str] = &["PREFIX"];

    fn cells(&self, _color: bool) -> Vec<String> {
        vec![self.name.clone()]
    }
}

impl TableOutput for Namespace {
    fn print_table(&self, color: bool) {
        print_header(&self.prefix);
        print_field("URI", &self.uri, color);
        print_field("Isolated", &format_bool(self.isolated, color), color);
    }
}

impl NamespaceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            NamespaceSubcommand::List => self.list(global).await,
            NamespaceSubcommand::Get(args) => self.get(args, global).await,
            NamespaceSubcommand::Create(args) => self.create(args, global).await,
            NamespaceSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let gs = global.client()?;
        let list = gs
            .namespaces()
            .get_all()
            .await
            .context("Failed to list namespaces")?;

        let items: Vec<NamespaceListItem> = list
            .namespaces
            .iter()
            .map(|r| NamespaceListItem { name: r.name.clone() })
            .collect();
        global.writer().write_list(&items, "No namespaces found.")
    }

    async fn get(&self, args: &PrefixArgs, global: &GlobalOptions) -> Result<()> {
        let gs = global.client()?;
        let namespace = gs
            .namespaces()
            .get(&args.prefix)
            .await
            .with_context(|| format!("Failed to fetch namespace '{}'", args.prefix))?
            .ok_or_else(|| ResourceNotFound::new("namespace", &args.prefix))?;

        global.writer().write(&namespace)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let gs = global.client()?;
        let created = gs
            .namespaces()
            .create(&args.prefix, &args.uri)
            .await
            .with_context(|| format!("Failed to create namespace '{}'", args.prefix))?;

        let writer = global.writer();
        if global.json {
            writer.write_raw(&serde_json::json!({ "created": created, "uri": args.uri }))?;
        }
        writer.write_success(&format!("Created namespace {created} ({})", args.uri));
        Ok(())
    }

    async fn delete(&self, args: &PrefixArgs, global: &GlobalOptions) -> Result<()> {
        let gs = global.client()?;
        gs.namespaces()
            .delete(&args.prefix)
            .await
            .with_context(|| format!("Failed to delete namespace '{}'", args.prefix))?;

        global
            .writer()
            .write_success(&format!("Deleted namespace {}", args.prefix));
        Ok(())
    }
}
