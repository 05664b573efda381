//
//  geoserver-rest
//  cli/workspace.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Workspace commands
//!
//! Workspaces group stores, layers and styles. Each workspace has a
//! namespace with the same prefix.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::common::ResourceRef;
use crate::api::workspaces::Workspace;
use crate::output::{format_bool, print_field, print_header, TableOutput, TableRow};

use super::{GlobalOptions, ResourceNotFound};

/// Manage workspaces
#[derive(Args, Debug)]
pub struct WorkspaceCommand {
    #[command(subcommand)]
    pub command: WorkspaceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum WorkspaceSubcommand {
    /// List workspaces
    #[command(visible_alias = "ls")]
    List,

    /// Show one workspace
    Get(NameArgs),

    /// Create a workspace
    Create(NameArgs),

    /// Delete a workspace
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct NameArgs {
    /// Workspace name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Workspace name
    pub name: String,

    /// Also delete every store, layer and style in the workspace
    #[arg(long, short = 'r')]
    pub recurse: bool,
}

#[derive(Debug, Serialize)]
struct WorkspaceListItem {
    name: String,
}

impl From<&ResourceRef> for WorkspaceListItem {
    fn from(reference: &ResourceRef) -> Self {
        Self { name: reference.name.clone() }
    }
}

impl TableRow for WorkspaceListItem {
    const HEADERS: &'static [&'static str] = &["NAME"];

    fn cells(&self, _color: bool) -> Vec<String> {
        vec![self.name.clone()]
    }
}

impl TableOutput for Workspace {
    fn print_table(&self, color: bool) {
        print_header(&self.name);
        print_field("Isolated", &format_bool(self.isolated, color), color);
        for key in ["dataStores", "coverageStores", "wmsStores", "wmtsStores"] {
            if let Some(href) = self.links.get(key).and_then(|v| v.as_str()) {
                print_field(key, href, color);
            }
        }
    }
}

impl WorkspaceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            WorkspaceSubcommand::List => self.list(global).await,
            WorkspaceSubcommand::Get(args) => self.get(args, global).await,
            WorkspaceSubcommand::Create(args) => self.create(args, global).await,
            WorkspaceSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let gs = global.client()?;
        let list = gs
            .workspaces()
            .get_all()
            .await
            .context("Failed to list workspaces")?;

        let items: Vec<WorkspaceListItem> =
            list.workspaces.iter().map(WorkspaceListItem::from).collect();
        global.writer().write_list(&items, "No workspaces found.")
    }

    async fn get(&self, args: &NameArgs, global: &GlobalOptions) -> Result<()> {
        let gs = global.client()?;
        let workspace = gs
            .workspaces()
            .get(&args.name)
            .await
            .with_context(|| format!("Failed to fetch workspace '{}'", args.name))?
            .ok_or_else(|| ResourceNotFound::new("workspace", &args.name))?;

        global.writer().write(&workspace)
    }

    async fn create(&self, args: &NameArgs, global: &GlobalOptions) -> Result<()> {
        let gs = global.client()?;
        let created = gs
            .workspaces()
            .create(&args.name)
            .await
            .with_context(|| format!("Failed to create workspace '{}'", args.name))?;

        let writer = global.writer();
        if global.json {
            writer.write_raw(&serde_json::json!({ "created": created }))?;
        }
        writer.write_success(&format!("Created workspace {created}"));
        Ok(())
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let gs = global.client()?;
        gs.workspaces()
            .delete(&args.name, args.recurse)
            .await
            .with_context(|| format!("Failed to delete workspace '{}'", args.name))?;

        global
            .writer()
            .write_success(&format!("Deleted workspace {}", args.name));
        Ok(())
    }
}
