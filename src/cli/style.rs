//
//  geoserver-rest
//  cli/style.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Style commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::common::ResourceRef;
use crate::output::TableRow;

use super::GlobalOptions;

/// Manage styles
#[derive(Args, Debug)]
pub struct StyleCommand {
    #[command(subcommand)]
    pub command: StyleSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum StyleSubcommand {
    /// List styles (global ones by default)
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Publish an SLD file as a workspace style
    Publish(PublishArgs),

    /// Delete a style
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list the styles of this workspace
    #[arg(long, short = 'w', conflicts_with = "all")]
    pub workspace: Option<String>,

    /// List global styles followed by the styles of every workspace
    #[arg(long, short = 'a')]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Target workspace
    pub workspace: String,

    /// Style name
    pub name: String,

    /// Path to the SLD document
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Style name
    pub name: String,

    /// Workspace of the style; omit for a global style
    #[arg(long, short = 'w')]
    pub workspace: Option<String>,

    /// Detach the style from layers still using it
    #[arg(long, short = 'r')]
    pub recurse: bool,

    /// Also remove the SLD file from the data directory
    #[arg(long)]
    pub purge: bool,
}

#[derive(Debug, Serialize)]
struct StyleListItem {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
}

impl From<ResourceRef> for StyleListItem {
    fn from(reference: ResourceRef) -> Self {
        Self {
            name: reference.name,
            href: reference.href,
        }
    }
}

impl TableRow for StyleListItem {
    const HEADERS: &'static [&'static str] = &["NAME"];

    fn cells(&self, _color: bool) -> Vec<String> {
        vec![self.name.clone()]
    }
}

impl StyleCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            StyleSubcommand::List(args) => self.list(args, global).await,
            StyleSubcommand::Publish(args) => self.publish(args, global).await,
            StyleSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let gs = global.client()?;
        let styles = match (&args.workspace, args.all) {
            (Some(ws), _) => gs
                .styles()
                .get_in_workspace(ws)
                .await
                .with_context(|| format!("Failed to list styles of workspace '{ws}'"))?
                .styles
                .into_vec(),
            (None, true) => gs.styles().get_all().await.context("Failed to list styles")?,
            (None, false) => gs
                .styles()
                .get_defaults()
                .await
                .context("Failed to list styles")?
                .styles
                .into_vec(),
        };

        let items: Vec<StyleListItem> = styles.into_iter().map(StyleListItem::from).collect();
        global.writer().write_list(&items, "No styles found.")
    }

    async fn publish(&self, args: &PublishArgs, global: &GlobalOptions) -> Result<()> {
        let sld = tokio::fs::read_to_string(&args.file)
            .await
            .with_context(|| format!("Failed to read {}", args.file.display()))?;

        let gs = global.client()?;
        gs.styles()
            .publish(&args.workspace, &args.name, &sld)
            .await
            .with_context(|| format!("Failed to publish style '{}'", args.name))?;

        global
            .writer()
            .write_success(&format!("Published style {}:{}", args.workspace, args.name));
        Ok(())
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let gs = global.client()?;
        gs.styles()
            .delete(args.workspace.as_deref(), &args.name, args.recurse, args.purge)
            .await
            .with_context(|| format!("Failed to delete style '{}'", args.name))?;

        global.writer().write_success(&format!("Deleted style {}", args.name));
        Ok(())
    }
}
