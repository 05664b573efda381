//
//  geoserver-rest
//  cli/layer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Layer commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::layers::Layer;
use crate::output::{format_optional, print_field, print_header, TableOutput, TableRow};

use super::{GlobalOptions, ResourceNotFound};

/// Inspect layers
#[derive(Args, Debug)]
pub struct LayerCommand {
    #[command(subcommand)]
    pub command: LayerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LayerSubcommand {
    /// List layers
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show one layer
    Get(GetArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list the layers of this workspace
    #[arg(long, short = 'w')]
    pub workspace: Option<String>,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Workspace of the layer
    pub workspace: String,

    /// Layer name, without workspace prefix
    pub name: String,
}

#[derive(Debug, Serialize)]
struct LayerListItem {
    name: String,
}

impl TableRow for LayerListItem {
    const HEADERS: &'static [&'static str] = &["NAME"];

    fn cells(&self, _color: bool) -> Vec<String> {
        vec![self.name.clone()]
    }
}

impl TableOutput for Layer {
    fn print_table(&self, color: bool) {
        print_header(&self.name);
        print_field("Type", &format_optional(self.layer_type.as_deref()), color);
        print_field(
            "Default style",
            &format_optional(self.default_style.as_ref().map(|s| s.name.as_str())),
            color,
        );
        let styles: Vec<&str> = self.styles.iter().map(|s| s.name.as_str()).collect();
        if !styles.is_empty() {
            print_field("Styles", &styles.join(", "), color);
        }
        if let Some(attribution) = &self.attribution {
            print_field("Attribution", &format_optional(attribution.title.as_deref()), color);
        }
    }
}

impl LayerCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            LayerSubcommand::List(args) => self.list(args, global).await,
            LayerSubcommand::Get(args) => self.get(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let gs = global.client()?;
        let list = match &args.workspace {
            Some(ws) => gs
                .layers()
                .get_layers(ws)
                .await
                .with_context(|| format!("Failed to list layers of workspace '{ws}'"))?,
            None => gs.layers().get_all().await.context("Failed to list layers")?,
        };

        let items: Vec<LayerListItem> = list
            .layers
            .iter()
            .map(|r| LayerListItem { name: r.name.clone() })
            .collect();
        global.writer().write_list(&items, "No layers found.")
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let gs = global.client()?;
        let qualified = format!("{}:{}", args.workspace, args.name);
        let layer = gs
            .layers()
            .get(&args.workspace, &args.name)
            .await
            .with_context(|| format!("Failed to fetch layer '{qualified}'"))?
            .ok_or_else(|| ResourceNotFound::new("layer", qualified.clone()))?;

        global.writer().write(&layer)
    }
}
