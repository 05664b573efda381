//
//  geoserver-rest
//  cli/server.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Server-wide commands: liveness, version, cache reset, reload and purge.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use crate::api::GeoServerRestClient;
use crate::output::{print_field, print_header, TableOutput};

use super::GlobalOptions;

/// Global styles shipped with GeoServer that cannot be deleted.
pub const BUILTIN_STYLES: &[&str] = &["generic", "line", "point", "polygon", "raster"];

#[derive(Args, Debug)]
pub struct PurgeArgs {
    /// Confirm that the whole catalog may be deleted
    #[arg(long)]
    pub yes: bool,
}

/// Outcome of [`purge_catalog`].
#[derive(Debug, Default, Serialize)]
pub struct PurgeReport {
    pub deleted_workspaces: Vec<String>,
    pub deleted_styles: Vec<String>,
    /// One message per resource that could not be deleted.
    pub failures: Vec<String>,
}

impl TableOutput for PurgeReport {
    fn print_table(&self, color: bool) {
        print_field("Workspaces deleted", &self.deleted_workspaces.len().to_string(), color);
        print_field("Styles deleted", &self.deleted_styles.len().to_string(), color);
        for failure in &self.failures {
            print_field("Failed", failure, color);
        }
    }
}

#[derive(Debug, Serialize)]
struct VersionReport {
    client: &'static str,
    geoserver: Option<String>,
    components: Vec<ComponentRow>,
}

#[derive(Debug, Serialize)]
struct ComponentRow {
    name: String,
    version: Option<String>,
}

impl TableOutput for VersionReport {
    fn print_table(&self, color: bool) {
        print_field("gsrc", self.client, color);
        if !self.components.is_empty() {
            println!();
            print_header("GeoServer");
            for component in &self.components {
                print_field(&component.name, component.version.as_deref().unwrap_or("-"), color);
            }
        }
    }
}

/// Deletes every workspace (recursively) and every non-builtin global style.
///
/// Failures on single resources are collected and do not stop the purge.
/// Errors listing workspaces or styles are returned immediately.
pub async fn purge_catalog(gs: &GeoServerRestClient) -> Result<PurgeReport> {
    let mut report = PurgeReport::default();

    let workspaces = gs
        .workspaces()
        .get_all()
        .await
        .context("Failed to list workspaces")?;
    for ws in workspaces.workspaces.iter() {
        match gs.workspaces().delete(&ws.name, true).await {
            Ok(()) => {
                tracing::info!(workspace = %ws.name, "deleted workspace");
                report.deleted_workspaces.push(ws.name.clone());
            }
            Err(e) => report.failures.push(format!("workspace {}: {e}", ws.name)),
        }
    }

    let styles = gs
        .styles()
        .get_defaults()
        .await
        .context("Failed to list styles")?;
    for style in styles.styles.iter().filter(|s| !BUILTIN_STYLES.contains(&s.name.as_str())) {
        match gs.styles().delete(None, &style.name, true, true).await {
            Ok(()) => {
                tracing::info!(style = %style.name, "deleted style");
                report.deleted_styles.push(style.name.clone());
            }
            Err(e) => report.failures.push(format!("style {}: {e}", style.name)),
        }
    }

    Ok(report)
}

pub async fn exists(global: &GlobalOptions) -> Result<()> {
    let gs = global.client()?;
    let reachable = gs.exists().await;
    let writer = global.writer();

    if global.json {
        writer.write_raw(&serde_json::json!({
            "url": gs.connection().base_url(),
            "exists": reachable,
        }))?;
    }
    if !reachable {
        bail!("GeoServer is not reachable at {}", gs.connection().base_url());
    }
    writer.write_success(&format!("GeoServer is reachable at {}", gs.connection().base_url()));
    Ok(())
}

/// Prints the client version and, when reachable, the server components.
pub async fn version(global: &GlobalOptions) -> Result<()> {
    let gs = global.client()?;
    let writer = global.writer();

    let mut report = VersionReport {
        client: crate::VERSION,
        geoserver: None,
        components: Vec::new(),
    };
    match gs.get_version().await {
        Ok(info) => {
            report.geoserver = info.geoserver_version().map(str::to_string);
            report.components = info
                .about
                .resource
                .into_iter()
                .map(|c| ComponentRow { name: c.name, version: c.version })
                .collect();
        }
        Err(e) => writer.write_warning(&format!("Could not read GeoServer version: {e}")),
    }

    writer.write(&report)
}

pub async fn reset(global: &GlobalOptions) -> Result<()> {
    let gs = global.client()?;
    gs.reset_reload().reset().await.context("Failed to reset caches")?;
    global.writer().write_success("Caches reset");
    Ok(())
}

pub async fn reload(global: &GlobalOptions) -> Result<()> {
    let gs = global.client()?;
    gs.reset_reload().reload().await.context("Failed to reload catalog")?;
    global.writer().write_success("Catalog reloaded");
    Ok(())
}

pub async fn purge(args: &PurgeArgs, global: &GlobalOptions) -> Result<()> {
    let gs = global.client()?;
    if !args.yes {
        bail!(
            "Refusing to purge {} without --yes: every workspace and custom global style would be deleted",
            gs.connection().base_url()
        );
    }

    let report = purge_catalog(&gs).await?;
    let writer = global.writer();
    writer.write(&report)?;
    if !report.failures.is_empty() {
        bail!("{} resource(s) could not be deleted", report.failures.len());
    }
    Ok(())
}
