//
//  geoserver-rest
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use geoserver_rest::cli::{Cli, Commands, ResourceNotFound};
use geoserver_rest::exit_codes;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = if e.downcast_ref::<ResourceNotFound>().is_some() {
                exit_codes::NOT_FOUND
            } else {
                exit_codes::ERROR
            };
            std::process::exit(code);
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("GSRC_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    use geoserver_rest::cli::server;

    match cli.command {
        Commands::Exists => server::exists(&cli.global).await,
        Commands::Workspace(cmd) => cmd.run(&cli.global).await,
        Commands::Namespace(cmd) => cmd.run(&cli.global).await,
        Commands::Style(cmd) => cmd.run(&cli.global).await,
        Commands::Layer(cmd) => cmd.run(&cli.global).await,
        Commands::Reset => server::reset(&cli.global).await,
        Commands::Reload => server::reload(&cli.global).await,
        Commands::Purge(args) => server::purge(&args, &cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => server::version(&cli.global).await,
    }
}
