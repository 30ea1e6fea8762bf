//! Ordercraft CLI Application
//!
//! Command-line interface and MCP server for the order configuration wizard.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{OrderCraftMcpServer, run_stdio_server};
use ordercraft_core::SessionBuilder;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let session = SessionBuilder::new()
        .with_catalog_path(catalog_file)
        .build()
        .context("Failed to load catalog")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Ordercraft started");

    match command {
        Some(Commands::Quote(args)) => Cli::new(session, renderer).quote(&args),
        Some(Commands::EndDate(args)) => Cli::new(session, renderer).end_date(&args),
        Some(Commands::Serve) => {
            info!("Starting Ordercraft MCP server");
            run_stdio_server(OrderCraftMcpServer::new(session))
                .await
                .context("MCP server failed")
        }
        Some(Commands::Catalog) | None => {
            Cli::new(session, renderer).show_catalog();
            Ok(())
        }
    }
}
