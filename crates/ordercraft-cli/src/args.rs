use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{EndDateArgs, QuoteArgs};

/// Four-stage order configuration wizard
///
/// Ordercraft builds a customer order in four stages: customer information,
/// product and plan selection, contract terms, and a review where add-ons are
/// chosen and the order is finalized. The wizard can be driven from the
/// command line in one shot with `quote`, or interactively by an AI assistant
/// through the MCP (Model Context Protocol) server.
#[derive(Parser)]
#[command(version, about, name = "oc")]
pub struct Args {
    /// Path to a catalog JSON file. Defaults to
    /// $XDG_CONFIG_HOME/ordercraft/catalog.json, then to the built-in catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the ordercraft CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List products, plans and add-ons
    #[command(alias = "c")]
    Catalog,
    /// Run all four stages from flags and print the review
    #[command(alias = "q")]
    Quote(QuoteArgs),
    /// Compute the last day of a contract
    #[command(alias = "e")]
    EndDate(EndDateArgs),
    /// Start the MCP server
    Serve,
}
