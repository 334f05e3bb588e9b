//! Command line interface for the divan poetry pretty-printer.
//!
//! This crate wraps the `divan` library in a small CLI for fetching Persian
//! poems and reformatting them into a print-friendly couplet layout. It
//! supports:
//! - Fetching a poem from a ganjoor.net link
//! - Fetching a random poem with poet-name enrichment
//! - Rendering a poem typed in by hand
//! - Best-effort extraction of a poem from a saved HTML page
//! - A persisted theme preference for generated pages
//!
//! # Usage
//!
//! ```bash
//! # Fetch and print a poem
//! divan fetch https://ganjoor.net/hafez/ghazal/sh1
//!
//! # Write a printable page instead
//! divan fetch https://ganjoor.net/hafez/ghazal/sh1 --out ghazal1.html
//!
//! # A random poem
//! divan random
//!
//! # Your own text
//! divan manual --poet "حافظ" --title "غزل" --body-file poem.txt
//!
//! # Pull a poem out of a saved page
//! divan scrape page.html
//!
//! # Dark pages from now on
//! divan theme dark
//! ```
//!
//! Verbosity is controlled with the `-v` flag; repeat it for more detail.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Args, Parser, Subcommand, ValueEnum};
use divan::{
  client::GanjoorClient,
  extract::{self, ExtractorConfig},
  format, link, page,
  poem::{first_filled, UNKNOWN_POET, UNTITLED},
  theme::ThemePreference,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Fetch Persian poems and pretty-print them for reading or printing")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Directory holding the persisted preferences. If not specified, uses the
  /// platform config directory.
  #[arg(long, global = true)]
  config_dir: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Entry point for the divan CLI.
///
/// Parses arguments, sets up logging, and runs the requested workflow. Any
/// error is reported through the styled status surface and the process exits
/// non-zero; nothing is rendered from a partially failed workflow.
#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let interaction = CliInteraction;
  if let Err(e) = run(&cli, &interaction).await {
    let _ = interaction.reply(ResponseContent::Error(e));
    std::process::exit(1);
  }
}

/// Dispatches to the requested command.
async fn run(cli: &Cli, interaction: &CliInteraction) -> Result<()> {
  match cli.command.clone() {
    Commands::Fetch(args) => fetch(cli, interaction, args).await,
    Commands::Random(args) => random(cli, interaction, args).await,
    Commands::Manual(args) => manual(cli, interaction, args).await,
    Commands::Scrape(args) => scrape(cli, interaction, args).await,
    Commands::Theme(args) => theme(cli, interaction, args).await,
  }
}
