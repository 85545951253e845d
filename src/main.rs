//! Realty - static site generator for a bilingual real-estate agent website.

mod cli;
mod config;
mod core;
mod embed;
mod generator;
mod i18n;
mod logger;
mod seo;
mod site;
mod utils;
mod worker;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name } => cli::init::new_site(&config, name.is_some()),
        Commands::Build { .. } => cli::build::build_site(&config, false).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve_site(&config),
        Commands::Inspect { args } => cli::inspect::run_inspect(args, &config),
        Commands::Sync { args } => cli::sync::run_sync(args, &config),
    }
}
