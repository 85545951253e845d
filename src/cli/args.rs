//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Realty static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: realty.toml)
    #[arg(short = 'C', long, default_value = "realty.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter realty.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Build the site for production
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Render the site in memory and serve it locally
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the metadata resolved for a URL path as JSON
    #[command(visible_alias = "q")]
    Inspect {
        #[command(flatten)]
        args: InspectArgs,
    },

    /// Re-synchronize the `<head>` of an existing HTML file
    Sync {
        #[command(flatten)]
        args: SyncArgs,
    },
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Minify the HTML content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override site URL for deployment.
    ///
    /// Canonical links, hreflang alternates, Open Graph URLs and the sitemap
    /// are all derived from this URL.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Inspect command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// URL path to inspect (e.g. `/zh/blog`)
    #[arg(default_value = "/")]
    pub path: String,

    /// Print only the JSON-LD blocks
    #[arg(short, long)]
    pub json_ld: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Sync command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SyncArgs {
    /// HTML file whose head should be synchronized
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// URL path the file is served at (selects page and language)
    #[arg(short = 'u', long = "path", default_value = "/")]
    pub path: String,

    /// Print the result instead of writing the file
    #[arg(short, long)]
    pub dry: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::try_parse_from(["realty", "build", "--minify", "false", "-S", "-U", "https://a.com"])
            .unwrap();
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build_args.minify, Some(false));
        assert_eq!(build_args.sitemap, Some(true));
        assert_eq!(build_args.site_url.as_deref(), Some("https://a.com"));
    }

    #[test]
    fn test_parse_inspect_defaults() {
        let cli = Cli::try_parse_from(["realty", "inspect"]).unwrap();
        let Commands::Inspect { args } = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(args.path, "/");
        assert!(!args.json_ld);
    }

    #[test]
    fn test_parse_sync() {
        let cli = Cli::try_parse_from(["realty", "sync", "landing.html", "--path", "/zh", "--dry"])
            .unwrap();
        let Commands::Sync { args } = cli.command else {
            panic!("expected sync");
        };
        assert_eq!(args.file, PathBuf::from("landing.html"));
        assert_eq!(args.path, "/zh");
        assert!(args.dry);
    }
}
