//! Site configuration management for `realty.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── agent      # [agent], [agent.social]
//! │   ├── build      # [build], [[build.deferred]]
//! │   ├── listing    # [listing]
//! │   ├── market     # [market], [market.stats]
//! │   ├── serve      # [serve]
//! │   └── site       # [site]
//! ├── error          # ConfigError, ConfigDiagnostics
//! ├── util           # URL and config-file lookup helpers
//! └── mod.rs         # SiteConfig (this file)
//! ```

mod error;
pub mod section;
mod util;

use util::find_config_file;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{
    AgentConfig, BuildConfig, DeferredResource, ListingConfig, MarketConfig, MarketStats,
    ServeConfig, SiteInfoConfig,
};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::IsTerminal,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing realty.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site URL and social preview
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Agent identity, address and social profiles
    #[serde(default)]
    pub agent: AgentConfig,

    /// Featured listing
    #[serde(default)]
    pub listing: ListingConfig,

    /// Market statistics
    #[serde(default)]
    pub market: MarketConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Preview server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            bail!(
                "config file '{}' not found. Run 'realty init' to create one",
                cli.config.display()
            );
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli);

        // Skip for init: no config file yet
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name } => {
                let dir = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
                let path = dir.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => match find_config_file(&cli.config) {
                Some(path) => Ok((path, true)),
                None => Ok((cwd.join(&cli.config), false)),
            },
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = match &cli.command {
            Commands::Init { name } => {
                let cwd = std::env::current_dir().unwrap_or_default();
                name.as_ref().map_or(cwd.clone(), |name| cwd.join(name))
            }
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.normalize_paths(&root);
        self.apply_command_options(cli);
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            // Non-interactive runs (CI, pipes) continue with the warning only
            if std::io::stdin().is_terminal() && !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    // ========================================================================
    // urls
    // ========================================================================

    /// Site origin without trailing slash, taken verbatim from `site.url`.
    pub fn base_url(&self) -> &str {
        self.site.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Absolute URL for a site path.
    ///
    /// Only the root keeps its slash: `/` -> `https://host/`,
    /// `/en/` -> `https://host/en`.
    pub fn page_url(&self, path: &str) -> String {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            format!("{}/", self.base_url())
        } else {
            format!("{}/{}", self.base_url(), trimmed)
        }
    }

    /// Resolve a configured asset reference (absolute or site-relative).
    pub fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_owned()
        } else {
            format!("{}/{}", self.base_url(), href.trim_start_matches('/'))
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => {
                self.apply_build_args(build_args, false);
            }
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args, true);
                self.apply_serve_options(*interface, *port);
            }
            Commands::Sync { args } => {
                crate::logger::set_verbose(args.verbose);
            }
            Commands::Init { .. } | Commands::Inspect { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    ///
    /// `is_serve`: If true, the preview skips minification unless requested.
    fn apply_build_args(&mut self, args: &BuildArgs, is_serve: bool) {
        crate::logger::set_verbose(args.verbose);

        self.build.clean = args.clean;
        Self::update_option(&mut self.build.sitemap, args.sitemap.as_ref());

        if is_serve {
            self.build.minify = args.minify.unwrap_or(false);
        } else {
            Self::update_option(&mut self.build.minify, args.minify.as_ref());
        }

        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Apply serve-specific options.
    fn apply_serve_options(&mut self, interface: Option<std::net::IpAddr>, port: Option<u16>) {
        Self::update_option(&mut self.serve.interface, interface.as_ref());
        Self::update_option(&mut self.serve.port, port.as_ref());

        // Local preview links point at the dev server unless --site-url was given
        if self.site.url.is_none() {
            self.site.url = Some(format!("http://{}", self.serve.addr()));
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.config_path = normalize_path(&self.config_path);

        self.build.output = normalize_path(&root.join(&self.build.output));
        self.build.assets = normalize_path(&root.join(&self.build.assets));
        if let Some(data) = self.market.data.take() {
            self.market.data = Some(normalize_path(&root.join(data)));
        }

        self.set_root(&root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration for the current command.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section validator.
    fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.agent.validate(&mut diag);
        self.listing.validate(&mut diag);
        self.build.validate(&mut diag);
        self.serve.validate(&mut diag);
        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` table.
///
/// `extra` continues the `[site]` table until it opens another section.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\nurl = \"https://www.example-realty.com\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// A fully populated config, parsed from the starter `realty.toml`.
#[cfg(test)]
pub fn test_site_config() -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(crate::embed::STARTER_CONFIG).unwrap();
    assert!(ignored.is_empty(), "starter config has unknown fields: {ignored:?}");
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_toml() {
        let result = SiteConfig::parse_with_ignored("[site\nurl = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new(""));
        assert!(config.site.url.is_none());
        assert!(config.build.minify);
        assert_eq!(config.serve.port, 5277);
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nurl = \"https://a.com\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.url.as_deref(), Some("https://a.com"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_starter_config_is_valid() {
        let config = test_site_config();
        let diag = config.diagnostics();
        assert!(!diag.has_errors(), "{:?}", diag.errors());
        assert!(config.listing.is_featured());
        assert_eq!(config.build.deferred.len(), 1);
    }

    #[test]
    fn test_page_url_trailing_slash() {
        let mut config = test_parse_config("");
        config.site.url = Some("https://www.example-realty.com/".into());
        assert_eq!(config.base_url(), "https://www.example-realty.com");
        assert_eq!(config.page_url("/"), "https://www.example-realty.com/");
        assert_eq!(config.page_url("/en"), "https://www.example-realty.com/en");
        assert_eq!(config.page_url("/zh/blog/"), "https://www.example-realty.com/zh/blog");
    }

    #[test]
    fn test_absolute_url() {
        let config = test_parse_config("");
        assert_eq!(
            config.absolute_url("/images/og.jpg"),
            "https://www.example-realty.com/images/og.jpg"
        );
        assert_eq!(config.absolute_url("https://cdn.x/y.jpg"), "https://cdn.x/y.jpg");
    }

    #[test]
    fn test_build_args_override() {
        let mut config = test_parse_config("[build]\nminify = true\nsitemap = true");
        let args = BuildArgs {
            clean: true,
            minify: Some(false),
            sitemap: None,
            site_url: Some("https://staging.example.com".into()),
            verbose: false,
        };
        config.apply_build_args(&args, false);
        assert!(config.build.clean);
        assert!(!config.build.minify);
        assert!(config.build.sitemap);
        assert_eq!(config.base_url(), "https://staging.example.com");
    }

    #[test]
    fn test_serve_defaults_site_url() {
        let mut config = test_parse_config("");
        config.site.url = None;
        config.apply_serve_options(None, Some(8080));
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = test_parse_config("[agent]\nlatitude = 91.0\nlongitude = 0.0");
        config.site.url = None;
        let diag = config.diagnostics();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, ["site.url", "agent.name", "agent.latitude"]);
    }
}
