//! Project initialization.
//!
//! Writes a starter `realty.toml`, an empty assets directory and ignore
//! rules for the build output.

use crate::config::SiteConfig;
use crate::embed::STARTER_CONFIG;
use crate::log;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files the output directory is added to.
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `realty init` - initialize in the current directory
    CurrentDir,
    /// `realty init <name>` - create a new subdirectory (must not exist)
    NewDir,
}

/// Create a new project at the configured root.
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };
    let root = config.get_root();
    validate_target(root, &config.config_path, mode)?;

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&config.config_path, STARTER_CONFIG)
        .with_context(|| format!("Failed to write '{}'", config.config_path.display()))?;
    fs::create_dir_all(&config.build.assets)
        .with_context(|| format!("Failed to create '{}'", config.build.assets.display()))?;

    let output = config
        .build
        .output
        .strip_prefix(root)
        .unwrap_or(&config.build.output);
    write_ignore_files(root, output)?;

    log!("init"; "created {}", config.config_path.display());
    Ok(())
}

/// Refuse to overwrite an existing config or populate an existing directory.
fn validate_target(root: &Path, config_path: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::NewDir if root.exists() => bail!(
            "Directory '{}' already exists.\n\
             Choose a different name or remove the existing directory.",
            root.display()
        ),
        _ if config_path.exists() => bail!(
            "'{}' already exists. Edit it instead of re-initializing.",
            config_path.display()
        ),
        _ => Ok(()),
    }
}

/// Append the output directory to ignore files, creating them if needed.
fn write_ignore_files(root: &Path, output: &Path) -> Result<()> {
    let entry = format!("/{}/", output.display());
    for name in IGNORE_FILES {
        let path = root.join(name);
        let existing = fs::read_to_string(&path).unwrap_or_default();
        if existing.lines().any(|line| line.trim() == entry) {
            continue;
        }
        let mut content = existing;
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&entry);
        content.push('\n');
        fs::write(&path, content)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(())
}
