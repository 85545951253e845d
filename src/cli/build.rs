//! Production build.
//!
//! Renders the site into memory, then writes it out together with the
//! project's static assets:
//! - **Clean** - remove the output directory when `--clean` is given
//! - **Render** - every page in parallel, plus generated files
//! - **Write** - bundle files, with per-kind progress counters
//! - **Assets** - copy `build.assets` verbatim into the output

use crate::config::SiteConfig;
use crate::logger::ProgressLine;
use crate::site::SiteBundle;
use crate::utils::path::copy_dir;
use crate::{debug, log};
use anyhow::{Context, Result};
use std::fs;

/// Files written by a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub pages: usize,
    pub files: usize,
    pub assets: usize,
}

/// Build the site into `build.output`.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildStats> {
    let output = &config.build.output;
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let bundle = SiteBundle::render(config)?;
    let pages = bundle.files().iter().filter(|f| f.is_page()).count();
    let mut stats = BuildStats {
        pages,
        files: bundle.len() - pages,
        assets: 0,
    };

    let progress = (!quiet).then(|| ProgressLine::new(&[("pages", stats.pages), ("files", stats.files)]));
    bundle.write_to(output, |file| {
        debug!("build"; "wrote {} -> {}", file.url, file.path.display());
        if let Some(progress) = &progress {
            progress.inc(if file.is_page() { "pages" } else { "files" });
        }
    })?;
    if let Some(progress) = progress {
        progress.finish();
    }

    stats.assets = copy_dir(&config.build.assets, output)
        .with_context(|| format!("Failed to copy assets from {}", config.build.assets.display()))?;

    if !quiet {
        log!(
            "build";
            "{} pages, {} files, {} assets -> {}",
            stats.pages,
            stats.files,
            stats.assets,
            output.display()
        );
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use tempfile::TempDir;

    fn config_in(temp: &TempDir) -> SiteConfig {
        let mut config = test_site_config();
        config.build.output = temp.path().join("public");
        config.build.assets = temp.path().join("assets");
        config
    }

    #[test]
    fn test_build_site() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        fs::create_dir_all(config.build.assets.join("images")).unwrap();
        fs::write(config.build.assets.join("images/og-cover.jpg"), b"jpg").unwrap();

        let stats = build_site(&config, true).unwrap();
        assert_eq!(stats.pages, 6);
        assert_eq!(stats.files, 5);
        assert_eq!(stats.assets, 1);

        let out = &config.build.output;
        assert!(out.join("images/og-cover.jpg").is_file());
        let zh = fs::read_to_string(out.join("zh/index.html")).unwrap();
        assert!(zh.contains("<html lang=\"zh-CN\">"));
        let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://www.example-realty.com/sitemap.xml"));
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let temp = TempDir::new().unwrap();
        let mut config = config_in(&temp);
        fs::create_dir_all(&config.build.output).unwrap();
        fs::write(config.build.output.join("stale.html"), "old").unwrap();

        config.build.clean = true;
        build_site(&config, true).unwrap();
        assert!(!config.build.output.join("stale.html").exists());
        assert!(config.build.output.join("index.html").exists());
    }
}
