//! The rendered site held in memory.
//!
//! `build` writes a bundle to disk; `serve` answers requests from one.

use super::render_page;
use crate::config::SiteConfig;
use crate::core::{Route, output_file};
use crate::embed::{self, SITE_CSS, SW_JS, SW_PATH};
use crate::generator::{minify_markup, robots::render_robots, sitemap::render_sitemap};
use crate::utils::mime;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// One output file.
#[derive(Debug, Clone)]
pub struct BundleFile {
    /// URL path it is served at.
    pub url: String,
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub mime: &'static str,
    pub body: String,
}

impl BundleFile {
    fn new(url: impl Into<String>, mime: &'static str, body: String) -> Self {
        let url = url.into();
        Self {
            path: output_file(&url),
            url,
            mime,
            body,
        }
    }

    pub fn is_page(&self) -> bool {
        self.mime == mime::types::HTML
    }
}

/// Every generated file of the site.
#[derive(Debug, Clone, Default)]
pub struct SiteBundle {
    files: Vec<BundleFile>,
}

impl SiteBundle {
    /// Render all pages in parallel and generate the auxiliary files.
    pub fn render(config: &SiteConfig) -> Result<Self> {
        let mut files = Route::all()
            .par_iter()
            .map(|route| {
                let html = render_page(config, route)
                    .with_context(|| format!("failed to render {}", route.path))?;
                Ok(BundleFile::new(route.path.clone(), mime::types::HTML, html))
            })
            .collect::<Result<Vec<_>>>()?;

        files.push(BundleFile::new("/site.css", mime::types::CSS, SITE_CSS.to_owned()));
        files.push(BundleFile::new(
            "/deferred.js",
            mime::types::JAVASCRIPT,
            embed::deferred_js(config),
        ));
        if config.build.service_worker {
            files.push(BundleFile::new(SW_PATH, mime::types::JAVASCRIPT, SW_JS.to_owned()));
        }
        if config.build.sitemap {
            let xml = render_sitemap(config);
            let xml = minify_markup(&xml, config.build.minify).into_owned();
            files.push(BundleFile::new("/sitemap.xml", mime::types::XML, xml));
        }
        if config.build.robots {
            files.push(BundleFile::new("/robots.txt", mime::types::PLAIN, render_robots(config)));
        }

        Ok(Self { files })
    }

    pub fn files(&self) -> &[BundleFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// File served at a URL path. `/zh/` and `/zh/index.html` resolve to `/zh`.
    pub fn get(&self, url: &str) -> Option<&BundleFile> {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let wanted = output_file(path);
        self.files.iter().find(|file| file.path == wanted)
    }

    /// The not-found page.
    pub fn not_found(&self) -> Option<&BundleFile> {
        self.get("/404.html")
    }

    /// Write every file below `dir`, calling `on_write` after each one.
    pub fn write_to(&self, dir: &Path, on_write: impl Fn(&BundleFile) + Sync) -> Result<()> {
        self.files.par_iter().try_for_each(|file| {
            let dest = dir.join(&file.path);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(&dest, &file.body)
                .with_context(|| format!("failed to write {}", dest.display()))?;
            on_write(file);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    #[test]
    fn test_bundle_contents() {
        let config = test_site_config();
        let bundle = SiteBundle::render(&config).unwrap();
        let urls: Vec<_> = bundle.files().iter().map(|f| f.url.as_str()).collect();
        for url in [
            "/", "/en", "/zh", "/en/blog", "/zh/blog", "/404.html", "/site.css", "/deferred.js",
            "/sw.js", "/sitemap.xml", "/robots.txt",
        ] {
            assert!(urls.contains(&url), "missing {url}");
        }
        assert_eq!(bundle.files().iter().filter(|f| f.is_page()).count(), 6);
    }

    #[test]
    fn test_disabled_outputs() {
        let mut config = test_site_config();
        config.build.service_worker = false;
        config.build.sitemap = false;
        config.build.robots = false;
        let bundle = SiteBundle::render(&config).unwrap();
        assert!(bundle.get("/sw.js").is_none());
        assert!(bundle.get("/sitemap.xml").is_none());
        assert!(bundle.get("/robots.txt").is_none());
    }

    #[test]
    fn test_get_normalizes_paths() {
        let config = test_site_config();
        let bundle = SiteBundle::render(&config).unwrap();
        assert_eq!(bundle.get("/zh/").unwrap().url, "/zh");
        assert_eq!(bundle.get("/zh/index.html").unwrap().url, "/zh");
        assert_eq!(bundle.get("/en/blog?x=1").unwrap().url, "/en/blog");
        assert_eq!(bundle.get("/").unwrap().url, "/");
        assert!(bundle.get("/missing").is_none());
        assert!(bundle.not_found().is_some());
    }

    #[test]
    fn test_resolvable_paths_are_served() {
        let config = test_site_config();
        let bundle = SiteBundle::render(&config).unwrap();
        for path in [
            "/", "/en", "/zh/", "/en/blog", "/zh/blog/index.html", "/404.html", "/blog",
            "/en/404.html", "/en/listings",
        ] {
            assert_eq!(
                Route::resolve(path).is_some(),
                bundle.get(path).is_some_and(BundleFile::is_page),
                "{path}"
            );
        }
    }

    #[test]
    fn test_write_to() {
        let config = test_site_config();
        let bundle = SiteBundle::render(&config).unwrap();
        let dir = TempDir::new().unwrap();
        let written = AtomicUsize::new(0);
        bundle
            .write_to(dir.path(), |_| {
                written.fetch_add(1, Ordering::Relaxed);
            })
            .unwrap();

        assert_eq!(written.into_inner(), bundle.len());
        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("zh/blog/index.html").exists());
        assert!(dir.path().join("404.html").exists());
        assert!(dir.path().join("sw.js").exists());
    }
}
