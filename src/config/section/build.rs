//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"
//! assets = "assets"
//! minify = true
//! sitemap = true
//! robots = true
//! service_worker = true
//! form_action = "https://formspree.io/f/your-form-id"
//!
//! [[build.deferred]]
//! src = "https://www.googletagmanager.com/gtag/js?id=G-XXXX"
//! delay = 3000
//! ```

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for deferred resource delays (one minute).
const MAX_DEFER_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory (relative to the project root until finalized).
    pub output: PathBuf,

    /// Static assets copied verbatim into the output (images, favicons).
    pub assets: PathBuf,

    /// Minify generated HTML and XML.
    pub minify: bool,

    /// Generate `sitemap.xml` with hreflang alternates.
    pub sitemap: bool,

    /// Generate `robots.txt`.
    pub robots: bool,

    /// Emit and register the network-only service worker.
    pub service_worker: bool,

    /// Contact form endpoint. Without it the form falls back to `mailto:`.
    pub form_action: Option<String>,

    /// Scripts and stylesheets loaded after first paint.
    pub deferred: Vec<DeferredResource>,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            assets: "assets".into(),
            minify: true,
            sitemap: true,
            robots: true,
            service_worker: true,
            form_action: None,
            deferred: Vec::new(),
            clean: false,
        }
    }
}

/// A resource the deferred loader injects after `delay` milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredResource {
    pub src: String,
    #[serde(default)]
    pub delay: u64,
    #[serde(default)]
    pub kind: DeferredKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeferredKind {
    #[default]
    Script,
    Style,
}

impl BuildConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for resource in &self.deferred {
            if resource.src.trim().is_empty() {
                diag.error("build.deferred", "deferred resource has an empty `src`");
            }
            if resource.delay > MAX_DEFER_DELAY_MS {
                diag.error_with_hint(
                    "build.deferred",
                    format!("delay {}ms for `{}` is too long", resource.delay, resource.src),
                    format!("keep delays at or below {MAX_DEFER_DELAY_MS}ms"),
                );
            }
        }

        if let Some(action) = &self.form_action
            && url::Url::parse(action).is_err()
        {
            diag.error_with_hint(
                "build.form_action",
                format!("`{action}` is not an absolute URL"),
                "use the full endpoint, e.g.: \"https://formspree.io/f/abcd\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.minify);
        assert!(config.build.sitemap);
        assert!(config.build.service_worker);
        assert!(config.build.deferred.is_empty());
    }

    #[test]
    fn test_deferred_resources() {
        let config = test_parse_config(
            "[[build.deferred]]\nsrc = \"https://a.com/x.js\"\ndelay = 3000\n\n[[build.deferred]]\nsrc = \"https://a.com/f.css\"\nkind = \"style\"",
        );
        assert_eq!(config.build.deferred.len(), 2);
        assert_eq!(config.build.deferred[0].kind, DeferredKind::Script);
        assert_eq!(config.build.deferred[1].kind, DeferredKind::Style);
        assert_eq!(config.build.deferred[1].delay, 0);
    }

    #[test]
    fn test_validate_delay_and_form() {
        let config = test_parse_config(
            "[build]\nform_action = \"not a url\"\n\n[[build.deferred]]\nsrc = \"x.js\"\ndelay = 120000",
        );
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, ["build.deferred", "build.form_action"]);
    }
}
