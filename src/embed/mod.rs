//! Embedded static resources.
//!
//! JS and CSS are minified by `build.rs` into `OUT_DIR` and included here.
//!
//! | Resource        | Served at      | Notes                                  |
//! |-----------------|----------------|----------------------------------------|
//! | `site.css`      | `/site.css`    | versioned with `?v=<fingerprint>`      |
//! | `deferred.js`   | `/deferred.js` | rendered with [`DeferredVars`]         |
//! | `sw.js`         | `/sw.js`       | network-only service worker            |
//! | `head.html`     | -              | template head every page starts from   |
//! | `realty.toml`   | -              | starter config written by `realty init` |

mod template;

pub use template::{Template, TemplateVars};

use crate::config::{DeferredResource, SiteConfig};
use crate::utils::hash::fingerprint;

/// Starter configuration for `realty init`.
pub const STARTER_CONFIG: &str = include_str!("site/realty.toml");

/// Template `<head>` shared by every page before metadata sync.
pub const SHELL_HEAD: &str = include_str!("site/head.html");

/// Minified site stylesheet.
pub const SITE_CSS: &str = include_str!(concat!(env!("OUT_DIR"), "/site.min.css"));

/// Minified network-only service worker.
pub const SW_JS: &str = include_str!(concat!(env!("OUT_DIR"), "/sw.min.js"));

/// URL path of the service worker. Must stay at the root to control every page.
pub const SW_PATH: &str = "/sw.js";

/// Variables for deferred.js.
#[derive(Debug, Clone)]
pub struct DeferredVars {
    pub resources: Vec<DeferredResource>,
    /// Service worker URL, when registration is enabled.
    pub service_worker: Option<String>,
}

impl DeferredVars {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            resources: config.build.deferred.clone(),
            service_worker: config.build.service_worker.then(|| SW_PATH.to_owned()),
        }
    }
}

impl TemplateVars for DeferredVars {
    fn apply(&self, content: &str) -> String {
        let resources = serde_json::to_string(&self.resources).unwrap_or_else(|_| "[]".into());
        let worker = match &self.service_worker {
            Some(url) => serde_json::to_string(url).unwrap_or_else(|_| "false".into()),
            None => "false".into(),
        };
        content
            .replace("__REALTY_DEFERRED__", &resources)
            .replace("__REALTY_SERVICE_WORKER__", &worker)
    }
}

/// Deferred loader for analytics, fonts and service-worker registration.
pub const DEFERRED_JS: Template<DeferredVars> =
    Template::new(include_str!(concat!(env!("OUT_DIR"), "/deferred.min.js")));

/// deferred.js rendered for a site.
pub fn deferred_js(config: &SiteConfig) -> String {
    DEFERRED_JS.render(&DeferredVars::from_config(config))
}

/// Cache-busting URL for an embedded asset: `/site.css?v=1a2b3c4d`.
pub fn versioned_url(path: &str, content: &str) -> String {
    format!("{path}?v={}", fingerprint(content))
}
