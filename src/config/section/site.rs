//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://www.example-realty.com"
//! image = "/images/og-cover.jpg"
//! twitter = "@example_realty"
//! theme_color = "#0f4c81"
//! ```

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Site-wide URL and social preview settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Production URL. Canonical links and hreflang alternates derive from it.
    pub url: Option<String>,

    /// Preview image for Open Graph and Twitter cards (absolute or site-relative).
    pub image: Option<String>,

    /// Twitter handle for `twitter:site` (e.g. "@example_realty").
    pub twitter: Option<String>,

    /// Browser UI color (`<meta name="theme-color">`).
    pub theme_color: Option<String>,
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be set, use http(s), have a host and no path
    /// - `twitter` should start with `@`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            diag.error_with_hint(
                "site.url",
                "site.url is not configured",
                "set site.url, e.g.: \"https://www.example-realty.com\"",
            );
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        "site.url",
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        "site.url",
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if !parsed.path().trim_matches('/').is_empty() {
                    diag.error_with_hint(
                        "site.url",
                        "URL must point at the site root",
                        "language prefixes (/en, /zh) are added automatically",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    "site.url",
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }

        if let Some(handle) = &self.twitter
            && !handle.starts_with('@')
        {
            diag.warn("site.twitter", format!("`{handle}` should start with '@'"));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_site_section() {
        let config = test_parse_config("image = \"/og.jpg\"\ntwitter = \"@jane\"");
        assert_eq!(config.site.image.as_deref(), Some("/og.jpg"));
        assert_eq!(config.site.twitter.as_deref(), Some("@jane"));
    }

    #[test]
    fn test_missing_url() {
        let mut config = test_parse_config("");
        config.site.url = None;
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_url_with_path_rejected() {
        let mut config = test_parse_config("");
        config.site.url = Some("https://example.github.io/realty".into());
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.errors()[0].message.contains("site root"));
    }

    #[test]
    fn test_root_url_with_trailing_slash() {
        let mut config = test_parse_config("");
        config.site.url = Some("https://www.example-realty.com/".into());
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_bad_scheme() {
        let mut config = test_parse_config("");
        config.site.url = Some("ftp://example.com".into());
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_twitter_handle_warning() {
        let config = test_parse_config("twitter = \"jane\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
