//! Page rendering.
//!
//! A page is the shared template head, synchronized against the page's
//! metadata descriptor, followed by its body sections. Each section renders
//! through the error boundary, so one failing section never takes down the
//! page.

pub mod boundary;
pub mod bundle;
pub mod sections;
pub mod share;

pub use bundle::SiteBundle;

use crate::config::SiteConfig;
use crate::core::{Language, PageId, Route};
use crate::embed::{self, SHELL_HEAD, SITE_CSS};
use crate::generator::minify_markup;
use crate::i18n::{self, Strings};
use crate::seo::head::{HeadError, parse_head, render_head};
use crate::seo::{DescriptorTable, HeadSync};
use crate::utils::html::escape_attr;
use crate::debug;
use std::path::PathBuf;
use thiserror::Error;

/// Section rendering failures.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to fetch market data from `{0}`")]
    MarketData(PathBuf, #[source] std::io::Error),

    #[error("invalid market data in `{0}`")]
    MarketParse(PathBuf, #[source] serde_json::Error),

    #[error("failed to write section markup")]
    Format(#[from] std::fmt::Error),

    #[error(transparent)]
    Head(#[from] HeadError),
}

/// Everything a section needs to render.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub route: &'a Route,
    pub lang: Language,
    pub strings: &'static Strings,
    /// Canonical URL of the page.
    pub canonical: String,
    pub title: String,
}

impl<'a> PageContext<'a> {
    pub fn new(config: &'a SiteConfig, route: &'a Route) -> Self {
        let lang = route.lang;
        let strings = i18n::strings(lang);
        let name = config.agent.display_name(lang);
        Self {
            config,
            route,
            lang,
            strings,
            canonical: config.page_url(&route.page.path(lang)),
            title: i18n::fill(strings.page(route.page).title, &[("name", name)]),
        }
    }

    /// Agent name in the page language.
    pub fn name(&self) -> &'a str {
        self.config.agent.display_name(self.lang)
    }
}

/// Template head with the page's asset links injected before `</head>`.
fn shell_head(config: &SiteConfig, route: &Route) -> String {
    let mut assets = format!(
        "<link rel=\"stylesheet\" href=\"{}\">\n",
        embed::versioned_url("/site.css", SITE_CSS)
    );
    // Single hero preload, home page only
    if route.page == PageId::Home
        && let Some(image) = &config.site.image
    {
        assets.push_str(&format!(
            "<link rel=\"preload\" as=\"image\" href=\"{}\" fetchpriority=\"high\">\n",
            escape_attr(image)
        ));
    }
    assets.push_str(&format!(
        "<script src=\"{}\" defer></script>\n",
        embed::versioned_url("/deferred.js", &embed::deferred_js(config))
    ));

    match SHELL_HEAD.rfind("</head>") {
        Some(end) => format!("{}{assets}{}", &SHELL_HEAD[..end], &SHELL_HEAD[end..]),
        None => format!("{SHELL_HEAD}{assets}"),
    }
}

/// Render the complete HTML document for a route.
pub fn render_page(config: &SiteConfig, route: &Route) -> Result<String, RenderError> {
    let descriptor = DescriptorTable::new(config).get(route.page, route.lang);
    for warning in descriptor.length_warnings() {
        debug!("seo"; "{} ({}): {}", route.path, route.lang, warning);
    }

    let mut sync = HeadSync::attach(parse_head(&shell_head(config, route))?);
    let report = sync.sync(&descriptor);
    debug!(
        "seo";
        "{}: +{} ~{} -{}",
        route.path, report.created, report.updated, report.removed
    );
    let head = sync.head().ok_or(HeadError::MissingHead)?;

    let ctx = PageContext::new(config, route);
    let mut body = String::new();
    for section in sections::sections_for(route.page) {
        boundary::render_section(*section, &ctx, &mut body);
    }

    let html = format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n{}\n<body>\n{}</body>\n</html>\n",
        head.html_lang().unwrap_or(descriptor.html_lang()),
        render_head(head),
        body,
    );
    Ok(minify_markup(&html, config.build.minify).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use crate::seo::head::TagKey;

    fn page(path: &str) -> String {
        let mut config = test_site_config();
        config.build.minify = false;
        render_page(&config, &Route::resolve(path).unwrap()).unwrap()
    }

    #[test]
    fn test_zh_home_document() {
        let html = page("/zh");
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"zh-CN\">"));
        assert!(html.contains("湾区房产经纪人"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://www.example-realty.com/zh\""));
        assert!(html.contains("\"@type\":\"FAQPage\""));
    }

    #[test]
    fn test_head_contains_required_tags() {
        let html = page("/");
        let head = parse_head(&html).unwrap();
        assert_eq!(head.html_lang(), Some("en-US"));
        assert_eq!(head.canonical(), Some("https://www.example-realty.com/en"));
        assert!(head.title().is_some());
        assert!(head.meta_property("og:image").is_some());
        assert!(head.get(&TagKey::Charset).is_some());
        let langs: Vec<_> = head.alternates().filter_map(|a| a.get("hreflang")).collect();
        assert_eq!(langs, ["en-US", "zh-CN", "x-default"]);
    }

    #[test]
    fn test_single_hero_preload() {
        let home = page("/en");
        assert_eq!(home.matches("rel=\"preload\"").count(), 1);
        assert_eq!(page("/en/blog").matches("rel=\"preload\"").count(), 0);
    }

    #[test]
    fn test_versioned_assets() {
        let html = page("/en");
        assert!(html.contains("href=\"/site.css?v="));
        assert!(html.contains("<script src=\"/deferred.js?v="));
    }

    #[test]
    fn test_failing_section_falls_back() {
        let mut config = test_site_config();
        config.build.minify = false;
        config.market.data = Some("/nonexistent/market.json".into());
        let html = render_page(&config, &Route::resolve("/en").unwrap()).unwrap();
        assert!(html.contains("class=\"error-boundary\""));
        assert!(html.contains("check your connection"));
        // Sections after the failure still render
        assert!(html.contains("id=\"faq\""));
    }

    #[test]
    fn test_minified_document() {
        let config = test_site_config();
        let html = render_page(&config, &Route::resolve("/zh/blog").unwrap()).unwrap();
        assert!(!html.contains('\n'));
        assert!(html.contains("<html lang=\"zh-CN\">"));
    }

    #[test]
    fn test_not_found_is_noindex() {
        let html = page("/404.html");
        assert!(html.contains("content=\"noindex, follow\""));
        assert!(!html.contains("application/ld+json"));
    }
}
