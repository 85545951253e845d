//! `robots.txt` generation.

use crate::config::SiteConfig;

/// Allow every crawler and point it at the sitemap when one is generated.
pub fn render_robots(config: &SiteConfig) -> String {
    let mut robots = String::from("User-agent: *\nAllow: /\nDisallow: /404.html\n");
    if config.build.sitemap {
        robots.push_str(&format!("\nSitemap: {}\n", config.page_url("/sitemap.xml")));
    }
    robots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_robots_with_sitemap() {
        let config = test_parse_config("");
        let robots = render_robots(&config);
        assert!(robots.starts_with("User-agent: *\nAllow: /"));
        assert!(robots.contains("Sitemap: https://www.example-realty.com/sitemap.xml"));
    }

    #[test]
    fn test_robots_without_sitemap() {
        let config = test_parse_config("[build]\nsitemap = false");
        assert!(!render_robots(&config).contains("Sitemap:"));
    }
}
