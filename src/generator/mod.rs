//! Auxiliary files generated alongside the pages.
//!
//! - **Sitemap**: `sitemap.xml` with hreflang alternates for every page
//! - **Robots**: `robots.txt` pointing crawlers at the sitemap

pub mod robots;
pub mod sitemap;

use std::borrow::Cow;

/// Collapse line-oriented markup (HTML or XML) by trimming and joining lines.
///
/// Only safe for markup whose text content never spans lines, which holds
/// for everything this crate renders.
pub fn minify_markup(content: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        let minified = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified)
    } else {
        Cow::Borrowed(content)
    }
}
