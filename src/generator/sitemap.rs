//! Sitemap generation.
//!
//! Every routed page is listed once per language, each entry carrying the
//! full hreflang set:
//!
//! ```xml
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://example.com/en</loc>
//!     <xhtml:link rel="alternate" hreflang="en-US" href="https://example.com/en"/>
//!     <xhtml:link rel="alternate" hreflang="zh-CN" href="https://example.com/zh"/>
//!     <xhtml:link rel="alternate" hreflang="x-default" href="https://example.com/"/>
//!   </url>
//! </urlset>
//! ```

use crate::config::SiteConfig;
use crate::core::{Language, PageId};
use crate::generator::minify_markup;
use crate::i18n;
use crate::seo::DescriptorTable;
use crate::seo::descriptor::Alternate;
use std::borrow::Cow;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Render `sitemap.xml`.
pub fn render_sitemap(config: &SiteConfig) -> String {
    let sitemap = Sitemap::build(config);
    minify_markup(&sitemap.into_xml(), config.build.minify).into_owned()
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
    alternates: Vec<Alternate>,
}

impl Sitemap {
    fn build(config: &SiteConfig) -> Self {
        let table = DescriptorTable::new(config);
        let urls = PageId::ROUTED
            .into_iter()
            .flat_map(|page| Language::ALL.into_iter().map(move |lang| (page, lang)))
            .map(|(page, lang)| {
                let descriptor = table.get(page, lang);
                UrlEntry {
                    loc: descriptor.canonical,
                    lastmod: lastmod(page, lang),
                    alternates: descriptor.alternates,
                }
            })
            .collect();
        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\" xmlns:xhtml=\"");
        xml.push_str(XHTML_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            for alt in entry.alternates {
                xml.push_str("    <xhtml:link rel=\"alternate\" hreflang=\"");
                xml.push_str(alt.hreflang);
                xml.push_str("\" href=\"");
                xml.push_str(&escape_xml(&alt.href));
                xml.push_str("\"/>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Blog pages change with their newest post; the home page carries no date.
fn lastmod(page: PageId, lang: Language) -> Option<String> {
    match page {
        PageId::Blog => i18n::strings(lang)
            .posts
            .iter()
            .map(|post| post.date)
            .max()
            .map(str::to_owned),
        _ => None,
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
