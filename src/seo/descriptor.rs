//! Metadata descriptors: everything a page's `<head>` must contain.
//!
//! [`DescriptorTable`] is the single source of page metadata. A descriptor
//! is recomputed for each render and fully supersedes the previous one.

use super::head::{HeadElement, SYNC_MARKER};
use super::schema::{self, SchemaContext, StructuredDataBlock};
use crate::config::SiteConfig;
use crate::core::{Language, PageId};
use crate::i18n::{self, PageCopy};
use serde::Serialize;

/// Recommended maximum title length, in characters.
pub const TITLE_LIMIT: usize = 60;
/// Recommended maximum description length, in characters.
pub const DESCRIPTION_LIMIT: usize = 160;

/// Attribute a meta tag is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetaKind {
    Name,
    Property,
    HttpEquiv,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub kind: MetaKind,
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self { kind: MetaKind::Name, key, content: content.into() }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self { kind: MetaKind::Property, key, content: content.into() }
    }

    fn http_equiv(key: &'static str, content: impl Into<String>) -> Self {
        Self { kind: MetaKind::HttpEquiv, key, content: content.into() }
    }

    fn element(&self) -> HeadElement {
        match self.kind {
            MetaKind::Name => HeadElement::meta_name(self.key, &self.content),
            MetaKind::Property => HeadElement::meta_property(self.key, &self.content),
            MetaKind::HttpEquiv => HeadElement::meta_http_equiv(self.key, &self.content),
        }
    }
}

/// An hreflang alternate link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub hreflang: &'static str,
    pub href: String,
}

/// Head metadata for one (page, language) pair.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataDescriptor {
    pub page: PageId,
    pub lang: Language,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    pub meta: Vec<MetaTag>,
    pub alternates: Vec<Alternate>,
    pub structured: Vec<StructuredDataBlock>,
}

impl MetadataDescriptor {
    /// Value for `<html lang>`.
    pub fn html_lang(&self) -> &'static str {
        self.lang.html_tag()
    }

    /// Keyed head elements, each carrying the sync marker.
    pub fn elements(&self) -> Vec<HeadElement> {
        let mut elements = vec![
            HeadElement::title(&self.title),
            HeadElement::meta_name("description", &self.description),
        ];
        if !self.keywords.is_empty() {
            elements.push(HeadElement::meta_name("keywords", self.keywords.join(", ")));
        }
        elements.push(HeadElement::canonical(&self.canonical));
        elements.extend(self.meta.iter().map(MetaTag::element));
        elements.extend(
            self.structured
                .iter()
                .map(|block| HeadElement::json_ld(block.to_script_text())),
        );
        elements.into_iter().map(mark).collect()
    }

    /// hreflang links, in `en-US`, `zh-CN`, `x-default` order.
    pub fn alternate_elements(&self) -> Vec<HeadElement> {
        self.alternates
            .iter()
            .map(|alt| mark(HeadElement::alternate(alt.hreflang, &alt.href)))
            .collect()
    }

    /// Copy exceeding the recommended lengths.
    pub fn length_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let title_len = self.title.chars().count();
        if title_len > TITLE_LIMIT {
            warnings.push(format!("title is {title_len} chars (recommended <= {TITLE_LIMIT})"));
        }
        let description_len = self.description.chars().count();
        if description_len > DESCRIPTION_LIMIT {
            warnings.push(format!(
                "description is {description_len} chars (recommended <= {DESCRIPTION_LIMIT})"
            ));
        }
        warnings
    }
}

fn mark(element: HeadElement) -> HeadElement {
    element.attr(SYNC_MARKER, "")
}

/// Builds descriptors from the site config and translation tables.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorTable<'a> {
    config: &'a SiteConfig,
}

impl<'a> DescriptorTable<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    pub fn get(&self, page: PageId, lang: Language) -> MetadataDescriptor {
        let config = self.config;
        let strings = i18n::strings(lang);
        let copy: &PageCopy = strings.page(page);

        let name = config.agent.display_name(lang);
        let vars = [("name", name)];
        let title = i18n::fill(copy.title, &vars);
        let description = i18n::fill(copy.description, &vars);
        let canonical = config.page_url(&page.path(lang));

        let mut meta = vec![
            MetaTag::http_equiv("X-UA-Compatible", "IE=edge"),
            MetaTag::http_equiv("content-language", lang.html_tag()),
            MetaTag::name(
                "robots",
                if page == PageId::NotFound { "noindex, follow" } else { "index, follow" },
            ),
            MetaTag::name("author", name),
        ];
        if let Some(color) = &config.site.theme_color {
            meta.push(MetaTag::name("theme-color", color));
        }
        meta.extend(self.geo_tags());

        let image = config.site.image.as_deref().map(|href| config.absolute_url(href));
        meta.extend([
            MetaTag::property("og:type", if page == PageId::Blog { "blog" } else { "website" }),
            MetaTag::property("og:site_name", name),
            MetaTag::property("og:title", &title),
            MetaTag::property("og:description", &description),
            MetaTag::property("og:url", &canonical),
        ]);
        if let Some(image) = &image {
            meta.push(MetaTag::property("og:image", image));
        }
        meta.extend([
            MetaTag::property("og:locale", lang.og_locale()),
            MetaTag::property("og:locale:alternate", lang.other().og_locale()),
            MetaTag::name("twitter:card", "summary_large_image"),
            MetaTag::name("twitter:title", &title),
            MetaTag::name("twitter:description", &description),
        ]);
        if let Some(image) = &image {
            meta.push(MetaTag::name("twitter:image", image));
        }
        if let Some(handle) = &config.site.twitter {
            meta.push(MetaTag::name("twitter:site", handle));
        }

        let x_default = match page {
            PageId::Home => "/".to_owned(),
            _ => page.path(Language::En),
        };
        let alternates = Language::ALL
            .into_iter()
            .map(|alt| Alternate {
                hreflang: alt.html_tag(),
                href: config.page_url(&page.path(alt)),
            })
            .chain(std::iter::once(Alternate {
                hreflang: "x-default",
                href: config.page_url(&x_default),
            }))
            .collect();

        MetadataDescriptor {
            page,
            lang,
            title,
            description,
            keywords: copy.keywords.iter().map(|k| (*k).to_owned()).collect(),
            canonical,
            meta,
            alternates,
            structured: schema::blocks_for(&SchemaContext::new(config, lang, page)),
        }
    }

    fn geo_tags(&self) -> Vec<MetaTag> {
        let agent = &self.config.agent;
        let mut tags = Vec::new();
        if let Some(region) = agent.geo_region() {
            tags.push(MetaTag::name("geo.region", region));
        }
        if let Some(city) = &agent.city {
            tags.push(MetaTag::name("geo.placename", city));
        }
        if let Some((lat, lng)) = agent.coordinates() {
            tags.push(MetaTag::name("geo.position", format!("{lat};{lng}")));
            tags.push(MetaTag::name("ICBM", format!("{lat}, {lng}")));
        }
        tags
    }
}
