//! JSON-LD structured data.
//!
//! Every emitter is a pure function of a [`SchemaContext`] and returns a
//! fresh `serde_json::Value` carrying `@context: "https://schema.org"`.
//! Blocks are regenerated on every render, never patched in place.

use crate::config::SiteConfig;
use crate::core::{Language, PageId};
use crate::i18n::{self, Post};
use serde::Serialize;
use serde_json::{Value, json};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Identity of a JSON-LD block: `@type` plus `@id` when present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BlockKey {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Option<String>,
}

impl BlockKey {
    pub fn of(value: &Value) -> Self {
        let kind = match value.get("@type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(Value::Array(kinds)) => kinds
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(","),
            _ => String::new(),
        };
        let id = value.get("@id").and_then(Value::as_str).map(str::to_owned);
        Self { kind, id }
    }
}

/// A JSON-LD document destined for `<script type="application/ld+json">`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StructuredDataBlock(Value);

impl StructuredDataBlock {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    #[cfg(test)]
    pub fn key(&self) -> BlockKey {
        BlockKey::of(&self.0)
    }

    #[cfg(test)]
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Script body: compact JSON with `</` escaped so it cannot close the tag.
    pub fn to_script_text(&self) -> String {
        // Serializing a Value cannot fail
        serde_json::to_string(&self.0)
            .unwrap_or_default()
            .replace("</", "<\\/")
    }
}

/// Inputs shared by every emitter for one rendered page.
#[derive(Debug, Clone, Copy)]
pub struct SchemaContext<'a> {
    pub config: &'a SiteConfig,
    pub lang: Language,
    pub page: PageId,
}

impl<'a> SchemaContext<'a> {
    pub fn new(config: &'a SiteConfig, lang: Language, page: PageId) -> Self {
        Self { config, lang, page }
    }

    /// Canonical URL of the page being rendered.
    pub fn page_url(&self) -> String {
        self.config.page_url(&self.page.path(self.lang))
    }

    fn agent_id(&self) -> String {
        format!("{}/#agent", self.config.base_url())
    }
}

/// The agent as a `RealEstateAgent` organization.
pub fn real_estate_agent(ctx: &SchemaContext) -> Value {
    let agent = &ctx.config.agent;
    let mut value = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "RealEstateAgent",
        "@id": ctx.agent_id(),
        "name": agent.display_name(ctx.lang),
        "url": ctx.config.page_url(&PageId::Home.path(ctx.lang)),
        "inLanguage": ctx.lang.html_tag(),
        "knowsLanguage": ["en", "zh"],
        "areaServed": agent
            .areas
            .iter()
            .map(|area| json!({ "@type": "City", "name": area }))
            .collect::<Vec<_>>(),
        "sameAs": agent.social.profile_urls(),
    });

    let fields = [
        ("telephone", agent.phone.as_deref().map(Value::from)),
        ("email", agent.email.as_deref().map(Value::from)),
        (
            "image",
            ctx.config
                .site
                .image
                .as_deref()
                .map(|image| Value::from(ctx.config.absolute_url(image))),
        ),
        ("address", postal_address(ctx)),
        (
            "geo",
            agent.coordinates().map(|(lat, lng)| {
                json!({ "@type": "GeoCoordinates", "latitude": lat, "longitude": lng })
            }),
        ),
    ];
    if let Value::Object(map) = &mut value {
        for (name, field) in fields {
            if let Some(field) = field {
                map.insert(name.to_owned(), field);
            }
        }
    }
    value
}

fn postal_address(ctx: &SchemaContext) -> Option<Value> {
    let agent = &ctx.config.agent;
    agent.address_line()?;
    Some(json!({
        "@type": "PostalAddress",
        "streetAddress": agent.street,
        "addressLocality": agent.city,
        "addressRegion": agent.region,
        "postalCode": agent.postal_code,
        "addressCountry": agent.country,
    }))
}

/// An `Article` for a blog post.
pub fn article(ctx: &SchemaContext, post: &Post) -> Value {
    let page_url = ctx.page_url();
    let mut value = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "@id": format!("{page_url}#{}", post.id),
        "headline": post.title,
        "description": post.summary,
        "datePublished": post.date,
        "dateModified": post.date,
        "inLanguage": ctx.lang.html_tag(),
        "mainEntityOfPage": page_url,
        "author": {
            "@type": "Person",
            "name": ctx.config.agent.display_name(ctx.lang),
        },
        "publisher": { "@id": ctx.agent_id() },
    });
    if let (Some(image), Value::Object(map)) = (&ctx.config.site.image, &mut value) {
        map.insert("image".into(), ctx.config.absolute_url(image).into());
    }
    value
}

/// A `Product` with an `Offer` for the featured listing, if one is configured.
pub fn product(ctx: &SchemaContext) -> Option<Value> {
    let listing = &ctx.config.listing;
    if !listing.is_featured() {
        return None;
    }

    let mut offer = json!({
        "@type": "Offer",
        "priceCurrency": listing.currency,
        "availability": "https://schema.org/InStock",
        "url": ctx.page_url(),
        "seller": { "@id": ctx.agent_id() },
    });
    if let (Some(price), Value::Object(map)) = (listing.price, &mut offer) {
        map.insert("price".into(), price.into());
    }

    Some(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Product",
        "@id": format!("{}/#listing", ctx.config.base_url()),
        "name": listing.name,
        "description": listing.description,
        "image": listing.image.as_deref().map(|image| ctx.config.absolute_url(image)),
        "offers": offer,
    }))
}

/// `FAQPage` built from the translated FAQ.
pub fn faq_page(ctx: &SchemaContext) -> Value {
    let faq = i18n::strings(ctx.lang).faq;
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "@id": format!("{}#faq", ctx.page_url()),
        "inLanguage": ctx.lang.html_tag(),
        "mainEntity": faq
            .iter()
            .map(|item| json!({
                "@type": "Question",
                "name": item.question,
                "acceptedAnswer": { "@type": "Answer", "text": item.answer },
            }))
            .collect::<Vec<_>>(),
    })
}

/// `BreadcrumbList` from the home page down to the current page.
pub fn breadcrumbs(ctx: &SchemaContext) -> Value {
    let strings = i18n::strings(ctx.lang);
    let mut trail = vec![(strings.home.crumb, ctx.config.page_url(&PageId::Home.path(ctx.lang)))];
    match ctx.page {
        PageId::Home => {}
        PageId::Blog => trail.push((strings.blog.crumb, ctx.page_url())),
        PageId::NotFound => trail.push((strings.not_found.crumb, ctx.page_url())),
    }

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "@id": format!("{}#breadcrumb", ctx.page_url()),
        "itemListElement": trail
            .into_iter()
            .enumerate()
            .map(|(index, (name, url))| json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": url,
            }))
            .collect::<Vec<_>>(),
    })
}

/// Every block a page carries, in emission order.
pub fn blocks_for(ctx: &SchemaContext) -> Vec<StructuredDataBlock> {
    let mut blocks = vec![real_estate_agent(ctx)];
    match ctx.page {
        PageId::Home => {
            blocks.extend(product(ctx));
            blocks.push(faq_page(ctx));
        }
        PageId::Blog => {
            blocks.extend(
                i18n::strings(ctx.lang)
                    .posts
                    .iter()
                    .map(|post| article(ctx, post)),
            );
        }
        PageId::NotFound => return Vec::new(),
    }
    blocks.push(breadcrumbs(ctx));
    blocks.into_iter().map(StructuredDataBlock::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;

    fn all_blocks(config: &SiteConfig, lang: Language) -> Vec<StructuredDataBlock> {
        PageId::ROUTED
            .into_iter()
            .flat_map(|page| blocks_for(&SchemaContext::new(config, lang, page)))
            .collect()
    }

    #[test]
    fn test_every_block_has_context_and_round_trips() {
        let config = test_site_config();
        for lang in Language::ALL {
            for block in all_blocks(&config, lang) {
                assert_eq!(block.value()["@context"], SCHEMA_CONTEXT);
                let parsed: Value = serde_json::from_str(&block.to_script_text()).unwrap();
                assert_eq!(&parsed, block.value());
            }
        }
    }

    #[test]
    fn test_home_block_kinds() {
        let config = test_site_config();
        let ctx = SchemaContext::new(&config, Language::En, PageId::Home);
        let kinds: Vec<_> = blocks_for(&ctx).iter().map(|b| b.key().kind).collect();
        assert_eq!(kinds, ["RealEstateAgent", "Product", "FAQPage", "BreadcrumbList"]);
    }

    #[test]
    fn test_product_requires_listing() {
        let mut config = test_site_config();
        config.listing.name = None;
        let ctx = SchemaContext::new(&config, Language::En, PageId::Home);
        assert!(product(&ctx).is_none());
    }

    #[test]
    fn test_offer_fields() {
        let config = test_site_config();
        let ctx = SchemaContext::new(&config, Language::Zh, PageId::Home);
        let value = product(&ctx).unwrap();
        assert_eq!(value["offers"]["price"], 1_850_000);
        assert_eq!(value["offers"]["priceCurrency"], "USD");
        assert_eq!(value["offers"]["url"], "https://www.example-realty.com/zh");
    }

    #[test]
    fn test_language_dependent_fields() {
        let config = test_site_config();
        let post = &i18n::strings(Language::Zh).posts[0];
        let zh = article(&SchemaContext::new(&config, Language::Zh, PageId::Blog), post);
        assert_eq!(zh["author"]["name"], "杜简");
        assert_eq!(zh["inLanguage"], "zh-CN");
        assert_eq!(
            zh["@id"],
            "https://www.example-realty.com/zh/blog#first-time-buyer-guide"
        );

        let en = real_estate_agent(&SchemaContext::new(&config, Language::En, PageId::Home));
        assert_eq!(en["name"], "Jane Doe");
        assert_eq!(en["geo"]["latitude"], 37.7936);
        assert_eq!(en["address"]["postalCode"], "94105");
    }

    #[test]
    fn test_breadcrumb_trail() {
        let config = test_site_config();
        let value = breadcrumbs(&SchemaContext::new(&config, Language::En, PageId::Blog));
        let items = value["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["item"], "https://www.example-realty.com/en/blog");
    }

    #[test]
    fn test_block_key() {
        let key = BlockKey::of(&json!({ "@type": ["Product", "Offer"], "@id": "x" }));
        assert_eq!(key.kind, "Product,Offer");
        assert_eq!(key.id.as_deref(), Some("x"));
        assert_eq!(BlockKey::of(&json!({})).kind, "");
    }

    #[test]
    fn test_script_text_escapes_close_tag() {
        let block = StructuredDataBlock::new(json!({ "name": "</script><b>" }));
        assert!(!block.to_script_text().contains("</"));
    }
}
