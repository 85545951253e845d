//! Page sections.
//!
//! Every section renders static markup for one language from the translation
//! tables. Text content never spans lines so the output survives
//! [`minify_markup`](crate::generator::minify_markup).

use super::{PageContext, RenderError, share};
use crate::config::MarketStats;
use crate::core::{Language, PageId};
use crate::i18n::{self, Post};
use crate::utils::html::{escape, escape_attr};
use std::fmt::{self, Write};
use std::fs;

/// A renderable block of the page body.
pub trait Section {
    /// Stable identifier, used as the element id and in logs.
    fn id(&self) -> &'static str;

    fn render(&self, ctx: &PageContext, out: &mut String) -> Result<(), RenderError>;
}

pub struct Nav;
pub struct Hero;
pub struct Services;
pub struct Market;
pub struct Listing;
pub struct Blog;
pub struct Faq;
pub struct Contact;
pub struct Social;
pub struct Missing;
pub struct Footer;

const HOME: &[&dyn Section] = &[
    &Nav, &Hero, &Services, &Market, &Listing, &Blog, &Faq, &Contact, &Social, &Footer,
];
const BLOG: &[&dyn Section] = &[&Nav, &Blog, &Social, &Footer];
const NOT_FOUND: &[&dyn Section] = &[&Nav, &Missing, &Footer];

/// Sections of a page, in document order.
pub fn sections_for(page: PageId) -> &'static [&'static dyn Section] {
    match page {
        PageId::Home => HOME,
        PageId::Blog => BLOG,
        PageId::NotFound => NOT_FOUND,
    }
}

impl Section for Nav {
    fn id(&self) -> &'static str {
        "nav"
    }

    fn render(&self, ctx: &PageContext, out: &mut String) -> Result<(), RenderError> {
        let nav = &ctx.strings.nav;
        let home = PageId::Home.path(ctx.lang);
        let switch_to = match ctx.route.page {
            PageId::NotFound => PageId::Home.path(ctx.lang.other()),
            page => page.path(ctx.lang.other()),
        };

        out.push_str("<nav class=\"site-nav\">\n");
        for (href, label) in [
            (home.clone(), nav.home),
            (format!("{home}#services"), nav.services),
            (format!("{home}#market"), nav.market),
            (PageId::Blog.path(ctx.lang), nav.blog),
            (format!("{home}#contact"), nav.contact),
        ] {
            link(out, &href, label)?;
        }
        writeln!(
            out,
            "<a class=\"lang-switch\" href=\"{}\" hreflang=\"{}\" lang=\"{}\" aria-label=\"{}\">{}</a>",
            escape_attr(&switch_to),
            ctx.lang.other().html_tag(),
            ctx.lang.other().html_tag(),
            escape_attr(nav.switch_aria),
            escape(nav.switch),
        )?;
        out.push_str("</nav>\n");
        Ok(())
    }
}

impl Section for Hero {
    fn id(&self) -> &'static str {
        "hero"
    }

    fn render(&self, ctx: &PageContext, out: &mut String) -> Result<(), RenderError> {
        let hero = &ctx.strings.hero;
        let areas = ctx.config.agent.areas.join(", ");
        let vars = [("name", ctx.name()), ("area", areas.as_str())];

        open(out, self.id(), "hero")?;
        if let Some(image) = &ctx.config.site.image {
            writeln!(
                out,
                "<img src=\"{}\" alt=\"{}\" fetchpriority=\"high\">",
                escape_attr(image),
                escape_attr(hero.image_alt),
            )?;
        }
        writeln!(out, "<h1>{}</h1>", escape(&i18n::fill(hero.heading, &vars)))?;
        writeln!(out, "<p>{}</p>", escape(&i18n::fill(hero.tagline, &vars)))?;
        writeln!(out, "<a class=\"cta\" href=\"#contact\">{}</a>", escape(hero.cta))?;
        out.push_str("</section>\n");
        Ok(())
    }
}

impl Section for Services {
    fn id(&self) -> &'static str {
        "services"
    }

    fn render(&self, ctx: &PageContext, out: &mut String) -> Result<(), RenderError> {
        open(out, self.id(), "services")?;
        writeln!(out, "<h2>{}</h2>", escape(ctx.strings.services_heading))?;
        out.push_str("<ul>\n");
        for item in ctx.strings.services {
            writeln!(
                out,
                "<li><h3>{}</h3><p>{}</p></li>",
                escape(item.title),
                escape(item.body)
            )?;
        }
        out.push_str("</ul>\n</section>\n");
        Ok(())
    }
}

impl Market {
    /// Statistics from `market.data` when configured, otherwise the inline values.
    pub fn load_stats(ctx: &PageContext) -> Result<MarketStats, RenderError> {
        let market = &ctx.config.market;
        let Some(path) = &market.data else {
            return Ok(market.stats.clone());
        };
        let content =
            fs::read_to_string(path).map_err(|err| RenderError::MarketData(path.clone(), err))?;
        serde_json::from_str(&content).map_err(|err| RenderError::MarketParse(path.clone(), err))
    }
}

impl Section for Market {
    fn id(&self) -> &'static str {
        "market"
    }

    fn render(&self, ctx: &PageContext, out: &mut String) -> Result<(), RenderError> {
        let stats = Self::load_stats(ctx)?;
        let copy = &ctx.strings.market;

        open(out, self.id(), "stats")?;
        writeln!(out, "<h2>{}</h2>", escape(copy.heading))?;
        out.push_str("<dl>\n");
        for (label, value) in [
            (copy.median_price, format_price(stats.median_price, "USD")),
            (copy.days_on_market, stats.days_on_market.to_string()),
            (copy.active_listings, group_digits(u64::from(stats.active_listings))),
            (copy.year_over_year, format!("{:+.1}%", stats.year_over_year)),
        ] {
            writeln!(out, "<div><dt>{}</dt><dd>{}</dd></div>", escape(label), escape(&value))?;
        }
        out.push_str("</dl>\n");
        writeln!(out, "<p class=\"note\">{}</p>", escape(copy.note))?;
        out.push_str("</section>\n");
        Ok(())
    }
}

impl Section for Listing {
    fn id(&self) -> &'static str {
        "listing"
    }

    fn render(&self, ctx: &PageContext, out: &mut String) -> Result<(), RenderError> {
        let listing = &ctx.config.listing;
        let Some(name) = listing.name.as_deref().filter(|_| listing.is_featured()) else {
            return Ok(());
        };
        let copy = &ctx.strings.listing;

        open(out, self.id(), "listing")?;
        writeln!(out, "<h2>{}</h2>", escape(copy.heading))?;
        if let Some(image) = &listing.image {
            writeln!(
                out,
                "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                escape_attr(image),
                escape_attr(name)
            )?;
        }
        writeln!(out, "<h3>{}</h3>", escape(name))?;
        if let Some(description) = &listing.description {
            writeln!(out, "<p>{}</p>", escape(description))?;
        }
        if let Some(price) = listing.price {
            writeln!(
                out,
                "<p class=\"price\">{} <strong>{}</strong></p>",
                escape(copy.price),
                escape(&format_price(price, &listing.currency))
            )?;
        }
        writeln!(out, "<a class=\"cta\" href=\"#contact\">{}</a>", escape(copy.cta))?;
        out.push_str("</section>\n");
        Ok(())
    }
}

impl Section for Blog {
    fn id(&self) -> &'static str {
        "blog"
    }

    fn render(&self, ctx: &PageContext, out: &mut String) -> Result<(), RenderError> {
        let strings = ctx.strings;
        open(out, self.id(), "blog")?;

        match ctx.route.page {
            PageId::Blog => {
                writeln!(out, "<h1>{}</h1>", escape(strings.blog_heading))?;
                for post in strings.posts {
                    render_post(out, post)?;
                }
            }
            _ => {
                writeln!(out, "<h2>{}</h2>", escape(strings.blog_heading))?;
                let blog = PageId::Blog.path(ctx.lang);
                out.push_str("<ul>\n");
                for post in strings.posts {
                    writeln!(
                        out,
                        "<li><time datetime=\"{date}\">{date}</time> <h3>{}</h3><p>{}</p><a href=\"{}#{}\">{}</a></li>",
                        escape(post.title),
                        escape(post.summary),
                        escape_attr(&blog),
                        post.id,
                        escape(strings.read_more),
                        date = post.date,
                    )?;
                }
                out.push_str("</ul>\n");
            }
        }

        out.push_str("</section>\n");
        Ok(())
    }
}

fn render_post(out: &mut String, post: &Post) -> fmt::Result {
    writeln!(out, "<article id=\"{}\">", post.id)?;
    writeln!(out, "<h2>{}</h2>", escape(post.title))?;
    writeln!(out, "<time datetime=\"{0}\">{0}</time>", post.date)?;
    for paragraph in post.body {
        writeln!(out, "<p>{}</p>", escape(paragraph))?;
    }
    out.push_str("</article>\n");
    Ok(())
}

impl Section for Faq {
    fn id(&self) -> &'static str {
        "faq"
    }

    fn render(&self, ctx: &PageContext, out: &mut String) -> Result<(), RenderError> {
        open(out, self.id(), "faq")?;
        writeln!(out, "<h2>{}</h2>", escape(ctx.strings.faq_heading))?;
        for item in ctx.strings.faq {
            writeln!(
                out,
                "<details><summary>{}</summary><p>{}</p></details>",
                escape(item.question),
                escape(item.answer)
            )?;
        }
        out.push_str("</section>\n");
        Ok(())
    }
}

impl Section for Contact {
    fn id(&self) -> &'static str {
        "contact"
    }

    fn render(&self, ctx: &PageContext, out: &mut String) -> Result<(), RenderError> {
        let copy = &ctx.strings.contact;
        let agent = &ctx.config.agent;

        open(out, self.id(), "contact")?;
        writeln!(out, "<h2>{}</h2>", escape(copy.heading))?;
        writeln!(out, "<p>{}</p>", escape(copy.intro))?;

        // A mailto form is the fallback when no form endpoint is configured
        let action = match (&ctx.config.build.form_action, &agent.email) {
            (Some(action), _) => Some((action.clone(), "")),
            (None, Some(email)) => Some((format!("mailto:{email}"), " enctype=\"text/plain\"")),
            (None, None) => None,
        };
        if let Some((action, enctype)) = action {
            writeln!(
                out,
                "<form action=\"{}\" method=\"post\"{enctype}>",
                escape_attr(&action)
            )?;
            for (name, kind, label) in [
                ("name", "text", copy.name),
                ("email", "email", copy.email),
                ("phone", "tel", copy.phone),
            ] {
                let required = if name == "phone" { "" } else { " required" };
                writeln!(
                    out,
                    "<label>{} <input type=\"{kind}\" name=\"{name}\"{required}></label>",
                    escape(label)
                )?;
            }
            writeln!(
                out,
                "<label>{} <textarea name=\"message\" rows=\"4\"></textarea></label>",
                escape(copy.message)
            )?;
            writeln!(out, "<button type=\"submit\">{}</button>", escape(copy.submit))?;
            out.push_str("</form>\n");
        }

        if let Some(phone) = &agent.phone {
            let digits: String = phone
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect();
            writeln!(
                out,
                "<p class=\"phone\">{} <a href=\"tel:{}\">{}</a></p>",
                escape(copy.call),
                digits,
                escape(phone)
            )?;
        }
        out.push_str("</section>\n");
        Ok(())
    }
}

impl Section for Social {
    fn id(&self) -> &'static str {
        "social"
    }

    fn render(&self, ctx: &PageContext, out: &mut String) -> Result<(), RenderError> {
        let copy = &ctx.strings.social;
        let profiles = &ctx.config.agent.social;

        open(out, self.id(), "social")?;
        let follow: Vec<_> = [
            ("facebook", "Facebook", &profiles.facebook),
            ("linkedin", "LinkedIn", &profiles.linkedin),
            ("instagram", "Instagram", &profiles.instagram),
        ]
        .into_iter()
        .filter_map(|(class, label, url)| url.as_deref().map(|url| (class, label, url)))
        .collect();

        if !follow.is_empty() || profiles.wechat.is_some() {
            writeln!(out, "<h2>{}</h2>", escape(copy.follow))?;
            out.push_str("<p class=\"follow\">\n");
            for (class, label, url) in follow {
                writeln!(
                    out,
                    "<a class=\"{class}\" href=\"{}\" rel=\"noopener\" target=\"_blank\">{label}</a>",
                    escape_attr(url)
                )?;
            }
            if let Some(wechat) = &profiles.wechat {
                writeln!(out, "<span class=\"wechat\">{}: {}</span>", escape(copy.wechat), escape(wechat))?;
            }
            out.push_str("</p>\n");
        }

        writeln!(out, "<h2>{}</h2>", escape(copy.share))?;
        out.push_str("<p class=\"share\">\n");
        for link in share::share_links(&ctx.canonical, &ctx.title, ctx.lang) {
            writeln!(
                out,
                "<a class=\"{}\" href=\"{}\" rel=\"noopener\" target=\"_blank\">{}</a>",
                link.network,
                escape_attr(&link.href),
                escape(link.label)
            )?;
        }
        out.push_str("</p>\n</section>\n");
        Ok(())
    }
}

impl Section for Missing {
    fn id(&self) -> &'static str {
        "missing"
    }

    /// Shows the notice in both languages; the 404 page has no language prefix.
    fn render(&self, _ctx: &PageContext, out: &mut String) -> Result<(), RenderError> {
        open(out, self.id(), "missing")?;
        for lang in Language::ALL {
            let copy = &i18n::strings(lang).missing;
            writeln!(out, "<div lang=\"{}\">", lang.html_tag())?;
            writeln!(out, "<h1>{}</h1>", escape(copy.heading))?;
            writeln!(out, "<p>{}</p>", escape(copy.body))?;
            link(out, &PageId::Home.path(lang), copy.back)?;
            out.push_str("</div>\n");
        }
        out.push_str("</section>\n");
        Ok(())
    }
}

impl Section for Footer {
    fn id(&self) -> &'static str {
        "footer"
    }

    fn render(&self, ctx: &PageContext, out: &mut String) -> Result<(), RenderError> {
        let copy = &ctx.strings.footer;
        let agent = &ctx.config.agent;

        out.push_str("<footer>\n");
        writeln!(out, "<p>&copy; {} {}</p>", escape(ctx.name()), escape(copy.rights))?;
        if let Some(license) = &agent.license {
            writeln!(out, "<p>{}: {}</p>", escape(copy.license), escape(license))?;
        }
        if let Some(address) = agent.address_line() {
            writeln!(out, "<address>{}</address>", escape(&address))?;
        }
        out.push_str("</footer>\n");
        Ok(())
    }
}

fn open(out: &mut String, id: &str, class: &str) -> fmt::Result {
    writeln!(out, "<section id=\"{id}\" class=\"{class}\">")
}

fn link(out: &mut String, href: &str, label: &str) -> fmt::Result {
    writeln!(out, "<a href=\"{}\">{}</a>", escape_attr(href), escape(label))
}

/// `1850000` -> `1,850,000`.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-unit price with the currency symbol for USD, the ISO code otherwise.
fn format_price(amount: u64, currency: &str) -> String {
    match currency {
        "USD" => format!("${}", group_digits(amount)),
        code => format!("{} {code}", group_digits(amount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use crate::core::Route;
    use tempfile::TempDir;

    fn render(section: &dyn Section, path: &str) -> String {
        let config = test_site_config();
        let route = Route::resolve(path).unwrap();
        let ctx = PageContext::new(&config, &route);
        let mut out = String::new();
        section.render(&ctx, &mut out).unwrap();
        out
    }

    #[test]
    fn test_page_composition() {
        let ids = |page| sections_for(page).iter().map(|s| s.id()).collect::<Vec<_>>();
        assert_eq!(ids(PageId::Blog), ["nav", "blog", "social", "footer"]);
        assert_eq!(ids(PageId::NotFound), ["nav", "missing", "footer"]);
        assert!(ids(PageId::Home).contains(&"market"));
    }

    #[test]
    fn test_nav_language_switch() {
        let en = render(&Nav, "/en/blog");
        assert!(en.contains("href=\"/zh/blog\" hreflang=\"zh-CN\""));
        assert!(en.contains(">中文</a>"));

        let zh = render(&Nav, "/zh");
        assert!(zh.contains("href=\"/en\" hreflang=\"en-US\""));
        assert!(zh.contains(">English</a>"));
    }

    #[test]
    fn test_hero_fills_placeholders() {
        let html = render(&Hero, "/en");
        assert!(html.contains("Find your next home with Jane Doe"));
        assert!(html.contains("San Francisco, Oakland, San Mateo"));
        assert!(!html.contains('{'));
    }

    #[test]
    fn test_market_inline_stats() {
        let html = render(&Market, "/en");
        assert!(html.contains("$1,350,000"));
        assert!(html.contains("+4.2%"));
    }

    #[test]
    fn test_market_data_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("market.json");
        fs::write(&path, r#"{"median_price": 990000, "year_over_year": -1.5}"#).unwrap();

        let mut config = test_site_config();
        config.market.data = Some(path);
        let route = Route::resolve("/zh").unwrap();
        let ctx = PageContext::new(&config, &route);
        let mut out = String::new();
        Market.render(&ctx, &mut out).unwrap();
        assert!(out.contains("$990,000"));
        assert!(out.contains("-1.5%"));
    }

    #[test]
    fn test_market_data_missing() {
        let mut config = test_site_config();
        config.market.data = Some("/nonexistent/market.json".into());
        let route = Route::resolve("/en").unwrap();
        let ctx = PageContext::new(&config, &route);
        let err = Market.render(&ctx, &mut String::new()).unwrap_err();
        assert!(matches!(err, RenderError::MarketData(..)));
    }

    #[test]
    fn test_listing_hidden_without_name() {
        let mut config = test_site_config();
        config.listing.name = None;
        let route = Route::resolve("/en").unwrap();
        let ctx = PageContext::new(&config, &route);
        let mut out = String::new();
        Listing.render(&ctx, &mut out).unwrap();
        assert!(out.is_empty());

        assert!(render(&Listing, "/en").contains("$1,850,000"));
    }

    #[test]
    fn test_blog_preview_and_full() {
        let preview = render(&Blog, "/zh");
        assert!(preview.contains("href=\"/zh/blog#pricing-your-home\""));

        let full = render(&Blog, "/en/blog");
        assert!(full.contains("<article id=\"first-time-buyer-guide\">"));
        assert!(full.contains("<time datetime=\"2024-08-20\">"));
    }

    #[test]
    fn test_contact_mailto_fallback() {
        let html = render(&Contact, "/en");
        assert!(html.contains("action=\"mailto:jane@example-realty.com\""));
        assert!(html.contains("href=\"tel:+14155550100\""));
    }

    #[test]
    fn test_social_share_links() {
        let html = render(&Social, "/zh/blog");
        assert!(html.contains("class=\"weibo\""));
        assert!(html.contains("https%3A%2F%2Fwww.example-realty.com%2Fzh%2Fblog"));
        assert!(html.contains("微信: example_realty"));
    }

    #[test]
    fn test_missing_is_bilingual() {
        let html = render(&Missing, "/404.html");
        assert!(html.contains("Page not found"));
        assert!(html.contains("页面未找到"));
        assert!(html.contains("href=\"/zh\""));
    }

    #[test]
    fn test_text_never_spans_lines() {
        let config = test_site_config();
        for route in Route::all() {
            let ctx = PageContext::new(&config, &route);
            let mut out = String::new();
            for section in sections_for(route.page) {
                section.render(&ctx, &mut out).unwrap();
            }
            for line in out.lines() {
                assert!(line.starts_with('<'), "{}: {line}", route.path);
            }
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(format_price(1_250_000, "USD"), "$1,250,000");
        assert_eq!(format_price(8_800_000, "CNY"), "8,800,000 CNY");
    }
}
