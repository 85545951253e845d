//! Translation tables.
//!
//! Each language owns one static [`Strings`] table. Copy may contain
//! `{name}`/`{area}` placeholders, substituted with [`fill`] at render time.

mod en;
mod zh;

use crate::core::{Language, PageId};

/// Copy for a page's `<title>`, description and keywords.
#[derive(Debug)]
pub struct PageCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    /// Breadcrumb label.
    pub crumb: &'static str,
}

#[derive(Debug)]
pub struct NavCopy {
    pub home: &'static str,
    pub services: &'static str,
    pub market: &'static str,
    pub blog: &'static str,
    pub contact: &'static str,
    /// Label of the link to the other language.
    pub switch: &'static str,
    pub switch_aria: &'static str,
}

#[derive(Debug)]
pub struct HeroCopy {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub cta: &'static str,
    pub image_alt: &'static str,
}

#[derive(Debug)]
pub struct ServiceItem {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug)]
pub struct MarketCopy {
    pub heading: &'static str,
    pub median_price: &'static str,
    pub days_on_market: &'static str,
    pub active_listings: &'static str,
    pub year_over_year: &'static str,
    pub note: &'static str,
}

#[derive(Debug)]
pub struct ListingCopy {
    pub heading: &'static str,
    pub price: &'static str,
    pub cta: &'static str,
}

/// A blog post. `id` and `date` are shared across languages.
#[derive(Debug)]
pub struct Post {
    pub id: &'static str,
    pub date: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub body: &'static [&'static str],
}

#[derive(Debug)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug)]
pub struct ContactCopy {
    pub heading: &'static str,
    pub intro: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
    pub call: &'static str,
}

#[derive(Debug)]
pub struct SocialCopy {
    pub follow: &'static str,
    pub share: &'static str,
    pub email: &'static str,
    pub wechat: &'static str,
}

/// Error boundary messages.
#[derive(Debug)]
pub struct ErrorCopy {
    pub network: &'static str,
    pub generic: &'static str,
    pub reload: &'static str,
}

#[derive(Debug)]
pub struct NotFoundCopy {
    pub heading: &'static str,
    pub body: &'static str,
    pub back: &'static str,
}

#[derive(Debug)]
pub struct FooterCopy {
    pub rights: &'static str,
    pub license: &'static str,
}

/// Every user-visible string of the site in one language.
#[derive(Debug)]
pub struct Strings {
    pub nav: NavCopy,
    pub home: PageCopy,
    pub blog: PageCopy,
    pub not_found: PageCopy,
    pub hero: HeroCopy,
    pub services_heading: &'static str,
    pub services: &'static [ServiceItem],
    pub market: MarketCopy,
    pub listing: ListingCopy,
    pub blog_heading: &'static str,
    pub read_more: &'static str,
    pub posts: &'static [Post],
    pub faq_heading: &'static str,
    pub faq: &'static [FaqItem],
    pub contact: ContactCopy,
    pub social: SocialCopy,
    pub errors: ErrorCopy,
    pub missing: NotFoundCopy,
    pub footer: FooterCopy,
}

impl Strings {
    /// Head copy for a page.
    pub fn page(&self, page: PageId) -> &PageCopy {
        match page {
            PageId::Home => &self.home,
            PageId::Blog => &self.blog,
            PageId::NotFound => &self.not_found,
        }
    }
}

/// Translation table for a language.
pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::En => &en::STRINGS,
        Language::Zh => &zh::STRINGS,
    }
}

/// Substitute `{key}` placeholders.
///
/// Unknown placeholders are left as-is.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_owned();
    for (key, value) in vars {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}
