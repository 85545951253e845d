//! Share-intent links.

use crate::core::Language;
use crate::i18n;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in query values: everything but RFC 3986 unreserved.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    /// Network identifier, used as a CSS class.
    pub network: &'static str,
    pub label: &'static str,
    pub href: String,
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Share links for a page, in display order.
pub fn share_links(url: &str, title: &str, lang: Language) -> Vec<ShareLink> {
    let (url, title) = (encode(url), encode(title));
    vec![
        ShareLink {
            network: "facebook",
            label: "Facebook",
            href: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        },
        ShareLink {
            network: "x",
            label: "X",
            href: format!("https://twitter.com/intent/tweet?url={url}&text={title}"),
        },
        ShareLink {
            network: "linkedin",
            label: "LinkedIn",
            href: format!("https://www.linkedin.com/sharing/share-offsite/?url={url}"),
        },
        ShareLink {
            network: "weibo",
            label: "Weibo",
            href: format!("https://service.weibo.com/share/share.php?url={url}&title={title}"),
        },
        ShareLink {
            network: "email",
            label: i18n::strings(lang).social.email,
            href: format!("mailto:?subject={title}&body={url}"),
        },
    ]
}
