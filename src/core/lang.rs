//! Language resolution from URL paths.
//!
//! The site is served in two languages. The language of a request is a pure
//! function of its path: a leading `/zh` segment selects Chinese, everything
//! else (including `/en`, `/` and unknown prefixes) falls back to English.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported site languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// All languages, in rendering order.
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    /// Resolve the language of a URL path.
    ///
    /// Query strings and fragments are ignored; the prefix must be a whole
    /// path segment (`/zh`, `/zh/`, `/zh/blog`), so `/zhuhai` stays English.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();

        if first.eq_ignore_ascii_case("zh") {
            Self::Zh
        } else {
            Self::En
        }
    }

    /// Short language code used in URL prefixes (`en`, `zh`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// BCP 47 tag for `<html lang>` and hreflang (`en-US`, `zh-CN`).
    pub const fn html_tag(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Zh => "zh-CN",
        }
    }

    /// Open Graph locale (`en_US`, `zh_CN`).
    pub const fn og_locale(self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::Zh => "zh_CN",
        }
    }

    /// URL path prefix (`/en`, `/zh`).
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::En => "/en",
            Self::Zh => "/zh",
        }
    }

    /// The other supported language.
    pub const fn other(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
