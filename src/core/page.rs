//! Page identifiers and the route table.
//!
//! | Path                   | Page     | Language |
//! |------------------------|----------|----------|
//! | `/`                    | Home     | en       |
//! | `/en`, `/zh`           | Home     | en, zh   |
//! | `/en/blog`, `/zh/blog` | Blog     | en, zh   |
//! | `/404.html`            | NotFound | en       |

use super::Language;
use serde::Serialize;
use std::path::PathBuf;

/// Pages the site renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Home,
    Blog,
    NotFound,
}

impl PageId {
    /// Pages with a language-prefixed route (listed in the sitemap).
    pub const ROUTED: [Self; 2] = [Self::Home, Self::Blog];

    /// Path segment after the language prefix.
    const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Blog => "blog",
            Self::NotFound => "404.html",
        }
    }

    /// Canonical URL path of this page in the given language.
    ///
    /// No trailing slash: `/en`, `/zh/blog`.
    pub fn path(self, lang: Language) -> String {
        match self {
            Self::NotFound => "/404.html".to_owned(),
            Self::Home => lang.prefix().to_owned(),
            _ => format!("{}/{}", lang.prefix(), self.segment()),
        }
    }

    /// Identify the page a URL path points at.
    ///
    /// Only paths the site serves resolve: the blog lives under a language
    /// prefix, the not-found page at the root.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty() && *s != "index.html");

        let (prefixed, rest) = match segments.next() {
            None => return Some(Self::Home),
            Some(first) if first.eq_ignore_ascii_case("en") || first.eq_ignore_ascii_case("zh") => {
                (true, segments.next())
            }
            Some(first) => (false, Some(first)),
        };

        if segments.next().is_some() {
            return None;
        }

        match (prefixed, rest) {
            (_, None) => Some(Self::Home),
            (true, Some("blog")) => Some(Self::Blog),
            (false, Some("404.html")) => Some(Self::NotFound),
            _ => None,
        }
    }
}

/// A concrete (page, language) pair served at a URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub page: PageId,
    pub lang: Language,
    /// URL path this route is served at.
    pub path: String,
}

impl Route {
    pub fn new(page: PageId, lang: Language) -> Self {
        Self {
            page,
            lang,
            path: page.path(lang),
        }
    }

    /// Resolve a URL path to a route. Unknown pages yield `None`.
    pub fn resolve(path: &str) -> Option<Self> {
        let page = PageId::from_path(path)?;
        let lang = Language::from_path(path);
        let path = match path.split(['?', '#']).next().unwrap_or_default() {
            "" | "/" if page == PageId::Home => "/".to_owned(),
            _ => page.path(lang),
        };
        Some(Self { page, lang, path })
    }

    /// Every route the site renders, including the `/` alias and 404 page.
    pub fn all() -> Vec<Self> {
        let mut routes = vec![Self {
            page: PageId::Home,
            lang: Language::En,
            path: "/".to_owned(),
        }];
        for page in PageId::ROUTED {
            for lang in Language::ALL {
                routes.push(Self::new(page, lang));
            }
        }
        routes.push(Self::new(PageId::NotFound, Language::En));
        routes
    }
}

/// Map a URL path to its output file (`/` -> `index.html`, `/en` -> `en/index.html`).
///
/// Paths whose last segment has an extension map to themselves.
pub fn output_file(url_path: &str) -> PathBuf {
    let trimmed = url_path.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else if trimmed.rsplit('/').next().is_some_and(|last| last.contains('.')) {
        PathBuf::from(trimmed)
    } else {
        PathBuf::from(trimmed).join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_paths() {
        assert_eq!(PageId::Home.path(Language::En), "/en");
        assert_eq!(PageId::Home.path(Language::Zh), "/zh");
        assert_eq!(PageId::Blog.path(Language::Zh), "/zh/blog");
        assert_eq!(PageId::NotFound.path(Language::Zh), "/404.html");
    }

    #[test]
    fn test_page_from_path() {
        assert_eq!(PageId::from_path("/"), Some(PageId::Home));
        assert_eq!(PageId::from_path("/en"), Some(PageId::Home));
        assert_eq!(PageId::from_path("/zh/"), Some(PageId::Home));
        assert_eq!(PageId::from_path("/zh/index.html"), Some(PageId::Home));
        assert_eq!(PageId::from_path("/en/blog"), Some(PageId::Blog));
        assert_eq!(PageId::from_path("/zh/blog?page=2"), Some(PageId::Blog));
        assert_eq!(PageId::from_path("/404.html"), Some(PageId::NotFound));
        assert_eq!(PageId::from_path("/en/listings"), None);
        assert_eq!(PageId::from_path("/en/blog/extra"), None);
    }

    #[test]
    fn test_only_served_paths_resolve() {
        assert_eq!(PageId::from_path("/blog"), None);
        assert_eq!(PageId::from_path("/blog/"), None);
        assert_eq!(PageId::from_path("/en/404.html"), None);
        assert!(Route::resolve("/blog").is_none());
    }

    #[test]
    fn test_route_resolve() {
        let root = Route::resolve("/").unwrap();
        assert_eq!((root.page, root.lang, root.path.as_str()), (PageId::Home, Language::En, "/"));

        let zh = Route::resolve("/zh/").unwrap();
        assert_eq!((zh.page, zh.lang, zh.path.as_str()), (PageId::Home, Language::Zh, "/zh"));

        let blog = Route::resolve("/zh/blog/").unwrap();
        assert_eq!(blog.path, "/zh/blog");

        assert!(Route::resolve("/missing").is_none());
    }

    #[test]
    fn test_all_routes() {
        let paths: Vec<_> = Route::all().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            ["/", "/en", "/zh", "/en/blog", "/zh/blog", "/404.html"]
        );
    }

    #[test]
    fn test_output_file() {
        assert_eq!(output_file("/"), PathBuf::from("index.html"));
        assert_eq!(output_file("/en"), PathBuf::from("en/index.html"));
        assert_eq!(output_file("/zh/blog"), PathBuf::from("zh/blog/index.html"));
        assert_eq!(output_file("/404.html"), PathBuf::from("404.html"));
        assert_eq!(output_file("/site.css"), PathBuf::from("site.css"));
        assert_eq!(output_file("/zh/index.html"), PathBuf::from("zh/index.html"));
    }
}
