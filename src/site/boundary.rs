//! Error boundary around section rendering.
//!
//! A failing section is retried at most [`MAX_RETRIES`] times. When every
//! attempt fails, a localized fallback with a reload link is rendered in its
//! place and the rest of the page is unaffected.

use super::{PageContext, RenderError, sections::Section};
use crate::core::Language;
use crate::i18n;
use crate::log;
use crate::utils::html::{escape, escape_attr};
use std::error::Error;

/// Retries after the first failed attempt.
pub const MAX_RETRIES: usize = 2;

/// Failure classes with distinct user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Generic,
}

impl ErrorKind {
    pub fn message(self, lang: Language) -> &'static str {
        let errors = &i18n::strings(lang).errors;
        match self {
            Self::Network => errors.network,
            Self::Generic => errors.generic,
        }
    }
}

/// Classify an error by its message chain.
///
/// Any message mentioning `fetch`, `network` or `timeout` (case-insensitive)
/// is a network failure.
pub fn classify(err: &(dyn Error + 'static)) -> ErrorKind {
    let mut current = Some(err);
    while let Some(err) = current {
        let message = err.to_string().to_lowercase();
        if ["fetch", "network", "timeout"]
            .iter()
            .any(|needle| message.contains(needle))
        {
            return ErrorKind::Network;
        }
        current = err.source();
    }
    ErrorKind::Generic
}

/// How a section ended up on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered { attempts: usize },
    Fallback { attempts: usize, kind: ErrorKind },
}

/// Render `section` into `out`, retrying and falling back as needed.
pub fn render_section(section: &dyn Section, ctx: &PageContext, out: &mut String) -> Outcome {
    let mut last_error: Option<RenderError> = None;

    for attempt in 1..=MAX_RETRIES + 1 {
        let mut buf = String::new();
        match section.render(ctx, &mut buf) {
            Ok(()) => {
                out.push_str(&buf);
                return Outcome::Rendered { attempts: attempt };
            }
            Err(err) => {
                crate::debug!("boundary"; "{} attempt {} failed: {}", section.id(), attempt, err);
                last_error = Some(err);
            }
        }
    }

    let kind = last_error.as_ref().map_or(ErrorKind::Generic, |err| classify(err));
    if let Some(err) = &last_error {
        log!("boundary"; "{} on {}: {}", section.id(), ctx.route.path, err);
    }
    fallback(section.id(), kind, ctx, out);
    Outcome::Fallback {
        attempts: MAX_RETRIES + 1,
        kind,
    }
}

fn fallback(id: &str, kind: ErrorKind, ctx: &PageContext, out: &mut String) {
    out.push_str(&format!(
        "<section id=\"{}\" class=\"error-boundary\" role=\"alert\">\n<p>{}</p>\n<a class=\"button\" href=\"{}\">{}</a>\n</section>\n",
        escape_attr(id),
        escape(kind.message(ctx.lang)),
        escape_attr(&ctx.route.path),
        escape(ctx.strings.errors.reload),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use crate::core::Route;
    use std::cell::Cell;
    use std::io;
    use std::path::PathBuf;

    /// Fails the first `failures` renders.
    struct Flaky {
        failures: usize,
        calls: Cell<usize>,
        error: fn() -> RenderError,
    }

    impl Flaky {
        fn new(failures: usize, error: fn() -> RenderError) -> Self {
            Self {
                failures,
                calls: Cell::new(0),
                error,
            }
        }
    }

    impl Section for Flaky {
        fn id(&self) -> &'static str {
            "flaky"
        }

        fn render(&self, _ctx: &PageContext, out: &mut String) -> Result<(), RenderError> {
            self.calls.set(self.calls.get() + 1);
            if self.calls.get() <= self.failures {
                return Err((self.error)());
            }
            out.push_str("<p>ok</p>");
            Ok(())
        }
    }

    fn network_error() -> RenderError {
        RenderError::MarketData(
            PathBuf::from("market.json"),
            io::Error::new(io::ErrorKind::TimedOut, "operation timed out"),
        )
    }

    fn generic_error() -> RenderError {
        RenderError::Format(std::fmt::Error)
    }

    #[test]
    fn test_success_after_retries() {
        let config = test_site_config();
        let route = Route::resolve("/en").unwrap();
        let ctx = PageContext::new(&config, &route);
        let section = Flaky::new(2, generic_error);

        let mut out = String::new();
        assert_eq!(
            render_section(&section, &ctx, &mut out),
            Outcome::Rendered { attempts: 3 }
        );
        assert_eq!(out, "<p>ok</p>");
    }

    #[test]
    fn test_fallback_after_three_attempts() {
        let config = test_site_config();
        let route = Route::resolve("/zh").unwrap();
        let ctx = PageContext::new(&config, &route);
        let section = Flaky::new(usize::MAX, generic_error);

        let mut out = String::new();
        let outcome = render_section(&section, &ctx, &mut out);
        assert_eq!(
            outcome,
            Outcome::Fallback {
                attempts: 3,
                kind: ErrorKind::Generic
            }
        );
        assert_eq!(section.calls.get(), 3);
        assert!(out.contains("error-boundary"));
        assert!(out.contains("加载此部分时出现问题"));
        assert!(out.contains("重新加载"));
        assert!(out.contains("href=\"/zh\""));
    }

    #[test]
    fn test_network_fallback_message() {
        let config = test_site_config();
        let route = Route::resolve("/en").unwrap();
        let ctx = PageContext::new(&config, &route);
        let section = Flaky::new(usize::MAX, network_error);

        let mut out = String::new();
        let outcome = render_section(&section, &ctx, &mut out);
        assert!(matches!(outcome, Outcome::Fallback { kind: ErrorKind::Network, .. }));
        assert!(out.contains("check your connection"));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&network_error()), ErrorKind::Network);
        assert_eq!(classify(&generic_error()), ErrorKind::Generic);

        let timeout = io::Error::new(io::ErrorKind::Other, "Request TIMEOUT");
        assert_eq!(classify(&timeout), ErrorKind::Network);
        let net = io::Error::new(io::ErrorKind::Other, "NetworkError when attempting to fetch");
        assert_eq!(classify(&net), ErrorKind::Network);
        let other = io::Error::new(io::ErrorKind::Other, "permission denied");
        assert_eq!(classify(&other), ErrorKind::Generic);
    }

    /// A writer that rejects every write.
    struct Closed;

    impl std::fmt::Write for Closed {
        fn write_str(&mut self, _: &str) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    struct Unwritable;

    impl Section for Unwritable {
        fn id(&self) -> &'static str {
            "unwritable"
        }

        fn render(&self, _ctx: &PageContext, _out: &mut String) -> Result<(), RenderError> {
            use std::fmt::Write;
            writeln!(Closed, "<p>never</p>")?;
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_reaches_boundary() {
        let config = test_site_config();
        let route = Route::resolve("/en").unwrap();
        let ctx = PageContext::new(&config, &route);

        let mut out = String::new();
        let outcome = render_section(&Unwritable, &ctx, &mut out);
        assert_eq!(
            outcome,
            Outcome::Fallback {
                attempts: 3,
                kind: ErrorKind::Generic
            }
        );
        assert!(out.contains("id=\"unwritable\""));
        assert!(!out.contains("never"));
    }
}
