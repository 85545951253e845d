//! `realty sync`: re-synchronize the head of an existing HTML file.
//!
//! Only the `<head>` element and the `lang` attribute of `<html>` are
//! rewritten; the rest of the document is kept byte for byte.

use crate::cli::SyncArgs;
use crate::config::SiteConfig;
use crate::core::Route;
use crate::seo::head::{parse_head, render_head};
use crate::seo::{DescriptorTable, HeadSync, SyncReport};
use crate::{debug, log};
use anyhow::{Context, Result, anyhow, bail};
use regex::Regex;
use std::fs;
use std::sync::OnceLock;

fn head_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<head(?:[ \t\r\n][^>]*)?>.*?</head[ \t\r\n]*>").unwrap())
}

fn html_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<html(?:[ \t\r\n][^>]*)?>").unwrap())
}

fn lang_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)([ \t\r\n])lang[ \t\r\n]*=[ \t\r\n]*(?:"[^"]*"|'[^']*'|[^ \t\r\n>]+)"#)
            .unwrap()
    })
}

/// Execute the sync command.
pub fn run_sync(args: &SyncArgs, config: &SiteConfig) -> Result<()> {
    let Some(route) = Route::resolve(&args.path) else {
        bail!("no page is served at `{}`", args.path);
    };
    let html = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let (synced, report) = sync_document(&html, config, &route)
        .with_context(|| format!("Failed to sync {}", args.file.display()))?;

    if args.dry {
        print!("{synced}");
        return Ok(());
    }

    if report.is_noop() {
        log!("sync"; "{} is up to date", args.file.display());
        return Ok(());
    }
    fs::write(&args.file, synced)
        .with_context(|| format!("Failed to write {}", args.file.display()))?;
    log!(
        "sync";
        "{}: {} created, {} updated, {} removed",
        args.file.display(),
        report.created,
        report.updated,
        report.removed
    );
    Ok(())
}

/// Synchronize a document's head against the descriptor for `route`.
fn sync_document(html: &str, config: &SiteConfig, route: &Route) -> Result<(String, SyncReport)> {
    let span = head_re()
        .find(html)
        .ok_or_else(|| anyhow!("document has no <head> element"))?
        .range();

    let descriptor = DescriptorTable::new(config).get(route.page, route.lang);
    for warning in descriptor.length_warnings() {
        debug!("seo"; "{}", warning);
    }

    let mut sync = HeadSync::attach(parse_head(html)?);
    let report = sync.sync(&descriptor);
    let head = sync
        .head()
        .ok_or_else(|| anyhow!("head synchronizer is detached"))?;

    let mut out = String::with_capacity(html.len() + 1024);
    out.push_str(&set_html_lang(&html[..span.start], descriptor.html_lang()));
    out.push_str(&render_head(head));
    out.push_str(&html[span.end..]);
    Ok((out, report))
}

/// Rewrite the `lang` attribute of the `<html>` tag in `prefix`.
fn set_html_lang(prefix: &str, lang: &str) -> String {
    let Some(tag) = html_tag_re().find(prefix) else {
        return prefix.to_owned();
    };
    let old = tag.as_str();
    let new = if lang_attr_re().is_match(old) {
        lang_attr_re()
            .replace(old, format!("${{1}}lang=\"{lang}\""))
            .into_owned()
    } else {
        format!("<html lang=\"{lang}\"{}", &old["<html".len()..])
    };
    format!("{}{new}{}", &prefix[..tag.start()], &prefix[tag.end()..])
}
