//! Adopt the head of an existing HTML document.

use super::{Head, HeadElement};
use crate::utils::html::unescape;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeadError {
    #[error("failed to parse HTML: {0}")]
    Parse(String),

    #[error("document has no <head> element")]
    MissingHead,
}

/// Parse the `<head>` of a full document, plus `<html lang>`.
///
/// Elements repeating an already-seen key are dropped (first one wins).
pub fn parse_head(html: &str) -> Result<Head, HeadError> {
    let dom = tl::parse(html, tl::ParserOptions::default())
        .map_err(|e| HeadError::Parse(format!("{e:?}")))?;
    let parser = dom.parser();

    let head_tag = dom
        .query_selector("head")
        .and_then(|mut found| found.next())
        .and_then(|handle| handle.get(parser))
        .and_then(tl::Node::as_tag)
        .ok_or(HeadError::MissingHead)?;

    let mut head = Head::new();
    if let Some(lang) = dom
        .query_selector("html")
        .and_then(|mut found| found.next())
        .and_then(|handle| handle.get(parser))
        .and_then(tl::Node::as_tag)
        .and_then(|html| attribute(html, "lang"))
    {
        head.set_html_lang(&lang);
    }

    for handle in head_tag.children().top().iter() {
        if let Some(tl::Node::Tag(tag)) = handle.get(parser) {
            head.insert(to_element(tag, parser));
        }
    }
    Ok(head)
}

/// Parse a bare sequence of head elements (no `<html>`/`<head>` wrapper).
#[cfg(test)]
pub fn parse_fragment(html: &str) -> Result<Head, HeadError> {
    let dom = tl::parse(html, tl::ParserOptions::default())
        .map_err(|e| HeadError::Parse(format!("{e:?}")))?;
    let parser = dom.parser();

    let mut head = Head::new();
    for handle in dom.children() {
        if let Some(tl::Node::Tag(tag)) = handle.get(parser) {
            head.insert(to_element(tag, parser));
        }
    }
    Ok(head)
}

fn attribute(tag: &tl::HTMLTag, name: &str) -> Option<String> {
    tag.attributes()
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .and_then(|(_, value)| value)
        .map(|value| unescape(&value).into_owned())
}

/// Offset of attribute `name` in a lowercased opening tag.
fn source_position(open_tag: &str, name: &str) -> usize {
    let bytes = open_tag.as_bytes();
    open_tag
        .match_indices(name)
        .find(|(start, _)| {
            let end = start + name.len();
            *start > 0
                && bytes[start - 1].is_ascii_whitespace()
                && bytes
                    .get(end)
                    .is_none_or(|b| matches!(b, b'=' | b'/' | b'>') || b.is_ascii_whitespace())
        })
        .map_or(usize::MAX, |(start, _)| start)
}

fn to_element(tag: &tl::HTMLTag, parser: &tl::Parser) -> HeadElement {
    let mut element = HeadElement::new(tag.name().as_utf8_str());

    // tl stores attributes in a hash map; restore source order
    let raw = tag.raw().as_utf8_str();
    let open_tag = raw.split('>').next().unwrap_or_default().to_ascii_lowercase();
    let mut attrs: Vec<_> = tag.attributes().iter().collect();
    attrs.sort_by_key(|(key, _)| source_position(&open_tag, &key.to_ascii_lowercase()));

    for (key, value) in attrs {
        let value = value.map(|v| unescape(&v).into_owned()).unwrap_or_default();
        element.set_attr(&key, value);
    }

    match element.tag.as_str() {
        "title" => {
            let text = tag.inner_text(parser);
            element.text = Some(unescape(text.trim()).into_owned());
        }
        // Raw text: entities are not decoded
        "script" | "style" | "noscript" => {
            let text = tag.inner_text(parser);
            if !text.trim().is_empty() {
                element.text = Some(text.trim().to_owned());
            }
        }
        _ => {}
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::head::TagKey;

    const DOC: &str = r#"<!DOCTYPE html>
<html lang="en-US">
<head>
  <meta charset="utf-8">
  <title>Jane Doe &amp; Co</title>
  <meta name="Description" content="Homes &quot;for&quot; sale">
  <meta name="description" content="duplicate">
  <link rel="canonical" href="https://a.com/en">
  <link rel="alternate" hreflang="zh-CN" href="https://a.com/zh">
  <link rel="icon" href="/favicon.ico">
  <script type="application/ld+json">{"@context":"https://schema.org","@type":"FAQPage"}</script>
</head>
<body><p>hi</p></body>
</html>"#;

    #[test]
    fn test_attribute_source_order() {
        let head = parse_fragment(
            r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin data-x="1">"#,
        )
        .unwrap();
        let link = head.elements().next().unwrap();
        let names: Vec<_> = link.attrs.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["rel", "href", "crossorigin", "data-x"]);
    }

    #[test]
    fn test_parse_document() {
        let head = parse_head(DOC).unwrap();
        assert_eq!(head.html_lang(), Some("en-US"));
        assert_eq!(head.title(), Some("Jane Doe & Co"));
        assert_eq!(head.meta_name("description"), Some("Homes \"for\" sale"));
        assert_eq!(head.canonical(), Some("https://a.com/en"));
        assert_eq!(head.alternates().count(), 1);
        // duplicate description dropped
        assert_eq!(head.len(), 7);
        assert!(head.keys().any(|k| matches!(k, TagKey::JsonLd(b) if b.kind == "FAQPage")));
    }

    #[test]
    fn test_missing_head() {
        assert!(matches!(
            parse_head("<p>no head here</p>"),
            Err(HeadError::MissingHead)
        ));
    }

    #[test]
    fn test_parse_fragment() {
        let head =
            parse_fragment(r#"<title>X</title><meta property="og:title" content="X">"#).unwrap();
        assert_eq!(head.title(), Some("X"));
        assert_eq!(head.meta_property("og:title"), Some("X"));
        assert_eq!(head.html_lang(), None);
    }
}
