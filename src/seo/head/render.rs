//! Head serialization.

use super::{Head, HeadElement};
use crate::utils::html::{escape, escape_attr, is_void_element};

/// Serialize a head as a `<head>` element, one child per line.
pub fn render_head(head: &Head) -> String {
    let mut out = String::with_capacity(head.len() * 64 + 16);
    out.push_str("<head>\n");
    for element in head.elements() {
        render_element(element, &mut out);
        out.push('\n');
    }
    out.push_str("</head>");
    out
}

/// Serialize a single element.
///
/// Script and style bodies are written raw; their producers are responsible
/// for keeping `</` out of them.
fn render_element(element: &HeadElement, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    if is_void_element(&element.tag) {
        return;
    }

    if let Some(text) = &element.text {
        match element.tag.as_str() {
            "script" | "style" => out.push_str(text),
            _ => out.push_str(&escape(text)),
        }
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::head::parse_head;

    fn render(element: &HeadElement) -> String {
        let mut out = String::new();
        render_element(element, &mut out);
        out
    }

    #[test]
    fn test_render_elements() {
        assert_eq!(
            render(&HeadElement::meta_name("description", "A & B")),
            r#"<meta name="description" content="A &amp; B">"#
        );
        assert_eq!(
            render(&HeadElement::title("<Home>")),
            "<title>&lt;Home&gt;</title>"
        );
        assert_eq!(
            render(&HeadElement::json_ld(r#"{"a":"<\/script>"}"#)),
            r#"<script type="application/ld+json">{"a":"<\/script>"}</script>"#
        );
    }

    #[test]
    fn test_render_reparses() {
        let mut head = Head::new();
        head.set_html_lang("zh-CN");
        head.insert(HeadElement::title("杜简 | \"湾区\" 房产"));
        head.insert(HeadElement::meta_property("og:title", "It's <home>"));

        let doc = format!("<html lang=\"zh-CN\">{}<body></body></html>", render_head(&head));
        let parsed = parse_head(&doc).unwrap();
        assert_eq!(parsed.title(), head.title());
        assert_eq!(parsed.meta_property("og:title"), Some("It's <home>"));
    }
}
