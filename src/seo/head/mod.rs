//! In-memory document head with a keyed element registry.
//!
//! ```text
//! Head
//! ├── slots      Vec<Option<Slot>>        element order, tombstoned on removal
//! ├── registry   TagKey -> ElementId      one live element per key
//! └── alternates Vec<ElementId>           hreflang links (unkeyed, replaced as a set)
//! ```
//!
//! A [`Head`] is read-only outside this module. Mutation goes through
//! [`HeadSync`], which is the single writer; the parser builds heads through
//! the same private methods.

mod parse;
mod render;
mod sync;

#[cfg(test)]
pub use parse::parse_fragment;
pub use parse::{HeadError, parse_head};
pub use render::render_head;
pub use sync::{HeadSync, SyncReport};

use crate::seo::schema::BlockKey;
use rustc_hash::FxHashMap;

/// Marker attribute on elements written by the synchronizer.
pub const SYNC_MARKER: &str = "data-sync";

/// Identity of a keyed head element.
///
/// Attribute values are lowercased, so `<meta name="Description">` and
/// `<meta name="description">` share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagKey {
    Title,
    Charset,
    Name(String),
    Property(String),
    HttpEquiv(String),
    Canonical,
    JsonLd(BlockKey),
}

/// Handle to a slot in a [`Head`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// A single element inside `<head>`.
#[derive(Debug, Clone)]
pub struct HeadElement {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
}

impl HeadElement {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag: String = tag.into();
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            text: None,
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(&name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::new("title").with_text(text)
    }

    #[cfg(test)]
    pub fn charset(charset: &str) -> Self {
        Self::new("meta").attr("charset", charset)
    }

    pub fn meta_name(name: &str, content: impl Into<String>) -> Self {
        Self::new("meta").attr("name", name).attr("content", content)
    }

    pub fn meta_property(property: &str, content: impl Into<String>) -> Self {
        Self::new("meta")
            .attr("property", property)
            .attr("content", content)
    }

    pub fn meta_http_equiv(header: &str, content: impl Into<String>) -> Self {
        Self::new("meta")
            .attr("http-equiv", header)
            .attr("content", content)
    }

    pub fn canonical(href: impl Into<String>) -> Self {
        Self::new("link").attr("rel", "canonical").attr("href", href)
    }

    pub fn alternate(hreflang: &str, href: impl Into<String>) -> Self {
        Self::new("link")
            .attr("rel", "alternate")
            .attr("hreflang", hreflang)
            .attr("href", href)
    }

    pub fn json_ld(text: impl Into<String>) -> Self {
        Self::new("script")
            .attr("type", "application/ld+json")
            .with_text(text)
    }

    /// Attribute value by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set an attribute, returning whether the value changed.
    fn set_attr(&mut self, name: &str, value: String) -> bool {
        match self.attrs.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
            Some((_, current)) if *current == value => false,
            Some((_, current)) => {
                *current = value;
                true
            }
            None => {
                self.attrs.push((name.to_ascii_lowercase(), value));
                true
            }
        }
    }

    /// Overwrite attributes and text with those of `target`.
    ///
    /// Attributes absent from `target` are kept. Returns whether anything changed.
    fn merge_from(&mut self, target: &HeadElement) -> bool {
        let mut changed = false;
        for (name, value) in &target.attrs {
            changed |= self.set_attr(name, value.clone());
        }
        if target.text.is_some() && self.text != target.text {
            self.text.clone_from(&target.text);
            changed = true;
        }
        changed
    }

    /// Whether this is an hreflang alternate link.
    pub fn is_alternate(&self) -> bool {
        self.tag == "link"
            && self
                .get("rel")
                .is_some_and(|rel| rel.eq_ignore_ascii_case("alternate"))
            && self.has("hreflang")
    }

    /// Registry key, when the element is keyed.
    ///
    /// A JSON-LD script whose body is not valid JSON has no key.
    pub fn key(&self) -> Option<TagKey> {
        let lower = |v: &str| v.trim().to_ascii_lowercase();
        match self.tag.as_str() {
            "title" => Some(TagKey::Title),
            "meta" => {
                if self.has("charset") {
                    Some(TagKey::Charset)
                } else if let Some(name) = self.get("name") {
                    Some(TagKey::Name(lower(name)))
                } else if let Some(property) = self.get("property") {
                    Some(TagKey::Property(lower(property)))
                } else {
                    self.get("http-equiv").map(|h| TagKey::HttpEquiv(lower(h)))
                }
            }
            "link" => self
                .get("rel")
                .filter(|rel| rel.eq_ignore_ascii_case("canonical"))
                .map(|_| TagKey::Canonical),
            "script" => {
                let is_json_ld = self
                    .get("type")
                    .is_some_and(|t| t.trim().eq_ignore_ascii_case("application/ld+json"));
                if !is_json_ld {
                    return None;
                }
                let value = serde_json::from_str(self.text.as_deref()?).ok()?;
                Some(TagKey::JsonLd(BlockKey::of(&value)))
            }
            _ => None,
        }
    }
}

/// Attribute order does not affect equality.
impl PartialEq for HeadElement {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.text == other.text
            && self.attrs.len() == other.attrs.len()
            && self
                .attrs
                .iter()
                .all(|(name, value)| other.get(name) == Some(value.as_str()))
    }
}

impl Eq for HeadElement {}

#[derive(Debug, Clone)]
struct Slot {
    element: HeadElement,
    key: Option<TagKey>,
}

/// Document head model.
#[derive(Debug, Clone, Default)]
pub struct Head {
    html_lang: Option<String>,
    slots: Vec<Option<Slot>>,
    registry: FxHashMap<TagKey, ElementId>,
    alternates: Vec<ElementId>,
    live: usize,
}

impl Head {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<html lang>` of the document.
    pub fn html_lang(&self) -> Option<&str> {
        self.html_lang.as_deref()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Live elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &HeadElement> {
        self.slots.iter().flatten().map(|slot| &slot.element)
    }

    pub fn get(&self, key: &TagKey) -> Option<&HeadElement> {
        self.registry.get(key).and_then(|id| self.element(*id))
    }

    /// Text of the `<title>` element.
    pub fn title(&self) -> Option<&str> {
        self.get(&TagKey::Title)?.text.as_deref()
    }

    /// `content` of `<meta name=...>`.
    pub fn meta_name(&self, name: &str) -> Option<&str> {
        self.get(&TagKey::Name(name.to_ascii_lowercase()))?
            .get("content")
    }

    /// `content` of `<meta property=...>`.
    pub fn meta_property(&self, property: &str) -> Option<&str> {
        self.get(&TagKey::Property(property.to_ascii_lowercase()))?
            .get("content")
    }

    pub fn canonical(&self) -> Option<&str> {
        self.get(&TagKey::Canonical)?.get("href")
    }

    /// hreflang alternate links in document order.
    pub fn alternates(&self) -> impl Iterator<Item = &HeadElement> {
        self.alternates.iter().filter_map(|id| self.element(*id))
    }

    /// Every registered key.
    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &TagKey> {
        self.registry.keys()
    }

    fn element(&self, id: ElementId) -> Option<&HeadElement> {
        self.slots.get(id.0)?.as_ref().map(|slot| &slot.element)
    }

    fn lookup(&self, key: &TagKey) -> Option<ElementId> {
        self.registry.get(key).copied()
    }

    fn set_html_lang(&mut self, lang: &str) -> bool {
        if self.html_lang.as_deref() == Some(lang) {
            return false;
        }
        self.html_lang = Some(lang.to_owned());
        true
    }

    /// Append an element.
    ///
    /// Returns `None` without inserting when the element's key is already
    /// registered: the first element with a key wins.
    fn insert(&mut self, element: HeadElement) -> Option<ElementId> {
        let key = element.key();
        if key.as_ref().is_some_and(|k| self.registry.contains_key(k)) {
            return None;
        }

        let id = ElementId(self.slots.len());
        if element.is_alternate() {
            self.alternates.push(id);
        }
        if let Some(key) = &key {
            self.registry.insert(key.clone(), id);
        }
        self.slots.push(Some(Slot { element, key }));
        self.live += 1;
        Some(id)
    }

    /// Merge `target` into the element at `id`. Returns whether it changed.
    fn update(&mut self, id: ElementId, target: &HeadElement) -> bool {
        match self.slots.get_mut(id.0) {
            Some(Some(slot)) => slot.element.merge_from(target),
            _ => false,
        }
    }

    /// Remove the element at `id`.
    ///
    /// May compact, which invalidates every other `ElementId` held by the
    /// caller.
    fn remove(&mut self, id: ElementId) -> Option<HeadElement> {
        let element = self.tombstone(id)?;
        self.compact_if_sparse();
        Some(element)
    }

    /// Remove every hreflang alternate, compacting at most once.
    /// Returns how many were removed.
    fn remove_alternates(&mut self) -> usize {
        let ids = std::mem::take(&mut self.alternates);
        let removed = ids
            .into_iter()
            .filter(|id| self.tombstone(*id).is_some())
            .count();
        self.compact_if_sparse();
        removed
    }

    fn tombstone(&mut self, id: ElementId) -> Option<HeadElement> {
        let slot = self.slots.get_mut(id.0)?.take()?;
        if let Some(key) = &slot.key {
            self.registry.remove(key);
        }
        self.alternates.retain(|alt| *alt != id);
        self.live -= 1;
        Some(slot.element)
    }

    fn compact_if_sparse(&mut self) {
        if self.slots.len() - self.live > self.live {
            self.compact();
        }
    }

    fn remove_key(&mut self, key: &TagKey) -> bool {
        self.lookup(key)
            .and_then(|id| self.remove(id))
            .is_some()
    }

    /// Drop tombstones and reassign element ids.
    fn compact(&mut self) {
        let slots = std::mem::take(&mut self.slots);
        self.registry.clear();
        self.alternates.clear();
        for (index, slot) in slots.into_iter().flatten().enumerate() {
            let id = ElementId(index);
            if let Some(key) = &slot.key {
                self.registry.insert(key.clone(), id);
            }
            if slot.element.is_alternate() {
                self.alternates.push(id);
            }
            self.slots.push(Some(slot));
        }
    }
}
