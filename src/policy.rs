//! The fixed sanitization policy: which tags, attributes and style
//! properties untrusted rich-text content may keep.
//!
//! The tables are immutable process-wide constants. There is deliberately
//! no way to extend them at runtime; the sanitizer's output contract is
//! fully determined by what is listed here.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Tags considered safe for rich-text content. Never contains `script`,
/// `style`, `iframe`, `object`, `embed`, `form` or anything else capable
/// of executing code or loading a sub-document.
static ALLOWED_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "b", "blockquote", "br", "code", "div", "em", "h1", "h2", "h3", "h4", "h5", "h6",
        "hr", "i", "img", "li", "ol", "p", "pre", "s", "span", "strong", "sub", "sup", "table",
        "tbody", "td", "th", "thead", "tr", "u", "ul",
    ]
    .into_iter()
    .collect()
});

/// Attributes permitted per tag. Tags without an entry keep no attributes
/// at all. `on*` names never appear here, and the attribute filter strips
/// them independently of this table anyway.
static ALLOWED_ATTRIBUTES: Lazy<HashMap<&'static str, HashSet<&'static str>>> = Lazy::new(|| {
    let style_only: &[&str] = &["style"];
    let mut map: HashMap<&'static str, HashSet<&'static str>> = HashMap::new();
    map.insert("a", ["href", "title", "target", "rel"].into_iter().collect());
    map.insert("img", ["src", "alt", "width", "height"].into_iter().collect());
    map.insert("td", ["colspan", "rowspan", "style"].into_iter().collect());
    map.insert("th", ["colspan", "rowspan", "style"].into_iter().collect());
    map.insert("table", ["width", "style"].into_iter().collect());
    for tag in [
        "blockquote", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ol", "p", "pre", "span",
        "ul",
    ] {
        map.insert(tag, style_only.iter().copied().collect());
    }
    map
});

/// Cosmetic style properties permitted inside a `style` attribute.
/// None of these accept a URI-valued argument; `position`, `behavior`
/// and friends are never listed.
static ALLOWED_STYLE_PROPERTIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "color",
        "background-color",
        "font-family",
        "font-size",
        "font-style",
        "font-weight",
        "line-height",
        "text-align",
        "text-decoration",
        "margin",
        "margin-top",
        "margin-right",
        "margin-bottom",
        "margin-left",
        "padding",
        "padding-top",
        "padding-right",
        "padding-bottom",
        "padding-left",
    ]
    .into_iter()
    .collect()
});

pub(crate) fn is_allowed_tag(tag: &str) -> bool {
    ALLOWED_TAGS.contains(tag)
}

pub(crate) fn is_allowed_attribute(tag: &str, attr: &str) -> bool {
    ALLOWED_ATTRIBUTES
        .get(tag)
        .is_some_and(|attrs| attrs.contains(attr))
}

pub(crate) fn is_allowed_style_property(name: &str) -> bool {
    ALLOWED_STYLE_PROPERTIES.contains(name)
}

/// Inline event handlers (`onclick`, `onerror`, ...) are stripped by name
/// prefix, regardless of casing and regardless of the per-tag table.
pub(crate) fn is_event_handler(attr: &str) -> bool {
    attr.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("on"))
}

fn has_scheme(value: &str, scheme: &str) -> bool {
    value
        .trim_start()
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

/// Link targets block both `javascript:` and `data:`; a `data:text/html`
/// link is a known XSS vector.
pub(crate) fn is_blocked_link_url(value: &str) -> bool {
    has_scheme(value, "javascript:") || has_scheme(value, "data:")
}

/// `src` only blocks `javascript:`. Inline `data:` image URIs are common
/// and stay permitted; the href/src asymmetry is intentional.
pub(crate) fn is_blocked_src_url(value: &str) -> bool {
    has_scheme(value, "javascript:")
}
