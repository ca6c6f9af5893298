//! The sanitization engine: tree walk, attribute filtering and the
//! fallback boundary.

use std::panic::{self, AssertUnwindSafe};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::Result;
use crate::policy;
use crate::style;
use crate::tree::{Dom, NodeData, NodeId};

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Sanitize an untrusted HTML fragment.
///
/// Disallowed elements are demoted to their flattened text content;
/// allowed elements keep only allow-listed attributes, with `on*` handlers
/// always stripped, `style` values filtered per declaration, and
/// script-capable URI schemes removed from `href`/`src`.
///
/// This function never panics and never returns an error. If parsing or
/// walking fails for any reason, the input is returned with every
/// tag-delimited run stripped instead — strictly less formatting, never
/// less safety.
pub fn sanitize(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    debug!(len = html.len(), "sanitizing html fragment");

    match panic::catch_unwind(AssertUnwindSafe(|| sanitize_fragment(html))) {
        Ok(Ok(clean)) => clean,
        Ok(Err(err)) => {
            warn!(error = %err, "sanitization failed, stripping all tags");
            strip_tags(html)
        }
        Err(_) => {
            warn!("sanitization panicked, stripping all tags");
            strip_tags(html)
        }
    }
}

/// Remove every `<...>` run from the input. The fallback path of
/// [`sanitize`], exposed on its own for plain-text previews.
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

fn sanitize_fragment(html: &str) -> Result<String> {
    let mut dom = Dom::parse(html)?;
    walk(&mut dom);
    Ok(dom.serialize())
}

/// Pre-order walk over the arena on an explicit stack. Parents are
/// processed before children because demotion replaces a node before its
/// subtree would be visited.
fn walk(dom: &mut Dom) {
    let mut stack: Vec<NodeId> = dom.roots().iter().rev().copied().collect();

    while let Some(id) = stack.pop() {
        let tag = match &dom.get(id).data {
            NodeData::Element { tag, .. } => tag.clone(),
            NodeData::Text(_) => continue,
        };

        if !policy::is_allowed_tag(&tag) {
            // Demote to plain text: the markup goes, the content stays.
            // The former children no longer exist as elements, so the
            // walk does not descend into them.
            let text = dom.text_content(id);
            let node = dom.get_mut(id);
            node.data = NodeData::Text(text);
            node.children.clear();
            continue;
        }

        if let NodeData::Element { attrs, .. } = &mut dom.get_mut(id).data {
            filter_attributes(&tag, attrs);
        }
        for child in dom.get(id).children.iter().rev() {
            stack.push(*child);
        }
    }
}

/// Strip an allowed element's attribute list down to safe entries.
///
/// Cannot fail; any check that cannot affirm safety removes the attribute.
fn filter_attributes(tag: &str, attrs: &mut Vec<(String, String)>) {
    attrs.retain(|(name, _)| {
        !policy::is_event_handler(name) && policy::is_allowed_attribute(tag, name)
    });

    let mut index = 0;
    while index < attrs.len() {
        let name = attrs[index].0.clone();
        let keep = match name.as_str() {
            "style" => {
                let filtered = style::filter_style(&attrs[index].1);
                if filtered.is_empty() {
                    false
                } else {
                    attrs[index].1 = filtered;
                    true
                }
            }
            "href" => !policy::is_blocked_link_url(&attrs[index].1),
            "src" => !policy::is_blocked_src_url(&attrs[index].1),
            _ => true,
        };
        if keep {
            index += 1;
        } else {
            attrs.remove(index);
        }
    }
}
