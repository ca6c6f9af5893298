//! Owned arena representation of a parsed HTML fragment.
//!
//! The sanitizer never walks live parser handles. The html5ever parse is
//! imported once into a flat `Vec` of nodes addressed by index, so the
//! walker can demote or rewrite nodes mid-traversal without reference
//! cycles or iterator invalidation. Import, text flattening and
//! serialization all run on explicit work stacks; adversarially nested
//! input cannot overflow the call stack.
//!
//! Comments, doctypes and processing instructions are dropped at import.
//! They have no representation in sanitized output.

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, QualName, local_name, namespace_url, ns, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::error::{Result, ScrubError};
use crate::escape;

/// Index of a node within its [`Dom`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
pub(crate) enum NodeData {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) data: NodeData,
    pub(crate) children: Vec<NodeId>,
}

/// A parsed fragment, rebuilt fresh per sanitize call and discarded after
/// serialization.
#[derive(Debug, Default)]
pub(crate) struct Dom {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

impl Dom {
    /// Parse an untrusted fragment. The input is treated as body content
    /// (fragment parsing with a `div` context), so nothing gets hoisted
    /// into a synthetic `<head>`.
    pub(crate) fn parse(html: &str) -> Result<Dom> {
        let rcdom = parse_fragment(
            RcDom::default(),
            ParseOpts::default(),
            QualName::new(None, ns!(html), local_name!("div")),
            Vec::new(),
        )
        .one(html);

        let root = fragment_root(&rcdom).ok_or(ScrubError::MissingFragmentRoot)?;
        let mut dom = Dom::default();
        dom.import_children(&root, None);
        Ok(dom)
    }

    pub(crate) fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn push(&mut self, data: NodeData, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            children: Vec::new(),
        });
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Import every element/text descendant of `parent` into the arena.
    /// Children are pushed onto the stack in reverse so each parent's
    /// child list comes out in document order.
    fn import_children(&mut self, parent: &Handle, into: Option<NodeId>) {
        let mut stack: Vec<(Handle, Option<NodeId>)> = Vec::new();
        for child in parent.children.borrow().iter().rev() {
            stack.push((child.clone(), into));
        }

        while let Some((handle, slot)) = stack.pop() {
            match &handle.data {
                RcNodeData::Text { contents } => {
                    self.push(NodeData::Text(contents.borrow().to_string()), slot);
                }
                RcNodeData::Element { name, attrs, .. } => {
                    let tag = name.local.as_ref().to_ascii_lowercase();
                    let attrs = attrs
                        .borrow()
                        .iter()
                        .map(|a| {
                            (
                                a.name.local.as_ref().to_ascii_lowercase(),
                                a.value.to_string(),
                            )
                        })
                        .collect();
                    let id = self.push(NodeData::Element { tag, attrs }, slot);
                    for child in handle.children.borrow().iter().rev() {
                        stack.push((child.clone(), Some(id)));
                    }
                }
                _ => {}
            }
        }
    }

    /// Flattened text content of a subtree, in document order.
    pub(crate) fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if let NodeData::Text(text) = &node.data {
                out.push_str(text);
            }
            for child in node.children.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// Serialize the tree back to an HTML string. Text and attribute
    /// values are entity-escaped; tag and attribute names are emitted as
    /// imported (already lowercase).
    pub(crate) fn serialize(&self) -> String {
        enum Step {
            Open(NodeId),
            Close(NodeId),
        }

        let mut out = String::new();
        let mut stack: Vec<Step> = self.roots.iter().rev().map(|id| Step::Open(*id)).collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Open(id) => {
                    let node = &self.nodes[id.0];
                    match &node.data {
                        NodeData::Text(text) => out.push_str(&escape::escape_text(text)),
                        NodeData::Element { tag, attrs } => {
                            out.push('<');
                            out.push_str(tag);
                            for (name, value) in attrs {
                                out.push(' ');
                                out.push_str(name);
                                out.push_str("=\"");
                                out.push_str(&escape::escape_attribute(value));
                                out.push('"');
                            }
                            out.push('>');
                            if is_void(tag) {
                                continue;
                            }
                            stack.push(Step::Close(id));
                            for child in node.children.iter().rev() {
                                stack.push(Step::Open(*child));
                            }
                        }
                    }
                }
                Step::Close(id) => {
                    if let NodeData::Element { tag, .. } = &self.nodes[id.0].data {
                        out.push_str("</");
                        out.push_str(tag);
                        out.push('>');
                    }
                }
            }
        }
        out
    }
}

/// The fragment parser wraps parsed content in a synthetic root element
/// under the document node.
fn fragment_root(dom: &RcDom) -> Option<Handle> {
    dom.document
        .children
        .borrow()
        .iter()
        .find(|child| matches!(child.data, RcNodeData::Element { .. }))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_serialize_round_trip() {
        let dom = Dom::parse("<p><strong>Hello</strong> <em>world</em></p>").unwrap();
        assert_eq!(dom.serialize(), "<p><strong>Hello</strong> <em>world</em></p>");
    }

    #[test]
    fn test_multiple_roots() {
        let dom = Dom::parse("<p>a</p><p>b</p>").unwrap();
        assert_eq!(dom.roots().len(), 2);
        assert_eq!(dom.serialize(), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_text_content_flattens_subtree() {
        let dom = Dom::parse("<div>a<span>b<em>c</em></span>d</div>").unwrap();
        let root = dom.roots()[0];
        assert_eq!(dom.text_content(root), "abcd");
    }

    #[test]
    fn test_comments_and_doctypes_dropped() {
        let dom = Dom::parse("<!-- secret --><p>x</p><?pi data?>").unwrap();
        assert_eq!(dom.serialize(), "<p>x</p>");
    }

    #[test]
    fn test_void_elements() {
        let dom = Dom::parse("<p>a<br>b</p><hr>").unwrap();
        assert_eq!(dom.serialize(), "<p>a<br>b</p><hr>");
    }

    #[test]
    fn test_text_is_escaped_on_serialize() {
        let dom = Dom::parse("<p>a &amp; b &lt;c&gt;</p>").unwrap();
        assert_eq!(dom.serialize(), "<p>a &amp; b &lt;c&gt;</p>");
    }

    #[test]
    fn test_tag_names_lowercased() {
        let dom = Dom::parse("<P><STRONG>x</STRONG></P>").unwrap();
        assert_eq!(dom.serialize(), "<p><strong>x</strong></p>");
    }

    #[test]
    fn test_script_content_stays_inside_fragment() {
        // fragment parsing must not hoist the script into a synthetic head
        let dom = Dom::parse("<script>alert(1)</script>").unwrap();
        assert_eq!(dom.roots().len(), 1);
        assert_eq!(dom.text_content(dom.roots()[0]), "alert(1)");
    }

    #[test]
    fn test_deeply_nested_input_does_not_overflow() {
        let depth = 10_000;
        let mut html = String::new();
        for _ in 0..depth {
            html.push_str("<div>");
        }
        html.push('x');
        for _ in 0..depth {
            html.push_str("</div>");
        }
        let dom = Dom::parse(&html).unwrap();
        let root = dom.roots()[0];
        assert_eq!(dom.text_content(root), "x");
        let _ = dom.serialize();
    }
}
