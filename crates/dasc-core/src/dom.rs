//! Read-only document tree used by the converter.
//!
//! The converter never touches the HTML parser directly. It works against the
//! [`TreeNode`] trait, which only exposes what block extraction needs: tag
//! names, class tokens, children and text. [`Document`] provides the default
//! implementation on top of an `html5ever` / `markup5ever_rcdom` tree.

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Coarse node classification, enough to tell structure from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// An element such as `div` or `ul`.
    Element,
    /// A text node.
    Text,
    /// Comments, doctypes, processing instructions and the document root.
    Other,
}

/// Minimal view of a parsed document node.
pub trait TreeNode: Clone {
    /// Classification of this node.
    fn kind(&self) -> NodeKind;

    /// Lowercase tag name for elements, `None` otherwise.
    fn tag_name(&self) -> Option<&str>;

    /// Whitespace-separated tokens of the `class` attribute, in source order.
    fn class_tokens(&self) -> Vec<String>;

    /// All child nodes in document order.
    fn children(&self) -> Vec<Self>;

    /// The node's own text, for text nodes only.
    fn own_text(&self) -> Option<String>;

    /// Whether this is an element.
    fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }

    /// Whether this is an element with the given tag name.
    fn has_tag(&self, tag: &str) -> bool {
        self.tag_name() == Some(tag)
    }

    /// Element children only, skipping text and comment nodes.
    fn element_children(&self) -> Vec<Self> {
        self.children()
            .into_iter()
            .filter(TreeNode::is_element)
            .collect()
    }

    /// Elements and text nodes carrying something other than whitespace.
    fn is_significant(&self) -> bool {
        match self.kind() {
            NodeKind::Element => true,
            NodeKind::Text => self
                .own_text()
                .is_some_and(|text| !text.trim().is_empty()),
            NodeKind::Other => false,
        }
    }

    /// Concatenated text of every descendant text node, untrimmed.
    fn text_content(&self) -> String {
        let mut out = String::new();
        walk(self, |node, _| {
            if let Some(text) = node.own_text() {
                out.push_str(&text);
            }
        });
        out
    }
}

/// Pre-order walk over `root` and its descendants.
///
/// The callback receives each node together with its ancestor chain
/// (outermost first, parent last). Uses an explicit stack so deeply nested
/// markup cannot exhaust the call stack.
pub fn walk<N, F>(root: &N, mut visit: F)
where
    N: TreeNode,
    F: FnMut(&N, &[N]),
{
    let mut path: Vec<N> = Vec::new();
    let mut stack: Vec<(N, usize)> = vec![(root.clone(), 0)];

    while let Some((node, depth)) = stack.pop() {
        path.truncate(depth);
        visit(&node, &path);

        for child in node.children().into_iter().rev() {
            stack.push((child, depth + 1));
        }
        path.push(node);
    }
}

/// Whether `node`'s nearest ancestors match `tags`, innermost last.
///
/// `has_ancestor_tags(node_path, &["main", "div"])` holds when the parent is a
/// `div` whose parent is a `main`.
pub fn has_ancestor_tags<N: TreeNode>(ancestors: &[N], tags: &[&str]) -> bool {
    if ancestors.len() < tags.len() {
        return false;
    }
    let nearest = &ancestors[ancestors.len() - tags.len()..];
    nearest
        .iter()
        .zip(tags)
        .all(|(node, tag)| node.has_tag(tag))
}

/// An owned, parsed HTML document.
pub struct Document {
    dom: RcDom,
}

impl Document {
    /// Parse a full HTML document.
    ///
    /// HTML parsing is error-tolerant: malformed markup is repaired the way a
    /// browser would, so this never fails.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        Self { dom }
    }

    /// The document node (parent of `<html>`).
    #[must_use]
    pub fn root(&self) -> Node {
        Node(self.dom.document.clone())
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").finish_non_exhaustive()
    }
}

/// A node handle inside a [`Document`].
#[derive(Clone)]
pub struct Node(Handle);

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            NodeKind::Element => write!(f, "<{}>", self.tag_name().unwrap_or_default()),
            NodeKind::Text => write!(f, "{:?}", self.own_text().unwrap_or_default()),
            NodeKind::Other => write!(f, "#node"),
        }
    }
}

impl TreeNode for Node {
    fn kind(&self) -> NodeKind {
        match &self.0.data {
            NodeData::Element { .. } => NodeKind::Element,
            NodeData::Text { .. } => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn tag_name(&self) -> Option<&str> {
        match &self.0.data {
            NodeData::Element { name, .. } => Some(&*name.local),
            _ => None,
        }
    }

    fn class_tokens(&self) -> Vec<String> {
        let NodeData::Element { attrs, .. } = &self.0.data else {
            return Vec::new();
        };
        attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == "class")
            .map(|attr| {
                attr.value
                    .split_ascii_whitespace()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn children(&self) -> Vec<Self> {
        self.0.children.borrow().iter().cloned().map(Node).collect()
    }

    fn own_text(&self) -> Option<String> {
        match &self.0.data {
            NodeData::Text { contents } => Some(contents.borrow().to_string()),
            _ => None,
        }
    }
}
