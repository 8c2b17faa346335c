//! Abbreviation tree model
//!
//! The parser produces a tree of [`AbbreviationNode`]s hanging off a
//! [`NodeKind::Root`] node. Siblings are children of a shared parent; there is
//! no separate sibling edge. Every node owns its children, so `Clone` is a
//! deep copy and repeated subtrees never alias.
//!
//! ```text
//! ul>li.item*2{x}
//!
//! Root
//! └── Element ul
//!     └── Element li  classes={item}  repeat=Count(2)  text="x"
//! ```

mod repeat;
mod visit;

pub use repeat::{MAX_EXPANDED_NODES, expand_repeats, expand_repeats_with_lines, mark_wrap_target};
pub use visit::{Descendants, Visitor, walk};

use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;
use text_size::TextSize;

/// Structural role of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The container returned by the parser
    Root,
    /// A parenthesized group; transparent when rendered
    Group,
    /// A markup element or a text-only node
    Element,
}

/// The operator that attached a node to the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    /// `>` (also used for the first element of a sequence)
    #[default]
    Child,
    /// `+`
    Sibling,
    /// `^`, with the number of consecutive carets
    Climb(usize),
}

/// Multiplier attached to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// `*N`; unmultiplied nodes are `Count(1)`
    Count(usize),
    /// `*` without a number: one copy per wrapped line
    Implicit,
}

impl Default for Repeat {
    fn default() -> Self {
        Self::Count(1)
    }
}

impl Repeat {
    /// Number of copies this multiplier produces outside of wrap mode
    pub fn count(&self) -> usize {
        match self {
            Self::Count(n) => *n,
            Self::Implicit => 1,
        }
    }
}

/// One element, text node or group of an abbreviation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationNode {
    pub kind: NodeKind,
    /// Tag name; `None` for groups and for nodes written without a name
    pub name: Option<SmolStr>,
    /// Attributes in source order; `#id` is stored as `id`. A `class`
    /// entry marks where the classes go and is filled in by resolution.
    pub attributes: IndexMap<String, String>,
    pub classes: IndexSet<String>,
    pub repeat: Repeat,
    /// Position among the copies of a repeated node, set by [`expand_repeats`]
    pub repeat_index: Option<usize>,
    /// `{text}` content, possibly containing `$#` placeholders
    pub text: Option<String>,
    pub children: Vec<AbbreviationNode>,
    pub operator: Operator,
    /// Byte offset of the node's first token in the abbreviation
    pub offset: TextSize,
    /// Written with a trailing `/`
    pub self_closing: bool,
    /// Content spliced in by "wrap with abbreviation"
    pub wrapped: Option<String>,
    /// Receives the final caret position when rendered
    pub caret_anchor: bool,
}

impl AbbreviationNode {
    fn with_kind(kind: NodeKind, offset: TextSize) -> Self {
        Self {
            kind,
            name: None,
            attributes: IndexMap::new(),
            classes: IndexSet::new(),
            repeat: Repeat::default(),
            repeat_index: None,
            text: None,
            children: Vec::new(),
            operator: Operator::default(),
            offset,
            self_closing: false,
            wrapped: None,
            caret_anchor: false,
        }
    }

    /// Create an empty root
    pub fn root() -> Self {
        Self::with_kind(NodeKind::Root, TextSize::new(0))
    }

    /// Create an empty group
    pub fn group(offset: TextSize) -> Self {
        Self::with_kind(NodeKind::Group, offset)
    }

    /// Create an element without a name
    pub fn element(offset: TextSize) -> Self {
        Self::with_kind(NodeKind::Element, offset)
    }

    /// Create a named element at offset 0
    pub fn named(name: &str) -> Self {
        let mut node = Self::element(TextSize::new(0));
        node.name = Some(SmolStr::new(name));
        node
    }

    /// Create a text-only node at offset 0
    pub fn text_node(text: impl Into<String>) -> Self {
        let mut node = Self::element(TextSize::new(0));
        node.text = Some(text.into());
        node
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Add a class; the first one reserves the `class` attribute's position
    pub fn add_class(&mut self, class: impl Into<String>) {
        self.attributes.entry("class".to_string()).or_default();
        self.classes.insert(class.into());
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_child(mut self, child: AbbreviationNode) -> Self {
        self.children.push(child);
        self
    }

    /// Tag name as `&str`
    pub fn tag(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// An element that only carries text: `{Hello}`
    pub fn is_text_only(&self) -> bool {
        self.kind == NodeKind::Element
            && self.name.is_none()
            && self.attributes.is_empty()
            && self.classes.is_empty()
            && self.children.is_empty()
            && self.text.is_some()
    }

    /// Whether the node has anything to put between its tags
    pub fn has_content(&self) -> bool {
        !self.children.is_empty() || self.text.is_some() || self.wrapped.is_some()
    }

    /// Number of nodes in this subtree once every `*N` is expanded,
    /// saturating at `usize::MAX`
    pub fn expanded_len(&self) -> usize {
        let subtree = self
            .children
            .iter()
            .fold(1usize, |n, child| n.saturating_add(child.expanded_len()));
        subtree.saturating_mul(self.repeat.count())
    }

    /// Pre-order iterator over this node and all of its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(self)
    }

    /// Short abbreviation-like label for diagnostics: `div#main.a.b`
    pub fn describe(&self) -> String {
        match self.kind {
            NodeKind::Root => return "<root>".to_string(),
            NodeKind::Group => return "(...)".to_string(),
            NodeKind::Element => {}
        }

        let mut label = self.name.as_deref().unwrap_or("").to_string();
        if let Some(id) = self.attributes.get("id") {
            label.push('#');
            label.push_str(id);
        }
        for class in &self.classes {
            label.push('.');
            label.push_str(class);
        }
        if label.is_empty() {
            if let Some(text) = &self.text {
                label = format!("{{{}}}", text);
            }
        }
        label
    }
}
