//! Rendering of resolved trees
//!
//! Markup output is produced by a [`Visitor`]: `enter` writes an element's
//! open tag and inline content, `leave` writes wrapped content and closes
//! it. Groups and the root write nothing. Every element and text node starts
//! on its own line; only an element with children or multi-line content
//! opens a nested level.
//!
//! Tab stops are counted before rendering so that the caret anchor of wrap
//! mode can take the highest number while being written in the middle of
//! the output.

mod context;
mod options;

pub use context::RenderContext;
pub use options::RenderOptions;

use crate::profile::{OutputStyle, SyntaxProfile};
use crate::tree::{AbbreviationNode, NodeKind, Visitor, walk};
use text_size::TextSize;

/// A `${n}` placeholder in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabStop {
    /// Stop number, starting at 1
    pub index: usize,
    /// Byte offset of the stop in the output text
    pub offset: TextSize,
}

/// Output of an expansion or wrap
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpansionResult {
    pub text: String,
    /// Where the caret goes: the highest-numbered stop, else the end of `text`
    pub caret_offset: TextSize,
    pub success: bool,
    /// Stops ordered by number
    pub tab_stops: Vec<TabStop>,
}

impl ExpansionResult {
    /// Empty, unsuccessful result
    pub fn noop() -> Self {
        Self::default()
    }

    /// Unsuccessful result echoing `fallback`, caret at its end
    pub fn failed(fallback: &str) -> Self {
        Self {
            text: fallback.to_string(),
            caret_offset: TextSize::of(fallback),
            success: false,
            tab_stops: Vec::new(),
        }
    }

    fn rendered(text: String, tab_stops: Vec<TabStop>) -> Self {
        let caret_offset = tab_stops
            .last()
            .map(|s| s.offset)
            .unwrap_or_else(|| TextSize::of(text.as_str()));
        Self {
            text,
            caret_offset,
            success: true,
            tab_stops,
        }
    }
}

/// How one element is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Text-only node
    Text,
    /// `<br>`, `<br />` or `<br/>`
    SelfClosed,
    /// `<tag>content</tag>` on one line
    Inline,
    /// Open tag, nested lines, closing tag on its own line
    Block,
}

fn layout(node: &AbbreviationNode, profile: &dyn SyntaxProfile) -> Layout {
    if node.is_text_only() {
        return Layout::Text;
    }
    let closes_itself = node.self_closing
        || node.tag().is_some_and(|tag| profile.is_void_element(tag));
    if closes_itself && !node.has_content() {
        return Layout::SelfClosed;
    }
    let multi_line = |text: &Option<String>| text.as_deref().is_some_and(|t| t.contains('\n'));
    if !node.children.is_empty() || multi_line(&node.text) || multi_line(&node.wrapped) {
        Layout::Block
    } else {
        Layout::Inline
    }
}

/// Render a resolved tree
pub fn render(
    root: &AbbreviationNode,
    profile: &dyn SyntaxProfile,
    options: &RenderOptions,
) -> ExpansionResult {
    let (ordinary, has_anchor) = count_stops(root, profile);
    let cx = RenderContext::new(
        options.indent_unit(profile.indent_unit()),
        options.tab_stops,
        ordinary,
        has_anchor,
    );

    let (text, stops) = match profile.output_style() {
        OutputStyle::Markup => {
            let mut renderer = MarkupRenderer { cx, profile };
            walk(root, &mut renderer);
            renderer.cx.finish()
        }
        OutputStyle::Stylesheet => {
            let mut renderer = StylesheetRenderer { cx };
            walk(root, &mut renderer);
            renderer.cx.finish()
        }
    };

    tracing::trace!(
        profile = profile.name(),
        bytes = text.len(),
        stops = stops.len(),
        "rendered abbreviation"
    );
    ExpansionResult::rendered(text, stops)
}

/// Number of ordinary stops and whether a caret anchor is present
fn count_stops(root: &AbbreviationNode, profile: &dyn SyntaxProfile) -> (usize, bool) {
    let mut ordinary = 0;
    let mut has_anchor = false;

    for node in root.descendants().filter(|n| n.kind == NodeKind::Element) {
        has_anchor |= node.caret_anchor;
        match profile.output_style() {
            OutputStyle::Markup => {
                ordinary += node.attributes.values().filter(|v| v.is_empty()).count();
                if layout(node, profile) == Layout::Inline && !node.has_content() {
                    ordinary += 1;
                }
            }
            OutputStyle::Stylesheet => {
                if !node.is_text_only() && node.text.is_none() && node.wrapped.is_none() {
                    ordinary += 1;
                }
            }
        }
    }
    (ordinary, has_anchor)
}

struct MarkupRenderer<'o, 'p> {
    cx: RenderContext<'o>,
    profile: &'p dyn SyntaxProfile,
}

impl MarkupRenderer<'_, '_> {
    fn open_tag(&mut self, tag: &str, node: &AbbreviationNode) {
        self.cx.push_str("<");
        self.cx.push_str(tag);
        for (key, value) in &node.attributes {
            self.cx.push_str(" ");
            self.cx.push_str(key);
            self.cx.push_str("=\"");
            if value.is_empty() {
                self.cx.tab_stop();
            } else {
                self.cx.push_str(value);
            }
            self.cx.push_str("\"");
        }
    }

    /// Spliced content followed by the caret anchor
    fn wrapped_inline(&mut self, node: &AbbreviationNode) {
        if let Some(wrapped) = &node.wrapped {
            self.cx.push_str(wrapped);
            if node.caret_anchor {
                self.cx.anchor_stop();
            }
        }
    }
}

impl Visitor for MarkupRenderer<'_, '_> {
    fn enter(&mut self, node: &AbbreviationNode, _depth: usize) {
        if node.kind != NodeKind::Element {
            return;
        }

        self.cx.start_line();
        let tag = node.tag().unwrap_or_default();
        match layout(node, self.profile) {
            Layout::Text => {
                let mut lines = node.text.as_deref().unwrap_or_default().split('\n');
                if let Some(first) = lines.next() {
                    self.cx.push_str(first);
                }
                for line in lines {
                    self.cx.start_line();
                    self.cx.push_str(line);
                }
            }
            Layout::SelfClosed => {
                self.open_tag(tag, node);
                self.cx.push_str(self.profile.self_closing().suffix());
            }
            Layout::Inline => {
                self.open_tag(tag, node);
                self.cx.push_str(">");
                if let Some(text) = &node.text {
                    self.cx.push_str(text);
                }
                self.wrapped_inline(node);
                if !node.has_content() {
                    self.cx.tab_stop();
                }
                self.cx.push_str("</");
                self.cx.push_str(tag);
                self.cx.push_str(">");
            }
            Layout::Block => {
                self.open_tag(tag, node);
                self.cx.push_str(">");
                self.cx.level += 1;
                if let Some(text) = &node.text {
                    self.cx.push_lines(text);
                }
            }
        }
    }

    fn leave(&mut self, node: &AbbreviationNode, _depth: usize) {
        if node.kind != NodeKind::Element || layout(node, self.profile) != Layout::Block {
            return;
        }
        // spliced content goes after the element's own children
        if let Some(wrapped) = &node.wrapped {
            self.cx.push_lines(wrapped);
            if node.caret_anchor {
                self.cx.anchor_stop();
            }
        }
        self.cx.level -= 1;
        self.cx.start_line();
        self.cx.push_str("</");
        self.cx.push_str(node.tag().unwrap_or_default());
        self.cx.push_str(">");
    }
}

/// `property: value;` per rule
struct StylesheetRenderer<'o> {
    cx: RenderContext<'o>,
}

impl Visitor for StylesheetRenderer<'_> {
    fn enter(&mut self, node: &AbbreviationNode, _depth: usize) {
        if node.kind != NodeKind::Element {
            return;
        }

        self.cx.start_line();
        if node.is_text_only() {
            if let Some(text) = &node.text {
                self.cx.push_str(text);
            }
            return;
        }

        self.cx.push_str(node.tag().unwrap_or_default());
        self.cx.push_str(": ");
        match (&node.text, &node.wrapped) {
            (Some(value), _) | (None, Some(value)) => self.cx.push_str(value),
            (None, None) => self.cx.tab_stop(),
        }
        if node.caret_anchor {
            self.cx.anchor_stop();
        }
        self.cx.push_str(";");
    }
}
