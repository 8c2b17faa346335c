//! Syntax profiles
//!
//! A profile answers every language-specific question the resolver and the
//! renderer ask: which tag a nameless element gets, what a snippet name
//! expands to, how to indent, how to number repeats and how void elements
//! close. The engine only depends on the [`SyntaxProfile`] trait; [`Profile`]
//! is the data-driven implementation behind the built-in profiles and
//! configuration files.

mod builtin;
#[cfg(feature = "config")]
mod config;
pub mod registry;

#[cfg(feature = "config")]
pub use config::{ConfigError, NumberingConfig, ProfileConfig, SnippetConfig, load_profile};

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

/// How void and `/`-marked elements are closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SelfClosing {
    /// `<br>`
    #[default]
    Html,
    /// `<br />`
    Xhtml,
    /// `<br/>`
    Xml,
}

impl SelfClosing {
    /// Text written after the attributes of a self-closing tag
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Html => ">",
            Self::Xhtml => " />",
            Self::Xml => "/>",
        }
    }
}

/// Shape of the rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputStyle {
    /// Nested tags
    #[default]
    Markup,
    /// Flat `property: value;` declarations
    Stylesheet,
}

/// Repeat numbering: `$#` becomes `base + index`, zero-padded to `padding`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Numbering {
    pub base: usize,
    pub padding: usize,
}

impl Default for Numbering {
    fn default() -> Self {
        Self { base: 1, padding: 0 }
    }
}

impl Numbering {
    pub fn format(&self, index: usize) -> String {
        format!("{:0width$}", self.base + index, width = self.padding)
    }
}

/// What a snippet name expands to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Tag (markup) or property (stylesheet) written in place of the name
    pub tag: SmolStr,
    /// Default attributes, in output order; an empty value becomes a tab stop
    pub attributes: IndexMap<String, String>,
    /// Default content (markup) or value (stylesheet)
    pub text: Option<String>,
}

impl Snippet {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: SmolStr::new(tag),
            attributes: IndexMap::new(),
            text: None,
        }
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }
}

/// Language-specific behavior consumed by the resolver and renderer
pub trait SyntaxProfile: Send + Sync {
    /// Registry name, e.g. `html`
    fn name(&self) -> &str;

    /// Tag given to nameless elements; `None` when the syntax has no such tag
    fn implicit_tag(&self) -> Option<&str>;

    /// Tag given to a nameless element whose parent is `parent`
    fn implicit_tag_for(&self, _parent: Option<&str>) -> Option<&str> {
        self.implicit_tag()
    }

    fn lookup_snippet(&self, name: &str) -> Option<&Snippet>;

    /// One level of indentation
    fn indent_unit(&self) -> &str;

    /// Text substituted for `$#` in the copy at `index` (0-based)
    fn numbering_format(&self, index: usize) -> String;

    fn is_void_element(&self, _tag: &str) -> bool {
        false
    }

    fn self_closing(&self) -> SelfClosing {
        SelfClosing::Html
    }

    fn output_style(&self) -> OutputStyle {
        OutputStyle::Markup
    }
}

/// Data-driven profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: SmolStr,
    implicit_tag: Option<SmolStr>,
    /// parent tag → implicit child tag
    implicit_tags: FxHashMap<SmolStr, SmolStr>,
    indent: String,
    numbering: Numbering,
    self_closing: SelfClosing,
    output_style: OutputStyle,
    void_elements: FxHashSet<SmolStr>,
    snippets: FxHashMap<SmolStr, Snippet>,
}

impl Profile {
    /// An empty markup profile with `div` as implicit tag and two-space indent
    pub fn new(name: &str) -> Self {
        Self {
            name: SmolStr::new(name),
            implicit_tag: Some(SmolStr::new_static("div")),
            implicit_tags: FxHashMap::default(),
            indent: "  ".to_string(),
            numbering: Numbering::default(),
            self_closing: SelfClosing::Html,
            output_style: OutputStyle::Markup,
            void_elements: FxHashSet::default(),
            snippets: FxHashMap::default(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = SmolStr::new(name);
        self
    }

    pub fn with_implicit_tag(mut self, tag: Option<&str>) -> Self {
        self.implicit_tag = tag.map(SmolStr::new);
        self
    }

    /// Map a parent tag to the implicit tag of its nameless children
    pub fn with_implicit_child(mut self, parent: &str, child: &str) -> Self {
        self.implicit_tags
            .insert(SmolStr::new(parent), SmolStr::new(child));
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_numbering(mut self, numbering: Numbering) -> Self {
        self.numbering = numbering;
        self
    }

    pub fn with_self_closing(mut self, style: SelfClosing) -> Self {
        self.self_closing = style;
        self
    }

    pub fn with_output_style(mut self, style: OutputStyle) -> Self {
        self.output_style = style;
        self
    }

    pub fn with_void_elements<'a>(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        self.void_elements.extend(tags.into_iter().map(SmolStr::new));
        self
    }

    /// Add or replace the snippet for `name`
    pub fn with_snippet(mut self, name: &str, snippet: Snippet) -> Self {
        self.insert_snippet(name, snippet);
        self
    }

    /// Add or replace the snippet for `name`, returning the replaced one
    pub fn insert_snippet(&mut self, name: &str, snippet: Snippet) -> Option<Snippet> {
        self.snippets.insert(SmolStr::new(name), snippet)
    }

    pub fn numbering(&self) -> Numbering {
        self.numbering
    }

    pub fn snippet_count(&self) -> usize {
        self.snippets.len()
    }
}

impl SyntaxProfile for Profile {
    fn name(&self) -> &str {
        &self.name
    }

    fn implicit_tag(&self) -> Option<&str> {
        self.implicit_tag.as_deref()
    }

    fn implicit_tag_for(&self, parent: Option<&str>) -> Option<&str> {
        let implicit = self.implicit_tag.as_deref()?;
        parent
            .and_then(|p| self.implicit_tags.get(p))
            .map(SmolStr::as_str)
            .or(Some(implicit))
    }

    fn lookup_snippet(&self, name: &str) -> Option<&Snippet> {
        self.snippets.get(name)
    }

    fn indent_unit(&self) -> &str {
        &self.indent
    }

    fn numbering_format(&self, index: usize) -> String {
        self.numbering.format(index)
    }

    fn is_void_element(&self, tag: &str) -> bool {
        self.void_elements.contains(tag)
    }

    fn self_closing(&self) -> SelfClosing {
        self.self_closing
    }

    fn output_style(&self) -> OutputStyle {
        self.output_style
    }
}
