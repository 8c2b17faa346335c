//! Resolution: apply a profile to a parsed tree
//!
//! Runs after repeat expansion. Every element ends up with a concrete tag,
//! numbered names and values, and its attributes merged with the snippet
//! defaults in output order. Classes are folded into the `class` attribute,
//! so the renderer only has to write attributes as they come.

mod numbering;

pub use numbering::substitute;

use crate::profile::{OutputStyle, SyntaxProfile};
use crate::tree::{AbbreviationNode, NodeKind};
use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;
use text_size::TextSize;
use thiserror::Error;

/// Why a node could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ResolutionReason {
    #[error("groups cannot carry attributes, classes or text")]
    DecoratedGroup,
    #[error("the profile has no implicit tag for nameless elements")]
    NoImplicitTag,
    #[error("stylesheet rules cannot be nested")]
    NestedStylesheetRule,
    #[error("stylesheet rules cannot carry attributes or classes")]
    StylesheetAttributes,
}

/// A parsed tree that the profile cannot express
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot resolve '{node}' at offset {offset:?}: {reason}")]
pub struct ResolutionError {
    /// Short label of the offending node, as in [`AbbreviationNode::describe`]
    pub node: String,
    pub offset: TextSize,
    pub reason: ResolutionReason,
}

impl ResolutionError {
    pub fn new(node: &AbbreviationNode, reason: ResolutionReason) -> Self {
        Self {
            node: node.describe(),
            offset: node.offset,
            reason,
        }
    }
}

/// Resolve every node of `root` against `profile`
pub fn resolve(
    mut root: AbbreviationNode,
    profile: &dyn SyntaxProfile,
) -> Result<AbbreviationNode, ResolutionError> {
    resolve_node(&mut root, None, None, profile)?;
    tracing::trace!(profile = profile.name(), "resolved abbreviation");
    Ok(root)
}

fn resolve_node(
    node: &mut AbbreviationNode,
    parent_tag: Option<&str>,
    inherited_index: Option<usize>,
    profile: &dyn SyntaxProfile,
) -> Result<(), ResolutionError> {
    let index = node.repeat_index.or(inherited_index);

    if node.kind == NodeKind::Element {
        resolve_element(node, parent_tag, index.unwrap_or(0), profile)?;
    } else if !node.attributes.is_empty() || !node.classes.is_empty() || node.text.is_some() {
        return Err(ResolutionError::new(node, ResolutionReason::DecoratedGroup));
    }

    // groups are transparent for implicit tags
    let tag = match node.kind {
        NodeKind::Element => node.name.clone(),
        NodeKind::Group | NodeKind::Root => parent_tag.map(SmolStr::new),
    };
    for child in &mut node.children {
        resolve_node(child, tag.as_deref(), index, profile)?;
    }
    Ok(())
}

fn resolve_element(
    node: &mut AbbreviationNode,
    parent_tag: Option<&str>,
    index: usize,
    profile: &dyn SyntaxProfile,
) -> Result<(), ResolutionError> {
    let number = profile.numbering_format(index);
    number_element(node, &number);

    if node.name.is_none() && !node.is_text_only() {
        match profile.implicit_tag_for(parent_tag) {
            Some(tag) => node.name = Some(SmolStr::new(tag)),
            None => return Err(ResolutionError::new(node, ResolutionReason::NoImplicitTag)),
        }
    }

    if profile.output_style() == OutputStyle::Stylesheet {
        if !node.children.is_empty() || parent_tag.is_some() {
            return Err(ResolutionError::new(node, ResolutionReason::NestedStylesheetRule));
        }
        if !node.attributes.is_empty() || !node.classes.is_empty() {
            return Err(ResolutionError::new(node, ResolutionReason::StylesheetAttributes));
        }
    }

    let snippet = node.name.as_deref().and_then(|name| profile.lookup_snippet(name));
    let defaults = match snippet {
        Some(snippet) => {
            node.name = Some(snippet.tag.clone());
            if node.text.is_none() {
                node.text = snippet.text.clone();
            }
            snippet.attributes.clone()
        }
        None => IndexMap::new(),
    };

    let classes = std::mem::take(&mut node.classes);
    let explicit = std::mem::take(&mut node.attributes);
    node.attributes = merge_attributes(defaults, explicit, classes);
    Ok(())
}

/// Apply `$#` and `$$` to every user-written part of an element
fn number_element(node: &mut AbbreviationNode, number: &str) {
    if let Some(name) = &node.name {
        node.name = Some(SmolStr::new(substitute(name, number)));
    }
    if node.classes.iter().any(|c| c.contains('$')) {
        node.classes = node
            .classes
            .iter()
            .map(|c| substitute(c, number).into_owned())
            .collect::<IndexSet<_>>();
    }
    for value in node.attributes.values_mut() {
        if value.contains('$') {
            *value = substitute(value, number).into_owned();
        }
    }
    if let Some(text) = &node.text {
        node.text = Some(substitute(text, number).into_owned());
    }
}

/// Merge explicit attributes into snippet defaults.
///
/// Defaults keep their order and explicit values replace them in place. The
/// other explicit attributes follow in source order, with the joined classes
/// at the position of the first class.
fn merge_attributes(
    mut merged: IndexMap<String, String>,
    mut explicit: IndexMap<String, String>,
    classes: IndexSet<String>,
) -> IndexMap<String, String> {
    if !classes.is_empty() {
        let joined = classes.into_iter().collect::<Vec<_>>().join(" ");
        *explicit.entry("class".to_string()).or_default() = joined;
    }
    for (key, value) in explicit {
        merged.insert(key, value);
    }
    merged
}
