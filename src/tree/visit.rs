//! Depth-first traversal of abbreviation trees.

use super::AbbreviationNode;

/// Visitor trait for abbreviation trees.
///
/// `enter` is called before a node's children, `leave` after them. Default
/// implementations are no-ops. `depth` is 0 for the node passed to [`walk`].
pub trait Visitor {
    fn enter(&mut self, _node: &AbbreviationNode, _depth: usize) {}
    fn leave(&mut self, _node: &AbbreviationNode, _depth: usize) {}
}

/// Walk `node` and its descendants in pre-order, left to right.
pub fn walk<V: Visitor + ?Sized>(node: &AbbreviationNode, visitor: &mut V) {
    walk_at(node, 0, visitor);
}

fn walk_at<V: Visitor + ?Sized>(node: &AbbreviationNode, depth: usize, visitor: &mut V) {
    visitor.enter(node, depth);
    for child in &node.children {
        walk_at(child, depth + 1, visitor);
    }
    visitor.leave(node, depth);
}

/// Pre-order iterator returned by [`AbbreviationNode::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a AbbreviationNode>,
}

impl<'a> Descendants<'a> {
    pub(super) fn new(root: &'a AbbreviationNode) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a AbbreviationNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
