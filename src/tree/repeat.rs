//! Repeat expansion and wrap-target marking

use super::{AbbreviationNode, NodeKind, Repeat};

/// Upper bound on [`AbbreviationNode::expanded_len`] accepted for expansion
pub const MAX_EXPANDED_NODES: usize = 10_000;

/// Materialize every multiplied node as consecutive deep copies.
///
/// A node with `Repeat::Count(n)` is replaced, at its position in the
/// parent's children, by `n` copies with `repeat_index` `0..n`. Nested
/// multipliers are expanded first, so every copy owns a fully expanded
/// subtree. `Repeat::Implicit` produces a single copy. The result has
/// [`AbbreviationNode::expanded_len`] nodes, which callers bound with
/// [`MAX_EXPANDED_NODES`].
pub fn expand_repeats(mut root: AbbreviationNode) -> AbbreviationNode {
    let mut lines_used = false;
    expand_children(&mut root, None, &mut lines_used);
    root
}

/// Like [`expand_repeats`], but the innermost implicit multiplier (`li*`) is
/// repeated once per entry of `lines`, and each copy's wrap target receives
/// its line.
///
/// Returns whether an implicit multiplier consumed the lines.
pub fn expand_repeats_with_lines(
    mut root: AbbreviationNode,
    lines: &[String],
) -> (AbbreviationNode, bool) {
    let mut lines_used = false;
    expand_children(&mut root, Some(lines), &mut lines_used);
    (root, lines_used)
}

fn expand_children(node: &mut AbbreviationNode, lines: Option<&[String]>, lines_used: &mut bool) {
    let children = std::mem::take(&mut node.children);
    let mut expanded = Vec::with_capacity(children.len());

    for mut child in children {
        expand_children(&mut child, lines, lines_used);

        match child.repeat {
            Repeat::Count(n) if n > 1 => {
                for index in 0..n {
                    let mut copy = child.clone();
                    copy.repeat = Repeat::Count(1);
                    copy.repeat_index = Some(index);
                    expanded.push(copy);
                }
            }
            Repeat::Count(_) => expanded.push(child),
            Repeat::Implicit => match lines {
                // a copy that cannot hold its line would drop it
                Some(lines) if !*lines_used && !lines.is_empty() && has_wrap_target(&child) => {
                    *lines_used = true;
                    let last = lines.len() - 1;
                    for (index, line) in lines.iter().enumerate() {
                        let mut copy = child.clone();
                        copy.repeat = Repeat::Count(1);
                        copy.repeat_index = Some(index);
                        mark_wrap_target(&mut copy, line, index == last);
                        expanded.push(copy);
                    }
                }
                _ => {
                    child.repeat = Repeat::Count(1);
                    child.repeat_index = Some(0);
                    expanded.push(child);
                }
            },
        }
    }

    node.children = expanded;
}

/// Index path from `node` to its deepest last element, if it has one.
fn wrap_target_path(node: &AbbreviationNode) -> Option<Vec<usize>> {
    for (i, child) in node.children.iter().enumerate().rev() {
        match child.kind {
            NodeKind::Element if !child.is_text_only() => {
                let mut path = vec![i];
                path.extend(wrap_target_path(child).unwrap_or_default());
                return Some(path);
            }
            NodeKind::Group | NodeKind::Root => {
                if let Some(rest) = wrap_target_path(child) {
                    let mut path = vec![i];
                    path.extend(rest);
                    return Some(path);
                }
            }
            NodeKind::Element => {}
        }
    }
    None
}

/// Whether [`mark_wrap_target`] would find an element in `node`
fn has_wrap_target(node: &AbbreviationNode) -> bool {
    (node.kind == NodeKind::Element && !node.is_text_only()) || wrap_target_path(node).is_some()
}

/// Splice `content` into the deepest last element of `node`.
///
/// An element with no element children is its own target. When
/// `caret_anchor` is set, the target also receives the final caret position.
/// Returns `false` if the tree has no element that can hold the content.
pub fn mark_wrap_target(node: &mut AbbreviationNode, content: &str, caret_anchor: bool) -> bool {
    let path = match wrap_target_path(node) {
        Some(path) => path,
        None if node.kind == NodeKind::Element && !node.is_text_only() => Vec::new(),
        None => return false,
    };

    let mut target = node;
    for index in path {
        target = &mut target.children[index];
    }
    target.wrapped = Some(content.to_string());
    target.caret_anchor = caret_anchor;
    true
}
