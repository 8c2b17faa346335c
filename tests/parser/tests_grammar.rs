#![allow(clippy::unwrap_used)]

use abbrev::parser::tokenize;
use abbrev::parser::TokenKind;
use abbrev::{AbbreviationNode, NodeKind, Operator, Repeat, parse};
use rstest::rstest;

/// Abbreviation-like outline of a tree: `ul>(li*2>a)+p`
fn outline(node: &AbbreviationNode) -> String {
    let mut out = String::new();
    for (i, child) in node.children.iter().enumerate() {
        if i > 0 {
            out.push('+');
        }
        match child.kind {
            NodeKind::Group => {
                out.push('(');
                out.push_str(&outline(child));
                out.push(')');
            }
            _ => out.push_str(&child.describe()),
        }
        match child.repeat {
            Repeat::Count(1) => {}
            Repeat::Count(n) => out.push_str(&format!("*{}", n)),
            Repeat::Implicit => out.push('*'),
        }
        if child.kind != NodeKind::Group && !child.children.is_empty() {
            out.push('>');
            out.push_str(&outline(child));
        }
    }
    out
}

// ============================================================================
// STRUCTURE
// ============================================================================

#[rstest]
#[case("div", "div")]
#[case("div>p", "div>p")]
#[case("div+p+span", "div+p+span")]
#[case("div>p>span", "div>p>span")]
#[case("div>p+span", "div>p+span")]
#[case("div>p^span", "div>p+span")]
#[case("a>b>c^^d", "a>b>c+d")]
#[case("ul>li*3", "ul>li*3")]
#[case("ul>li*", "ul>li*")]
#[case("(a+b)*2", "(a+b)*2")]
#[case("div>(header>nav)+footer", "div>(header>nav)+footer")]
#[case("(ul>li)>a", "(ul>li+a)")]
#[case("#main.wrap", "#main.wrap")]
#[case("{Hello}", "{Hello}")]
fn test_tree_shape(#[case] input: &str, #[case] expected: &str) {
    let root = parse(input).unwrap();
    assert_eq!(root.kind, NodeKind::Root);
    assert_eq!(outline(&root), expected, "shape of {input}");
}

#[test]
fn test_child_after_group_goes_into_group() {
    let root = parse("(ul>li)>a").unwrap();
    let group = &root.children[0];
    assert_eq!(group.children.len(), 2);
    assert_eq!(group.children[1].tag(), Some("a"));
    assert_eq!(group.children[1].operator, Operator::Child);
}

#[rstest]
#[case("a>b^c", 1)]
#[case("a>b>c^^d", 2)]
#[case("a^b", 1)]
fn test_climb_operator_recorded(#[case] input: &str, #[case] carets: usize) {
    let root = parse(input).unwrap();
    let last = root.descendants().last().unwrap();
    assert_eq!(last.operator, Operator::Climb(carets));
}

#[test]
fn test_climb_lands_at_top_level() {
    let root = parse("header>nav^main^^footer").unwrap_err();
    assert_eq!(root.code.as_str(), "E0403");

    let root = parse("header>nav^main^footer").unwrap();
    let tags: Vec<_> = root.children.iter().filter_map(|n| n.tag()).collect();
    assert_eq!(tags, vec!["header", "main", "footer"]);
}

// ============================================================================
// ELEMENT PARTS
// ============================================================================

#[test]
fn test_attribute_order_and_duplicates() {
    let root = parse("a[x=1 y=2 x=3]").unwrap();
    let attrs: Vec<_> = root.children[0]
        .attributes
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    assert_eq!(attrs, vec!["x=3", "y=2"]);
}

#[rstest]
#[case(r#"a[title="two words"]"#, "title", "two words")]
#[case("a[title='single']", "title", "single")]
#[case("a[href=#top]", "href", "#top")]
#[case("a[data-x=$#]", "data-x", "$#")]
#[case("input[disabled]", "disabled", "")]
fn test_attribute_values(#[case] input: &str, #[case] key: &str, #[case] value: &str) {
    let root = parse(input).unwrap();
    assert_eq!(root.children[0].attributes.get(key).map(String::as_str), Some(value));
}

#[test]
fn test_class_attribute_merges_into_classes() {
    let root = parse("p.a[class=\"b c\"]").unwrap();
    let classes: Vec<_> = root.children[0].classes.iter().cloned().collect();
    assert_eq!(classes, vec!["a", "b", "c"]);
}

#[test]
fn test_text_is_opaque() {
    let root = parse("p{a > b + c * 2}").unwrap();
    assert_eq!(root.children[0].text.as_deref(), Some("a > b + c * 2"));
    assert!(root.children[0].children.is_empty());
}

#[test]
fn test_offsets() {
    let root = parse("ul>li.x+p").unwrap();
    let offsets: Vec<_> = root
        .descendants()
        .skip(1)
        .map(|n| u32::from(n.offset))
        .collect();
    assert_eq!(offsets, vec![0, 3, 8]);
}

// ============================================================================
// TOKENS
// ============================================================================

#[test]
fn test_tokenize_never_fails() {
    let kinds: Vec<_> = tokenize("a@b").iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Ident, TokenKind::Literal, TokenKind::Ident]);
}
