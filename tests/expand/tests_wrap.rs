#![allow(clippy::unwrap_used)]

use abbrev::profile::registry;
use abbrev::{ExpandError, Expander, wrap_with_abbreviation};
use rstest::rstest;

fn wrap(input: &str, selection: &str) -> String {
    wrap_with_abbreviation(input, selection, registry::html()).text
}

// ============================================================================
// SINGLE TARGET
// ============================================================================

#[test]
fn test_wrap_hello_with_div() {
    let result = wrap_with_abbreviation("div", "Hello", registry::html());
    assert!(result.success);
    assert_eq!(result.text, "<div>Hello${1}</div>");
    assert_eq!(result.text.matches("<div>").count(), 1);
}

#[rstest]
#[case("p>b", "Hi", "<p>\n  <b>Hi${1}</b>\n</p>")]
#[case("div>p+span", "Hi", "<div>\n  <p>${1}</p>\n  <span>Hi${2}</span>\n</div>")]
#[case("ul>li>{x}", "Hi", "<ul>\n  <li>\n    x\n    Hi${1}\n  </li>\n</ul>")]
#[case("(a+b)", "Hi", "<a href=\"${1}\">${2}</a>\n<b>Hi${3}</b>")]
fn test_wrap_deepest_last(#[case] input: &str, #[case] selection: &str, #[case] expected: &str) {
    assert_eq!(wrap(input, selection), expected);
}

#[test]
fn test_wrap_multi_line_is_reindented_from_depth() {
    assert_eq!(
        wrap("div>blockquote", "first\nsecond"),
        "<div>\n  <blockquote>\n    first\n    second${1}\n  </blockquote>\n</div>"
    );
}

#[test]
fn test_wrap_caret_is_last_stop() {
    let result = wrap_with_abbreviation("a", "link", registry::html());
    assert_eq!(result.text, "<a href=\"${1}\">link${2}</a>");
    assert_eq!(result.tab_stops.last().map(|s| s.index), Some(2));
    assert_eq!(result.caret_offset, result.tab_stops[1].offset);
}

#[test]
fn test_wrap_keeps_dollars_in_selection_literal() {
    let result = wrap_with_abbreviation("p", "echo ${HOME} $1", registry::html());
    assert_eq!(result.text, r"<p>echo \${HOME\} \$1${1}</p>");
    assert_eq!(result.tab_stops.len(), 1);
}

// ============================================================================
// IMPLICIT REPEAT
// ============================================================================

#[test]
fn test_wrap_lines_into_list() {
    assert_eq!(
        wrap("ul>li*", "Home\n  About\n\nContact\n"),
        "<ul>\n  <li>Home</li>\n  <li>About</li>\n  <li>Contact${1}</li>\n</ul>"
    );
}

#[test]
fn test_wrap_lines_into_nested_target() {
    assert_eq!(
        wrap("nav>a.item-$#*", "One\nTwo"),
        "<nav>\n  <a href=\"${1}\" class=\"item-1\">One</a>\n  <a href=\"${2}\" class=\"item-2\">Two${3}</a>\n</nav>"
    );
}

#[test]
fn test_wrap_lines_into_text_only_repeat_keeps_selection() {
    assert_eq!(
        wrap("ul>{item}*", "one\ntwo"),
        "<ul>\n  item\n  one\n  two${1}\n</ul>"
    );

    let result = wrap_with_abbreviation("{x}*", "one\ntwo", registry::html());
    assert!(!result.success);
    assert_eq!(result.text, "one\ntwo");
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_wrap_failure_echoes_selection() {
    let result = wrap_with_abbreviation("div>", "Hello", registry::html());
    assert!(!result.success);
    assert_eq!(result.text, "Hello");
}

#[test]
fn test_wrap_typed_errors() {
    let expander = Expander::new(registry::html());
    assert_eq!(expander.wrap("div", ""), Err(ExpandError::NothingToWrap));
    assert_eq!(expander.wrap(" ", "x"), Err(ExpandError::InputEmpty));
    assert!(matches!(expander.wrap("{only text}", "x"), Err(ExpandError::NoWrapTarget(_))));
}
