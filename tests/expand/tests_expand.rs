#![allow(clippy::unwrap_used)]

use abbrev::profile::registry;
use abbrev::{ExpandError, Expander, Profile, RenderOptions, TextSize, expand_abbreviation};
use rstest::rstest;

fn html(input: &str) -> String {
    expand_abbreviation(input, registry::html()).text
}

// ============================================================================
// MARKUP OUTPUT
// ============================================================================

#[rstest]
#[case("p", "<p>${1}</p>")]
#[case("p{Hi}", "<p>Hi</p>")]
#[case("div#main.a.b", "<div id=\"main\" class=\"a b\">${1}</div>")]
#[case(".wrap", "<div class=\"wrap\">${1}</div>")]
#[case("a", "<a href=\"${1}\">${2}</a>")]
#[case("a[href=foo]{x}", "<a href=\"foo\">x</a>")]
#[case("br", "<br>")]
#[case("img", "<img src=\"${1}\" alt=\"${2}\">")]
#[case("h1+h2", "<h1>${1}</h1>\n<h2>${2}</h2>")]
#[case("ul>li*2", "<ul>\n  <li>${1}</li>\n  <li>${2}</li>\n</ul>")]
#[case("ul>.x", "<ul>\n  <li class=\"x\">${1}</li>\n</ul>")]
#[case("table>.row>.cell", "<table>\n  <tr class=\"row\">\n    <td class=\"cell\">${1}</td>\n  </tr>\n</table>")]
#[case("p>{Hello }+b{world}", "<p>\n  Hello \n  <b>world</b>\n</p>")]
fn test_expand_markup(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(html(input), expected);
}

#[test]
fn test_numbering() {
    assert_eq!(
        html("ul>li.item-$#*3{item $#}"),
        "<ul>\n  <li class=\"item-1\">item 1</li>\n  <li class=\"item-2\">item 2</li>\n  <li class=\"item-3\">item 3</li>\n</ul>"
    );
}

#[test]
fn test_numbering_escape_and_plain_dollar() {
    assert_eq!(html("p{$$5 or $ 5}"), r"<p>\$5 or \$ 5</p>");
}

#[test]
fn test_repeated_group() {
    assert_eq!(
        html("(dt+dd)*2"),
        "<dt>${1}</dt>\n<dd>${2}</dd>\n<dt>${3}</dt>\n<dd>${4}</dd>"
    );
}

#[test]
fn test_attribute_precedence_renders_once() {
    let text = html("a[href=foo]");
    assert_eq!(text.matches("href=").count(), 1);
    assert!(text.contains("href=\"foo\""));
}

#[test]
fn test_deterministic_output() {
    let input = "div#page>(header>nav>ul>li.item-$#*4>a)+main+footer";
    assert_eq!(html(input), html(input));
}

// ============================================================================
// RESULT METADATA
// ============================================================================

#[test]
fn test_tab_stops_and_caret() {
    let result = expand_abbreviation("a+p", registry::html());
    assert!(result.success);
    let numbers: Vec<_> = result.tab_stops.iter().map(|s| s.index).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(result.caret_offset, result.tab_stops[2].offset);
}

#[test]
fn test_plain_rendering_reports_offsets() {
    let html = Profile::html();
    let options = RenderOptions::plain();
    let result = Expander::new(&html).with_options(&options).expand("a").unwrap();
    assert_eq!(result.text, "<a href=\"\"></a>");
    assert_eq!(result.tab_stops[0].offset, TextSize::new(9));
    assert_eq!(result.caret_offset, TextSize::new(11));
}

// ============================================================================
// FAILURES
// ============================================================================

#[rstest]
#[case("div>")]
#[case("a>b^^^c")]
#[case("(ul")]
fn test_failure_echoes_input(#[case] input: &str) {
    let result = expand_abbreviation(input, registry::html());
    assert!(!result.success);
    assert_eq!(result.text, input);
    assert!(result.tab_stops.is_empty());
}

#[test]
fn test_typed_errors() {
    let css = Profile::css();
    let expander = Expander::new(&css);
    assert!(matches!(expander.expand("m>p"), Err(ExpandError::Resolution(_))));
    assert!(matches!(expander.expand(""), Err(ExpandError::InputEmpty)));
    assert!(matches!(expander.expand("m>"), Err(ExpandError::Parse(_))));
}
