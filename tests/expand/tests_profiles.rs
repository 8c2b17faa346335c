#![allow(clippy::unwrap_used)]

use abbrev::profile::{Numbering, registry};
use abbrev::{Profile, SelfClosing, Snippet, SyntaxProfile, expand_abbreviation};
use rstest::rstest;

// ============================================================================
// BUILT-IN PROFILES
// ============================================================================

#[rstest]
#[case("html", "br+img", "<br>\n<img src=\"${1}\" alt=\"${2}\">")]
#[case("xhtml", "br+img", "<br />\n<img src=\"${1}\" alt=\"${2}\" />")]
#[case("xml", "br+img", "<br>${1}</br>\n<img>${2}</img>")]
#[case("xml", "entry/", "<entry/>")]
#[case("xml", "feed>.x", "<feed>\n  <item class=\"x\">${1}</item>\n</feed>")]
#[case("css", "m+p", "margin: ${1};\npadding: ${2};")]
#[case("css", "d:n", "display: none;")]
#[case("css", "pos:a+z{10}", "position: absolute;\nz-index: 10;")]
fn test_profile_output(#[case] profile: &str, #[case] input: &str, #[case] expected: &str) {
    let profile = registry::get(profile).unwrap();
    assert_eq!(expand_abbreviation(input, profile).text, expected);
}

#[rstest]
#[case("m>p")]
#[case("m[x=1]")]
#[case(".rule")]
fn test_stylesheet_rejects_markup_structure(#[case] input: &str) {
    let result = expand_abbreviation(input, registry::get("css").unwrap());
    assert!(!result.success);
    assert_eq!(result.text, input);
}

// ============================================================================
// CUSTOM PROFILES
// ============================================================================

#[test]
fn test_custom_profile_builder() {
    let profile = Profile::new("custom")
        .with_indent("\t")
        .with_numbering(Numbering { base: 0, padding: 2 })
        .with_self_closing(SelfClosing::Xml)
        .with_void_elements(["hr"])
        .with_snippet("btn", Snippet::new("button").with_attribute("type", "button"));

    assert_eq!(
        expand_abbreviation("div>btn{b$#}*2+hr", &profile).text,
        "<div>\n\t<button type=\"button\">b00</button>\n\t<button type=\"button\">b01</button>\n\t<hr/>\n</div>"
    );
}

/// A profile implemented outside the crate
struct Shouting;

impl SyntaxProfile for Shouting {
    fn name(&self) -> &str {
        "shouting"
    }

    fn implicit_tag(&self) -> Option<&str> {
        Some("SPAN")
    }

    fn lookup_snippet(&self, _name: &str) -> Option<&Snippet> {
        None
    }

    fn indent_unit(&self) -> &str {
        " "
    }

    fn numbering_format(&self, index: usize) -> String {
        ["I", "II", "III"].get(index).copied().unwrap_or("?").to_string()
    }
}

#[test]
fn test_foreign_profile() {
    assert_eq!(
        expand_abbreviation("p>.n{$#}*2", &Shouting).text,
        "<p>\n <SPAN class=\"n\">I</SPAN>\n <SPAN class=\"n\">II</SPAN>\n</p>"
    );
}
