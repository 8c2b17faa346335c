//! Built-in profiles

use super::{Numbering, OutputStyle, Profile, SelfClosing, Snippet};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

const IMPLICIT_CHILDREN: &[(&str, &str)] = &[
    ("ul", "li"),
    ("ol", "li"),
    ("table", "tr"),
    ("tbody", "tr"),
    ("thead", "tr"),
    ("tfoot", "tr"),
    ("tr", "td"),
    ("select", "option"),
    ("optgroup", "option"),
    ("dl", "dt"),
    ("audio", "source"),
    ("video", "source"),
];

/// name → (tag, attributes, text)
type SnippetRow = (&'static str, &'static str, &'static [(&'static str, &'static str)], Option<&'static str>);

const MARKUP_SNIPPETS: &[SnippetRow] = &[
    ("a", "a", &[("href", "")], None),
    ("a:link", "a", &[("href", "http://")], None),
    ("a:mail", "a", &[("href", "mailto:")], None),
    ("abbr", "abbr", &[("title", "")], None),
    ("base", "base", &[("href", "")], None),
    ("bq", "blockquote", &[], None),
    ("btn", "button", &[], None),
    ("btn:s", "button", &[("type", "submit")], None),
    ("form", "form", &[("action", "")], None),
    ("form:get", "form", &[("action", ""), ("method", "get")], None),
    ("form:post", "form", &[("action", ""), ("method", "post")], None),
    ("iframe", "iframe", &[("src", ""), ("frameborder", "0")], None),
    ("img", "img", &[("src", ""), ("alt", "")], None),
    ("input", "input", &[("type", "text")], None),
    ("input:text", "input", &[("type", "text"), ("name", ""), ("id", "")], None),
    ("input:hidden", "input", &[("type", "hidden"), ("name", "")], None),
    ("input:password", "input", &[("type", "password"), ("name", ""), ("id", "")], None),
    ("input:checkbox", "input", &[("type", "checkbox"), ("name", ""), ("id", "")], None),
    ("input:radio", "input", &[("type", "radio"), ("name", ""), ("id", "")], None),
    ("input:submit", "input", &[("type", "submit"), ("value", "")], None),
    ("label", "label", &[("for", "")], None),
    ("link", "link", &[("rel", "stylesheet"), ("href", "")], None),
    ("link:css", "link", &[("rel", "stylesheet"), ("href", "style.css")], None),
    ("meta:utf", "meta", &[("http-equiv", "Content-Type"), ("content", "text/html;charset=UTF-8")], None),
    ("meta:vp", "meta", &[("name", "viewport"), ("content", "width=device-width, initial-scale=1.0")], None),
    ("opt", "option", &[("value", "")], None),
    ("option", "option", &[("value", "")], None),
    ("script", "script", &[], None),
    ("script:src", "script", &[("src", "")], None),
    ("select", "select", &[("name", ""), ("id", "")], None),
    ("style", "style", &[], None),
    ("td", "td", &[], None),
    ("textarea", "textarea", &[("name", ""), ("id", ""), ("cols", "30"), ("rows", "10")], None),
];

const STYLESHEET_SNIPPETS: &[SnippetRow] = &[
    ("bg", "background", &[], None),
    ("bgc", "background-color", &[], Some("#fff")),
    ("c", "color", &[], Some("#000")),
    ("d", "display", &[], Some("block")),
    ("d:n", "display", &[], Some("none")),
    ("d:f", "display", &[], Some("flex")),
    ("d:ib", "display", &[], Some("inline-block")),
    ("fl", "float", &[], Some("left")),
    ("fw:b", "font-weight", &[], Some("bold")),
    ("fz", "font-size", &[], None),
    ("h", "height", &[], None),
    ("lh", "line-height", &[], None),
    ("m", "margin", &[], None),
    ("mt", "margin-top", &[], None),
    ("mb", "margin-bottom", &[], None),
    ("p", "padding", &[], None),
    ("pos", "position", &[], Some("relative")),
    ("pos:a", "position", &[], Some("absolute")),
    ("ta", "text-align", &[], Some("left")),
    ("ta:c", "text-align", &[], Some("center")),
    ("w", "width", &[], None),
    ("z", "z-index", &[], None),
];

fn with_snippets(mut profile: Profile, rows: &[SnippetRow]) -> Profile {
    for (name, tag, attributes, text) in rows {
        let mut snippet = Snippet::new(tag);
        for (key, value) in attributes.iter() {
            snippet = snippet.with_attribute(key, value);
        }
        if let Some(text) = text {
            snippet = snippet.with_text(text);
        }
        profile.insert_snippet(name, snippet);
    }
    profile
}

fn with_implicit_children(mut profile: Profile) -> Profile {
    for (parent, child) in IMPLICIT_CHILDREN {
        profile = profile.with_implicit_child(parent, child);
    }
    profile
}

impl Profile {
    /// HTML: `div` implicit tag, `<br>` void elements, numbering from 1
    pub fn html() -> Self {
        let profile = Profile::new("html")
            .with_void_elements(VOID_ELEMENTS.iter().copied())
            .with_self_closing(SelfClosing::Html);
        with_snippets(with_implicit_children(profile), MARKUP_SNIPPETS)
    }

    /// HTML snippets with XHTML-style `<br />` void elements
    pub fn xhtml() -> Self {
        Self::html()
            .with_name("xhtml")
            .with_self_closing(SelfClosing::Xhtml)
    }

    /// Generic XML: no snippets, no void elements, `<tag/>` for `/`
    pub fn xml() -> Self {
        Profile::new("xml")
            .with_implicit_tag(Some("item"))
            .with_self_closing(SelfClosing::Xml)
    }

    /// Stylesheet: `m` → `margin: ;`, no nesting, no implicit tag
    pub fn css() -> Self {
        let profile = Profile::new("css")
            .with_implicit_tag(None)
            .with_indent("\t")
            .with_numbering(Numbering::default())
            .with_output_style(OutputStyle::Stylesheet);
        with_snippets(profile, STYLESHEET_SNIPPETS)
    }
}
