#![allow(clippy::unwrap_used)]

use abbrev::profile::registry;
use abbrev::{
    ExpansionResult, SessionState, SharedSession, expand_abbreviation, expand_as_you_type,
    wrap_as_you_type,
};
use rstest::rstest;

/// Feed `keystrokes` one by one, returning what was shown after each
fn type_out(keystrokes: &[&str]) -> (Vec<ExpansionResult>, SessionState) {
    let html = registry::html();
    let mut state = SessionState::Empty;
    let mut shown = Vec::new();
    for input in keystrokes {
        let (result, next) = expand_as_you_type(input, &state, html);
        shown.push(result);
        state = next;
    }
    (shown, state)
}

// ============================================================================
// STATE MACHINE
// ============================================================================

#[test]
fn test_div_then_dangling_keeps_div() {
    let (shown, state) = type_out(&["div", "div>"]);
    let div = expand_abbreviation("div", registry::html());
    assert_eq!(shown[0], div);
    assert_eq!(shown[1], div);
    assert_eq!(state, SessionState::Invalid { last_valid: Some(div) });
}

#[test]
fn test_recovers_after_invalid() {
    let (shown, state) = type_out(&["ul", "ul>", "ul>li"]);
    assert!(state.is_valid());
    assert!(shown[2].text.contains("<li>"));
}

#[rstest]
#[case(&["", "  "])]
#[case(&["p", ""])]
fn test_blank_input_is_empty(#[case] keystrokes: &[&str]) {
    let (shown, state) = type_out(keystrokes);
    assert_eq!(state, SessionState::Empty);
    assert_eq!(shown.last(), Some(&ExpansionResult::noop()));
}

#[test]
fn test_never_emits_error_text() {
    let (shown, _) = type_out(&["(", "(ul", "(ul>", "(ul>li"]);
    for result in &shown[..3] {
        assert!(result.text.is_empty());
        assert!(!result.success);
    }
    assert!(shown[3].text.is_empty(), "unclosed group still invalid");
}

#[test]
fn test_wrap_as_you_type() {
    let html = registry::html();
    let (first, state) = wrap_as_you_type("p", "Hi", &SessionState::Empty, html);
    assert_eq!(first.text, "<p>Hi${1}</p>");

    let (shown, state) = wrap_as_you_type("p>", "Hi", &state, html);
    assert_eq!(shown, first);
    assert_eq!(state.last_valid(), Some(&first));
}

// ============================================================================
// SHARED SESSION
// ============================================================================

#[test]
fn test_shared_session_follows_state_machine() {
    let session = SharedSession::new(registry::html());
    let div = session.expand("div").unwrap();
    assert_eq!(session.expand("div>").unwrap(), div);
    assert_eq!(session.wrap("b", "x").unwrap().text, "<b>x${1}</b>");
    session.cancel();
    assert_eq!(session.state(), SessionState::Empty);
}
