#![allow(clippy::unwrap_used)]

use crate::helpers::mock_editor::MockEditor;
use abbrev::profile::registry;
use abbrev::session::Mode;
use abbrev::{AsYouTypeCommand, ExpandError, History, SessionState, expand_at_caret};

// ============================================================================
// EXPAND COMMAND
// ============================================================================

#[test]
fn test_prompt_defaults_to_div() {
    let command = AsYouTypeCommand::expand(MockEditor::new("x"), registry::html(), &History::default());
    let prompt = &command.host().prompts[0];
    assert_eq!(prompt.default_text, "div");
    assert_eq!(prompt.message, "Enter Abbreviation: ");
}

#[test]
fn test_prompt_defaults_to_latest_history() {
    let mut history = History::default();
    history.record("ul>li*3");
    let command = AsYouTypeCommand::expand(MockEditor::new(""), registry::html(), &history);
    assert_eq!(command.host().prompts[0].default_text, "ul>li*3");
}

#[test]
fn test_each_change_replaces_only_own_text() {
    let editor = MockEditor::with_caret("before|after", 7);
    let mut command = AsYouTypeCommand::expand(editor, registry::html(), &History::default());

    command.on_change("p");
    assert_eq!(command.host().buffer, "before|<p>${1}</p>after");

    command.on_change("p>");
    assert_eq!(command.host().buffer, "before|<p>${1}</p>after");

    command.on_change("b");
    assert_eq!(command.host().buffer, "before|<b>${1}</b>after");
}

#[test]
fn test_commit_records_history() {
    let mut history = History::default();
    let mut command = AsYouTypeCommand::expand(MockEditor::new(""), registry::html(), &history);
    command.on_change("h1");
    let result = command.on_commit("h1", &mut history);

    assert!(result.success);
    assert_eq!(history.latest(), Some("h1"));
    assert_eq!(command.host().buffer, "<h1>${1}</h1>");
}

#[test]
fn test_invalid_commit_is_not_recorded() {
    let mut history = History::default();
    let mut command = AsYouTypeCommand::expand(MockEditor::new(""), registry::html(), &history);
    command.on_commit("h1>", &mut history);
    assert!(history.is_empty());
    assert_eq!(command.host().buffer, "");
}

#[test]
fn test_cancel_restores_empty_text() {
    let mut command = AsYouTypeCommand::expand(MockEditor::new("abc"), registry::html(), &History::default());
    command.on_change("ul>li*2");
    command.on_cancel();
    assert_eq!(command.host().buffer, "abc");
    assert_eq!(command.state(), &SessionState::Empty);
}

// ============================================================================
// WRAP COMMAND
// ============================================================================

#[test]
fn test_wrap_selection_is_unindented() {
    let buffer = "<body>\n    first\n    second\n</body>";
    let start = buffer.find("first").unwrap() - 4;
    let end = buffer.find("second").unwrap() + "second".len();
    let editor = MockEditor::with_selection(buffer, start, end);

    let mut command = AsYouTypeCommand::wrap(editor, registry::html(), &History::default()).unwrap();
    assert_eq!(
        command.mode(),
        &Mode::Wrap {
            selection: "first\nsecond".to_string()
        }
    );
    assert_eq!(command.host().prompts[0].message, "Enter Wrap Abbreviation: ");

    command.on_change("div");
    assert_eq!(
        command.host().buffer,
        "<body>\n<div>\n  first\n  second${1}\n</div>\n</body>"
    );

    command.on_cancel();
    assert_eq!(command.host().buffer, buffer);
}

#[test]
fn test_wrap_mixed_indentation_strips_first_line_padding() {
    let buffer = "  one\n\ttwo\n    three";
    let editor = MockEditor::with_selection(buffer, 0, buffer.len());

    let command = AsYouTypeCommand::wrap(editor, registry::html(), &History::default()).unwrap();
    assert_eq!(
        command.mode(),
        &Mode::Wrap {
            selection: "one\n\ttwo\n  three".to_string()
        }
    );
}

#[test]
fn test_wrap_current_line_without_selection() {
    let editor = MockEditor::with_caret("a\n  Hello\nb", 4);
    let mut command = AsYouTypeCommand::wrap(editor, registry::html(), &History::default()).unwrap();
    command.on_change("em");
    assert_eq!(command.host().buffer, "a\n  <em>Hello${1}</em>\nb");
}

#[test]
fn test_wrap_invalid_keeps_selection() {
    let editor = MockEditor::with_caret("Hello", 0);
    let mut command = AsYouTypeCommand::wrap(editor, registry::html(), &History::default()).unwrap();
    command.on_change("(");
    assert_eq!(command.host().buffer, "Hello");
}

#[test]
fn test_wrap_blank_line() {
    let editor = MockEditor::with_caret("a\n   \nb", 3);
    let result = AsYouTypeCommand::wrap(editor, registry::html(), &History::default());
    assert!(matches!(result, Err(ExpandError::NothingToWrap)));
}

// ============================================================================
// EXPAND AT CARET
// ============================================================================

#[test]
fn test_expand_at_caret() {
    let mut editor = MockEditor::with_caret("<p>ul>li*2</p>", 10);
    let result = expand_at_caret(&mut editor, registry::html()).unwrap();
    assert_eq!(result.tab_stops.len(), 2);
    assert_eq!(
        editor.buffer,
        "<p><ul>\n  <li>${1}</li>\n  <li>${2}</li>\n</ul></p>"
    );
}

#[test]
fn test_expand_at_caret_keeps_line_indent() {
    let mut editor = MockEditor::new("x\n    nav>a");
    expand_at_caret(&mut editor, registry::html()).unwrap();
    assert_eq!(
        editor.buffer,
        "x\n    <nav>\n      <a href=\"${1}\">${2}</a>\n    </nav>"
    );
}

#[test]
fn test_expand_at_caret_nothing_to_expand() {
    let mut editor = MockEditor::new("text ");
    assert!(expand_at_caret(&mut editor, registry::html()).is_none());
    assert!(editor.edits.is_empty());
}
