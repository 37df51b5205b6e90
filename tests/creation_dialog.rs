//! Tests for the topic creation form and the confirmation dialog key
//! handling, exercised directly against the dialog component.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use topicboard::ui::components::dialogs::common;
use topicboard::ui::components::dialogs::topic_creation_dialog::CreationField;
use topicboard::ui::components::DialogComponent;
use topicboard::ui::core::actions::{Action, DialogType, NotificationLevel};
use topicboard::ui::core::Component;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn creation_dialog() -> DialogComponent {
    let mut dialog = DialogComponent::new();
    dialog.open(DialogType::TopicCreation);
    dialog
}

fn delete_dialog() -> DialogComponent {
    let mut dialog = DialogComponent::new();
    dialog.open(DialogType::DeleteConfirmation {
        topic_id: "A".to_string(),
        title: "Topic A".to_string(),
    });
    dialog
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_empty_title_blocks_submission() {
    let mut dialog = creation_dialog();

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::Notify { message, level } => {
            assert_eq!(message, "Please enter a topic title");
            assert_eq!(level, NotificationLevel::Error);
        }
        other => panic!("expected validation notification, got {other:?}"),
    }
    // Dialog stays open for correction
    assert!(dialog.is_visible());
}

#[test]
fn test_whitespace_title_blocks_submission_and_refocuses() {
    let mut dialog = creation_dialog();
    type_text(&mut dialog, "   ");
    // Move focus to the emoji field before submitting
    dialog.handle_key_events(key(KeyCode::Tab));
    assert_eq!(dialog.focused_field, CreationField::Emoji);

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::Notify { .. }));
    assert_eq!(dialog.focused_field, CreationField::Title);
    assert!(dialog.is_visible());
}

#[test]
fn test_submit_enabled_tracks_title_live() {
    let mut dialog = creation_dialog();
    assert!(!dialog.submit_enabled());

    type_text(&mut dialog, "  ");
    assert!(!dialog.submit_enabled());

    type_text(&mut dialog, "Rust");
    assert!(dialog.submit_enabled());

    for _ in 0..4 {
        dialog.handle_key_events(key(KeyCode::Backspace));
    }
    assert!(!dialog.submit_enabled());
}

#[test]
fn test_valid_submission_emits_trimmed_values_and_closes() {
    let mut dialog = creation_dialog();
    type_text(&mut dialog, "  Weekly sync  ");
    dialog.handle_key_events(key(KeyCode::Tab));
    type_text(&mut dialog, "📅");

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::CreateTopic { title, emoji } => {
            assert_eq!(title, "Weekly sync");
            assert_eq!(emoji, "📅");
        }
        other => panic!("expected create action, got {other:?}"),
    }
    assert!(!dialog.is_visible());
}

#[test]
fn test_emoji_placeholder_is_never_committed() {
    let mut dialog = creation_dialog();
    type_text(&mut dialog, "Ideas");
    // Focusing the empty emoji field picks a placeholder suggestion,
    // but submitting without typing sends an empty emoji
    dialog.handle_key_events(key(KeyCode::Tab));

    let action = dialog.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::CreateTopic { emoji, .. } => assert_eq!(emoji, ""),
        other => panic!("expected create action, got {other:?}"),
    }
}

#[test]
fn test_escape_dismisses_creation_dialog() {
    let mut dialog = creation_dialog();
    type_text(&mut dialog, "Half-typed");

    let action = dialog.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::HideDialog));
}

#[test]
fn test_reopening_clears_previous_form_state() {
    let mut dialog = creation_dialog();
    type_text(&mut dialog, "Stale");
    dialog.close();

    dialog.open(DialogType::TopicCreation);
    assert_eq!(dialog.title_buffer, "");
    assert_eq!(dialog.focused_field, CreationField::Title);
    assert!(!dialog.submit_enabled());
}

#[test]
fn test_confirmation_keys_map_to_delete_actions() {
    let mut dialog = delete_dialog();
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::ConfirmDelete));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::ConfirmDelete));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::CancelDelete));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('n'))), Action::CancelDelete));
}

fn render_input(buffer: &str, placeholder: &str, focused: bool) -> String {
    let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
    terminal
        .draw(|f| {
            let input = common::create_input_paragraph(buffer, placeholder, "Emoji", focused);
            f.render_widget(input, f.area());
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_placeholder_visible_while_empty_field_is_focused() {
    let rendered = render_input("", "📚", true);
    assert!(rendered.contains("📚"));
    // Cursor precedes the suggestion
    assert!(rendered.contains('█'));
}

#[test]
fn test_placeholder_visible_while_empty_field_is_unfocused() {
    let rendered = render_input("", "📚", false);
    assert!(rendered.contains("📚"));
}

#[test]
fn test_typed_text_replaces_placeholder() {
    let rendered = render_input("🎯", "📚", true);
    assert!(rendered.contains("🎯"));
    assert!(!rendered.contains("📚"));
}

#[test]
fn test_busy_confirm_control_ignores_activation() {
    let mut dialog = delete_dialog();
    dialog.set_confirm_busy(true);

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::None));
    // Cancelling stays available while the request is in flight
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::CancelDelete));

    dialog.set_confirm_busy(false);
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::ConfirmDelete));
}
