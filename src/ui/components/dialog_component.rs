//! Modal dialog container.
//!
//! Holds whichever dialog is currently open, its input state, and turns
//! key events into actions. Rendering is delegated to the specialized
//! dialog modules.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use crate::constants::EMOJI_SUGGESTIONS;
use crate::ui::components::dialogs::topic_creation_dialog::{self, CreationField};
use crate::ui::components::dialogs::delete_confirmation_dialog;
use crate::ui::core::{
    actions::{Action, DialogType, NotificationLevel},
    Component,
};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    // Creation form state
    pub title_buffer: String,
    pub emoji_buffer: String,
    pub focused_field: CreationField,
    emoji_placeholder: String,
    // Mirrors the delete request being in flight; set by the app component
    confirm_busy: bool,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            title_buffer: String::new(),
            emoji_buffer: String::new(),
            focused_field: CreationField::Title,
            emoji_placeholder: String::new(),
            confirm_busy: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn set_confirm_busy(&mut self, busy: bool) {
        self.confirm_busy = busy;
    }

    pub fn confirm_busy(&self) -> bool {
        self.confirm_busy
    }

    /// Live validation of the creation form: the submit control is enabled
    /// only while the trimmed title is non-empty.
    pub fn submit_enabled(&self) -> bool {
        !self.title_buffer.trim().is_empty()
    }

    pub fn open(&mut self, dialog_type: DialogType) {
        if matches!(dialog_type, DialogType::TopicCreation) {
            self.title_buffer.clear();
            self.emoji_buffer.clear();
            self.focused_field = CreationField::Title;
            self.emoji_placeholder.clear();
        }
        self.dialog_type = Some(dialog_type);
    }

    pub fn close(&mut self) {
        self.dialog_type = None;
        self.title_buffer.clear();
        self.emoji_buffer.clear();
        self.focused_field = CreationField::Title;
        self.emoji_placeholder.clear();
    }

    /// Pick a placeholder suggestion when the emoji field gains focus
    /// while empty. Cosmetic only; never committed as a value.
    fn refresh_emoji_placeholder(&mut self) {
        if self.emoji_buffer.is_empty() {
            let tick = chrono::Utc::now().timestamp_subsec_nanos() as usize;
            self.emoji_placeholder = EMOJI_SUGGESTIONS[tick % EMOJI_SUGGESTIONS.len()].to_string();
        }
    }

    fn handle_creation_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Tab => {
                self.focused_field = match self.focused_field {
                    CreationField::Title => {
                        self.refresh_emoji_placeholder();
                        CreationField::Emoji
                    }
                    CreationField::Emoji => CreationField::Title,
                };
                Action::None
            }
            KeyCode::Backspace => {
                match self.focused_field {
                    CreationField::Title => self.title_buffer.pop(),
                    CreationField::Emoji => self.emoji_buffer.pop(),
                };
                Action::None
            }
            KeyCode::Char(c) => {
                match self.focused_field {
                    CreationField::Title => self.title_buffer.push(c),
                    CreationField::Emoji => self.emoji_buffer.push(c),
                };
                Action::None
            }
            KeyCode::Enter => self.submit_creation(),
            _ => Action::None,
        }
    }

    /// Creation form guard: an all-whitespace title blocks submission,
    /// surfaces a validation message and refocuses the title field.
    fn submit_creation(&mut self) -> Action {
        if self.title_buffer.trim().is_empty() {
            self.focused_field = CreationField::Title;
            return Action::Notify {
                message: "Please enter a topic title".to_string(),
                level: NotificationLevel::Error,
            };
        }

        let action = Action::CreateTopic {
            title: self.title_buffer.trim().to_string(),
            emoji: self.emoji_buffer.trim().to_string(),
        };
        self.close();
        action
    }

    fn handle_delete_confirmation_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            // Busy confirm control is disabled; ignore activation
            KeyCode::Enter | KeyCode::Char('y' | 'Y') if !self.confirm_busy => Action::ConfirmDelete,
            KeyCode::Esc | KeyCode::Char('n' | 'N') => Action::CancelDelete,
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            Some(DialogType::DeleteConfirmation { .. }) => self.handle_delete_confirmation_key(key),
            Some(DialogType::TopicCreation) => self.handle_creation_key(key),
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.dialog_type {
            Some(DialogType::DeleteConfirmation { title, .. }) => {
                delete_confirmation_dialog::render(f, rect, title, self.confirm_busy);
            }
            Some(DialogType::TopicCreation) => {
                topic_creation_dialog::render(
                    f,
                    rect,
                    &self.title_buffer,
                    &self.emoji_buffer,
                    &self.emoji_placeholder,
                    self.focused_field,
                    self.submit_enabled(),
                );
            }
            None => {}
        }
    }
}
