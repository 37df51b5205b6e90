//! Topic creation dialog rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common::{self, shortcuts};
use crate::ui::layout::LayoutManager;

/// Which input field of the creation form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationField {
    Title,
    Emoji,
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    title_buffer: &str,
    emoji_buffer: &str,
    emoji_placeholder: &str,
    focus: CreationField,
    submit_enabled: bool,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 12, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block("✚ New Topic", Color::Green);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title field
            Constraint::Length(3), // Emoji field
            Constraint::Length(1), // Submit control
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(dialog_area);

    let title_input = common::create_input_paragraph(title_buffer, "", "Title", focus == CreationField::Title);
    f.render_widget(title_input, chunks[0]);

    // The placeholder surfaces a random suggestion while the field is
    // focused and empty; it is never committed as a value.
    let emoji_input =
        common::create_input_paragraph(emoji_buffer, emoji_placeholder, "Emoji", focus == CreationField::Emoji);
    f.render_widget(emoji_input, chunks[1]);

    // Submit control tracks the live validation state of the title field
    let (label, style) = if submit_enabled {
        (
            "[ Add Topic ]",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        ("[ Add Topic ]", Style::default().fg(Color::DarkGray))
    };
    let submit_control = Paragraph::new(label).style(style).alignment(Alignment::Center);
    f.render_widget(submit_control, chunks[2]);

    let instructions = common::create_instructions_paragraph(&[
        ("Enter", Color::Green, " Submit"),
        shortcuts::SEPARATOR,
        shortcuts::TAB_FIELD,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[4]);
}
