//! Delete confirmation dialog.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{self, shortcuts};
use crate::constants::{CONFIRM_DELETE_BUSY_LABEL, CONFIRM_DELETE_LABEL};
use crate::ui::layout::LayoutManager;

/// Render the delete confirmation dialog.
///
/// `busy` mirrors the in-flight request: the confirm control is disabled
/// and relabeled until the request resolves, whichever way it goes.
pub fn render(f: &mut Frame, area: Rect, title: &str, busy: bool) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block("⚠ Confirm Delete", Color::Red);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Question + topic title
            Constraint::Length(1), // Confirm control
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(dialog_area);

    let preview = if title.chars().count() > 40 {
        let truncated: String = title.chars().take(37).collect();
        format!("{truncated}...")
    } else {
        title.to_string()
    };

    let question = Paragraph::new(format!("Delete topic \"{preview}\"?\nThis action cannot be undone."))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(question, chunks[0]);

    // Busy state: disabled look + label swap while the request is in flight
    let (label, style) = if busy {
        (
            format!("⟳ {CONFIRM_DELETE_BUSY_LABEL}"),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            format!("[ {CONFIRM_DELETE_LABEL} ]"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };
    let confirm_control = Paragraph::new(label).style(style).alignment(Alignment::Center);
    f.render_widget(confirm_control, chunks[1]);

    let instructions = common::create_instructions_paragraph(&[
        ("Enter", Color::Red, " Confirm"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[3]);
}
