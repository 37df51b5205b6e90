//! Transient notification overlay.
//!
//! Single-slot toast in the top-right corner; a new notification replaces
//! the current one and the slot clears itself after a fixed duration.

use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::NOTIFICATION_DURATION;
use crate::ui::core::NotificationLevel;

pub struct NotificationComponent {
    current: Option<(String, NotificationLevel, Instant)>,
    duration: Duration,
}

impl NotificationComponent {
    pub fn new() -> Self {
        Self {
            current: None,
            duration: NOTIFICATION_DURATION,
        }
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn show(&mut self, message: String, level: NotificationLevel, now: Instant) {
        self.current = Some((message, level, now));
    }

    /// Drop the notification once its display window has elapsed.
    pub fn expire(&mut self, now: Instant) {
        if let Some((_, _, shown_at)) = &self.current {
            if now.duration_since(*shown_at) >= self.duration {
                self.current = None;
            }
        }
    }

    pub fn current(&self) -> Option<(&str, NotificationLevel)> {
        self.current.as_ref().map(|(message, level, _)| (message.as_str(), *level))
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let Some((message, level, _)) = &self.current else {
            return;
        };

        let color = match level {
            NotificationLevel::Success => Color::Green,
            NotificationLevel::Error => Color::Red,
        };

        let width = (message.chars().count() as u16 + 4).clamp(24, area.width.saturating_sub(2));
        let toast_area = Rect::new(area.x + area.width.saturating_sub(width + 1), area.y + 1, width, 3);

        let toast = Paragraph::new(message.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            )
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true });

        f.render_widget(Clear, toast_area);
        f.render_widget(toast, toast_area);
    }
}

impl Default for NotificationComponent {
    fn default() -> Self {
        Self::new()
    }
}
