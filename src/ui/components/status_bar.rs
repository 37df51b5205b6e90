//! Status bar with context-sensitive key hints.
//!
//! Every focusable surface is bound to its hint line once, in a static
//! table; the bar just looks up the current context.

use once_cell::sync::Lazy;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::collections::HashMap;

/// Which surface currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintContext {
    Board,
    TopicDetail,
    DeleteConfirmation,
    TopicCreation,
}

static HINTS: Lazy<HashMap<HintContext, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            HintContext::Board,
            "j/k select • Enter open • a add • d delete • r refresh • q quit",
        ),
        (HintContext::TopicDetail, "d delete • Esc back • q quit"),
        (HintContext::DeleteConfirmation, "Enter confirm • Esc cancel"),
        (HintContext::TopicCreation, "Tab switch field • Enter submit • Esc cancel"),
    ])
});

pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn hint_for(context: HintContext) -> &'static str {
        HINTS.get(&context).copied().unwrap_or("")
    }

    pub fn render(&self, f: &mut Frame, area: Rect, context: HintContext, loading: bool) {
        let text = if loading {
            "⟳ Loading topics…".to_string()
        } else {
            format!(" {}", Self::hint_for(context))
        };

        let bar = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        f.render_widget(bar, area);
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
