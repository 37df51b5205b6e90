//! Topic card grid for the board view.
//!
//! Owns the on-screen card collection and its reconciliation after
//! deletions: fade-out of removed cards, selection, entrance staggering
//! and the empty-state placeholder.

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::api::Topic;
use crate::constants::{
    CARD_FADE_DURATION, CARD_STAGGER_INCREMENT, DEFAULT_TOPIC_EMOJI, EMPTY_STATE_HEADING, EMPTY_STATE_ICON,
    EMPTY_STATE_TEXT,
};
use crate::ui::layout::LayoutManager;

const CARD_MIN_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 5;

pub struct TopicGridComponent {
    topics: Vec<Topic>,
    selected: usize,
    /// Cards whose fade-out animation is running, keyed by topic id.
    fading: Vec<(String, Instant)>,
    /// When the current card set entered the board; drives the stagger.
    entered_at: Option<Instant>,
    empty_state_visible: bool,
    fade_duration: Duration,
    stagger_increment: Duration,
}

impl TopicGridComponent {
    pub fn new() -> Self {
        Self {
            topics: Vec::new(),
            selected: 0,
            fading: Vec::new(),
            entered_at: None,
            empty_state_visible: false,
            fade_duration: CARD_FADE_DURATION,
            stagger_increment: CARD_STAGGER_INCREMENT,
        }
    }

    pub fn with_timings(fade_duration: Duration, stagger_increment: Duration) -> Self {
        Self {
            fade_duration,
            stagger_increment,
            ..Self::new()
        }
    }

    /// Replace the card set, restarting the entrance animation.
    pub fn set_topics(&mut self, topics: Vec<Topic>, now: Instant) {
        self.topics = topics;
        self.fading.clear();
        self.selected = 0;
        self.entered_at = Some(now);
        self.empty_state_visible = false;
        self.evaluate_empty_state();
    }

    /// Append a freshly created topic to the board.
    pub fn push_topic(&mut self, topic: Topic) {
        self.topics.push(topic);
        self.empty_state_visible = false;
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn card_count(&self) -> usize {
        self.topics.len()
    }

    pub fn has_empty_state(&self) -> bool {
        self.empty_state_visible
    }

    pub fn selected_topic(&self) -> Option<&Topic> {
        self.topics.get(self.selected)
    }

    pub fn find_topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn next_card(&mut self) {
        if !self.topics.is_empty() {
            self.selected = (self.selected + 1) % self.topics.len();
        }
    }

    pub fn previous_card(&mut self) {
        if !self.topics.is_empty() {
            self.selected = if self.selected == 0 {
                self.topics.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Start the fade-out for the card of `id`.
    ///
    /// A no-op when the card is already gone or already fading; the caller
    /// must not assume the element still exists at resolution time.
    pub fn begin_remove(&mut self, id: &str, now: Instant) {
        let present = self.topics.iter().any(|t| t.id == id);
        let already_fading = self.fading.iter().any(|(fid, _)| fid == id);
        if present && !already_fading {
            self.fading.push((id.to_string(), now));
        }
    }

    /// Drop cards whose fade has elapsed and re-evaluate the empty state.
    pub fn sweep_fades(&mut self, now: Instant) {
        let fade = self.fade_duration;
        let mut expired: Vec<String> = Vec::new();
        self.fading.retain(|(id, started)| {
            if now.duration_since(*started) >= fade {
                expired.push(id.clone());
                false
            } else {
                true
            }
        });

        if expired.is_empty() {
            return;
        }

        self.topics.retain(|t| !expired.contains(&t.id));
        if self.selected >= self.topics.len() && !self.topics.is_empty() {
            self.selected = self.topics.len() - 1;
        }
        self.evaluate_empty_state();
    }

    /// Show the placeholder when the board has no cards left. The flag
    /// guards against inserting a second placeholder.
    fn evaluate_empty_state(&mut self) {
        if self.topics.is_empty() && !self.empty_state_visible {
            self.empty_state_visible = true;
        }
    }

    fn is_fading(&self, id: &str) -> bool {
        self.fading.iter().any(|(fid, _)| fid == id)
    }

    /// Whether the card at `index` has entered yet, per the stagger.
    fn has_entered(&self, index: usize, now: Instant) -> bool {
        match self.entered_at {
            Some(start) => now.duration_since(start) >= self.stagger_increment * index as u32,
            None => true,
        }
    }

    /// Animations still running means the event loop must keep ticking.
    pub fn is_animating(&self, now: Instant) -> bool {
        if !self.fading.is_empty() {
            return true;
        }
        match self.entered_at {
            Some(_) => !self.topics.is_empty() && !self.has_entered(self.topics.len() - 1, now),
            None => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, now: Instant) {
        if self.empty_state_visible && self.topics.is_empty() {
            self.render_empty_state(f, area);
            return;
        }

        let columns = LayoutManager::card_columns(area.width, CARD_MIN_WIDTH);
        let card_width = area.width / columns as u16;

        for (index, topic) in self.topics.iter().enumerate() {
            if !self.has_entered(index, now) {
                continue;
            }

            let col = (index % columns) as u16;
            let row = (index / columns) as u16;
            let y = area.y + row * CARD_HEIGHT;
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            let card_area = Rect::new(area.x + col * card_width, y, card_width, CARD_HEIGHT);

            self.render_card(f, card_area, topic, index == self.selected, self.is_fading(&topic.id));
        }
    }

    fn render_card(&self, f: &mut Frame, area: Rect, topic: &Topic, selected: bool, fading: bool) {
        let (border_style, text_style) = if fading {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        } else if selected {
            // The "lifted" hover treatment of the selected card
            (
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )
        } else {
            (Style::default().fg(Color::Gray), Style::default().fg(Color::White))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected { BorderType::Thick } else { BorderType::Rounded })
            .border_style(border_style);

        let emoji = if topic.emoji.is_empty() { DEFAULT_TOPIC_EMOJI } else { topic.emoji.as_str() };
        let mut lines = vec![Line::from(vec![
            Span::raw(format!("{emoji} ")),
            Span::styled(topic.title.clone(), text_style),
        ])];
        if let Some(description) = &topic.description {
            lines.push(Line::from(Span::styled(
                description.clone(),
                Style::default().fg(Color::Gray),
            )));
        }
        if let Some(date) = &topic.date {
            lines.push(Line::from(Span::styled(
                date.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let card = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        f.render_widget(card, area);
    }

    fn render_empty_state(&self, f: &mut Frame, area: Rect) {
        let placeholder_area = LayoutManager::centered_rect(60, 40, area);

        let lines = vec![
            Line::from(EMPTY_STATE_ICON),
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_STATE_HEADING,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(EMPTY_STATE_TEXT, Style::default().fg(Color::Gray))),
        ];

        let placeholder = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(placeholder, placeholder_area);
    }
}

impl Default for TopicGridComponent {
    fn default() -> Self {
        Self::new()
    }
}
