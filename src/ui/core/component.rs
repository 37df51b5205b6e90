use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// An interactive surface: translates key events into [`Action`]s and
/// draws itself into a frame region.
///
/// The app component routes keys to whichever surface has focus through
/// this trait, so modal surfaces never install their own event handling.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
