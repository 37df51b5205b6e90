//! UI module for topicboard
//!
//! This module handles all user interface components, rendering, and user
//! interactions.

pub mod app_component;
pub mod components;
pub mod core;
pub mod delete_controller;
pub mod layout;

use std::io;
use std::sync::Arc;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::api::TopicBackend;
use crate::config::Config;
pub use app_component::{AppComponent, Route};
use core::{EventHandler, EventType};
pub use delete_controller::{DeleteController, DeleteCycle};
pub use layout::LayoutManager;

/// Run the interactive application until the user quits.
pub async fn run_app(backend: Arc<dyn TopicBackend>, config: &Config) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(terminal_backend)?;

    let mut app = AppComponent::new(backend, config);
    let mut event_handler = EventHandler::new();

    app.trigger_initial_load();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal state even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    loop {
        let now = Instant::now();

        for action in app.drain_background_actions() {
            app.apply_action(action, now);
        }
        app.on_tick(now);

        terminal.draw(|f| app.render(f, f.area(), now))?;

        if app.should_quit() {
            log::info!("Goodbye");
            return Ok(());
        }

        match event_handler.next_event(app.needs_ticks(now)).await? {
            EventType::Tick => {}
            event => app.handle_event(event, Instant::now()),
        }
    }
}
