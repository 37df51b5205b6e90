//! Top-level application component.
//!
//! Owns the board state, the current route, the dialog surface, the
//! notification slot and the delete controller, and drives every state
//! transition through the single action pipeline.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc;

use crate::api::{DeleteOutcome, TopicBackend};
use crate::config::Config;
use crate::constants::POST_DELETE_NAV_DELAY;
use crate::ui::components::{
    DialogComponent, HintContext, NotificationComponent, StatusBarComponent, TopicGridComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, NotificationLevel},
    Component, EventType, TaskManager,
};
use crate::ui::delete_controller::DeleteController;
use crate::ui::layout::LayoutManager;

/// Where the user currently is. The detail check is a plain path
/// predicate, independent of any routing machinery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Board,
    Topic(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Board => "/".to_string(),
            Route::Topic(id) => format!("/topic/{id}"),
        }
    }

    /// Whether this is a single-topic detail view.
    pub fn is_detail(&self) -> bool {
        self.path().contains("/topic/")
    }
}

pub struct AppComponent {
    // Component composition
    pub grid: TopicGridComponent,
    pub dialog: DialogComponent,
    pub notifications: NotificationComponent,
    status_bar: StatusBarComponent,

    // Interaction state
    pub delete_controller: DeleteController,
    pub route: Route,
    /// Deadline for the scheduled board navigation after deleting the
    /// topic open in the detail view.
    pub pending_board_nav: Option<Instant>,

    // Services
    backend: Arc<dyn TopicBackend>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    pub loading: bool,
    should_quit: bool,
    nav_delay: Duration,
}

impl AppComponent {
    pub fn new(backend: Arc<dyn TopicBackend>, config: &Config) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        let grid = TopicGridComponent::with_timings(
            Duration::from_millis(config.ui.card_fade_ms),
            Duration::from_millis(config.ui.card_stagger_ms),
        );
        let notifications = NotificationComponent::with_duration(Duration::from_secs(config.ui.notification_seconds));

        Self {
            grid,
            dialog: DialogComponent::new(),
            notifications,
            status_bar: StatusBarComponent::new(),
            delete_controller: DeleteController::new(),
            route: Route::Board,
            pending_board_nav: None,
            backend,
            task_manager,
            background_action_rx,
            loading: true,
            should_quit: false,
            nav_delay: POST_DELETE_NAV_DELAY,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Kick off the initial board load.
    pub fn trigger_initial_load(&mut self) {
        self.task_manager.spawn_topics_load(self.backend.clone());
    }

    /// Keep ticking while something animated or scheduled is pending.
    pub fn needs_ticks(&self, now: Instant) -> bool {
        self.grid.is_animating(now) || self.notifications.is_visible() || self.pending_board_nav.is_some()
    }

    /// Drain completion actions sent by background tasks.
    pub fn drain_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        self.task_manager.cleanup_finished_tasks();
        actions
    }

    /// Process one input event at `now`.
    pub fn handle_event(&mut self, event: EventType, now: Instant) {
        let action = match event {
            EventType::Key(key) => self.route_key(key),
            EventType::Tick | EventType::Resize(..) | EventType::Other => Action::None,
        };
        self.apply_action(action, now);
        self.on_tick(now);
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match &self.route {
            Route::Board => self.handle_board_key(key),
            Route::Topic(id) => {
                let id = id.clone();
                self.handle_detail_key(key, &id)
            }
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('l') | KeyCode::Right => Action::NextCard,
            KeyCode::Char('k') | KeyCode::Up | KeyCode::Char('h') | KeyCode::Left => Action::PreviousCard,
            KeyCode::Enter => match self.grid.selected_topic() {
                Some(topic) => Action::OpenTopic(topic.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('a') => Action::ShowDialog(DialogType::TopicCreation),
            KeyCode::Char('d') | KeyCode::Delete => match self.grid.selected_topic() {
                Some(topic) => Action::RequestDeleteTopic(topic.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('r') => Action::LoadTopics,
            _ => Action::None,
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent, topic_id: &str) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => Action::NavigateToBoard,
            KeyCode::Char('d') | KeyCode::Delete => Action::RequestDeleteTopic(topic_id.to_string()),
            _ => Action::None,
        }
    }

    /// Apply one action. All state transitions, including those triggered
    /// by background completions, go through here.
    pub fn apply_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }

            // Navigation
            Action::NextCard => self.grid.next_card(),
            Action::PreviousCard => self.grid.previous_card(),
            Action::OpenTopic(id) => {
                log::debug!("Opening topic {id}");
                self.route = Route::Topic(id);
            }
            Action::NavigateToBoard => {
                self.route = Route::Board;
                self.pending_board_nav = None;
            }

            // Delete flow
            Action::RequestDeleteTopic(id) => {
                log::info!("Delete intent captured for topic {id}");
                self.delete_controller.capture_intent(id.clone());
                let title = self
                    .grid
                    .find_topic(&id)
                    .map(|t| t.title.clone())
                    .unwrap_or_else(|| id.clone());
                self.dialog.open(DialogType::DeleteConfirmation { topic_id: id, title });
                // An older request may still be in flight; the control
                // stays disabled until it resolves.
                self.dialog.set_confirm_busy(self.delete_controller.is_requesting());
            }
            Action::ConfirmDelete => {
                // Stray confirm with no pending intent is a silent no-op
                if let Some(id) = self.delete_controller.confirm() {
                    log::info!("Deletion confirmed for topic {id}");
                    // Busy state goes on before the request is issued
                    self.dialog.set_confirm_busy(true);
                    self.task_manager.spawn_delete(self.backend.clone(), id);
                }
            }
            Action::CancelDelete => {
                self.delete_controller.abandon();
                self.dialog.close();
            }
            Action::DeleteTopicFinished { id, outcome } => {
                self.finish_delete(&id, outcome, now);
            }

            // Topic creation
            Action::CreateTopic { title, emoji } => {
                log::info!("Creating topic '{title}'");
                self.task_manager.spawn_create_topic(self.backend.clone(), title, emoji);
            }
            Action::TopicCreated(topic) => {
                log::info!("Topic {} created", topic.id);
                self.grid.push_topic(topic);
                self.notifications
                    .show("Topic created".to_string(), NotificationLevel::Success, now);
            }
            Action::TopicCreateFailed(reason) => {
                log::error!("Topic creation failed: {reason}");
                self.notifications
                    .show("Failed to create topic".to_string(), NotificationLevel::Error, now);
            }

            // Data loading
            Action::LoadTopics => {
                self.loading = true;
                self.task_manager.spawn_topics_load(self.backend.clone());
            }
            Action::TopicsLoaded(topics) => {
                log::info!("Loaded {} topics", topics.len());
                self.loading = false;
                self.grid.set_topics(topics, now);
            }
            Action::TopicsLoadFailed(reason) => {
                log::error!("Failed to load topics: {reason}");
                self.loading = false;
                self.notifications
                    .show("Failed to load topics".to_string(), NotificationLevel::Error, now);
            }

            // UI operations
            Action::ShowDialog(dialog_type) => self.dialog.open(dialog_type),
            Action::HideDialog => self.dialog.close(),
            Action::Notify { message, level } => self.notifications.show(message, level, now),

            Action::None => {}
        }
    }

    /// Resolution handler for a delete request: the one place the busy
    /// state is released, on every path.
    fn finish_delete(&mut self, id: &str, outcome: DeleteOutcome, now: Instant) {
        // Guaranteed finalizer first, before any outcome branching
        self.delete_controller.finish_request();
        self.dialog.set_confirm_busy(false);

        match outcome {
            DeleteOutcome::Deleted => {
                // Each step independent and defensive: the dialog may have
                // been dismissed and the card may already be gone.
                if matches!(self.dialog.dialog_type, Some(DialogType::DeleteConfirmation { .. })) {
                    self.dialog.close();
                }

                self.grid.begin_remove(id, now);

                self.notifications
                    .show("Topic deleted".to_string(), NotificationLevel::Success, now);

                if self.route.is_detail() {
                    log::debug!("On {} after delete, scheduling board navigation", self.route.path());
                    self.pending_board_nav = Some(now + self.nav_delay);
                }
            }
            DeleteOutcome::Rejected(reason) => {
                log::warn!("Server declined deletion of topic {id}: {reason}");
                self.notifications
                    .show("Failed to delete topic".to_string(), NotificationLevel::Error, now);
            }
            DeleteOutcome::TransportFailed(reason) => {
                log::error!("Delete request for topic {id} failed: {reason}");
                self.notifications
                    .show("Failed to delete topic".to_string(), NotificationLevel::Error, now);
            }
        }
    }

    /// Advance time-driven state: card fades, notification expiry and the
    /// scheduled post-delete navigation.
    pub fn on_tick(&mut self, now: Instant) {
        self.grid.sweep_fades(now);
        self.notifications.expire(now);

        if let Some(deadline) = self.pending_board_nav {
            if now >= deadline {
                self.pending_board_nav = None;
                self.route = Route::Board;
            }
        }
    }

    fn hint_context(&self) -> HintContext {
        match &self.dialog.dialog_type {
            Some(DialogType::DeleteConfirmation { .. }) => HintContext::DeleteConfirmation,
            Some(DialogType::TopicCreation) => HintContext::TopicCreation,
            None => match self.route {
                Route::Board => HintContext::Board,
                Route::Topic(_) => HintContext::TopicDetail,
            },
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, now: Instant) {
        let chunks = LayoutManager::main_layout(area);

        match &self.route {
            Route::Board => self.grid.render(f, chunks[0], now),
            Route::Topic(id) => {
                let id = id.clone();
                self.render_detail(f, chunks[0], &id);
            }
        }

        self.status_bar.render(f, chunks[1], self.hint_context(), self.loading);
        self.notifications.render(f, area);

        if self.dialog.is_visible() {
            self.dialog.render(f, area);
        }
    }

    fn render_detail(&self, f: &mut Frame, area: Rect, topic_id: &str) {
        let detail_area = LayoutManager::centered_rect(80, 80, area);

        let lines = match self.grid.find_topic(topic_id) {
            Some(topic) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::raw(format!("{} ", topic.emoji)),
                        Span::styled(
                            topic.title.clone(),
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(""),
                ];
                if let Some(description) = &topic.description {
                    lines.push(Line::from(description.clone()));
                }
                if let Some(date) = &topic.date {
                    lines.push(Line::from(Span::styled(
                        date.clone(),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                lines
            }
            None => vec![Line::from(Span::styled(
                "Topic no longer exists",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        let detail = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        f.render_widget(detail, detail_area);
    }
}
