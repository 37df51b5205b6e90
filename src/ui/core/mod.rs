//! Core UI functionality for the topicboard application.
//!
//! This module contains the fundamental building blocks for the user
//! interface: event handling, the action vocabulary, the component
//! abstraction, and background task management.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are processed through the [`EventHandler`] system
//! 4. **Tasks** are managed asynchronously via the [`TaskManager`]
//!
//! Every user interaction, wherever it originates, funnels through the one
//! action pipeline owned by the app component, so dynamically appearing
//! surfaces (cards, dialogs) never register their own listeners.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, NotificationLevel};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
