//! UI components.

pub mod dialog_component;
pub mod dialogs;
pub mod notification;
pub mod status_bar;
pub mod topic_grid;

pub use dialog_component::DialogComponent;
pub use notification::NotificationComponent;
pub use status_bar::{HintContext, StatusBarComponent};
pub use topic_grid::TopicGridComponent;
