use crate::api::{DeleteOutcome, Topic};

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextCard,
    PreviousCard,
    OpenTopic(String),
    NavigateToBoard,

    // Delete flow
    RequestDeleteTopic(String),
    ConfirmDelete,
    CancelDelete,
    DeleteTopicFinished {
        id: String,
        outcome: DeleteOutcome,
    },

    // Topic creation
    CreateTopic {
        title: String,
        emoji: String,
    },
    TopicCreated(Topic),
    TopicCreateFailed(String),

    // Data loading
    LoadTopics,
    TopicsLoaded(Vec<Topic>),
    TopicsLoadFailed(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    Notify {
        message: String,
        level: NotificationLevel,
    },

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    DeleteConfirmation {
        topic_id: String,
        title: String,
    },
    TopicCreation,
}
