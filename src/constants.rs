//! Application constants and default values.

use std::time::Duration;

/// How long a removed card keeps rendering while it fades out.
pub const CARD_FADE_DURATION: Duration = Duration::from_millis(300);

/// Delay between the entrance of consecutive cards on the board.
pub const CARD_STAGGER_INCREMENT: Duration = Duration::from_millis(100);

/// How long a transient notification stays on screen.
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

/// Delay before navigating back to the board after deleting the topic
/// currently open in the detail view.
pub const POST_DELETE_NAV_DELAY: Duration = Duration::from_secs(1);

/// Suggestions shown as a placeholder when the emoji field is focused
/// while empty. Matches the server's topic defaults.
pub const EMOJI_SUGGESTIONS: &[&str] = &[
    "📝", "💡", "🔬", "📊", "🎯", "🚀", "💻", "📚", "🌟", "🎨", "🔧", "📱",
];

/// Emoji the server assigns when none is provided.
pub const DEFAULT_TOPIC_EMOJI: &str = "📝";

/// Empty-state placeholder copy.
pub const EMPTY_STATE_ICON: &str = "📝";
pub const EMPTY_STATE_HEADING: &str = "No topics yet";
pub const EMPTY_STATE_TEXT: &str = "Press 'a' to create your first topic";

/// Confirm control labels for the delete dialog.
pub const CONFIRM_DELETE_LABEL: &str = "Delete";
pub const CONFIRM_DELETE_BUSY_LABEL: &str = "Deleting…";

pub const CONFIG_GENERATED: &str = "Generated default config";
