//! Delete interaction lifecycle.
//!
//! One controller instance, owned by the app component, mediates every
//! topic deletion: intent capture, confirmation, the in-flight busy state
//! of the confirm control, and the unconditional busy release when the
//! request resolves.

use log::debug;

/// Phase of the current deletion cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteCycle {
    Idle,
    AwaitingConfirmation,
    Requesting,
}

/// Tracks the single pending-deletion slot and the confirm control's
/// busy state.
///
/// At most one deletion intent is tracked at a time: capturing a new
/// intent overwrites the previous identifier (last-write-wins, no queue).
/// The busy flag is independent of the pending slot because a request can
/// still be in flight while the user captures a fresh intent.
pub struct DeleteController {
    pending: Option<String>,
    requesting: bool,
}

impl DeleteController {
    pub fn new() -> Self {
        Self {
            pending: None,
            requesting: false,
        }
    }

    /// Record a deletion intent. Overwrites any previous one silently.
    pub fn capture_intent(&mut self, topic_id: String) {
        if let Some(previous) = &self.pending {
            debug!("Overwriting pending deletion {previous} with {topic_id}");
        }
        self.pending = Some(topic_id);
    }

    /// Consume the pending intent and enter the busy state.
    ///
    /// Returns `None` when no intent is pending (a stray confirm with no
    /// active context), in which case nothing changes and no request must
    /// be issued.
    pub fn confirm(&mut self) -> Option<String> {
        let id = self.pending.take()?;
        self.requesting = true;
        Some(id)
    }

    /// Dialog dismissed without confirming. Clears the intent only; an
    /// in-flight request keeps running and resolves normally.
    pub fn abandon(&mut self) {
        self.pending = None;
    }

    /// Release the busy state. Called exactly once per request cycle from
    /// the single resolution handler, before any outcome branching.
    pub fn finish_request(&mut self) {
        self.requesting = false;
    }

    /// Identifier currently awaiting confirmation, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Whether a delete request is in flight (confirm control busy).
    pub fn is_requesting(&self) -> bool {
        self.requesting
    }

    /// Phase of the newest cycle. A fresh intent captured while an older
    /// request is still in flight reads as AwaitingConfirmation.
    pub fn cycle(&self) -> DeleteCycle {
        if self.pending.is_some() {
            DeleteCycle::AwaitingConfirmation
        } else if self.requesting {
            DeleteCycle::Requesting
        } else {
            DeleteCycle::Idle
        }
    }
}

impl Default for DeleteController {
    fn default() -> Self {
        Self::new()
    }
}
