use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::actions::Action;
use crate::api::TopicBackend;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Spawns background server operations and reports their results back to
/// the event loop as [`Action`]s over an unbounded channel.
///
/// Every spawned operation sends exactly one completion action, including
/// on failure. The delete operation in particular never goes silent: its
/// completion action is what releases the confirm control's busy state.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn register(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Spawn the delete request for `id`.
    ///
    /// The task resolves to a single `DeleteTopicFinished` action no matter
    /// how the request ends; the backend collapses every failure mode into
    /// a [`crate::api::DeleteOutcome`].
    pub fn spawn_delete(&mut self, backend: Arc<dyn TopicBackend>, id: String) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Delete topic {id}");

        let handle = tokio::spawn(async move {
            let outcome = backend.delete_topic(&id).await;
            let _ = action_sender.send(Action::DeleteTopicFinished { id, outcome });
        });

        self.register(handle, description)
    }

    /// Spawn a board refresh.
    pub fn spawn_topics_load(&mut self, backend: Arc<dyn TopicBackend>) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = "Load topics".to_string();

        let handle = tokio::spawn(async move {
            let action = match backend.fetch_topics().await {
                Ok(topics) => Action::TopicsLoaded(topics),
                Err(e) => Action::TopicsLoadFailed(e.to_string()),
            };
            let _ = action_sender.send(action);
        });

        self.register(handle, description)
    }

    /// Spawn a topic creation request.
    pub fn spawn_create_topic(&mut self, backend: Arc<dyn TopicBackend>, title: String, emoji: String) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Create topic '{title}'");

        let handle = tokio::spawn(async move {
            let action = match backend.create_topic(&title, &emoji).await {
                Ok(topic) => Action::TopicCreated(topic),
                Err(e) => Action::TopicCreateFailed(e.to_string()),
            };
            let _ = action_sender.send(action);
        });

        self.register(handle, description)
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
