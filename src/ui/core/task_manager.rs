use super::actions::Action;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    request_abort: AbortHandle,
    pub description: String,
    pub started_at: std::time::Instant,
}

impl BackgroundTask {
    pub fn elapsed(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }
}

/// Runs backend requests off the event loop and reports their results back
/// as [`Action`]s over a channel.
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

    /// Spawn a request whose future resolves to the action carrying its result.
    ///
    /// If the request panics or is aborted, `on_failure` builds the action sent
    /// in its place, so every request reports back exactly once.
    pub fn spawn_request<Fut, F>(&mut self, description: impl Into<String>, request: Fut, on_failure: F) -> TaskId
    where
        Fut: Future<Output = Action> + Send + 'static,
        F: FnOnce(String) -> Action + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let description = description.into();
        log::debug!("Background: spawning task {} '{}'", task_id, description);

        let request = tokio::spawn(request);
        let request_abort = request.abort_handle();

        let action_sender = self.action_sender.clone();
        let task_description = description.clone();
        let handle = tokio::spawn(async move {
            let action = match request.await {
                Ok(action) => action,
                Err(e) => {
                    log::error!("Background: task {} '{}' failed: {}", task_id, task_description, e);
                    on_failure(e.to_string())
                }
            };
            // The receiver is gone only when the app is shutting down
            let _ = action_sender.send(action);
        });

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                request_abort,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Drop finished tasks, returning their ids.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Background: task {} '{}' finished after {:?}",
                    task.id,
                    task.description,
                    task.elapsed()
                );
            }
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
            task.request_abort.abort();
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
