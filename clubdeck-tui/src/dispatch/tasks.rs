//! Keyed async tasks with automatic cancellation
//!
//! Tasks produce exactly one action when they complete; a cancelled task
//! produces nothing. Spawning under a key that is already running aborts
//! the previous task first, so a key is always at-most-one in flight.
//! The partner-network sync simulation runs here: a fixed delay behind a
//! key, cancellable at any point before it fires.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

use crate::dispatch::action::Action;

/// Identifies a task for replacement and cancellation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

/// Registry of running tasks keyed for mutual exclusion.
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn a task, cancelling any running task with the same key.
    ///
    /// The future's output action is sent to the runtime queue on
    /// completion; a cancelled task sends nothing.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle: JoinHandle<()> = tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Spawn a task that waits `delay` before running the future.
    ///
    /// Re-spawning under the same key before the delay elapses resets the
    /// timer; cancelling inside the window means the action never fires.
    pub fn spawn_after<F>(
        &mut self,
        key: impl Into<TaskKey>,
        delay: Duration,
        future: F,
    ) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle: JoinHandle<()> = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let action = future.await;
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Cancel a task by key. No-op when the key is not running.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    /// Cancel everything, for shutdown.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks.contains_key(key)
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
