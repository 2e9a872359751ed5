//! Host lifecycle events and a small observer hub
//!
//! Hosts publish workspace/project/file notifications here; subscribers
//! (typically a [`TaskList`](crate::tasklist::TaskList)) invalidate and
//! recompute their derived view. The scanner itself never sees events.

use std::path::PathBuf;

/// A change in the host that may invalidate the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    WorkspaceOpened,
    WorkspaceClosed,
    ActiveProjectChanged,
    ProjectRenamed { from: String, to: String },
    ProjectRemoved(String),
    FileSaved(PathBuf),
    FileRenamed { from: PathBuf, to: PathBuf },
    FileDeleted(PathBuf),
}

impl HostEvent {
    /// Whether the event empties the task list instead of recomputing it
    #[must_use]
    pub fn clears(&self) -> bool {
        matches!(self, Self::WorkspaceClosed)
    }
}

/// Handle returned by [`EventHub::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&HostEvent) + Send>;

/// Delivers host events to subscribers in subscription order
#[derive(Default)]
pub struct EventHub {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl EventHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every published event
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&HostEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription; `false` if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Deliver `event` to every subscriber
    pub fn publish(&mut self, event: &HostEvent) {
        tracing::debug!("Publishing {:?} to {} subscribers", event, self.subscribers.len());
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("next_id", &self.next_id)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
