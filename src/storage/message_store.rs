use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;

use crate::common::Message;

/// Point-in-time view of the board, oldest message first.
pub type Snapshot = Arc<Vec<Arc<Message>>>;

/// In-memory message history shared by all request handlers.
///
/// Every append publishes a fresh copy of the list through an atomic pointer
/// swap. Readers only load that pointer, so they never wait on writers and
/// never see a half-built list. Writers take `write_lock` around the
/// read-copy-publish step so concurrent posts are never lost.
pub struct MessageStore {
    current: ArcSwap<Vec<Arc<Message>>>,
    write_lock: Mutex<()>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Vec::new()),
            write_lock: Mutex::new(()),
        }
    }

    /// Append a message to the end of the history.
    ///
    /// Callers are expected to have validated both fields already. The
    /// message is stamped inside the write section, so `posted_at` never
    /// decreases along the history.
    pub fn append(&self, nickname: impl Into<String>, content: impl Into<String>) -> Arc<Message> {
        let (nickname, content) = (nickname.into(), content.into());

        // The guarded unit holds no data, so a poisoned lock is still usable.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let message = Arc::new(Message::new(nickname, content));
        let previous = self.current.load();
        let mut next = Vec::with_capacity(previous.len() + 1);
        next.extend(previous.iter().cloned());
        next.push(Arc::clone(&message));
        self.current.store(Arc::new(next));

        message
    }

    /// Current history, oldest first. Does not block on concurrent appends.
    pub fn snapshot(&self) -> Snapshot {
        self.current.load_full()
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}
