//! Per-thread ephemeral chat memory.
//!
//! DESIGN
//! ======
//! Each thread id maps to a bounded `VecDeque` of messages; pushing past the
//! limit drops the oldest. Nothing is persisted: a restart forgets every
//! conversation. The summary handed to the reply policy is the tail of the
//! thread plus its total turn count.
//!
//! The number of threads is capped as well: opening a thread past the cap
//! evicts the one written least recently, so client-chosen thread ids
//! cannot grow the map without bound.

use std::collections::{HashMap, VecDeque};
use std::fmt::Write;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
    System,
}

impl Speaker {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadMessage {
    pub speaker: Speaker,
    pub content: String,
}

/// Recent context for one thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadSummary {
    /// User messages ever seen on this thread, including evicted ones.
    pub user_turns: usize,
    /// The most recent messages, oldest first.
    pub recent: Vec<ThreadMessage>,
}

impl ThreadSummary {
    /// The user message before the latest one, if any.
    #[must_use]
    pub fn previous_user_message(&self) -> Option<&str> {
        self.recent
            .iter()
            .rev()
            .filter(|m| m.speaker == Speaker::User)
            .nth(1)
            .map(|m| m.content.as_str())
    }

    /// One `speaker: content` line per recent message.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for message in &self.recent {
            let _ = writeln!(out, "{}: {}", message.speaker.label(), message.content);
        }
        out
    }
}

#[derive(Default)]
struct Thread {
    messages: VecDeque<ThreadMessage>,
    user_turns: usize,
    /// Value of `Threads::clock` at the last write.
    last_used: u64,
}

#[derive(Default)]
struct Threads {
    by_id: HashMap<String, Thread>,
    clock: u64,
}

impl Threads {
    fn evict_idlest(&mut self) {
        let idlest = self
            .by_id
            .iter()
            .min_by_key(|(_, t)| t.last_used)
            .map(|(id, _)| id.clone());
        if let Some(id) = idlest {
            self.by_id.remove(&id);
            tracing::debug!(thread = %id, "evicted idle chat thread");
        }
    }
}

#[derive(Clone)]
pub struct ThreadMemory {
    threads: Arc<RwLock<Threads>>,
    limit: usize,
    max_threads: usize,
}

impl ThreadMemory {
    /// `limit` messages per thread and `max_threads` threads, each clamped
    /// to at least one.
    #[must_use]
    pub fn new(limit: usize, max_threads: usize) -> Self {
        Self {
            threads: Arc::new(RwLock::new(Threads::default())),
            limit: limit.max(1),
            max_threads: max_threads.max(1),
        }
    }

    pub async fn store(&self, thread_id: &str, speaker: Speaker, content: &str) {
        let mut threads = self.threads.write().await;
        threads.clock += 1;
        let now = threads.clock;
        if !threads.by_id.contains_key(thread_id) && threads.by_id.len() >= self.max_threads {
            threads.evict_idlest();
        }
        let thread = threads.by_id.entry(thread_id.to_owned()).or_default();
        thread.last_used = now;
        if speaker == Speaker::User {
            thread.user_turns += 1;
        }
        thread.messages.push_back(ThreadMessage { speaker, content: content.to_owned() });
        while thread.messages.len() > self.limit {
            thread.messages.pop_front();
        }
    }

    /// The last `turns` messages of `thread_id`. Unknown threads are empty.
    pub async fn summary(&self, thread_id: &str, turns: usize) -> ThreadSummary {
        let threads = self.threads.read().await;
        let Some(thread) = threads.by_id.get(thread_id) else {
            return ThreadSummary::default();
        };
        let skip = thread.messages.len().saturating_sub(turns);
        ThreadSummary {
            user_turns: thread.user_turns,
            recent: thread.messages.iter().skip(skip).cloned().collect(),
        }
    }
}

#[cfg(test)]
impl ThreadMemory {
    pub async fn messages(&self, thread_id: &str) -> Vec<ThreadMessage> {
        self.threads
            .read()
            .await
            .by_id
            .get(thread_id)
            .map(|t| t.messages.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub async fn thread_count(&self) -> usize {
        self.threads.read().await.by_id.len()
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
