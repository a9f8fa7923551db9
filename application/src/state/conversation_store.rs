//! In-memory conversation store.
//!
//! Each conversation sits behind its own async mutex, held for the whole
//! message pipeline. Two messages for one conversation therefore run one
//! after the other, while different conversations never wait on each other.
//! The outer map lock is only held to look up or insert an entry.
//!
//! The number of live conversations is capped. Inserting past the cap drops
//! the least recently used conversation that no caller currently holds; a
//! conversation handed out by [`ConversationStore::get_or_create`] is never
//! dropped while that handle is alive.

use relay_domain::{ConversationContext, ConversationHistory, ConversationId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Shared handle to one conversation's state.
pub type SharedContext = Arc<Mutex<ConversationContext>>;

/// Default cap on live conversations.
pub const DEFAULT_MAX_CONVERSATIONS: usize = 1024;

struct Entry {
    context: SharedContext,
    last_used: u64,
}

#[derive(Default)]
struct Conversations {
    entries: HashMap<ConversationId, Entry>,
    tick: u64,
}

impl Conversations {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Least recently used entry that only the map references.
    fn idle_lru(&self) -> Option<ConversationId> {
        self.entries
            .iter()
            .filter(|(_, entry)| Arc::strong_count(&entry.context) == 1)
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(id, _)| id.clone())
    }
}

/// Conversations keyed by id, created on first use. Nothing is persisted.
pub struct ConversationStore {
    template: ConversationHistory,
    max_conversations: usize,
    conversations: Mutex<Conversations>,
}

impl ConversationStore {
    /// New conversations start from a copy of `template`; at most
    /// `max_conversations` (minimum 1) idle conversations are kept.
    pub fn new(template: ConversationHistory, max_conversations: usize) -> Self {
        Self {
            template,
            max_conversations: max_conversations.max(1),
            conversations: Mutex::new(Conversations::default()),
        }
    }

    pub fn max_conversations(&self) -> usize {
        self.max_conversations
    }

    pub async fn get_or_create(&self, id: &ConversationId) -> SharedContext {
        let mut conversations = self.conversations.lock().await;
        let tick = conversations.next_tick();

        if let Some(entry) = conversations.entries.get_mut(id) {
            entry.last_used = tick;
            return entry.context.clone();
        }

        while conversations.entries.len() >= self.max_conversations {
            let Some(evicted) = conversations.idle_lru() else {
                break;
            };
            conversations.entries.remove(&evicted);
            debug!(conversation = %evicted, "Dropped least recently used conversation");
        }

        debug!(conversation = %id, "Starting new conversation");
        let context = Arc::new(Mutex::new(ConversationContext::new(self.template.clone())));
        conversations.entries.insert(
            id.clone(),
            Entry {
                context: context.clone(),
                last_used: tick,
            },
        );
        context
    }

    /// Copy of a conversation's state, waiting for any in-flight message.
    pub async fn snapshot(&self, id: &ConversationId) -> Option<ConversationContext> {
        let context = self
            .conversations
            .lock()
            .await
            .entries
            .get(id)
            .map(|entry| entry.context.clone())?;
        let context = context.lock().await;
        Some(context.clone())
    }

    pub async fn len(&self) -> usize {
        self.conversations.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
