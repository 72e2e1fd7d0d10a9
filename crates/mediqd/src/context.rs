//! Per-session conversation state.
//!
//! Write-mostly today: the response generator reads nothing back, the turn
//! history exists for future multi-turn logic. The store is an explicit
//! object owned by the engine, bounded by LRU capacity plus a TTL staleness
//! window (the original portal never evicted at all).

use crate::entities::ExtractedEntities;
use crate::intent::Intent;
use crate::urgency::Urgency;
use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// One processed message: the labels the pipeline derived from it
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub last_intent: Intent,
    pub entities: ExtractedEntities,
    pub urgency: Urgency,
}

/// Accumulated state for one session
#[derive(Debug, Clone)]
pub struct ConversationContext {
    /// Append-only turn history for the session lifetime
    pub history: Vec<TurnRecord>,
    /// Most recent intent
    pub current_flow: Option<Intent>,
    /// Reserved for future slot values; nothing writes it yet
    pub collected_info: HashMap<String, String>,
    last_activity: Instant,
}

impl ConversationContext {
    fn new() -> Self {
        Self {
            history: Vec::new(),
            current_flow: None,
            collected_info: HashMap::new(),
            last_activity: Instant::now(),
        }
    }
}

/// LRU session store with TTL
pub struct ContextStore {
    cache: Mutex<LruCache<String, ConversationContext>>,
    ttl: Duration,
}

impl ContextStore {
    /// * `capacity` - maximum number of live sessions
    /// * `ttl` - staleness window after the last message
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Append a turn and set the current flow, creating the session record
    /// on first use. A missing user id is a no-op, not an error - the caller
    /// is allowed to operate statelessly.
    pub async fn update(&self, user_id: Option<&str>, turn: TurnRecord) {
        let Some(user_id) = user_id else { return };

        let mut cache = self.cache.lock().await;
        let now = Instant::now();

        // A stale record starts over instead of accumulating across the gap
        if let Some(ctx) = cache.peek(user_id) {
            if now.duration_since(ctx.last_activity) >= self.ttl {
                cache.pop(user_id);
            }
        }

        let ctx = cache.get_or_insert_mut(user_id.to_string(), ConversationContext::new);
        ctx.current_flow = Some(turn.last_intent);
        ctx.history.push(turn);
        ctx.last_activity = now;
    }

    /// Fetch a session's context, dropping it if expired
    pub async fn get(&self, user_id: &str) -> Option<ConversationContext> {
        let mut cache = self.cache.lock().await;
        let now = Instant::now();

        let stale = match cache.get(user_id) {
            Some(ctx) if now.duration_since(ctx.last_activity) < self.ttl => {
                return Some(ctx.clone());
            }
            Some(_) => true,
            None => false,
        };

        if stale {
            cache.pop(user_id);
        }
        None
    }

    /// Remove a session explicitly
    pub async fn evict(&self, user_id: &str) {
        self.cache.lock().await.pop(user_id);
    }

    /// Drop all expired sessions (called by the daemon's periodic sweep)
    pub async fn prune_expired(&self) {
        let mut cache = self.cache.lock().await;
        let now = Instant::now();

        let expired: Vec<String> = cache
            .iter()
            .filter(|(_, ctx)| now.duration_since(ctx.last_activity) >= self.ttl)
            .map(|(id, _)| id.clone())
            .collect();

        for id in expired {
            cache.pop(&id);
        }
    }

    /// Current live session count
    pub async fn len(&self) -> usize {
        self.cache.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
