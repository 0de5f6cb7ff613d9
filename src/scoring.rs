// File: src/scoring.rs
use crate::persistence::StorageBackend;
use std::collections::HashMap;

/// Correct answers never push a score past this.
pub const SCORE_CEILING: i32 = 10;

type Observer = Box<dyn Fn(&str, i32)>;

/// Per-item mastery scores with write-through persistence. Owns its map and
/// its backend handle; constructed once per process and passed by reference
/// to whoever needs it.
pub struct ScoreStore {
    scores: HashMap<String, i32>,
    backend: Box<dyn StorageBackend>,
    observers: Vec<Observer>,
}

impl ScoreStore {
    /// Loads the persisted scores once. An unreadable store is logged and
    /// treated as empty; the drill still works, it just starts fresh.
    pub fn load(backend: Box<dyn StorageBackend>) -> Self {
        let scores = backend.load().unwrap_or_else(|e| {
            log::warn!("score store unreadable, starting fresh: {}", e);
            HashMap::new()
        });
        Self {
            scores,
            backend,
            observers: Vec::new(),
        }
    }

    /// Registers a callback invoked after every score change, e.g. a UI
    /// score indicator.
    pub fn subscribe(&mut self, observer: impl Fn(&str, i32) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Stored score, or 0 for an item never seen. Never fails.
    pub fn get(&self, key: &str) -> i32 {
        self.scores.get(key).copied().unwrap_or(0)
    }

    /// Overwrites the score, persists immediately, then notifies observers.
    /// A failed write is logged and swallowed; the in-memory score stands
    /// for the rest of the session.
    pub fn set(&mut self, key: &str, value: i32) {
        self.scores.insert(key.to_string(), value);
        if let Err(e) = self.backend.save(&self.scores) {
            log::warn!("failed to persist scores: {}", e);
        }
        for observer in &self.observers {
            observer(key, value);
        }
    }

    /// Correct answers climb one step toward the ceiling; misses drop one
    /// step with no floor. The asymmetry is deliberate: a repeatedly missed
    /// item keeps gaining sampling weight. Returns the new score.
    pub fn adjust(&mut self, key: &str, correct: bool) -> i32 {
        let old = self.get(key);
        let new = if correct {
            (old + 1).min(SCORE_CEILING)
        } else {
            old.saturating_sub(1)
        };
        self.set(key, new);
        new
    }

    /// Tracked items sorted worst-first, truncated to `limit`. Ties break
    /// alphabetically so the listing is stable.
    pub fn hardest(&self, limit: usize) -> Vec<(String, i32)> {
        let mut items: Vec<(String, i32)> = self
            .scores
            .iter()
            .map(|(key, &score)| (key.clone(), score))
            .collect();
        items.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        items.truncate(limit);
        items
    }

    /// Number of items that have ever received feedback.
    pub fn tracked(&self) -> usize {
        self.scores.len()
    }
}
