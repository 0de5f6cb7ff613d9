use crate::core::catalog::Catalog;
use crate::core::selector;
use crate::core::tones::to_accented;
use crate::core::types::{DrillError, ItemKey};
use crate::persistence::{FileBackend, StorageBackend};
use crate::scoring::ScoreStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

// The drill engine composes the catalog, the score store, and the sampler.
// Everything runs synchronously; the caller drives one draw -> feedback turn
// at a time and the engine is never reentered mid-turn.
pub struct DrillEngine {
    catalog: Catalog,
    pub scores: ScoreStore,
    rng: StdRng,
    pending: Option<ItemKey>,
}

impl DrillEngine {
    pub fn new(catalog: Catalog, backend: Box<dyn StorageBackend>) -> Self {
        Self {
            catalog,
            scores: ScoreStore::load(backend),
            rng: StdRng::from_entropy(),
            pending: None,
        }
    }

    /// Deterministic draws for reproducible sessions and tests.
    pub fn with_seed(catalog: Catalog, backend: Box<dyn StorageBackend>, seed: u64) -> Self {
        let mut engine = Self::new(catalog, backend);
        engine.rng = StdRng::seed_from_u64(seed);
        engine
    }

    /// Scores come from `path` if it exists; otherwise the drill starts fresh.
    pub fn from_file_or_new(catalog: Catalog, path: &Path) -> Self {
        Self::new(catalog, Box::new(FileBackend::new(path)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current sampling weight of a catalog item.
    pub fn weight_of(&self, key: &str) -> Option<f64> {
        self.catalog
            .get(key)
            .map(|entry| selector::weight(entry.frequency_weight, self.scores.get(key)))
    }

    fn candidates<'a>(catalog: &'a Catalog, scores: &ScoreStore) -> Vec<(&'a str, f64)> {
        catalog
            .iter()
            .map(|(key, entry)| {
                (
                    key.as_str(),
                    selector::weight(entry.frequency_weight, scores.get(key)),
                )
            })
            .collect()
    }

    /// Draws the next item and leaves it awaiting feedback via `mark`.
    pub fn next(&mut self) -> Result<ItemKey, DrillError> {
        let candidates = Self::candidates(&self.catalog, &self.scores);
        let key = selector::sample_one_with_rng(&mut self.rng, &candidates)
            .ok_or(DrillError::EmptyCatalog)?
            .to_string();
        self.pending = Some(key.clone());
        Ok(key)
    }

    /// `count` independent draws with replacement. Weights are recomputed
    /// from the live scores before every draw, so a score changed between
    /// draws is reflected on the next one.
    pub fn draw_session(&mut self, count: usize) -> Result<Vec<ItemKey>, DrillError> {
        if self.catalog.is_empty() {
            return Err(DrillError::EmptyCatalog);
        }
        let mut keys = Vec::with_capacity(count);
        for _ in 0..count {
            let candidates = Self::candidates(&self.catalog, &self.scores);
            let key = selector::sample_one_with_rng(&mut self.rng, &candidates)
                .ok_or(DrillError::EmptyCatalog)?;
            keys.push(key.to_string());
        }
        Ok(keys)
    }

    /// The item drawn by `next` that has not received feedback yet.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Applies the caller's correct/incorrect verdict to the pending item
    /// and returns its new score.
    pub fn mark(&mut self, correct: bool) -> Result<i32, DrillError> {
        let key = self.pending.take().ok_or(DrillError::NoPendingItem)?;
        Ok(self.scores.adjust(&key, correct))
    }

    /// "nǐ hǎo - 你好 (hello)" display line for a key.
    pub fn display(&self, key: &str) -> String {
        match self.catalog.get(key) {
            Some(entry) if !entry.english.is_empty() => {
                format!("{} - {} ({})", to_accented(key), entry.chinese, entry.english)
            }
            Some(entry) => format!("{} - {}", to_accented(key), entry.chinese),
            None => to_accented(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryBackend;

    fn catalog(keys: &[&str]) -> Catalog {
        Catalog::from_entries(
            keys.iter()
                .map(|&k| (k.to_string(), "字".to_string(), String::new())),
        )
    }

    fn engine(keys: &[&str]) -> DrillEngine {
        DrillEngine::with_seed(catalog(keys), Box::new(MemoryBackend::new()), 1)
    }

    #[test]
    fn empty_catalog_is_refused_up_front() {
        let mut engine = engine(&[]);
        assert!(matches!(engine.next(), Err(DrillError::EmptyCatalog)));
        assert!(matches!(engine.draw_session(2), Err(DrillError::EmptyCatalog)));
    }

    #[test]
    fn feedback_without_a_draw_is_an_error() {
        let mut engine = engine(&["ni3hao3"]);
        assert!(matches!(engine.mark(true), Err(DrillError::NoPendingItem)));
    }

    #[test]
    fn draw_then_mark_consumes_the_pending_item() {
        let mut engine = engine(&["ni3hao3"]);
        let key = engine.next().unwrap();
        assert_eq!(engine.pending(), Some(key.as_str()));
        assert_eq!(engine.mark(true).unwrap(), 1);
        assert_eq!(engine.pending(), None);
        assert!(matches!(engine.mark(true), Err(DrillError::NoPendingItem)));
    }

    #[test]
    fn sessions_draw_from_the_catalog_with_replacement() {
        let mut engine = engine(&["a1", "b2"]);
        let keys = engine.draw_session(2).unwrap();
        assert_eq!(keys.len(), 2);
        for key in &keys {
            assert!(engine.catalog().get(key).is_some());
        }
    }

    #[test]
    fn weights_track_scores() {
        let mut engine = engine(&["ni3hao3", "ma3"]);
        // ni3hao3: table weight 100 at score 0 -> 500; ma3 defaults to 10.
        assert_eq!(engine.weight_of("ni3hao3"), Some(500.0));
        assert_eq!(engine.weight_of("ma3"), Some(50.0));
        engine.scores.set("ma3", 10);
        assert_eq!(engine.weight_of("ma3"), Some(10.0));
        assert_eq!(engine.weight_of("bu4zai4"), None);
    }

    #[test]
    fn missed_items_resurface_more_often() {
        let mut engine = engine(&["a1", "b2"]);
        engine.scores.set("a1", -5); // weight 10 * 10 = 100 vs 50
        let mut a_hits = 0;
        for _ in 0..3000 {
            if engine.next().unwrap() == "a1" {
                a_hits += 1;
            }
            engine.pending = None;
        }
        // Expected 2/3 of draws. Wide band, seeded rng.
        assert!((1800..2200).contains(&a_hits), "a_hits = {}", a_hits);
    }

    #[test]
    fn display_composes_tones_and_catalog_text() {
        let catalog = Catalog::from_entries(vec![(
            "ni3hao3".to_string(),
            "你好".to_string(),
            "hello".to_string(),
        )]);
        let engine = DrillEngine::with_seed(catalog, Box::new(MemoryBackend::new()), 1);
        assert_eq!(engine.display("ni3hao3"), "nǐ hǎo - 你好 (hello)");
    }
}
