// src/core/types.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A drill item key in numbered-tone pinyin notation, e.g. "ni3hao3".
pub type ItemKey = String;

/// Everything the drill knows about one phrase.
/// Built by the catalog constructor, which fills in the frequency weight
/// up front so lookups never need a fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// The phrase in Chinese characters.
    pub chinese: String,
    /// English gloss. May be empty.
    pub english: String,
    /// Static importance weight, always >= 1.
    pub frequency_weight: u32,
}

#[derive(Debug, Error)]
pub enum DrillError {
    #[error("catalog is empty; populate it with phrases first")]
    EmptyCatalog,
    #[error("no item is awaiting feedback")]
    NoPendingItem,
}
