// src/core/catalog.rs
use crate::core::types::{CatalogEntry, ItemKey};
use std::collections::HashMap;

/// Weight assigned to any phrase not in the built-in frequency table.
pub const DEFAULT_FREQUENCY_WEIGHT: u32 = 10;

/// Common phrases carry a higher static weight; everything else gets
/// `DEFAULT_FREQUENCY_WEIGHT`.
const FREQUENCY_WEIGHTS: &[(&str, u32)] = &[
    ("ni3hao3", 100),
    ("xie4xie5", 95),
    ("zao3shang4", 90),
    ("wan3shang4", 88),
    ("jin1tian1", 85),
    ("ming2tian1", 83),
    ("xian4zai4", 80),
    ("yi3qian2", 78),
    ("yi3hou4", 75),
    ("zhe4ge4", 73),
    ("na4ge4", 70),
    ("shen2me5", 68),
    ("zen3me5", 65),
    ("wei4shen2me5", 62),
    ("na3li3", 60),
    ("ji3dian3", 58),
    ("duo1shao3", 55),
    ("he2shui4", 53),
    ("chi1fan4", 50),
    ("shui4jiao4", 45),
    ("shang4ban1", 42),
    ("xia4ban1", 40),
    ("shang4xue2", 38),
    ("xia4xue2", 36),
    ("kan4dian4shi4", 34),
    ("ting1yin1yue4", 32),
    ("du2shu1", 30),
    ("xie3zi4", 28),
    ("hua4hua4", 26),
    ("chang4ge1", 24),
    ("tiao4wu3", 22),
    ("da3qiu2", 20),
    ("you2yong3", 18),
    ("pao3bu4", 16),
    ("san4bu4", 14),
    ("mai3dong1xi1", 12),
    ("hua1qian2", 10),
];

fn built_in_weight(key: &str) -> u32 {
    FREQUENCY_WEIGHTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, w)| w)
        .unwrap_or(DEFAULT_FREQUENCY_WEIGHT)
}

/// The read-only phrase catalog for one drill session. Supplied once at
/// startup; iteration order is the order entries were loaded in.
pub struct Catalog {
    entries: HashMap<ItemKey, CatalogEntry>,
    order: Vec<ItemKey>,
}

impl Catalog {
    /// Builds the catalog from (key, chinese, english) triples, resolving
    /// every frequency weight at load time.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String, String)>) -> Self {
        let mut catalog = Self {
            entries: HashMap::new(),
            order: Vec::new(),
        };
        for (key, chinese, english) in entries {
            let entry = CatalogEntry {
                chinese,
                english,
                frequency_weight: built_in_weight(&key),
            };
            if catalog.entries.insert(key.clone(), entry).is_none() {
                catalog.order.push(key);
            }
        }
        catalog
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    /// Entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemKey, &CatalogEntry)> + '_ {
        self.order.iter().map(move |key| (key, &self.entries[key]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
