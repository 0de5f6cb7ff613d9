pub mod catalog;
pub mod engine;
pub mod selector;
pub mod tones;
pub mod types;
