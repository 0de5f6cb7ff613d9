// src/lib.rs

pub mod core;
pub mod persistence;
pub mod scoring;

pub use crate::core::engine::DrillEngine;
pub use crate::core::types::DrillError;
