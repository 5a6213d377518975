//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod classifier;

// Re-export for convenience
pub use classifier::{ClassificationResult, classify};
