//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no Axum, no tower).
//! Only the error types shared by the classifier and the api layer.

pub mod errors;

pub use errors::{ClassifyError, ValidationError};
