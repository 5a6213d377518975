//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - Per-client request limiting (rate_limit)
//! - Application state (state)

pub mod config;
pub mod rate_limit;
pub mod server;
pub mod state;

pub use state::AppState;
