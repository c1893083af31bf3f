//! paperlens-common — Shared errors, configuration, and HTTP plumbing used
//! across all PaperLens crates.

pub mod config;
pub mod error;
pub mod sandbox;

// Re-export commonly used types
pub use config::Config;
pub use error::{PaperlensError, Result};
