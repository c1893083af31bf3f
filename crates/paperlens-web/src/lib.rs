//! paperlens-web — HTTP surface for the PaperLens risk assessment pipeline.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
