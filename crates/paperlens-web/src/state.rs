//! Shared application state for the web server.

use std::sync::Arc;

use paperlens_common::Config;
use paperlens_extract::sources::MetadataProvider;
use paperlens_scoring::model::RiskModel;

/// Shared state injected into every Axum handler. The provider and model
/// references are set once at startup and never mutated afterwards, so
/// concurrent requests only ever read them.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub provider: Arc<dyn MetadataProvider>,
    pub model: Option<Arc<dyn RiskModel>>,
}

impl AppState {
    pub fn new(
        config: Config,
        provider: Arc<dyn MetadataProvider>,
        model: Option<Arc<dyn RiskModel>>,
    ) -> Self {
        Self { config, provider, model }
    }
}

pub type SharedState = Arc<AppState>;
