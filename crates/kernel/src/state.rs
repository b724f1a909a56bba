//! Shared application state.

use std::sync::Arc;

use crate::config::Config;
use crate::features::FeatureFlags;

/// State shared by every request. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Process-wide feature flags.
    pub fn features(&self) -> &FeatureFlags {
        &self.inner.config.features
    }
}
