//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

use crate::features::FeatureFlags;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Enabled feature flags (from SITENAV_FEATURES, comma-separated).
    /// Defaults to [`FeatureFlags::defaults`] when unset.
    pub features: FeatureFlags,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let features = lookup("SITENAV_FEATURES")
            .map(|v| FeatureFlags::parse_list(&v))
            .unwrap_or_else(FeatureFlags::defaults);

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(Self {
            port,
            features,
            cors_allowed_origins,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            features: FeatureFlags::defaults(),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::features::{FeatureGate, flags};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.features, FeatureFlags::defaults());
        assert_eq!(config.cors_allowed_origins, vec!["*"]);
    }

    #[test]
    fn features_from_env_replace_defaults() {
        let config = Config::from_lookup(lookup(&[(
            "SITENAV_FEATURES",
            "manage/import-in-sidebar, manage/pages",
        )]))
        .unwrap();
        assert!(config.features.is_enabled(flags::IMPORT));
        assert!(config.features.is_enabled(flags::PAGES));
        assert!(!config.features.is_enabled(flags::POSTS));
    }

    #[test]
    fn empty_features_disable_everything() {
        let config = Config::from_lookup(lookup(&[("SITENAV_FEATURES", "")])).unwrap();
        assert!(config.features.is_empty());
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn cors_origins_are_split() {
        let config = Config::from_lookup(lookup(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://a.example, https://b.example",
        )]))
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }
}
