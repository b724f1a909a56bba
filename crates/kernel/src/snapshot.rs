//! Sidebar snapshots.
//!
//! A snapshot bundles every per-pass input that is not process-wide:
//! the selected site, granted capabilities, content types and current
//! path. Feature flags come from configuration and are passed alongside.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sitenav_sdk::types::{ContentTypeDefinition, ResolvedMenuItem, SiteSnapshot};
use thiserror::Error;
use tracing::debug;

use crate::capability::SiteCapabilities;
use crate::content::ContentTypeRegistry;
use crate::features::FeatureGate;
use crate::menu::{CatalogError, CatalogOptions, MenuResolver, ResolveContext, assemble_catalog};

/// Errors loading a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML snapshot: {0}")]
    Yaml(#[from] serde_yml::Error),
}

/// Inputs for one sidebar resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSnapshot {
    /// Selected site; absent for the all-sites view.
    #[serde(default)]
    pub site: Option<SiteSnapshot>,

    /// The account's only site, when `has_single_site` is set.
    #[serde(default)]
    pub primary_site: Option<SiteSnapshot>,

    #[serde(default)]
    pub has_single_site: bool,

    /// Capabilities granted on the selected site.
    #[serde(default)]
    pub capabilities: Vec<String>,

    /// Content types in source order.
    #[serde(default)]
    pub content_types: Vec<ContentTypeDefinition>,

    #[serde(default)]
    pub current_path: String,
}

impl SidebarSnapshot {
    /// Load a snapshot from a `.json`, `.yaml` or `.yml` file.
    ///
    /// Any other extension is read as JSON.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml(&raw),
            _ => Self::from_json(&raw),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_yml::from_str(raw)?)
    }

    /// Run a full pass: assemble the catalog, then resolve it.
    pub fn resolve(
        &self,
        features: &dyn FeatureGate,
    ) -> Result<Vec<ResolvedMenuItem>, CatalogError> {
        let content_types = ContentTypeRegistry::from_snapshot(self.content_types.iter().cloned());

        let catalog = assemble_catalog(
            &content_types,
            CatalogOptions {
                features,
                site: self.site.as_ref(),
            },
        )?;

        let mut capabilities = SiteCapabilities::new();
        if let Some(site) = &self.site {
            capabilities.grant(site.id, self.capabilities.iter().cloned());
        }

        let mut ctx = ResolveContext::new(&capabilities, features).current_path(&self.current_path);
        if let Some(site) = &self.site {
            ctx = ctx.site(site);
        }
        if self.has_single_site {
            ctx.has_single_site = true;
            ctx.primary_site = self.primary_site.as_ref();
        }

        let items = MenuResolver::new(ctx).resolve_all(catalog.items());
        debug!(items = items.len(), "sidebar snapshot resolved");
        Ok(items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::features::FeatureFlags;

    const YAML: &str = r#"
site:
  id: 3
  slug: example.com
  admin_url: https://example.com/wp-admin/
capabilities: [edit_pages, edit_posts]
content_types:
  - name: portfolio
    api_queryable: true
    capabilities:
      edit_posts: edit_posts
current_path: /pages/example.com
"#;

    #[test]
    fn yaml_and_json_agree() {
        let from_yaml = SidebarSnapshot::from_yaml(YAML).unwrap();
        let json = serde_json::to_string(&from_yaml).unwrap();
        let from_json = SidebarSnapshot::from_json(&json).unwrap();
        assert_eq!(from_yaml, from_json);
        assert_eq!(from_yaml.capabilities.len(), 2);
    }

    #[test]
    fn empty_json_is_all_sites() {
        let snapshot = SidebarSnapshot::from_json("{}").unwrap();
        assert!(snapshot.site.is_none());
        assert!(snapshot.content_types.is_empty());
    }

    #[test]
    fn resolve_runs_full_pass() {
        let snapshot = SidebarSnapshot::from_yaml(YAML).unwrap();
        let items = snapshot.resolve(&FeatureFlags::defaults()).unwrap();
        let names: Vec<_> = items.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["page", "post", "portfolio"]);

        let pages = &items[0];
        assert_eq!(pages.href, "/pages/example.com");
        assert!(pages.is_selected);

        let portfolio = &items[2];
        assert_eq!(portfolio.href, "/types/portfolio/example.com");
        assert_eq!(
            portfolio.action_href.as_deref(),
            Some("/edit/portfolio/example.com")
        );
    }

    #[test]
    fn resolve_surfaces_collisions() {
        let mut snapshot = SidebarSnapshot::from_yaml(YAML).unwrap();
        snapshot
            .content_types
            .push(ContentTypeDefinition::new("comments"));
        let err = snapshot.resolve(&FeatureFlags::defaults()).unwrap_err();
        assert_eq!(err, CatalogError::ReservedName("comments".into()));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SidebarSnapshot::load(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }
}
