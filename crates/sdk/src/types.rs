//! Core types for sitenav consumers.
//!
//! Everything here is a plain value object with full serde support so that
//! snapshots can be read from JSON/YAML and resolved menus can be handed to
//! a rendering layer without further business logic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Read-only snapshot of the site a menu is being resolved for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSnapshot {
    /// Numeric site identifier passed to capability lookups.
    pub id: u64,

    /// Site slug (usually the domain), appended to internal links.
    #[serde(default)]
    pub slug: Option<String>,

    /// Site is connected through Jetpack rather than hosted.
    #[serde(default)]
    pub jetpack: bool,

    /// Site has exactly one user.
    #[serde(default)]
    pub single_user: bool,

    /// Site went through an automated transfer; plugins are managed
    /// outside the application API.
    #[serde(default)]
    pub atomic: bool,

    /// Root of the site's external admin interface, ending in `/`.
    #[serde(default)]
    pub admin_url: Option<String>,
}

impl SiteSnapshot {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn admin_url(mut self, url: impl Into<String>) -> Self {
        self.admin_url = Some(url.into());
        self
    }

    pub fn jetpack(mut self) -> Self {
        self.jetpack = true;
        self
    }

    pub fn single_user(mut self) -> Self {
        self.single_user = true;
        self
    }

    pub fn atomic(mut self) -> Self {
        self.atomic = true;
        self
    }
}

/// Label variants reported by the content-type source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeLabels {
    #[serde(default)]
    pub menu_name: Option<String>,
}

/// A content type as reported by the content-type source.
///
/// Older sources omit `show_ui`; absence means the type is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeDefinition {
    /// Machine name (e.g. "post", "page", "portfolio").
    pub name: String,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub labels: ContentTypeLabels,

    /// Whether the type can be queried through the application API.
    #[serde(default)]
    pub api_queryable: bool,

    /// Capability map, e.g. `{"edit_posts": "edit_portfolios"}`.
    #[serde(default)]
    pub capabilities: HashMap<String, String>,

    #[serde(default)]
    pub show_ui: Option<bool>,
}

impl ContentTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn menu_name(mut self, menu_name: impl Into<String>) -> Self {
        self.labels.menu_name = Some(menu_name.into());
        self
    }

    pub fn queryable(mut self) -> Self {
        self.api_queryable = true;
        self
    }

    pub fn capability(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.capabilities.insert(key.into(), value.into());
        self
    }

    pub fn show_ui(mut self, show: bool) -> Self {
        self.show_ui = Some(show);
        self
    }

    /// Label shown in the menu: `labels.menu_name`, then `label`, then the
    /// raw machine name.
    pub fn menu_label(&self) -> &str {
        self.labels
            .menu_name
            .as_deref()
            .or(self.label.as_deref())
            .unwrap_or(&self.name)
    }
}

/// What a viewer must hold to see a menu item when a site is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityRequirement {
    /// Always visible when otherwise eligible.
    #[default]
    None,
    /// Visible only when the named capability is granted.
    Required(String),
    /// The source omitted the capability; never granted.
    Undeclared,
}

impl CapabilityRequirement {
    pub fn required(capability: impl Into<String>) -> Self {
        Self::Required(capability.into())
    }
}

/// A menu entry before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDefinition {
    /// Unique within a catalog.
    pub name: String,

    pub label: String,

    #[serde(default)]
    pub capability: CapabilityRequirement,

    /// Item is only eligible (and only internally routed) while this flag is on.
    #[serde(default)]
    pub feature_flag: Option<String>,

    #[serde(default)]
    pub queryable: bool,

    /// Application-relative path stem (e.g. "/pages").
    pub internal_path: String,

    /// Prefixes that mark the item as selected. Empty means `[internal_path]`.
    #[serde(default)]
    pub match_paths: Vec<String>,

    /// Path appended to the site's admin URL for the external fallback.
    #[serde(default)]
    pub external_admin_path: String,

    #[serde(default)]
    pub show_when_no_site_selected: bool,

    /// Consumes the per-pass "my" author suffix when linking internally.
    #[serde(default)]
    pub author_scoped: bool,

    #[serde(default)]
    pub action_link: Option<String>,

    #[serde(default)]
    pub action_label: Option<String>,

    #[serde(default)]
    pub extra_icon_id: Option<String>,

    #[serde(default)]
    pub custom_class_name: Option<String>,

    #[serde(default)]
    pub force_internal_link: bool,
}

impl MenuItemDefinition {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        internal_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            internal_path: internal_path.into(),
            ..Self::default()
        }
    }

    pub fn capability(mut self, capability: impl Into<String>) -> Self {
        self.capability = CapabilityRequirement::required(capability);
        self
    }

    pub fn requirement(mut self, requirement: CapabilityRequirement) -> Self {
        self.capability = requirement;
        self
    }

    pub fn feature_flag(mut self, flag: impl Into<String>) -> Self {
        self.feature_flag = Some(flag.into());
        self
    }

    pub fn queryable(mut self, queryable: bool) -> Self {
        self.queryable = queryable;
        self
    }

    pub fn match_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.match_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn admin_path(mut self, path: impl Into<String>) -> Self {
        self.external_admin_path = path.into();
        self
    }

    pub fn on_all_sites(mut self, show: bool) -> Self {
        self.show_when_no_site_selected = show;
        self
    }

    pub fn author_scoped(mut self) -> Self {
        self.author_scoped = true;
        self
    }

    pub fn action(mut self, link: impl Into<String>, label: impl Into<String>) -> Self {
        self.action_link = Some(link.into());
        self.action_label = Some(label.into());
        self
    }

    pub fn force_internal_link(mut self, force: bool) -> Self {
        self.force_internal_link = force;
        self
    }

    /// Match paths with the `[internal_path]` default applied.
    pub fn effective_match_paths(&self) -> Vec<String> {
        if self.match_paths.is_empty() {
            vec![self.internal_path.clone()]
        } else {
            self.match_paths.clone()
        }
    }
}

/// Which routing rule produced a resolved link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Route inside the application.
    Internal,
    /// The site's external admin interface.
    Admin,
}

/// Prefetch group for the destination view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreloadHint {
    PostsPages,
    Comments,
    PostsCustom,
}

/// A menu entry ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMenuItem {
    #[serde(flatten)]
    pub item: MenuItemDefinition,

    pub href: String,

    pub link_kind: LinkKind,

    /// Action link joined with the site slug.
    #[serde(default)]
    pub action_href: Option<String>,

    pub icon_id: String,

    pub preload_hint: PreloadHint,

    pub is_selected: bool,
}

impl ResolvedMenuItem {
    pub fn name(&self) -> &str {
        &self.item.name
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn content_type_defaults_from_sparse_json() {
        let ty: ContentTypeDefinition = serde_json::from_str(r#"{"name": "portfolio"}"#).unwrap();
        assert_eq!(ty.name, "portfolio");
        assert_eq!(ty.show_ui, None);
        assert!(!ty.api_queryable);
        assert!(ty.capabilities.is_empty());
    }

    #[test]
    fn menu_label_prefers_menu_name() {
        let ty = ContentTypeDefinition::new("jetpack-testimonial")
            .label("Testimonials")
            .menu_name("All Testimonials");
        assert_eq!(ty.menu_label(), "All Testimonials");

        let ty = ContentTypeDefinition::new("jetpack-testimonial").label("Testimonials");
        assert_eq!(ty.menu_label(), "Testimonials");

        let ty = ContentTypeDefinition::new("jetpack-testimonial");
        assert_eq!(ty.menu_label(), "jetpack-testimonial");
    }

    #[test]
    fn capability_requirement_serde() {
        let json = serde_json::to_string(&CapabilityRequirement::required("edit_pages")).unwrap();
        assert_eq!(json, r#"{"required":"edit_pages"}"#);
        let parsed: CapabilityRequirement = serde_json::from_str(r#""undeclared""#).unwrap();
        assert_eq!(parsed, CapabilityRequirement::Undeclared);
    }

    #[test]
    fn match_paths_default_to_internal_path() {
        let item = MenuItemDefinition::new("media", "Media", "/media");
        assert_eq!(item.effective_match_paths(), vec!["/media".to_string()]);

        let item = item.match_paths(["/media", "/media/edit"]);
        assert_eq!(item.effective_match_paths().len(), 2);
    }

    #[test]
    fn preload_hint_is_kebab_case() {
        let json = serde_json::to_string(&PreloadHint::PostsPages).unwrap();
        assert_eq!(json, r#""posts-pages""#);
    }

    #[test]
    fn resolved_item_flattens_definition() {
        let resolved = ResolvedMenuItem {
            item: MenuItemDefinition::new("page", "Pages", "/pages"),
            href: "/pages/example.com".into(),
            link_kind: LinkKind::Internal,
            action_href: None,
            icon_id: "pages".into(),
            preload_hint: PreloadHint::PostsPages,
            is_selected: false,
        };
        let value = serde_json::to_value(&resolved).unwrap();
        assert_eq!(value["name"], "page");
        assert_eq!(value["href"], "/pages/example.com");
        assert_eq!(value["link_kind"], "internal");

        let back: ResolvedMenuItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, resolved);
    }
}
