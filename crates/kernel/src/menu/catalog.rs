//! Menu catalog - the ordered set of menu item definitions for one pass.
//!
//! Built-in entries come first, then one entry per content type reported
//! by the content-type source, then the optional plugins and import entries
//! when their flags are on. Order is append order; nothing is re-sorted.

use std::collections::HashSet;

use sitenav_sdk::types::{
    CapabilityRequirement, ContentTypeDefinition, MenuItemDefinition, SiteSnapshot,
};
use thiserror::Error;
use tracing::debug;

use crate::content::ContentTypeRegistry;
use crate::features::{FeatureGate, flags};

/// Names owned by built-in entries.
pub const BUILTIN_NAMES: &[&str] = &["page", "post", "media", "comments"];

/// Errors detected while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("content type `{0}` collides with a built-in menu item")]
    ReservedName(String),

    #[error("duplicate menu item `{0}`")]
    DuplicateName(String),
}

/// Inputs to catalog assembly besides the content types themselves.
#[derive(Clone, Copy)]
pub struct CatalogOptions<'a> {
    pub features: &'a dyn FeatureGate,
    /// Selected site, if any. Decides plugin and import routing.
    pub site: Option<&'a SiteSnapshot>,
}

/// Ordered menu item definitions with unique names.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItemDefinition>,
    names: HashSet<String>,
}

impl MenuCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a definition. Fails if the name is already taken.
    pub fn register(&mut self, item: MenuItemDefinition) -> Result<(), CatalogError> {
        if !self.names.insert(item.name.clone()) {
            return Err(CatalogError::DuplicateName(item.name));
        }
        self.items.push(item);
        Ok(())
    }

    /// Get a definition by name.
    pub fn get(&self, name: &str) -> Option<&MenuItemDefinition> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// All definitions in catalog order.
    pub fn items(&self) -> &[MenuItemDefinition] {
        &self.items
    }

    pub fn into_items(self) -> Vec<MenuItemDefinition> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Assemble the catalog for a pass.
pub fn assemble_catalog(
    content_types: &ContentTypeRegistry,
    options: CatalogOptions<'_>,
) -> Result<MenuCatalog, CatalogError> {
    let mut catalog = MenuCatalog::new();

    for item in builtin_items() {
        catalog.register(item)?;
    }

    for def in content_types.menu_types() {
        if BUILTIN_NAMES.contains(&def.name.as_str()) {
            return Err(CatalogError::ReservedName(def.name.clone()));
        }
        catalog.register(custom_type_item(def, options.features))?;
    }

    if options.features.is_enabled(flags::PLUGINS) {
        catalog.register(plugins_item(options.site))?;
    }

    if options.features.is_enabled(flags::IMPORT) {
        catalog.register(import_item(options.site))?;
    }

    debug!(
        items = catalog.len(),
        content_types = content_types.len(),
        "assembled menu catalog"
    );

    Ok(catalog)
}

/// Built-in entries, in menu order: pages, posts, media, comments.
pub fn builtin_items() -> Vec<MenuItemDefinition> {
    vec![
        MenuItemDefinition::new("page", "Site Pages", "/pages")
            .capability("edit_pages")
            .feature_flag(flags::PAGES)
            .queryable(true)
            .match_paths(["/pages"])
            .admin_path("edit.php?post_type=page")
            .on_all_sites(true)
            .action("/page", "Add"),
        MenuItemDefinition::new("post", "Blog Posts", "/posts")
            .capability("edit_posts")
            .feature_flag(flags::POSTS)
            .queryable(true)
            .match_paths(["/posts", "/posts/my"])
            .admin_path("edit.php")
            .on_all_sites(true)
            .author_scoped()
            .action("/post", "Add"),
        MenuItemDefinition::new("media", "Media", "/media")
            .capability("upload_files")
            .feature_flag(flags::MEDIA)
            .queryable(true)
            .match_paths(["/media"])
            .admin_path("upload.php")
            .on_all_sites(false),
        MenuItemDefinition::new("comments", "Comments", "/comments")
            .capability("moderate_comments")
            .feature_flag(flags::COMMENTS)
            .queryable(true)
            .match_paths(["/comment", "/comments"])
            .admin_path("edit-comments.php")
            .on_all_sites(false),
    ]
}

/// Entry for a custom content type.
///
/// A type without an `edit_posts` capability mapping gets
/// [`CapabilityRequirement::Undeclared`] and stays hidden while a site is
/// selected.
pub fn custom_type_item(
    def: &ContentTypeDefinition,
    features: &dyn FeatureGate,
) -> MenuItemDefinition {
    let enabled = features.is_enabled(flags::CUSTOM_POST_TYPES);
    let queryable = def.api_queryable && enabled;

    let requirement = match def.capabilities.get("edit_posts") {
        Some(cap) => CapabilityRequirement::required(cap.as_str()),
        None => CapabilityRequirement::Undeclared,
    };

    let mut item = MenuItemDefinition::new(
        def.name.as_str(),
        def.menu_label(),
        format!("/types/{}", def.name),
    )
    .requirement(requirement)
    .feature_flag(flags::CUSTOM_POST_TYPES)
    .queryable(queryable)
    .admin_path(format!("edit.php?post_type={}", def.name))
    .on_all_sites(false);

    if queryable {
        item = item.action(format!("/edit/{}", def.name), "Add");
    }

    item
}

/// Plugins entry. Atomic sites manage plugins outside the application API.
pub fn plugins_item(site: Option<&SiteSnapshot>) -> MenuItemDefinition {
    let atomic = site.is_some_and(|s| s.atomic);
    MenuItemDefinition::new("plugins", "Plugins", "/plugins")
        .capability("manage_options")
        .feature_flag(flags::PLUGINS)
        .queryable(!atomic)
        .match_paths(["/extensions", "/plugins"])
        .admin_path("plugin-install.php?calypsoify=1")
        .on_all_sites(true)
        .force_internal_link(true)
}

/// Import entry. Jetpack sites import through their own admin.
pub fn import_item(site: Option<&SiteSnapshot>) -> MenuItemDefinition {
    let jetpack = site.is_some_and(|s| s.jetpack);
    MenuItemDefinition::new("import", "Import", "/settings/import")
        .capability("manage_options")
        .feature_flag(flags::IMPORT)
        .queryable(!jetpack)
        .match_paths(["/settings/import"])
        .admin_path("import.php")
        .on_all_sites(false)
        .force_internal_link(!jetpack)
}
