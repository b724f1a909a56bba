//! sitenav test utilities.
//!
//! Helpers for integration testing: site and content type fixtures,
//! request body builders, and assertions over resolved menus.

use serde_json::{Value as JsonValue, json};
use sitenav_sdk::types::{ContentTypeDefinition, ResolvedMenuItem, SiteSnapshot};

/// Slug used by [`test_site`].
pub const TEST_SLUG: &str = "example.wordpress.com";

/// Admin URL used by [`test_site`].
pub const TEST_ADMIN_URL: &str = "https://example.wordpress.com/wp-admin/";

/// Every capability the built-in and optional entries ask for.
pub const ALL_CAPABILITIES: &[&str] = &[
    "edit_pages",
    "edit_posts",
    "upload_files",
    "moderate_comments",
    "manage_options",
];

/// A multi-user, hosted site with a slug and an admin URL.
pub fn test_site(id: u64) -> SiteSnapshot {
    SiteSnapshot::new(id).slug(TEST_SLUG).admin_url(TEST_ADMIN_URL)
}

/// A queryable custom content type editable with `edit_posts`.
pub fn test_content_type(name: &str) -> ContentTypeDefinition {
    ContentTypeDefinition::new(name)
        .label(capitalize(name))
        .queryable()
        .capability("edit_posts", "edit_posts")
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builder for `POST /api/sidebar` request bodies.
#[derive(Debug, Clone, Default)]
pub struct TestSidebar {
    pub site: Option<SiteSnapshot>,
    pub primary_site: Option<SiteSnapshot>,
    pub has_single_site: bool,
    pub capabilities: Vec<String>,
    pub content_types: Vec<ContentTypeDefinition>,
    pub current_path: String,
}

impl TestSidebar {
    /// All-sites view with no content types.
    pub fn all_sites() -> Self {
        Self::default()
    }

    /// Single selected site with every capability granted.
    pub fn for_site(site: SiteSnapshot) -> Self {
        Self {
            site: Some(site),
            capabilities: ALL_CAPABILITIES.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Replace the granted capabilities.
    pub fn with_capabilities(mut self, capabilities: &[&str]) -> Self {
        self.capabilities = capabilities.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_content_type(mut self, def: ContentTypeDefinition) -> Self {
        self.content_types.push(def);
        self
    }

    pub fn with_single_site(mut self, primary: SiteSnapshot) -> Self {
        self.has_single_site = true;
        self.primary_site = Some(primary);
        self
    }

    pub fn at(mut self, path: &str) -> Self {
        self.current_path = path.to_string();
        self
    }

    /// JSON body accepted by the sidebar endpoint.
    pub fn to_json(&self) -> JsonValue {
        json!({
            "site": self.site,
            "primary_site": self.primary_site,
            "has_single_site": self.has_single_site,
            "capabilities": self.capabilities,
            "content_types": self.content_types,
            "current_path": self.current_path,
        })
    }
}

/// Names of resolved items, in order.
pub fn item_names(items: &[ResolvedMenuItem]) -> Vec<&str> {
    items.iter().map(ResolvedMenuItem::name).collect()
}

/// Find a resolved item by name, panicking with the available names.
pub fn find_item<'a>(items: &'a [ResolvedMenuItem], name: &str) -> &'a ResolvedMenuItem {
    items
        .iter()
        .find(|item| item.name() == name)
        .unwrap_or_else(|| panic!("no menu item `{name}` in {:?}", item_names(items)))
}

/// Assert that no resolved item has the given name.
pub fn assert_absent(items: &[ResolvedMenuItem], name: &str) {
    assert!(
        items.iter().all(|item| item.name() != name),
        "menu item `{name}` unexpectedly present in {:?}",
        item_names(items)
    );
}
