//! Content type registry.
//!
//! Holds the snapshot of content types supplied by the content-type source
//! for one resolution pass, in source order.

use std::collections::HashMap;

use sitenav_sdk::types::ContentTypeDefinition;
use tracing::{debug, warn};

/// Types that never get a generated menu entry. `post` and `page` have
/// built-in entries; `wp_block` is the platform's internal block storage.
pub const EXCLUDED_TYPES: &[&str] = &["post", "page", "wp_block"];

/// Registry of content types for a single pass.
#[derive(Debug, Clone, Default)]
pub struct ContentTypeRegistry {
    /// Types in source order.
    types: Vec<ContentTypeDefinition>,
    /// Name -> position in `types`.
    index: HashMap<String, usize>,
}

impl ContentTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a source snapshot.
    ///
    /// A repeated name replaces the earlier definition in place, keeping
    /// the position of its first appearance.
    pub fn from_snapshot(types: impl IntoIterator<Item = ContentTypeDefinition>) -> Self {
        let mut registry = Self::new();
        for def in types {
            registry.register(def);
        }
        registry
    }

    /// Register a content type definition.
    pub fn register(&mut self, def: ContentTypeDefinition) {
        if let Some(&pos) = self.index.get(&def.name) {
            warn!(
                type_name = %def.name,
                "content type reported twice, keeping the last definition"
            );
            self.types[pos] = def;
            return;
        }
        self.index.insert(def.name.clone(), self.types.len());
        self.types.push(def);
    }

    /// Content types that get a generated menu entry, in source order.
    ///
    /// Skips [`EXCLUDED_TYPES`] and types whose `show_ui` is explicitly
    /// false. A missing `show_ui` counts as shown.
    pub fn menu_types(&self) -> impl Iterator<Item = &ContentTypeDefinition> {
        self.types.iter().filter(|def| {
            if EXCLUDED_TYPES.contains(&def.name.as_str()) {
                return false;
            }
            if def.show_ui == Some(false) {
                debug!(type_name = %def.name, "content type hidden from UI");
                return false;
            }
            true
        })
    }

    /// Get a content type by name.
    pub fn get(&self, type_name: &str) -> Option<&ContentTypeDefinition> {
        self.index.get(type_name).map(|&pos| &self.types[pos])
    }

    /// All content types, in source order.
    pub fn list(&self) -> &[ContentTypeDefinition] {
        &self.types
    }

    /// List content type names, in source order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|def| def.name.as_str()).collect()
    }

    /// Check if a content type exists.
    pub fn exists(&self, type_name: &str) -> bool {
        self.index.contains_key(type_name)
    }

    /// Get the number of registered content types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(registry: &'a ContentTypeRegistry) -> Vec<&'a str> {
        registry.menu_types().map(|def| def.name.as_str()).collect()
    }

    #[test]
    fn excluded_types_never_listed() {
        let registry = ContentTypeRegistry::from_snapshot([
            ContentTypeDefinition::new("post"),
            ContentTypeDefinition::new("page"),
            ContentTypeDefinition::new("wp_block"),
            ContentTypeDefinition::new("portfolio"),
        ]);
        assert_eq!(registry.len(), 4);
        assert_eq!(names(&registry), vec!["portfolio"]);
    }

    #[test]
    fn show_ui_false_is_skipped_missing_is_kept() {
        let registry = ContentTypeRegistry::from_snapshot([
            ContentTypeDefinition::new("product").show_ui(false),
            ContentTypeDefinition::new("testimonial"),
            ContentTypeDefinition::new("portfolio").show_ui(true),
        ]);
        assert_eq!(names(&registry), vec!["testimonial", "portfolio"]);
    }

    #[test]
    fn source_order_is_preserved() {
        let registry = ContentTypeRegistry::from_snapshot([
            ContentTypeDefinition::new("zebra"),
            ContentTypeDefinition::new("apple"),
            ContentTypeDefinition::new("mango"),
        ]);
        assert_eq!(registry.type_names(), vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn repeated_name_replaces_in_place() {
        let registry = ContentTypeRegistry::from_snapshot([
            ContentTypeDefinition::new("portfolio").label("Old"),
            ContentTypeDefinition::new("product"),
            ContentTypeDefinition::new("portfolio").label("New"),
        ]);
        assert_eq!(registry.type_names(), vec!["portfolio", "product"]);
        assert_eq!(
            registry.get("portfolio").and_then(|d| d.label.as_deref()),
            Some("New")
        );
        assert!(registry.exists("product"));
        assert!(!registry.exists("page"));
    }
}
