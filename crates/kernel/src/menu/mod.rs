//! Sidebar menu resolution.
//!
//! A pass runs in three stages:
//! - catalog assembly: built-in entries, one entry per custom content
//!   type, then the flag-gated optional entries
//! - per-item resolution: visibility, link target, presentation metadata
//! - ordered output: visible entries in catalog order

mod catalog;
mod path;
mod presentation;
mod resolve;

pub use catalog::{
    BUILTIN_NAMES, CatalogError, CatalogOptions, MenuCatalog, assemble_catalog, builtin_items,
    custom_type_item, import_item, plugins_item,
};
pub use path::{join_path, path_matches};
pub use presentation::{DEFAULT_ICON, icon_for, preload_hint_for};
pub use resolve::{MenuResolver, ResolveContext, author_suffix, resolve, resolve_all};
