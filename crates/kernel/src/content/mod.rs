//! Content types.
//!
//! This module provides:
//! - ContentTypeRegistry: the per-pass snapshot of content types reported
//!   by the content-type source, and the filter deciding which of them get
//!   their own sidebar entry

mod type_registry;

pub use type_registry::{ContentTypeRegistry, EXCLUDED_TYPES};
