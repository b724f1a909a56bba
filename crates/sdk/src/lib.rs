//! sitenav SDK
//!
//! Types exchanged between the menu resolver and the layers around it:
//! the snapshots it consumes (sites, content types) and the menu
//! descriptors it produces for rendering.

pub mod types;

pub mod prelude {
    pub use crate::types::*;
}
