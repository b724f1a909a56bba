//! HTTP middleware components.
//!
//! Provides support-session header propagation.

pub mod support_session;

pub use support_session::propagate_support_session;
