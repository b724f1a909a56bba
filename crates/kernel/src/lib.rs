//! sitenav Kernel Library
//!
//! Sidebar menu resolution and the HTTP surface around it.
//! The main entry point for running the server is the `sitenav` binary.

pub mod capability;
pub mod config;
pub mod content;
pub mod error;
pub mod features;
pub mod menu;
pub mod middleware;
pub mod routes;
pub mod snapshot;
pub mod state;
pub mod support_session;

pub use config::Config;
pub use snapshot::SidebarSnapshot;
pub use state::AppState;
