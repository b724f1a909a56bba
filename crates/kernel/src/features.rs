//! Feature flags.
//!
//! Flags are process-wide configuration, read once per resolution pass.
//! The resolver only sees them through [`FeatureGate`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Well-known flag identifiers gating sidebar entries.
pub mod flags {
    pub const PAGES: &str = "manage/pages";
    pub const POSTS: &str = "manage/posts";
    pub const MEDIA: &str = "manage/media";
    pub const COMMENTS: &str = "comments/management";
    pub const CUSTOM_POST_TYPES: &str = "manage/custom-post-types";
    pub const PLUGINS: &str = "manage/plugins";
    pub const IMPORT: &str = "manage/import-in-sidebar";
}

/// Flags enabled when nothing is configured. Import stays off.
pub const DEFAULT_FLAGS: &[&str] = &[
    flags::PAGES,
    flags::POSTS,
    flags::MEDIA,
    flags::COMMENTS,
    flags::CUSTOM_POST_TYPES,
    flags::PLUGINS,
];

/// Answers whether a feature flag is on.
pub trait FeatureGate {
    fn is_enabled(&self, flag: &str) -> bool;
}

impl<F> FeatureGate for F
where
    F: Fn(&str) -> bool,
{
    fn is_enabled(&self, flag: &str) -> bool {
        self(flag)
    }
}

/// Set of enabled flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags {
    enabled: BTreeSet<String>,
}

impl FeatureFlags {
    /// No flags enabled.
    pub fn none() -> Self {
        Self::default()
    }

    /// The [`DEFAULT_FLAGS`] set.
    pub fn defaults() -> Self {
        DEFAULT_FLAGS.iter().copied().collect()
    }

    /// Parse a comma-separated list, ignoring blanks.
    pub fn parse_list(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn enable(&mut self, flag: impl Into<String>) {
        self.enabled.insert(flag.into());
    }

    pub fn disable(&mut self, flag: &str) {
        self.enabled.remove(flag);
    }

    pub fn with(mut self, flag: impl Into<String>) -> Self {
        self.enable(flag);
        self
    }

    pub fn without(mut self, flag: &str) -> Self {
        self.disable(flag);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.enabled.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }
}

impl FeatureGate for FeatureFlags {
    fn is_enabled(&self, flag: &str) -> bool {
        self.enabled.contains(flag)
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            enabled: iter.into_iter().map(Into::into).collect(),
        }
    }
}
