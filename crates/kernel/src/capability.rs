//! Capability lookups.
//!
//! Capabilities are granted per site and per acting user by an external
//! authorization component. The resolver asks at most once per item per pass.

use std::collections::{HashMap, HashSet};

/// Answers whether the acting user holds a capability on a site.
pub trait CapabilityCheck {
    fn can(&self, site_id: u64, capability: &str) -> bool;
}

impl<F> CapabilityCheck for F
where
    F: Fn(u64, &str) -> bool,
{
    fn can(&self, site_id: u64, capability: &str) -> bool {
        self(site_id, capability)
    }
}

/// Snapshot of granted capabilities, keyed by site.
#[derive(Debug, Clone, Default)]
pub struct SiteCapabilities {
    sites: HashMap<u64, HashSet<String>>,
}

impl SiteCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant capabilities on a site, keeping any already granted.
    pub fn grant<I, S>(&mut self, site_id: u64, capabilities: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sites
            .entry(site_id)
            .or_default()
            .extend(capabilities.into_iter().map(Into::into));
    }

    pub fn with_site<I, S>(mut self, site_id: u64, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grant(site_id, capabilities);
        self
    }

    /// Drop everything granted on a site.
    pub fn revoke_site(&mut self, site_id: u64) {
        self.sites.remove(&site_id);
    }

    /// Number of sites with at least one grant recorded.
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }
}

impl CapabilityCheck for SiteCapabilities {
    fn can(&self, site_id: u64, capability: &str) -> bool {
        self.sites
            .get(&site_id)
            .is_some_and(|caps| caps.contains(capability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_are_per_site() {
        let caps = SiteCapabilities::new()
            .with_site(1, ["edit_posts", "edit_pages"])
            .with_site(2, ["edit_posts"]);

        assert!(caps.can(1, "edit_pages"));
        assert!(!caps.can(2, "edit_pages"));
        assert!(caps.can(2, "edit_posts"));
        assert!(!caps.can(3, "edit_posts"));
        assert_eq!(caps.site_count(), 2);
    }

    #[test]
    fn revoke_site_clears_grants() {
        let mut caps = SiteCapabilities::new().with_site(1, ["upload_files"]);
        caps.revoke_site(1);
        assert!(!caps.can(1, "upload_files"));
    }

    #[test]
    fn closures_are_checks() {
        let admin_only = |_site: u64, cap: &str| cap == "manage_options";
        assert!(admin_only.can(9, "manage_options"));
        assert!(!admin_only.can(9, "edit_posts"));
    }
}
