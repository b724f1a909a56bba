//! Per-item resolution and ordered output.
//!
//! Visibility is decided first; link and presentation metadata are only
//! computed for items that stay visible.

use sitenav_sdk::types::{
    CapabilityRequirement, LinkKind, MenuItemDefinition, ResolvedMenuItem, SiteSnapshot,
};
use tracing::debug;

use super::path::{join_path, path_matches};
use super::presentation::{icon_for, preload_hint_for};
use crate::capability::CapabilityCheck;
use crate::features::FeatureGate;

/// Suffix scoping author-scoped links to the viewer's own content.
const MY_SUFFIX: &str = "my";

/// Pseudo content type for attachments; media never renders through the
/// generic path.
const ATTACHMENT: &str = "attachment";

/// Everything a pass reads. All inputs are immutable snapshots.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    /// The single selected site, or `None` for the all-sites view.
    pub site: Option<&'a SiteSnapshot>,
    /// The account's only site, when it has exactly one.
    pub primary_site: Option<&'a SiteSnapshot>,
    pub has_single_site: bool,
    pub capabilities: &'a dyn CapabilityCheck,
    pub features: &'a dyn FeatureGate,
    pub current_path: &'a str,
}

impl<'a> ResolveContext<'a> {
    /// All-sites context with an empty current path.
    pub fn new(capabilities: &'a dyn CapabilityCheck, features: &'a dyn FeatureGate) -> Self {
        Self {
            site: None,
            primary_site: None,
            has_single_site: false,
            capabilities,
            features,
            current_path: "",
        }
    }

    pub fn site(mut self, site: &'a SiteSnapshot) -> Self {
        self.site = Some(site);
        self
    }

    /// Mark the account as owning exactly one site.
    pub fn single_site(mut self, primary: &'a SiteSnapshot) -> Self {
        self.has_single_site = true;
        self.primary_site = Some(primary);
        self
    }

    pub fn current_path(mut self, path: &'a str) -> Self {
        self.current_path = path;
        self
    }

    pub fn site_selected(&self) -> bool {
        self.site.is_some()
    }

    pub fn site_slug(&self) -> Option<&'a str> {
        self.site.and_then(|s| s.slug.as_deref())
    }

    /// Admin base URL of the selected site; empty counts as absent.
    pub fn admin_url(&self) -> Option<&'a str> {
        self.site
            .and_then(|s| s.admin_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Decide the author suffix for a pass.
///
/// With a site selected, links are scoped to the viewer's own posts unless
/// the site is single-user or Jetpack-connected. In the all-sites view the
/// suffix is dropped only when the account has a single site that is
/// single-user or Jetpack-connected. Cached site state can be incomplete
/// in the all-sites view, in which case the suffix stays even for a
/// single-user site.
pub fn author_suffix(ctx: &ResolveContext<'_>) -> Option<&'static str> {
    let unscoped = |site: &SiteSnapshot| site.single_user || site.jetpack;

    let scoped = match ctx.site {
        Some(site) => !unscoped(site),
        None => !(ctx.has_single_site && ctx.primary_site.is_some_and(unscoped)),
    };

    scoped.then_some(MY_SUFFIX)
}

/// Resolves menu items against one context.
pub struct MenuResolver<'a> {
    ctx: ResolveContext<'a>,
    author_suffix: Option<&'static str>,
}

impl<'a> MenuResolver<'a> {
    pub fn new(ctx: ResolveContext<'a>) -> Self {
        let author_suffix = author_suffix(&ctx);
        Self { ctx, author_suffix }
    }

    pub fn context(&self) -> &ResolveContext<'a> {
        &self.ctx
    }

    /// Whether the item survives the visibility checks, in order:
    /// capability (site selected), flag and all-sites eligibility
    /// (no site selected), attachment exclusion.
    pub fn is_visible(&self, item: &MenuItemDefinition) -> bool {
        match self.ctx.site {
            Some(site) => {
                let granted = match &item.capability {
                    CapabilityRequirement::None => true,
                    CapabilityRequirement::Required(cap) => self.ctx.capabilities.can(site.id, cap),
                    CapabilityRequirement::Undeclared => false,
                };
                if !granted {
                    return false;
                }
            }
            None => {
                if !self.flag_enabled(item) || !item.show_when_no_site_selected {
                    return false;
                }
            }
        }

        item.name != ATTACHMENT
    }

    /// Link target for a visible item. Exactly one rule applies.
    pub fn link(&self, item: &MenuItemDefinition) -> (String, LinkKind) {
        if (!item.queryable || !self.flag_enabled(item))
            && let Some(admin_url) = self.ctx.admin_url()
        {
            return (
                format!("{admin_url}{}", item.external_admin_path),
                LinkKind::Admin,
            );
        }

        let suffix = if item.author_scoped {
            self.author_suffix.unwrap_or_default()
        } else {
            ""
        };
        let slug = self.ctx.site_slug().unwrap_or_default();

        (
            join_path([item.internal_path.as_str(), suffix, slug]),
            LinkKind::Internal,
        )
    }

    /// Resolve one item, or `None` if it is hidden.
    pub fn resolve(&self, item: &MenuItemDefinition) -> Option<ResolvedMenuItem> {
        if !self.is_visible(item) {
            return None;
        }

        let (href, link_kind) = self.link(item);
        let slug = self.ctx.site_slug().unwrap_or_default();
        let action_href = item
            .action_link
            .as_deref()
            .map(|action| join_path([action, slug]));

        let match_paths = item.effective_match_paths();
        let is_selected = match_paths
            .iter()
            .any(|prefix| path_matches(self.ctx.current_path, prefix));

        let mut resolved = item.clone();
        resolved.match_paths = match_paths;

        Some(ResolvedMenuItem {
            href,
            link_kind,
            action_href,
            icon_id: icon_for(&item.name).to_string(),
            preload_hint: preload_hint_for(&item.name),
            is_selected,
            item: resolved,
        })
    }

    /// Resolve a catalog, dropping hidden items and keeping catalog order.
    pub fn resolve_all(&self, catalog: &[MenuItemDefinition]) -> Vec<ResolvedMenuItem> {
        let resolved: Vec<_> = catalog.iter().filter_map(|item| self.resolve(item)).collect();

        debug!(
            catalog = catalog.len(),
            visible = resolved.len(),
            site_selected = self.ctx.site_selected(),
            "resolved menu"
        );

        resolved
    }

    fn flag_enabled(&self, item: &MenuItemDefinition) -> bool {
        item.feature_flag
            .as_deref()
            .is_none_or(|flag| self.ctx.features.is_enabled(flag))
    }
}

/// Resolve a single item in one call.
pub fn resolve(item: &MenuItemDefinition, ctx: ResolveContext<'_>) -> Option<ResolvedMenuItem> {
    MenuResolver::new(ctx).resolve(item)
}

/// Resolve a catalog in one call.
pub fn resolve_all(
    catalog: &[MenuItemDefinition],
    ctx: ResolveContext<'_>,
) -> Vec<ResolvedMenuItem> {
    MenuResolver::new(ctx).resolve_all(catalog)
}
