//! Presentation metadata: icons and preload hints.
//!
//! Both are static name lookups with a fallback for anything unlisted,
//! which covers every custom content type.

use sitenav_sdk::types::PreloadHint;

/// Icon for names missing from [`ICONS`].
pub const DEFAULT_ICON: &str = "custom-post-type";

const ICONS: &[(&str, &str)] = &[
    ("page", "pages"),
    ("post", "posts"),
    ("media", "image"),
    ("comments", "chat"),
    ("plugins", "plugins"),
    ("import", "cloud-upload"),
];

const PRELOAD_HINTS: &[(&str, PreloadHint)] = &[
    ("post", PreloadHint::PostsPages),
    ("page", PreloadHint::PostsPages),
    ("comments", PreloadHint::Comments),
];

/// Icon identifier for a menu item name.
pub fn icon_for(name: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(key, _)| *key == name)
        .map_or(DEFAULT_ICON, |&(_, icon)| icon)
}

/// Preload group for a menu item name.
pub fn preload_hint_for(name: &str) -> PreloadHint {
    PRELOAD_HINTS
        .iter()
        .find(|(key, _)| *key == name)
        .map_or(PreloadHint::PostsCustom, |&(_, hint)| hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_icons() {
        assert_eq!(icon_for("post"), "posts");
        assert_eq!(icon_for("page"), "pages");
        assert_eq!(icon_for("comments"), "chat");
        assert_eq!(icon_for("import"), "cloud-upload");
        assert_eq!(icon_for("plugins"), "plugins");
    }

    #[test]
    fn unknown_names_use_custom_type_icon() {
        assert_eq!(icon_for("portfolio"), DEFAULT_ICON);
        assert_eq!(icon_for(""), DEFAULT_ICON);
    }

    #[test]
    fn preload_groups() {
        assert_eq!(preload_hint_for("post"), PreloadHint::PostsPages);
        assert_eq!(preload_hint_for("page"), PreloadHint::PostsPages);
        assert_eq!(preload_hint_for("comments"), PreloadHint::Comments);
        assert_eq!(preload_hint_for("media"), PreloadHint::PostsCustom);
        assert_eq!(preload_hint_for("portfolio"), PreloadHint::PostsCustom);
    }
}
