//! Path helpers for menu links and selection.

/// Join path segments into an absolute application path.
///
/// Each part may itself contain `/`; empty segments are skipped. Returns an
/// empty string when nothing remains.
///
/// Parts: ["/posts", "my", "example.com"]
/// Result: "/posts/my/example.com"
pub fn join_path<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut joined = String::new();
    for segment in parts
        .into_iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
    {
        joined.push('/');
        joined.push_str(segment);
    }
    joined
}

/// Whether `current` is at or below `prefix`.
///
/// Matching is by whole segments: "/posts/my/example.com" is under
/// "/posts", "/postsmith" is not. Query strings and fragments on `current`
/// are ignored.
pub fn path_matches(current: &str, prefix: &str) -> bool {
    let current = current.split(['?', '#']).next().unwrap_or_default();
    let prefix = prefix.trim_end_matches('/');

    if prefix.is_empty() {
        return false;
    }

    match current.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_skips_empty_segments() {
        assert_eq!(join_path(["/posts", "", "example.com"]), "/posts/example.com");
        assert_eq!(join_path(["/posts", "my", "example.com"]), "/posts/my/example.com");
        assert_eq!(
            join_path(["/settings/import/", "/example.com"]),
            "/settings/import/example.com"
        );
    }

    #[test]
    fn join_of_nothing_is_empty() {
        assert_eq!(join_path(["", ""]), "");
        assert_eq!(join_path(std::iter::empty()), "");
    }

    #[test]
    fn matches_exact_and_deeper() {
        assert!(path_matches("/posts", "/posts"));
        assert!(path_matches("/posts/my/example.com", "/posts"));
        assert!(path_matches("/posts/example.com", "/posts/"));
    }

    #[test]
    fn matches_whole_segments_only() {
        assert!(!path_matches("/postsmith", "/posts"));
        assert!(!path_matches("/comment", "/comments"));
        assert!(!path_matches("/", "/posts"));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert!(path_matches("/comments?status=pending", "/comments"));
        assert!(path_matches("/media#top", "/media"));
    }

    #[test]
    fn empty_prefix_never_matches() {
        assert!(!path_matches("/anything", ""));
        assert!(!path_matches("/anything", "/"));
    }
}
