/// How a user row is selected from the store: by an explicit id from the
/// request path, or the reserved anonymous row when no id was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserLookup {
    ById(i64),
    Default,
}

impl UserLookup {
    /// Lookup for a raw `user_id` path segment. An empty segment means no id
    /// was given and falls back to the default row. A segment that is not a
    /// valid i64 cannot match any stored row, so there is nothing to look up.
    pub fn from_path_segment(raw: &str) -> Option<UserLookup> {
        if raw.is_empty() {
            return Some(UserLookup::Default);
        }
        raw.parse().ok().map(UserLookup::ById)
    }
}
