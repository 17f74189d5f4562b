//! Entry filtering for tree walking

use std::collections::HashSet;

/// Hides directory entries by exact basename.
///
/// No globbing and no case folding: `Build` is visible when `build` is ignored.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter(HashSet<String>);

impl EntryFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Check if an entry with this basename should be shown.
    pub fn is_visible(&self, name: &str) -> bool {
        !self.0.contains(name)
    }
}
