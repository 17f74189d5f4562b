//! Configuration types for the tree walker

use std::fmt;

/// Depth used when the operator gives no (or an unusable) answer.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Names skipped when the operator leaves the ignore list blank.
pub const DEFAULT_IGNORE: [&str; 4] = ["node_modules", ".git", "dist", "build"];

/// Deepest directory level (root = 0) whose children are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxDepth {
    Limited(usize),
    Unlimited,
}

impl MaxDepth {
    /// Whether a directory at `depth` may be listed.
    pub fn allows(self, depth: usize) -> bool {
        match self {
            MaxDepth::Limited(max) => depth <= max,
            MaxDepth::Unlimited => true,
        }
    }
}

impl Default for MaxDepth {
    fn default() -> Self {
        MaxDepth::Limited(DEFAULT_MAX_DEPTH)
    }
}

impl fmt::Display for MaxDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxDepth::Limited(max) => write!(f, "{}", max),
            MaxDepth::Unlimited => f.write_str("unlimited"),
        }
    }
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    pub max_depth: MaxDepth,
    /// Exact basenames to skip, at any depth
    pub ignore: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: MaxDepth::default(),
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limited_depth_allows_up_to_max() {
        let depth = MaxDepth::Limited(2);
        assert!(depth.allows(0));
        assert!(depth.allows(2));
        assert!(!depth.allows(3));
    }

    #[test]
    fn test_zero_depth_allows_only_root() {
        let depth = MaxDepth::Limited(0);
        assert!(depth.allows(0));
        assert!(!depth.allows(1));
    }

    #[test]
    fn test_unlimited_depth() {
        assert!(MaxDepth::Unlimited.allows(10_000));
    }

    #[test]
    fn test_defaults() {
        let config = WalkerConfig::default();
        assert_eq!(config.max_depth, MaxDepth::Limited(3));
        assert_eq!(config.ignore, vec!["node_modules", ".git", "dist", "build"]);
    }
}
