//! TreeWalker - lists a directory recursively into `TreeNode`s

use std::fs;
use std::path::Path;

use log::debug;

use super::config::WalkerConfig;
use super::filter::EntryFilter;
use super::node::TreeNode;

/// Best-effort recursive walker.
///
/// Siblings keep the order the filesystem lists them in. Anything that cannot
/// be read degrades to an empty directory or a plain leaf instead of failing.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: EntryFilter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = EntryFilter::new(config.ignore.iter().cloned());
        Self { config, filter }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk `root` and return its visible entries (the root itself is not a node).
    pub fn walk(&self, root: &Path) -> Vec<TreeNode> {
        self.walk_dir(root, 0).unwrap_or_default()
    }

    /// Returns `None` when `depth` is past the limit, so the caller can tell
    /// "not listed" apart from "listed and empty".
    fn walk_dir(&self, path: &Path, depth: usize) -> Option<Vec<TreeNode>> {
        if !self.config.max_depth.allows(depth) {
            return None;
        }

        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(err) => {
                debug!("skipping unreadable directory {}: {}", path.display(), err);
                return Some(Vec::new());
            }
        };

        let mut nodes = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    debug!("skipping entry in {}: {}", path.display(), err);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.filter.is_visible(&name) {
                continue;
            }

            nodes.push(self.build_node(&entry.path(), name, depth));
        }

        Some(nodes)
    }

    fn build_node(&self, path: &Path, name: String, depth: usize) -> TreeNode {
        // fs::metadata follows symlinks; a dangling link falls through to a leaf
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => TreeNode::Dir {
                name,
                children: self.walk_dir(path, depth + 1),
            },
            Ok(_) => TreeNode::File { name },
            Err(err) => {
                debug!("cannot stat {}: {}", path.display(), err);
                TreeNode::File { name }
            }
        }
    }
}
