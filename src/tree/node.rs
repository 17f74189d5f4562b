//! Tree node produced by a walk

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One visible directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File {
        name: String,
    },
    Dir {
        name: String,
        /// `None` when the directory lies past the depth limit and was never listed.
        /// An unreadable directory is `Some` with no children.
        children: Option<Vec<TreeNode>>,
    },
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        TreeNode::File { name: name.into() }
    }

    pub fn dir(name: impl Into<String>, children: Option<Vec<TreeNode>>) -> Self {
        TreeNode::Dir {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Listed children; empty for files and for directories past the depth limit.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Dir {
                children: Some(children),
                ..
            } => children,
            _ => &[],
        }
    }
}

// Directories always carry `children` (possibly empty); files never do.
impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TreeNode::File { name } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("name", name)?;
                map.end()
            }
            TreeNode::Dir { name, .. } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("children", self.children())?;
                map.end()
            }
        }
    }
}
