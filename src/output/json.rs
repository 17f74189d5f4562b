//! JSON output formatting

use crate::error::Result;
use crate::tree::TreeNode;

use super::TreeRenderer;

/// Renders the root's entries as a pretty-printed JSON array (2-space indent).
pub struct JsonRenderer;

impl TreeRenderer for JsonRenderer {
    fn render(&self, nodes: &[TreeNode]) -> Result<String> {
        Ok(serde_json::to_string_pretty(nodes)?)
    }
}
