//! Markdown output formatting
//!
//! This module provides `MarkdownRenderer` which outputs tree content
//! as a nested bullet list, suitable for READMEs or issue comments.

use crate::error::Result;
use crate::tree::TreeNode;

use super::TreeRenderer;
use super::utils::indent;

/// Markdown output formatter - one `- name` bullet per entry.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    fn write_lines(output: &mut String, nodes: &[TreeNode], depth: usize) {
        for node in nodes {
            output.push_str(&indent(depth));
            output.push_str("- ");
            output.push_str(node.name());
            output.push('\n');

            if node.is_dir() {
                Self::write_lines(output, node.children(), depth + 1);
            }
        }
    }
}

impl TreeRenderer for MarkdownRenderer {
    fn render(&self, nodes: &[TreeNode]) -> Result<String> {
        let mut output = String::new();
        Self::write_lines(&mut output, nodes, 0);
        Ok(output)
    }
}
