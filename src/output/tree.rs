//! Plain-text tree formatting
//!
//! Each entry is one line: two spaces per level, a box-drawing connector,
//! then the name. Only the last sibling in a listing gets `└── `.

use crate::error::Result;
use crate::tree::TreeNode;

use super::TreeRenderer;
use super::utils::{connector, indent};

pub struct TextRenderer;

impl TextRenderer {
    fn write_lines(output: &mut String, nodes: &[TreeNode], depth: usize) {
        let last = nodes.len().saturating_sub(1);
        for (i, node) in nodes.iter().enumerate() {
            output.push_str(&indent(depth));
            output.push_str(connector(i == last));
            output.push_str(node.name());
            output.push('\n');

            if node.is_dir() {
                Self::write_lines(output, node.children(), depth + 1);
            }
        }
    }
}

impl TreeRenderer for TextRenderer {
    fn render(&self, nodes: &[TreeNode]) -> Result<String> {
        let mut output = String::new();
        Self::write_lines(&mut output, nodes, 0);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_scenario() {
        let nodes = vec![
            TreeNode::file("a.txt"),
            TreeNode::dir("b", Some(vec![TreeNode::file("c.txt")])),
        ];
        let output = TextRenderer.render(&nodes).unwrap();
        assert_eq!(output, "├── a.txt\n└── b\n  └── c.txt\n");
    }

    #[test]
    fn test_text_last_sibling_connector_per_level() {
        let nodes = vec![
            TreeNode::dir(
                "src",
                Some(vec![TreeNode::file("lib.rs"), TreeNode::file("main.rs")]),
            ),
            TreeNode::file("Cargo.toml"),
        ];
        let output = TextRenderer.render(&nodes).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "├── src",
                "  ├── lib.rs",
                "  └── main.rs",
                "└── Cargo.toml",
            ]
        );
    }

    #[test]
    fn test_text_single_entry_is_last() {
        let output = TextRenderer.render(&[TreeNode::dir("b", None)]).unwrap();
        assert_eq!(output, "└── b\n");
    }
}
