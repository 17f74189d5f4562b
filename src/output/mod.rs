//! Tree formatting and persistence
//!
//! This module provides renderers for the supported output formats and the
//! writer that stores their results:
//!
//! - `config` - Output format selection
//! - `json` - JSON array of `{name, children?}` objects
//! - `html` - Nested `<ul>`/`<li>` list
//! - `markdown` - Indented bullet list
//! - `tree` - Box-drawing text tree
//! - `writer` - One file per format under `outtree/`

mod config;
mod html;
mod json;
mod markdown;
mod tree;
mod utils;
mod writer;

use crate::error::Result;
use crate::tree::TreeNode;

pub use config::{FormatChoice, OutputFormat};
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use tree::TextRenderer;
pub use writer::{OUTPUT_DIR_NAME, OutputWriter};

/// A pure function from a walk result to formatted output.
pub trait TreeRenderer {
    fn render(&self, nodes: &[TreeNode]) -> Result<String>;
}

/// Render `nodes` with the renderer for `format`.
pub fn render(format: OutputFormat, nodes: &[TreeNode]) -> Result<String> {
    match format {
        OutputFormat::Json => JsonRenderer.render(nodes),
        OutputFormat::Html => HtmlRenderer.render(nodes),
        OutputFormat::Markdown => MarkdownRenderer.render(nodes),
        OutputFormat::Text => TextRenderer.render(nodes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Cross-Format Consistency ====================

    fn build_test_tree() -> Vec<TreeNode> {
        vec![
            TreeNode::file("README.md"),
            TreeNode::dir(
                "src",
                Some(vec![
                    TreeNode::file("main.rs"),
                    TreeNode::dir("deep", None),
                    TreeNode::dir("empty", Some(vec![])),
                ]),
            ),
        ]
    }

    #[test]
    fn test_every_format_mentions_every_node() {
        let tree = build_test_tree();
        for format in OutputFormat::ALL {
            let output = render(format, &tree).unwrap();
            for name in ["README.md", "src", "main.rs", "deep", "empty"] {
                assert!(
                    output.contains(name),
                    "{format} output should contain {name}: {output}"
                );
            }
        }
    }

    #[test]
    fn test_line_formats_agree_on_line_count() {
        let tree = build_test_tree();
        let markdown = render(OutputFormat::Markdown, &tree).unwrap();
        let text = render(OutputFormat::Text, &tree).unwrap();
        assert_eq!(markdown.lines().count(), 5);
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let tree = build_test_tree();
        for format in OutputFormat::ALL {
            assert_eq!(
                render(format, &tree).unwrap(),
                render(format, &tree).unwrap()
            );
        }
    }
}
