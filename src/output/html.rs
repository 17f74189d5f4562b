//! HTML output formatting
//!
//! Emits a bare nested `<ul>`/`<li>` list, one tag per line, without a
//! surrounding document. Entry names are inserted verbatim (no escaping).

use crate::error::Result;
use crate::tree::TreeNode;

use super::TreeRenderer;

pub struct HtmlRenderer;

impl HtmlRenderer {
    fn write_list(output: &mut String, nodes: &[TreeNode]) {
        output.push_str("<ul>\n");
        for node in nodes {
            match node {
                TreeNode::File { name } => {
                    output.push_str("<li>");
                    output.push_str(name);
                    output.push_str("</li>\n");
                }
                TreeNode::Dir { name, children } => {
                    output.push_str("<li>");
                    output.push_str(name);
                    output.push('\n');
                    if let Some(children) = children {
                        Self::write_list(output, children);
                    }
                    output.push_str("</li>\n");
                }
            }
        }
        output.push_str("</ul>\n");
    }
}

impl TreeRenderer for HtmlRenderer {
    fn render(&self, nodes: &[TreeNode]) -> Result<String> {
        let mut output = String::new();
        Self::write_list(&mut output, nodes);
        Ok(output)
    }
}
