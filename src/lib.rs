//! outtree - snapshot a directory tree as JSON, HTML, Markdown, or text

pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod output;
pub mod prompt;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use app::generate;
pub use config::Config;
pub use error::{Error, Result};
pub use output::{FormatChoice, OutputFormat, OutputWriter, TreeRenderer, render};
pub use prompt::Prompter;
pub use tree::{MaxDepth, TreeNode, TreeWalker, WalkerConfig};
