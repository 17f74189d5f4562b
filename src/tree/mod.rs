//! Directory tree walking logic
//!
//! `TreeWalker` lists a root directory into a vector of `TreeNode`s, bounded
//! by `WalkerConfig::max_depth` and filtered by exact basename.

mod config;
mod filter;
mod node;
mod walker;

pub use config::{DEFAULT_IGNORE, DEFAULT_MAX_DEPTH, MaxDepth, WalkerConfig};
pub use filter::EntryFilter;
pub use node::TreeNode;
pub use walker::TreeWalker;
