//! Dispatch: walk, render, and write each selected format

use std::path::{Path, PathBuf};

use log::{debug, info};
use termcolor::WriteColor;

use crate::config::Config;
use crate::console::print_written;
use crate::error::Result;
use crate::output::{OutputWriter, render};
use crate::tree::TreeWalker;

/// Produce every format `config` selects for the tree under `root`.
///
/// Each format gets its own traversal. A confirmation line is printed to
/// `out` after each file is written; the written paths are returned in order.
pub fn generate<W: WriteColor>(
    config: &Config,
    root: &Path,
    writer: &OutputWriter,
    out: &mut W,
) -> Result<Vec<PathBuf>> {
    writer.ensure_dir()?;

    let mut written = Vec::new();
    for format in config.format.formats() {
        let walker = TreeWalker::new(config.walker.clone());
        debug!(
            "walking {} for {} (max depth {})",
            root.display(),
            format,
            walker.config().max_depth
        );
        let nodes = walker.walk(root);
        let contents = render(format, &nodes)?;
        let path = writer.write(format, &contents)?;
        print_written(out, format, &path)?;
        info!("{} output: {} top-level entries", format, nodes.len());
        written.push(path);
    }
    Ok(written)
}
