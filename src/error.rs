//! Error type for outtree operations
//!
//! Traversal failures never reach this type: unreadable directories and
//! failed metadata lookups degrade to empty nodes inside the walker. Only
//! failures that leave the run unable to produce its files end up here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The output directory could not be created
    #[error("cannot create output directory '{}': {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rendered file could not be written
    #[error("cannot write '{}': {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading answers or writing prompts/confirmations failed
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
