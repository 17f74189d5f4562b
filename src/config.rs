//! Run configuration assembled from the operator's answers

use crate::output::FormatChoice;
use crate::tree::WalkerConfig;

/// Everything a run needs; built once, then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub format: FormatChoice,
    pub walker: WalkerConfig,
}
