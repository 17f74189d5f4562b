//! Interactive configuration: format, depth, and ignore list
//!
//! Questions are asked in a fixed order and every answer has a fallback, so
//! a run can always proceed. Bad format or depth answers print a warning and
//! use the default; end of input counts as a blank answer.

use std::io::{BufRead, Write};

use log::debug;
use termcolor::WriteColor;

use crate::config::Config;
use crate::console::print_warning;
use crate::error::Result;
use crate::output::FormatChoice;
use crate::tree::{DEFAULT_IGNORE, DEFAULT_MAX_DEPTH, MaxDepth, WalkerConfig};

pub const FORMAT_PROMPT: &str = "Enter output format (html, json, markdown, text, all): ";
pub const DEPTH_PROMPT: &str = "Enter maximum depth (or 'all' for unlimited): ";
pub const IGNORE_PROMPT: &str = "Enter comma separated list of directories/files to ignore (default: node_modules, .git, dist, build): ";

/// Keyword accepted at the depth prompt for an unbounded walk.
const UNLIMITED_KEYWORD: &str = "all";

/// Parse a depth answer. Blank selects the default; `None` means unusable.
pub fn parse_max_depth(answer: &str) -> Option<MaxDepth> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(MaxDepth::default());
    }
    if answer.eq_ignore_ascii_case(UNLIMITED_KEYWORD) {
        return Some(MaxDepth::Unlimited);
    }
    answer.parse().ok().map(MaxDepth::Limited)
}

/// Parse the ignore list. Blank selects the defaults; empty items are kept.
pub fn parse_ignore_list(answer: &str) -> Vec<String> {
    if answer.trim().is_empty() {
        return DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect();
    }
    answer.split(',').map(|s| s.trim().to_string()).collect()
}

/// Asks the configuration questions over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: WriteColor> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and return the answer without its line ending.
    ///
    /// Invalid UTF-8 is decoded lossily so a garbled answer falls back like any
    /// other unusable one.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            debug!("end of input at prompt {:?}", question);
        }
        let answer = String::from_utf8_lossy(&raw);
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn ask_format(&mut self) -> Result<FormatChoice> {
        let answer = self.ask(FORMAT_PROMPT)?;
        match FormatChoice::parse(&answer) {
            Some(choice) => Ok(choice),
            None => {
                print_warning(&mut self.output, "Invalid format. Using 'all' as default.")?;
                Ok(FormatChoice::All)
            }
        }
    }

    pub fn ask_max_depth(&mut self) -> Result<MaxDepth> {
        let answer = self.ask(DEPTH_PROMPT)?;
        match parse_max_depth(&answer) {
            Some(depth) => Ok(depth),
            None => {
                let message = format!("Invalid depth. Using {} as default.", DEFAULT_MAX_DEPTH);
                print_warning(&mut self.output, &message)?;
                Ok(MaxDepth::default())
            }
        }
    }

    pub fn ask_ignore_list(&mut self) -> Result<Vec<String>> {
        let answer = self.ask(IGNORE_PROMPT)?;
        Ok(parse_ignore_list(&answer))
    }

    /// Run all three questions, in order.
    pub fn configure(&mut self) -> Result<Config> {
        let format = self.ask_format()?;
        let max_depth = self.ask_max_depth()?;
        let ignore = self.ask_ignore_list()?;

        let config = Config {
            format,
            walker: WalkerConfig { max_depth, ignore },
        };
        debug!("configured: {:?}", config);
        Ok(config)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
