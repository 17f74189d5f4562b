//! Operator-facing console output: warnings and write confirmations

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

use crate::output::OutputFormat;

/// Decide whether stdout gets colors.
pub fn color_choice() -> ColorChoice {
    // Respect NO_COLOR (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return ColorChoice::Always;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return ColorChoice::Never;
    }
    if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_colored<W: WriteColor>(out: &mut W, color: Color, line: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(out, "{}", line)?;
    out.reset()?;
    writeln!(out)
}

/// Print a recoverable-input warning.
pub fn print_warning<W: WriteColor>(out: &mut W, message: &str) -> io::Result<()> {
    write_colored(out, Color::Yellow, message)
}

/// Print the one-line confirmation for a written file.
pub fn print_written<W: WriteColor>(
    out: &mut W,
    format: OutputFormat,
    path: &Path,
) -> io::Result<()> {
    let line = format!("✅ {} output written to {}", format, path.display());
    write_colored(out, Color::Green, &line)
}
