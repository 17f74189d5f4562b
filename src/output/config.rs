//! Output format selection

use std::fmt;

/// One renderable output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Html,
    Markdown,
    Text,
}

impl OutputFormat {
    /// Every format, in the order `all` produces them.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Json,
        OutputFormat::Html,
        OutputFormat::Markdown,
        OutputFormat::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
        }
    }

    /// File written inside the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Json => "tree.json",
            OutputFormat::Html => "tree.html",
            OutputFormat::Markdown => "tree.md",
            OutputFormat::Text => "tree.txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the operator asked for: a single format or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatChoice {
    Single(OutputFormat),
    #[default]
    All,
}

impl FormatChoice {
    /// Parse an answer, ignoring surrounding whitespace and case.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "json" => Some(FormatChoice::Single(OutputFormat::Json)),
            "html" => Some(FormatChoice::Single(OutputFormat::Html)),
            "markdown" => Some(FormatChoice::Single(OutputFormat::Markdown)),
            "text" => Some(FormatChoice::Single(OutputFormat::Text)),
            "all" => Some(FormatChoice::All),
            _ => None,
        }
    }

    pub fn formats(self) -> Vec<OutputFormat> {
        match self {
            FormatChoice::Single(format) => vec![format],
            FormatChoice::All => OutputFormat::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        assert_eq!(
            FormatChoice::parse("  JSON \n"),
            Some(FormatChoice::Single(OutputFormat::Json))
        );
        assert_eq!(
            FormatChoice::parse("Markdown"),
            Some(FormatChoice::Single(OutputFormat::Markdown))
        );
        assert_eq!(FormatChoice::parse("ALL"), Some(FormatChoice::All));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(FormatChoice::parse("xml"), None);
        assert_eq!(FormatChoice::parse("md"), None);
        assert_eq!(FormatChoice::parse(""), None);
    }

    #[test]
    fn test_formats() {
        assert_eq!(
            FormatChoice::Single(OutputFormat::Text).formats(),
            vec![OutputFormat::Text]
        );
        assert_eq!(FormatChoice::All.formats().len(), 4);
    }

    #[test]
    fn test_file_names() {
        let names: Vec<_> = OutputFormat::ALL.iter().map(|f| f.file_name()).collect();
        assert_eq!(names, ["tree.json", "tree.html", "tree.md", "tree.txt"]);
    }
}
