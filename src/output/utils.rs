//! Shared helpers for the line-oriented formatters

/// Two spaces per depth level.
pub fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Box-drawing connector placed before an entry name.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "    ");
    }

    #[test]
    fn test_connector() {
        assert_eq!(connector(true), "└── ");
        assert_eq!(connector(false), "├── ");
    }
}
