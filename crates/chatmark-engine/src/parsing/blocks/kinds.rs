//! Block-specific types that own their line markers.
//!
//! The classifier calls these; marker strings and patterns are never
//! hardcoded in classification code.

use std::sync::OnceLock;

use regex::Regex;

/// Horizontal rule marker type.
pub struct Rule;

impl Rule {
    /// Matches a trimmed line of three or more rule characters.
    ///
    /// Any mix of `-`, `*`, and `_` counts, preserving the permissive
    /// behavior of the source dialect.
    pub fn matches(trimmed: &str) -> bool {
        static RULE_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = RULE_REGEX.get_or_init(|| Regex::new(r"^[-*_]{3,}$").expect("Invalid rule regex"));
        re.is_match(trimmed)
    }
}

/// Heading marker type.
pub struct Heading;

impl Heading {
    /// Deepest level first so `### ` is not mistaken for `# `.
    const PREFIXES: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Strips a heading prefix off the raw (untrimmed) line.
    ///
    /// Returns the level and the text after the marker. Indented
    /// headings deliberately don't match; they fall through to
    /// paragraph classification.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, level)| line.strip_prefix(prefix).map(|rest| (*level, rest)))
    }
}

/// Bullet list marker type.
pub struct Bullet;

impl Bullet {
    const DASH: &'static str = "- ";
    const STAR: &'static str = "* ";

    /// Strips a bullet marker off the trimmed line.
    pub fn strip(trimmed: &str) -> Option<&str> {
        trimmed
            .strip_prefix(Self::DASH)
            .or_else(|| trimmed.strip_prefix(Self::STAR))
    }
}

/// Numbered line marker type.
pub struct NumberedLine;

impl NumberedLine {
    /// Matches a trimmed line opening with digits, a period, and
    /// whitespace (`1. `). The numeral is not stripped; callers keep
    /// the full line.
    pub fn matches(trimmed: &str) -> bool {
        static NUMBERED_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = NUMBERED_REGEX
            .get_or_init(|| Regex::new(r"^\d+\.\s").expect("Invalid numbered-line regex"));
        re.is_match(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("---", true)]
    #[case("***", true)]
    #[case("___", true)]
    #[case("-*_", true)]
    #[case("----------", true)]
    #[case("--", false)]
    #[case("--- x", false)]
    #[case("", false)]
    fn rule_matching(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Rule::matches(line), expected);
    }

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("## Title", Some((2, "Title")))]
    #[case("### Title", Some((3, "Title")))]
    #[case("#### Title", None)]
    #[case("#Title", None)]
    #[case(" # Title", None)]
    fn heading_stripping(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::strip(line), expected);
    }

    #[rstest]
    #[case("- item", Some("item"))]
    #[case("* item", Some("item"))]
    #[case("-item", None)]
    #[case("+ item", None)]
    fn bullet_stripping(#[case] trimmed: &str, #[case] expected: Option<&str>) {
        assert_eq!(Bullet::strip(trimmed), expected);
    }

    #[rstest]
    #[case("1. first", true)]
    #[case("42. later", true)]
    #[case("1.", false)]
    #[case("1first", false)]
    #[case("a. first", false)]
    fn numbered_line_matching(#[case] trimmed: &str, #[case] expected: bool) {
        assert_eq!(NumberedLine::matches(trimmed), expected);
    }
}
