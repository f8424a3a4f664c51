use super::kinds::{Bullet, Heading, NumberedLine, Rule};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified
/// independently without reference to surrounding context. Content
/// strings are owned; the builder tokenizes them later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A horizontal rule line.
    Rule,
    /// A heading line; `rest` is the text after the marker.
    Heading { level: u8, rest: String },
    /// A bullet line; `content` is the trimmed line minus its marker.
    Bullet { content: String },
    /// A numbered line; `content` is the full trimmed line, numeral
    /// included.
    Numbered { content: String },
    /// Any other non-blank line, kept untrimmed.
    Text { content: String },
    /// A whitespace-only line.
    Blank,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineKind`].
    ///
    /// Precedence: rule, heading, bullet, numbered line, text. Rule,
    /// bullet, and numbered checks look at the trimmed line; heading
    /// markers must sit at the very start of the raw line, and
    /// paragraph text keeps the raw line verbatim.
    pub fn classify(&self, line: &str) -> LineKind {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        if Rule::matches(trimmed) {
            return LineKind::Rule;
        }
        if let Some((level, rest)) = Heading::strip(line) {
            return LineKind::Heading {
                level,
                rest: rest.to_string(),
            };
        }
        if let Some(content) = Bullet::strip(trimmed) {
            return LineKind::Bullet {
                content: content.to_string(),
            };
        }
        if NumberedLine::matches(trimmed) {
            return LineKind::Numbered {
                content: trimmed.to_string(),
            };
        }

        LineKind::Text {
            content: line.to_string(),
        }
    }
}
