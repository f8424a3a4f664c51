use serde::{Deserialize, Serialize};

/// A typed fragment of one line of reply text.
///
/// Each variant owns its text with the delimiter markers already
/// stripped. Spans are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSpan {
    /// Text that isn't part of any delimited run.
    Plain(String),
    /// A bold run (`**…**`), delimiters stripped.
    Bold(String),
    /// A code run (`` `…` ``), delimiters stripped.
    Code(String),
}

impl InlineSpan {
    /// The raw text of the span, without delimiter markers.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(t) | InlineSpan::Bold(t) | InlineSpan::Code(t) => t,
        }
    }
}
