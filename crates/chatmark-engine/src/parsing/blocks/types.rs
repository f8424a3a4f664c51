use serde::{Deserialize, Serialize};

use crate::parsing::inline::InlineSpan;

/// One item of a bullet list, inline content already tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletListItem {
    pub spans: Vec<InlineSpan>,
}

/// A parsed block node. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockNode {
    /// A horizontal rule (`---`, `***`, `___`, or any mix of those
    /// characters, three or more).
    HorizontalRule,
    /// A heading. `level` is 1, 2, or 3.
    Heading { level: u8, spans: Vec<InlineSpan> },
    /// A maximal run of consecutive bullet lines, merged into one node.
    BulletList { items: Vec<BulletListItem> },
    /// A single numbered line (`1. …`). Each numbered line stands alone
    /// and keeps its numeral in the tokenized text.
    OrderedListLine { spans: Vec<InlineSpan> },
    /// Any other non-blank line.
    Paragraph { spans: Vec<InlineSpan> },
}
