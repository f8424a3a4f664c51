use super::{
    classify::LineKind,
    types::{BlockNode, BulletListItem},
};
use crate::parsing::inline::tokenize_inline;

/// Accumulates classified lines into block nodes.
///
/// The only cross-line state is the open bullet-list group: consecutive
/// bullet lines collect into one `BulletList`, and every other line
/// kind — blank lines included — closes it first. A list is one visual
/// unit only while uninterrupted; bullets resuming after a break start
/// a fresh list.
pub struct BlockBuilder {
    open_items: Vec<BulletListItem>,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open_items: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, kind: LineKind) {
        match kind {
            LineKind::Blank => self.flush_list(),
            LineKind::Rule => {
                self.flush_list();
                self.out.push(BlockNode::HorizontalRule);
            }
            LineKind::Heading { level, rest } => {
                self.flush_list();
                self.out.push(BlockNode::Heading {
                    level,
                    spans: tokenize_inline(&rest),
                });
            }
            LineKind::Bullet { content } => {
                self.open_items.push(BulletListItem {
                    spans: tokenize_inline(&content),
                });
            }
            LineKind::Numbered { content } => {
                self.flush_list();
                self.out.push(BlockNode::OrderedListLine {
                    spans: tokenize_inline(&content),
                });
            }
            LineKind::Text { content } => {
                self.flush_list();
                self.out.push(BlockNode::Paragraph {
                    spans: tokenize_inline(&content),
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF closes the list like a blank line would
        self.flush_list();
        self.out
    }

    fn flush_list(&mut self) {
        if self.open_items.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.open_items);
        self.out.push(BlockNode::BulletList { items });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
