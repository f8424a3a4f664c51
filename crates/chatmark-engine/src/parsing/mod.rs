//! # Reply Parsing
//!
//! Single-pass, line-oriented parsing of the constrained markdown
//! dialect used in assistant replies. The block parser classifies each
//! line, groups consecutive bullet lines, and hands textual content to
//! the inline tokenizer. No backtracking across lines.

pub mod blocks;
pub mod inline;
pub mod snapshot;

use serde::{Deserialize, Serialize};

use blocks::{BlockBuilder, BlockNode, LineClassifier};

/// An ordered sequence of parsed blocks.
///
/// Constructed fresh per call, immutable afterwards; parsing holds no
/// state across calls and may run concurrently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<BlockNode>,
}

/// Parses reply text into a [`Document`].
///
/// Lines are `\n`-separated. Never fails: malformed or partially
/// delimited input still produces a best-effort valid document, and
/// empty input produces an empty one.
pub fn parse_blocks(text: &str) -> Document {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.split('\n') {
        builder.push(classifier.classify(line));
    }

    Document {
        blocks: builder.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::BulletListItem;
    use crate::parsing::inline::InlineSpan;
    use pretty_assertions::assert_eq;

    fn plain(t: &str) -> InlineSpan {
        InlineSpan::Plain(t.to_string())
    }

    #[test]
    fn empty_input_yields_empty_document() {
        assert_eq!(parse_blocks(""), Document { blocks: vec![] });
    }

    #[test]
    fn single_rule() {
        assert_eq!(parse_blocks("---").blocks, vec![BlockNode::HorizontalRule]);
    }

    #[test]
    fn heading_then_paragraph() {
        assert_eq!(
            parse_blocks("# Title\nBody text").blocks,
            vec![
                BlockNode::Heading {
                    level: 1,
                    spans: vec![plain("Title")],
                },
                BlockNode::Paragraph {
                    spans: vec![plain("Body text")],
                },
            ]
        );
    }

    #[test]
    fn blank_line_breaks_bullet_contiguity() {
        assert_eq!(
            parse_blocks("- a\n- b\n\n- c").blocks,
            vec![
                BlockNode::BulletList {
                    items: vec![
                        BulletListItem {
                            spans: vec![plain("a")],
                        },
                        BulletListItem {
                            spans: vec![plain("b")],
                        },
                    ],
                },
                BlockNode::BulletList {
                    items: vec![BulletListItem {
                        spans: vec![plain("c")],
                    }],
                },
            ]
        );
    }

    #[test]
    fn numbered_lines_are_independent_nodes() {
        assert_eq!(
            parse_blocks("1. first\n2. second").blocks,
            vec![
                BlockNode::OrderedListLine {
                    spans: vec![plain("1. first")],
                },
                BlockNode::OrderedListLine {
                    spans: vec![plain("2. second")],
                },
            ]
        );
    }

    #[test]
    fn dash_and_star_bullets_share_a_group() {
        assert_eq!(
            parse_blocks("- a\n* b").blocks,
            vec![BlockNode::BulletList {
                items: vec![
                    BulletListItem {
                        spans: vec![plain("a")],
                    },
                    BulletListItem {
                        spans: vec![plain("b")],
                    },
                ],
            }]
        );
    }

    #[test]
    fn blank_lines_only_yield_nothing() {
        assert!(parse_blocks("\n\n\n").blocks.is_empty());
    }

    #[test]
    fn inline_emphasis_inside_blocks() {
        assert_eq!(
            parse_blocks("## The `run` command\nUse **force** mode").blocks,
            vec![
                BlockNode::Heading {
                    level: 2,
                    spans: vec![
                        plain("The "),
                        InlineSpan::Code("run".to_string()),
                        plain(" command"),
                    ],
                },
                BlockNode::Paragraph {
                    spans: vec![
                        plain("Use "),
                        InlineSpan::Bold("force".to_string()),
                        plain(" mode"),
                    ],
                },
            ]
        );
    }
}
