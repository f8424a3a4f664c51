use crate::parsing::Document;
use crate::parsing::blocks::BlockNode;
use crate::parsing::inline::InlineSpan;

/// Asserts structural invariants on a parsed document.
///
/// - Heading levels stay within 1..=3
/// - Bullet lists are never empty (a group only opens on a bullet line)
/// - No span inside any block contains a newline
pub fn check(doc: &Document) {
    for block in &doc.blocks {
        match block {
            BlockNode::HorizontalRule => {}
            BlockNode::Heading { level, spans } => {
                assert!(
                    (1..=3).contains(level),
                    "heading level out of range: {level}"
                );
                check_spans(spans);
            }
            BlockNode::BulletList { items } => {
                assert!(!items.is_empty(), "empty bullet list emitted");
                for item in items {
                    check_spans(&item.spans);
                }
            }
            BlockNode::OrderedListLine { spans } | BlockNode::Paragraph { spans } => {
                check_spans(spans);
            }
        }
    }
}

/// Asserts the tokenizer's losslessness contract for one line:
/// re-inserting the delimiters around each span and concatenating
/// reproduces the line byte for byte.
pub fn check_line(line: &str, spans: &[InlineSpan]) {
    let rebuilt: String = spans
        .iter()
        .map(|span| match span {
            InlineSpan::Plain(t) => t.clone(),
            InlineSpan::Bold(t) => format!("**{t}**"),
            InlineSpan::Code(t) => format!("`{t}`"),
        })
        .collect();
    assert_eq!(
        rebuilt, line,
        "tokenized spans do not reconstruct the source line"
    );
}

fn check_spans(spans: &[InlineSpan]) {
    for span in spans {
        assert!(
            !span.text().contains('\n'),
            "inline span crosses a line boundary: {span:?}"
        );
    }
}
