use crate::parsing::Document;
use crate::parsing::blocks::BlockNode;
use crate::parsing::inline::InlineSpan;

/// Renders a parsed document into a stable, line-per-node text form.
///
/// One line per block (children indented two spaces), span text quoted
/// with `Debug` escaping so control characters stay visible. Used for
/// snapshot assertions; not a user-facing format.
pub fn normalize(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            BlockNode::HorizontalRule => out.push_str("Rule\n"),
            BlockNode::Heading { level, spans } => {
                out.push_str(&format!("Heading({level})\n"));
                push_spans(&mut out, spans, 1);
            }
            BlockNode::BulletList { items } => {
                out.push_str("BulletList\n");
                for item in items {
                    out.push_str("  Item\n");
                    push_spans(&mut out, &item.spans, 2);
                }
            }
            BlockNode::OrderedListLine { spans } => {
                out.push_str("OrderedLine\n");
                push_spans(&mut out, spans, 1);
            }
            BlockNode::Paragraph { spans } => {
                out.push_str("Paragraph\n");
                push_spans(&mut out, spans, 1);
            }
        }
    }
    out
}

fn push_spans(out: &mut String, spans: &[InlineSpan], depth: usize) {
    let indent = "  ".repeat(depth);
    for span in spans {
        let line = match span {
            InlineSpan::Plain(t) => format!("{indent}Plain {t:?}\n"),
            InlineSpan::Bold(t) => format!("{indent}Bold {t:?}\n"),
            InlineSpan::Code(t) => format!("{indent}Code {t:?}\n"),
        };
        out.push_str(&line);
    }
}
