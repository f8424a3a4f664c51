//! # HTML Rendering
//!
//! Maps every parsed block and span variant to escaped HTML markup.
//! Rendering is deterministic: the same document always yields the same
//! string, one block element per line.
//!
//! Numbered lines render as standalone `<div class="numbered">`
//! elements rather than `<ol>` items; each numbered source line is an
//! independent node and its numeral is part of the text.

use chatmark_engine::{BlockNode, Document, InlineSpan};

/// Renders a parsed document to an HTML fragment.
pub fn render_document(doc: &Document) -> String {
    let mut html = String::new();
    for block in &doc.blocks {
        render_block(&mut html, block);
    }
    html
}

fn render_block(out: &mut String, block: &BlockNode) {
    match block {
        BlockNode::HorizontalRule => out.push_str("<hr>\n"),
        BlockNode::Heading { level, spans } => {
            let (open, close) = match level {
                1 => ("<h1>", "</h1>\n"),
                2 => ("<h2>", "</h2>\n"),
                _ => ("<h3>", "</h3>\n"),
            };
            out.push_str(open);
            render_spans(out, spans);
            out.push_str(close);
        }
        BlockNode::BulletList { items } => {
            out.push_str("<ul>\n");
            for item in items {
                out.push_str("<li>");
                render_spans(out, &item.spans);
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n");
        }
        BlockNode::OrderedListLine { spans } => {
            out.push_str("<div class=\"numbered\">");
            render_spans(out, spans);
            out.push_str("</div>\n");
        }
        BlockNode::Paragraph { spans } => {
            out.push_str("<p>");
            render_spans(out, spans);
            out.push_str("</p>\n");
        }
    }
}

fn render_spans(out: &mut String, spans: &[InlineSpan]) {
    for span in spans {
        match span {
            InlineSpan::Plain(t) => out.push_str(&html_escape::encode_text(t)),
            InlineSpan::Bold(t) => {
                out.push_str("<strong>");
                out.push_str(&html_escape::encode_text(t));
                out.push_str("</strong>");
            }
            InlineSpan::Code(t) => {
                out.push_str("<code>");
                out.push_str(&html_escape::encode_text(t));
                out.push_str("</code>");
            }
        }
    }
}
