use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan},
    types::InlineSpan,
};

/// Tokenizes one line of reply text into a sequence of [`InlineSpan`]s.
///
/// Scans left to right. At each position a bold run (`**…**`, content
/// one or more non-`*` bytes) or a code run (`` `…` ``, content one or
/// more non-backtick bytes) may start, and the earliest-starting
/// delimiter wins. Text outside matched runs is emitted as `Plain`.
///
/// # Unterminated Markers
/// Both delimiters must close on the same line; a lone `**` or `` ` ``
/// never matches and stays literal inside the surrounding `Plain` span.
///
/// # Returns
/// Spans in source order whose concatenated text reproduces the line
/// with only the delimiter markers removed. Never fails; an empty line
/// yields no spans.
pub fn tokenize_inline(line: &str) -> Vec<InlineSpan> {
    let mut cur = Cursor::new(line);
    let mut out = vec![];
    let mut plain_start = cur.pos();

    // Helper to flush accumulated text as a Plain span
    fn flush_plain(out: &mut Vec<InlineSpan>, line: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineSpan::Plain(line[start..end].to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(span) = try_parse_bold(&mut cur, line) {
            flush_plain(&mut out, line, plain_start, start);
            plain_start = cur.pos();
            out.push(span);
            continue;
        }
        if let Some(span) = try_parse_code(&mut cur, line) {
            flush_plain(&mut out, line, plain_start, start);
            plain_start = cur.pos();
            out.push(span);
            continue;
        }
        cur.bump();
    }

    flush_plain(&mut out, line, plain_start, cur.pos());
    out
}

/// Attempts to parse a bold run starting at the current position.
///
/// Content is one or more bytes free of `*`; the closing `**` must sit
/// on the same line. Returns `None` if not at `**` or if the run isn't
/// closed. On failure, cursor position is restored.
fn try_parse_bold(cur: &mut Cursor<'_>, line: &str) -> Option<InlineSpan> {
    if !cur.starts_with(Bold::MARK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Bold::MARK.len());
    let inner_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == Bold::STAR {
            break;
        }
        cur.bump();
    }
    let inner_end = cur.pos();

    if inner_end == inner_start || !cur.starts_with(Bold::MARK) {
        // Empty or not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump_n(Bold::MARK.len());

    Some(InlineSpan::Bold(line[inner_start..inner_end].to_string()))
}

/// Attempts to parse a code run starting at the current position.
///
/// Content is one or more bytes free of backticks. Returns `None` if
/// not at a backtick or if the run isn't closed. On failure, cursor
/// position is restored.
fn try_parse_code(cur: &mut Cursor<'_>, line: &str) -> Option<InlineSpan> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == CodeSpan::TICK {
            break;
        }
        cur.bump();
    }
    let inner_end = cur.pos();

    if inner_end == inner_start || cur.peek() != Some(CodeSpan::TICK) {
        // Empty or not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(InlineSpan::Code(line[inner_start..inner_end].to_string()))
}
