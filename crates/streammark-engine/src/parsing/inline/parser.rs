use crate::parsing::closure::Closure;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis},
    types::Inline,
};

/// Parses inline content into a sequence of [`Inline`] nodes.
///
/// # Raw Zone Precedence
/// Whichever opener comes first wins, and spans never nest: inside a code
/// span nothing is parsed, and inside bold or italic only line breaks are.
///
/// # Optimistic Closing
/// An opener with no closer before the end of `s` wraps everything up to
/// the end and is marked [`Closure::Pending`]. An opener with nothing to wrap
/// (`****`, ``` `` ```, a trailing `**`, `*` followed by a space) stays literal
/// text, so no empty element is ever produced.
///
/// # Returns
/// Nodes covering the whole input, with trailing whitespace dropped.
/// Text between constructs is emitted as `Inline::Text`.
pub fn process(s: &str) -> Vec<Inline> {
    let s = s.trim_end();
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        // Each scanner consumes at least its opener, matched or not.
        let node = match cur.peek() {
            Some(CodeSpan::TICK) => scan_code_span(&mut cur),
            Some(Emphasis::STAR) => scan_emphasis(&mut cur),
            _ => {
                cur.bump();
                continue;
            }
        };
        if let Some(node) = node {
            push_text(&mut out, &s[text_start..start]);
            out.push(node);
            text_start = cur.pos();
        }
    }

    push_text(&mut out, &s[text_start..]);
    out
}

/// Splits plain text into `Text` and `LineBreak` nodes.
///
/// A newline preceded by two or more spaces is a hard break; other newlines
/// stay in the text.
pub fn text_runs(s: &str) -> Vec<Inline> {
    let mut out = vec![];
    push_text(&mut out, s);
    out
}

fn push_text(out: &mut Vec<Inline>, s: &str) {
    fn flush(out: &mut Vec<Inline>, buf: &mut String) {
        if !buf.is_empty() {
            out.push(Inline::Text(std::mem::take(buf)));
        }
    }

    let mut buf = String::new();
    let mut segments = s.split('\n').peekable();
    while let Some(seg) = segments.next() {
        if segments.peek().is_none() {
            buf.push_str(seg);
            break;
        }
        if seg.ends_with("  ") {
            buf.push_str(seg.trim_end_matches(' '));
            flush(out, &mut buf);
            out.push(Inline::LineBreak);
        } else {
            buf.push_str(seg);
            buf.push('\n');
        }
    }
    flush(out, &mut buf);
}

/// Scans a code span at a backtick. Content is captured verbatim.
fn scan_code_span(cur: &mut Cursor<'_>) -> Option<Inline> {
    cur.bump(); // `
    let inner_start = cur.pos();

    match cur.find(&[CodeSpan::TICK]) {
        // `` is literal
        Some(close) if close == inner_start => {
            cur.bump();
            None
        }
        Some(close) => {
            let raw = cur.slice(inner_start, close).to_string();
            cur.seek(close + 1);
            Some(Inline::InlineCode {
                raw,
                closure: Closure::Explicit,
            })
        }
        None if cur.eof() => None,
        None => {
            let raw = cur.rest().to_string();
            cur.seek(cur.s.len());
            Some(Inline::InlineCode {
                raw,
                closure: Closure::Pending,
            })
        }
    }
}

/// Scans bold or italic at a `*`.
fn scan_emphasis(cur: &mut Cursor<'_>) -> Option<Inline> {
    if cur.starts_with(Emphasis::BOLD) {
        cur.bump_n(Emphasis::BOLD.len());
        scan_bold(cur)
    } else {
        cur.bump_n(Emphasis::ITALIC.len());
        scan_italic(cur)
    }
}

/// An opener must be directly followed by the text it wraps.
fn opener_is_dangling(cur: &Cursor<'_>) -> bool {
    cur.eof() || cur.at_whitespace()
}

fn scan_bold(cur: &mut Cursor<'_>) -> Option<Inline> {
    if opener_is_dangling(cur) {
        return None;
    }
    let inner_start = cur.pos();

    match cur.find(Emphasis::BOLD) {
        // **** is literal
        Some(close) if close == inner_start => {
            cur.bump_n(Emphasis::BOLD.len());
            None
        }
        Some(close) => {
            let content = text_runs(cur.slice(inner_start, close));
            cur.seek(close + Emphasis::BOLD.len());
            Some(Inline::Bold {
                content,
                closure: Closure::Explicit,
            })
        }
        None => {
            let rest = cur.rest();
            // A half-typed closer is not content.
            let inner = rest.strip_suffix(Emphasis::STAR as char).unwrap_or(rest);
            cur.seek(cur.s.len());
            if inner.is_empty() {
                return None;
            }
            Some(Inline::Bold {
                content: text_runs(inner),
                closure: Closure::Pending,
            })
        }
    }
}

fn scan_italic(cur: &mut Cursor<'_>) -> Option<Inline> {
    if opener_is_dangling(cur) {
        return None;
    }
    let inner_start = cur.pos();

    // The closer is a lone `*`; longer runs inside the span are literal.
    let mut probe = cur.clone();
    let close = loop {
        match probe.find(Emphasis::ITALIC) {
            None => break None,
            Some(at) => {
                probe.seek(at);
                let run = probe.run_len(Emphasis::STAR);
                if run == 1 {
                    break Some(at);
                }
                probe.bump_n(run);
            }
        }
    };

    match close {
        Some(close) => {
            let content = text_runs(cur.slice(inner_start, close));
            cur.seek(close + Emphasis::ITALIC.len());
            Some(Inline::Italic {
                content,
                closure: Closure::Explicit,
            })
        }
        None => {
            let content = text_runs(cur.rest());
            cur.seek(cur.s.len());
            Some(Inline::Italic {
                content,
                closure: Closure::Pending,
            })
        }
    }
}
