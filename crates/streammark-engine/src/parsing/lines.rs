use super::span::Span;

/// A reference to a single line of the buffer with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of this line in the buffer (includes the terminator if present).
    pub span: Span,
    /// The line text without its terminator. Trailing spaces are kept since
    /// they mark hard line breaks.
    pub text: &'a str,
}

impl LineRef<'_> {
    /// Whether the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Splits the buffer into lines with their byte spans.
///
/// `\n` and `\r\n` both terminate a line; a lone `\r` elsewhere is text. A
/// `\r` ending the buffer is the first half of a `\r\n` still arriving and is
/// dropped from the line text. A terminator at the very end of the buffer does
/// not produce an extra empty line, and an empty buffer yields no lines at all.
pub fn scan(text: &str) -> Vec<LineRef<'_>> {
    let mut offset = 0usize;
    text.split_inclusive('\n')
        .map(|raw| {
            let start = offset;
            offset += raw.len();
            let body = raw.strip_suffix('\n').unwrap_or(raw);
            let body = body.strip_suffix('\r').unwrap_or(body);
            LineRef {
                span: Span { start, end: offset },
                text: body,
            }
        })
        .collect()
}
