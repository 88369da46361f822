use crate::parsing::{lines::LineRef, span::Span};

use super::kinds::{
    BlockQuote, CodeFence, FenceSig, Heading, ListItem, ListItemStart, ThematicBreak,
};

/// Markers are recognised after at most this many leading spaces.
pub const MAX_MARKER_INDENT: usize = 3;

/// What a line could open, judged from the line alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Fence(FenceSig<'a>),
    Heading { level: u8, text: &'a str },
    ThematicBreak,
    /// A `>` line; `content` is the line with one quote level stripped.
    Quote { content: LineRef<'a> },
    ListItem(ListItemStart<'a>),
    /// Anything else: paragraph text or a continuation line.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether a `Fence` line opens or
/// closes a block, and whether `Text` continues a list item, is decided by
/// the builder.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// The scanned line.
    pub line: LineRef<'a>,
    /// Number of leading spaces.
    pub indent: usize,
    /// The line with leading spaces stripped.
    pub remainder: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier {
    /// Whether `>` still opens a quote at this nesting level.
    pub quotes_allowed: bool,
}

impl Default for MarkdownLineClassifier {
    fn default() -> Self {
        Self {
            quotes_allowed: true,
        }
    }
}

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence is first-match-wins: fence, heading, thematic break,
    /// blockquote, list item, text.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let indent = lr.text.bytes().take_while(|&b| b == b' ').count();
        let remainder = &lr.text[indent..];
        let kind = if lr.is_blank() {
            LineKind::Blank
        } else if indent > MAX_MARKER_INDENT {
            LineKind::Text
        } else {
            self.marker_kind(lr, indent, remainder)
        };
        LineClass {
            line: *lr,
            indent,
            remainder,
            kind,
        }
    }

    fn marker_kind<'a>(&self, lr: &LineRef<'a>, indent: usize, remainder: &'a str) -> LineKind<'a> {
        if let Some(sig) = CodeFence::sig(remainder) {
            return LineKind::Fence(sig);
        }
        if let Some((level, text)) = Heading::parse(remainder) {
            return LineKind::Heading { level, text };
        }
        if ThematicBreak::matches(remainder) {
            return LineKind::ThematicBreak;
        }
        if self.quotes_allowed
            && let Some(skip) = BlockQuote::strip_prefix(remainder)
        {
            let offset = indent + skip;
            return LineKind::Quote {
                content: LineRef {
                    span: Span {
                        start: lr.span.start + offset,
                        end: lr.span.end,
                    },
                    text: &lr.text[offset..],
                },
            };
        }
        if let Some(item) = ListItem::parse(remainder) {
            return LineKind::ListItem(item);
        }
        LineKind::Text
    }
}
