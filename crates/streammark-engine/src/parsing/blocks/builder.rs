use crate::parsing::{closure::Closure, inline, lines::LineRef};

use super::{
    classify::{LineClass, LineKind, MAX_MARKER_INDENT, MarkdownLineClassifier},
    classify_nested,
    kinds::{BlockQuote, CodeFence, FenceSig, ListMarker, Paragraph},
    types::Block,
};

/// The block currently being accumulated.
#[derive(Debug)]
enum LeafState<'a> {
    None,
    Paragraph {
        lines: Vec<&'a str>,
    },
    Fence {
        sig: FenceSig<'a>,
        lines: Vec<&'a str>,
    },
    List {
        marker: ListMarker,
        start: Option<u64>,
        /// Lines of each item, marker stripped.
        items: Vec<Vec<&'a str>>,
    },
    Quote {
        lines: Vec<LineRef<'a>>,
    },
}

/// Phase 2 of block parsing: folds classified lines into [`Block`]s.
///
/// At most one block is open at a time. It is flushed when a blank line or a
/// different opener arrives, and at [`BlockBuilder::finish`]. A fence still
/// open at that point is emitted with [`Closure::Pending`] for the closure
/// pass to resolve.
pub struct BlockBuilder<'a> {
    depth: usize,
    leaf: LeafState<'a>,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self::nested(0)
    }

    /// A builder for content `depth` blockquote levels deep.
    pub fn nested(depth: usize) -> Self {
        Self {
            depth,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    /// The line classifier matching this builder's nesting depth.
    pub fn classifier(&self) -> MarkdownLineClassifier {
        MarkdownLineClassifier {
            quotes_allowed: self.depth < BlockQuote::MAX_DEPTH,
        }
    }

    pub fn push(&mut self, c: &LineClass<'a>) {
        if let LeafState::Fence { sig, lines } = &mut self.leaf {
            if c.indent <= MAX_MARKER_INDENT && CodeFence::closes(sig, c.remainder) {
                self.close_fence();
            } else {
                lines.push(c.line.text);
            }
            return;
        }

        match c.kind {
            LineKind::Blank => self.flush(),
            LineKind::Fence(sig) => {
                self.flush();
                self.leaf = LeafState::Fence { sig, lines: vec![] };
            }
            LineKind::Heading { level, text } => {
                self.flush();
                self.out.push(Block::Heading {
                    level,
                    content: inline::process(text),
                });
            }
            LineKind::ThematicBreak => {
                self.flush();
                self.out.push(Block::ThematicBreak);
            }
            LineKind::Quote { content } => self.push_quote(content),
            LineKind::ListItem(item) => {
                if let LeafState::List { marker, items, .. } = &mut self.leaf
                    && *marker == item.marker
                {
                    items.push(vec![item.text]);
                    return;
                }
                self.flush();
                self.leaf = LeafState::List {
                    marker: item.marker,
                    start: item.number.filter(|&n| n != 1),
                    items: vec![vec![item.text]],
                };
            }
            LineKind::Text => self.push_text(c),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush();
        self.out
    }

    fn push_quote(&mut self, content: LineRef<'a>) {
        if let LeafState::Quote { lines } = &mut self.leaf {
            lines.push(content);
            return;
        }
        self.flush();
        self.leaf = LeafState::Quote {
            lines: vec![content],
        };
    }

    fn push_text(&mut self, c: &LineClass<'a>) {
        match &mut self.leaf {
            LeafState::Paragraph { lines } => {
                lines.push(c.remainder);
                return;
            }
            // Indented lines continue the last list item.
            LeafState::List { items, .. } if c.indent > 0 => {
                if let Some(last) = items.last_mut() {
                    last.push(c.remainder);
                }
                return;
            }
            _ => {}
        }
        self.flush();
        self.leaf = LeafState::Paragraph {
            lines: vec![c.remainder],
        };
    }

    fn close_fence(&mut self) {
        if let LeafState::Fence { sig, lines } = std::mem::replace(&mut self.leaf, LeafState::None)
        {
            self.out.push(fence_block(sig, &lines, Closure::Explicit));
        }
    }

    fn flush(&mut self) {
        let block = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Paragraph { lines } => paragraph_block(&lines),
            // Unterminated fence: still a code block, closed later.
            LeafState::Fence { sig, lines } => fence_block(sig, &lines, Closure::Pending),
            LeafState::List {
                marker,
                start,
                items,
            } => Block::List {
                ordered: marker.is_ordered(),
                start,
                items: items
                    .iter()
                    .map(|lines| inline::process(&lines.join("\n")))
                    .collect(),
            },
            LeafState::Quote { lines } => Block::Blockquote {
                blocks: classify_nested(&lines, self.depth + 1),
            },
        };
        self.out.push(block);
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn paragraph_block(lines: &[&str]) -> Block {
    let text = lines.join("\n");
    if Paragraph::is_marker_only(&text) {
        Block::RawParagraph {
            text: text.trim().to_string(),
        }
    } else {
        Block::Paragraph {
            content: inline::process(&text),
        }
    }
}

fn fence_block(sig: FenceSig<'_>, lines: &[&str], closure: Closure) -> Block {
    Block::CodeBlock {
        language: sig.language().map(str::to_string),
        raw: lines.join("\n"),
        closure,
    }
}
