//! # Optimistic Closure
//!
//! The single reconciliation point for constructs still open at end of input.
//!
//! The classifier and the inline processor never guess at closers: they mark
//! an unterminated fence or span [`Closure::Pending`] and move on. [`close`]
//! walks the whole tree once, turns every `Pending` into `Synthesized`, and is
//! the only way to obtain a [`Document`]. The emitter only accepts a
//! `Document`, so an open construct can never reach serialization.

use super::{blocks::Block, inline::Inline};

/// Open/closed status of a construct that has a closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Closure {
    /// The closer was present in the source.
    Explicit,
    /// Input ended before the closer.
    Pending,
    /// The closer was supplied by the closure pass.
    Synthesized,
}

impl Closure {
    /// Resolves a pending status; explicit and synthesized closures are kept.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            Closure::Pending => Closure::Synthesized,
            other => other,
        }
    }

    pub fn is_pending(self) -> bool {
        self == Closure::Pending
    }
}

/// A fully closed document: blocks in reading order.
///
/// Only [`close`] constructs this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Resolves every pending construct and seals the tree into a [`Document`].
pub fn close(blocks: Vec<Block>) -> Document {
    Document {
        blocks: blocks.into_iter().map(close_block).collect(),
    }
}

fn close_block(block: Block) -> Block {
    match block {
        Block::Heading { level, content } => Block::Heading {
            level,
            content: close_inlines(content),
        },
        Block::Paragraph { content } => Block::Paragraph {
            content: close_inlines(content),
        },
        Block::CodeBlock {
            language,
            raw,
            closure,
        } => Block::CodeBlock {
            language,
            raw,
            closure: closure.resolve(),
        },
        Block::List {
            ordered,
            start,
            items,
        } => Block::List {
            ordered,
            start,
            items: items.into_iter().map(close_inlines).collect(),
        },
        Block::Blockquote { blocks } => Block::Blockquote {
            blocks: blocks.into_iter().map(close_block).collect(),
        },
        leaf @ (Block::ThematicBreak | Block::RawParagraph { .. }) => leaf,
    }
}

fn close_inlines(nodes: Vec<Inline>) -> Vec<Inline> {
    nodes.into_iter().map(close_inline).collect()
}

fn close_inline(node: Inline) -> Inline {
    match node {
        Inline::Bold { content, closure } => Inline::Bold {
            content,
            closure: closure.resolve(),
        },
        Inline::Italic { content, closure } => Inline::Italic {
            content,
            closure: closure.resolve(),
        },
        Inline::InlineCode { raw, closure } => Inline::InlineCode {
            raw,
            closure: closure.resolve(),
        },
        leaf @ (Inline::Text(_) | Inline::LineBreak) => leaf,
    }
}

/// Counts constructs still marked [`Closure::Pending`].
pub fn pending_count(blocks: &[Block]) -> usize {
    blocks.iter().map(block_pending).sum()
}

fn block_pending(block: &Block) -> usize {
    match block {
        Block::Heading { content, .. } | Block::Paragraph { content } => inlines_pending(content),
        Block::CodeBlock { closure, .. } => usize::from(closure.is_pending()),
        Block::List { items, .. } => items.iter().map(|i| inlines_pending(i)).sum(),
        Block::Blockquote { blocks } => pending_count(blocks),
        Block::ThematicBreak | Block::RawParagraph { .. } => 0,
    }
}

fn inlines_pending(nodes: &[Inline]) -> usize {
    nodes
        .iter()
        .filter(|n| match n {
            Inline::Bold { closure, .. }
            | Inline::Italic { closure, .. }
            | Inline::InlineCode { closure, .. } => closure.is_pending(),
            Inline::Text(_) | Inline::LineBreak => false,
        })
        .count()
}
