//! # Block Parsing
//!
//! Two-phase block parsing over scanned lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a `LineClass`
//!    containing local facts (indentation, blank status, which opener it looks like)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one open block
//!    and emits `Block`s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: the `Block` enum
//! - **`kinds`**: block-specific types with owned delimiters (CodeFence, Heading, ListItem, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Precedence per line is first-match-wins: fence, heading, thematic break,
//!   blockquote, list item, paragraph
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - An unterminated fence is still a code block, marked `Closure::Pending`
//! - Blockquote content is classified recursively, up to `BlockQuote::MAX_DEPTH`

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::Block;

use super::lines::LineRef;

/// Folds scanned lines into blocks, in reading order.
pub fn classify(lines: &[LineRef<'_>]) -> Vec<Block> {
    classify_nested(lines, 0)
}

/// Classifies the content of a blockquote `depth` levels deep.
pub(crate) fn classify_nested(lines: &[LineRef<'_>], depth: usize) -> Vec<Block> {
    let mut builder = BlockBuilder::nested(depth);
    let classifier = builder.classifier();
    for lr in lines {
        let lc = classifier.classify(lr);
        builder.push(&lc);
    }
    builder.finish()
}
