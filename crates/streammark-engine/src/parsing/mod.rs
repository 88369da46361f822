//! # Parsing
//!
//! The markdown to HTML pipeline. Each stage is a pure function of the
//! previous stage's output:
//!
//! 1. [`lines::scan`] splits the buffer into lines
//! 2. [`blocks::classify`] folds lines into blocks, running
//! 3. [`inline::process`] over heading, paragraph and list item text
//! 4. [`closure::close`] resolves whatever input left open into a [`Document`]
//! 5. [`html::emit`] serializes the document
//!
//! Nothing survives between calls: every parse starts from an empty context
//! and rebuilds the whole tree from the full buffer.

pub mod blocks;
pub mod closure;
pub mod html;
pub mod inline;
pub mod lines;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

pub use closure::{Closure, Document};

/// Parses the full buffer into a closed document.
pub fn parse_document(text: &str) -> Document {
    let lines = lines::scan(text);
    let blocks = blocks::classify(&lines);
    if log::log_enabled!(log::Level::Trace) {
        log::trace!(
            "parsed {} lines into {} blocks, {} closers to synthesize",
            lines.len(),
            blocks.len(),
            closure::pending_count(&blocks)
        );
    }
    closure::close(blocks)
}

/// Renders the full buffer to HTML.
///
/// Total: every input, however incomplete, yields well-formed HTML, and the
/// empty string yields the empty string.
pub fn parse(text: &str) -> String {
    html::emit(&parse_document(text))
}

/// A parser value for callers that keep one around across keystrokes.
///
/// It carries no state, so reusing one instance is identical to calling
/// [`parse`] directly: output depends only on the text passed in.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownParser;

impl MarkdownParser {
    pub fn new() -> Self {
        Self
    }

    /// Renders the full buffer to HTML. See [`parse`].
    pub fn parse(&self, text: &str) -> String {
        parse(text)
    }
}
