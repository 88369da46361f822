pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    Closure, Document, MarkdownParser,
    blocks::Block,
    inline::Inline,
    parse, parse_document,
};
