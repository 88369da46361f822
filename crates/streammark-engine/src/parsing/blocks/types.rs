use crate::parsing::{closure::Closure, inline::Inline};

/// A block-level node of the document, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// An ATX heading, level 1 to 6.
    Heading { level: u8, content: Vec<Inline> },
    /// Contiguous non-blank lines that matched no other opener.
    Paragraph { content: Vec<Inline> },
    /// A fenced code block. Content is raw: never inline-processed.
    CodeBlock {
        language: Option<String>,
        raw: String,
        closure: Closure,
    },
    /// A run of items sharing one marker.
    List {
        ordered: bool,
        /// First ordinal of an ordered list when it isn't 1.
        start: Option<u64>,
        items: Vec<Vec<Inline>>,
    },
    /// Contiguous `>` lines, classified recursively.
    Blockquote { blocks: Vec<Block> },
    ThematicBreak,
    /// Text made only of marker characters, rendered verbatim.
    RawParagraph { text: String },
}

impl Block {
    /// Short name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::Paragraph { .. } => "Paragraph",
            Block::CodeBlock { .. } => "CodeBlock",
            Block::List { .. } => "List",
            Block::Blockquote { .. } => "Blockquote",
            Block::ThematicBreak => "ThematicBreak",
            Block::RawParagraph { .. } => "RawParagraph",
        }
    }
}
