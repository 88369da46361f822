use crate::parsing::closure::Closure;

/// An inline node inside a heading, paragraph or list item.
///
/// Spans never nest: the content of `Bold` and `Italic` is only ever `Text`
/// and `LineBreak`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text, unescaped.
    Text(String),
    /// `**strong**`
    Bold {
        content: Vec<Inline>,
        closure: Closure,
    },
    /// `*emphasis*`
    Italic {
        content: Vec<Inline>,
        closure: Closure,
    },
    /// `` `code` ``. This is a raw zone: no parsing inside.
    InlineCode { raw: String, closure: Closure },
    /// A hard break: a newline preceded by two or more spaces.
    LineBreak,
}

impl Inline {
    /// Short name of the variant, used by snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Inline::Text(_) => "Text",
            Inline::Bold { .. } => "Bold",
            Inline::Italic { .. } => "Italic",
            Inline::InlineCode { .. } => "InlineCode",
            Inline::LineBreak => "LineBreak",
        }
    }
}
