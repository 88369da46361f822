use crate::parsing::{blocks::Block, closure::Document, inline::Inline};

/// Renders a document as an indented outline, one node per line.
///
/// Text is shown with `{:?}` quoting so that whitespace and newlines are
/// visible in snapshots.
pub fn normalize(doc: &Document) -> String {
    let mut lines = vec![];
    for block in doc.blocks() {
        block_lines(block, 0, &mut lines);
    }
    lines.join("\n")
}

fn push(lines: &mut Vec<String>, depth: usize, line: String) {
    lines.push(format!("{}{line}", "  ".repeat(depth)));
}

fn block_lines(block: &Block, depth: usize, lines: &mut Vec<String>) {
    match block {
        Block::Heading { level, content } => {
            push(lines, depth, format!("Heading({level})"));
            inline_lines(content, depth + 1, lines);
        }
        Block::Paragraph { content } => {
            push(lines, depth, "Paragraph".into());
            inline_lines(content, depth + 1, lines);
        }
        Block::CodeBlock {
            language,
            raw,
            closure,
        } => {
            let lang = language.as_deref().unwrap_or("-");
            push(lines, depth, format!("CodeBlock({lang}, {closure:?}) {raw:?}"));
        }
        Block::List {
            ordered,
            start,
            items,
        } => {
            let kind = if *ordered { "ordered" } else { "bullet" };
            match start {
                Some(n) => push(lines, depth, format!("List({kind}, start={n})")),
                None => push(lines, depth, format!("List({kind})")),
            }
            for item in items {
                push(lines, depth + 1, "Item".into());
                inline_lines(item, depth + 2, lines);
            }
        }
        Block::Blockquote { blocks } => {
            push(lines, depth, "Blockquote".into());
            for b in blocks {
                block_lines(b, depth + 1, lines);
            }
        }
        Block::ThematicBreak => push(lines, depth, "ThematicBreak".into()),
        Block::RawParagraph { text } => push(lines, depth, format!("RawParagraph {text:?}")),
    }
}

fn inline_lines(nodes: &[Inline], depth: usize, lines: &mut Vec<String>) {
    for node in nodes {
        match node {
            Inline::Text(s) => push(lines, depth, format!("Text {s:?}")),
            Inline::Bold { content, closure } | Inline::Italic { content, closure } => {
                push(lines, depth, format!("{}({closure:?})", node.kind_name()));
                inline_lines(content, depth + 1, lines);
            }
            Inline::InlineCode { raw, closure } => {
                push(lines, depth, format!("InlineCode({closure:?}) {raw:?}"))
            }
            Inline::LineBreak => push(lines, depth, "LineBreak".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;

    #[test]
    fn outline_of_mixed_document() {
        let doc = parse_document("# Hi\n\n> **b\n\n3. x\n\n```js\nlet a");
        assert_eq!(
            normalize(&doc),
            [
                "Heading(1)",
                "  Text \"Hi\"",
                "Blockquote",
                "  Paragraph",
                "    Bold(Synthesized)",
                "      Text \"b\"",
                "List(ordered, start=3)",
                "  Item",
                "    Text \"x\"",
                "CodeBlock(js, Synthesized) \"let a\"",
            ]
            .join("\n")
        );
    }

    #[test]
    fn outline_of_empty_document() {
        assert_eq!(normalize(&parse_document("")), "");
    }
}
