use crate::parsing::{blocks::Block, closure::Document, inline::Inline};

/// Validates parser output invariants.
///
/// Asserts that:
/// - No construct is still `Closure::Pending`
/// - Heading levels are within 1..=6
/// - Spans are never empty and never nest
/// - Text nodes are never empty
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for b in doc.blocks() {
        check_block(b);
    }
}

fn check_block(b: &Block) {
    match b {
        Block::Heading { level, content } => {
            assert!(
                (1..=6).contains(level),
                "heading level out of range: {level}"
            );
            check_inlines(content, false);
        }
        Block::Paragraph { content } => {
            assert!(!content.is_empty(), "paragraph without content");
            check_inlines(content, false);
        }
        Block::CodeBlock { closure, .. } => {
            assert!(!closure.is_pending(), "code block left pending: {b:?}");
        }
        Block::List { items, .. } => {
            assert!(!items.is_empty(), "list without items");
            for item in items {
                check_inlines(item, false);
            }
        }
        Block::Blockquote { blocks } => {
            for nested in blocks {
                check_block(nested);
            }
        }
        Block::RawParagraph { text } => {
            assert!(!text.trim().is_empty(), "blank raw paragraph");
        }
        Block::ThematicBreak => {}
    }
}

fn check_inlines(nodes: &[Inline], inside_span: bool) {
    for n in nodes {
        match n {
            Inline::Text(s) => assert!(!s.is_empty(), "empty text node"),
            Inline::LineBreak => {}
            Inline::Bold { content, closure } | Inline::Italic { content, closure } => {
                assert!(!inside_span, "nested span: {n:?}");
                assert!(!closure.is_pending(), "span left pending: {n:?}");
                assert!(!content.is_empty(), "empty span: {n:?}");
                check_inlines(content, true);
            }
            Inline::InlineCode { raw, closure } => {
                assert!(!inside_span, "nested span: {n:?}");
                assert!(!closure.is_pending(), "code span left pending: {n:?}");
                assert!(!raw.is_empty(), "empty code span");
            }
        }
    }
}

/// Entities the emitter produces.
const ENTITIES: [&str; 4] = ["&amp;", "&lt;", "&gt;", "&quot;"];

/// Checks that `html` is well-formed: every opened element is closed in
/// order, void elements are self-closing, and no `<`, `>` or `&` appears
/// outside markup or a known entity.
pub fn check_html(html: &str) -> Result<(), String> {
    let mut stack: Vec<&str> = vec![];
    let mut i = 0;
    while i < html.len() {
        let rest = &html[i..];
        match rest.as_bytes()[0] {
            b'<' => {
                let end = rest
                    .find('>')
                    .ok_or_else(|| format!("unterminated tag at byte {i}"))?;
                let tag = &rest[1..end];
                if tag.contains('<') {
                    return Err(format!("stray '<' at byte {i}"));
                }
                if let Some(name) = tag.strip_prefix('/') {
                    match stack.pop() {
                        Some(open) if open == name => {}
                        Some(open) => {
                            return Err(format!("</{name}> closes <{open}> at byte {i}"));
                        }
                        None => return Err(format!("unmatched </{name}> at byte {i}")),
                    }
                } else if !tag.ends_with('/') {
                    let name = tag.split_whitespace().next().unwrap_or("");
                    if name.is_empty() {
                        return Err(format!("empty tag at byte {i}"));
                    }
                    stack.push(name);
                }
                i += end + 1;
            }
            b'>' => return Err(format!("stray '>' at byte {i}")),
            b'&' => {
                let entity = ENTITIES
                    .iter()
                    .find(|e| rest.starts_with(**e))
                    .ok_or_else(|| format!("unescaped '&' at byte {i}"))?;
                i += entity.len();
            }
            _ => {
                let step = rest.chars().next().map_or(1, char::len_utf8);
                i += step;
            }
        }
    }
    match stack.pop() {
        Some(open) => Err(format!("<{open}> never closed")),
        None => Ok(()),
    }
}
