//! HTML emitter.
//!
//! Serializes a closed [`Document`] to an HTML fragment. Every block is
//! followed by a newline; list items and blockquote children sit on their
//! own lines. Void elements are written self-closing (`<hr />`, `<br />`).
//!
//! All literal text (text nodes, raw paragraphs, code content and the code
//! language) is escaped for `&`, `<`, `>` and `"`. Structural tags are never
//! escaped. This escaping is the only sanitization the output gets.

use html_escape::encode_double_quoted_attribute;

use super::{blocks::Block, closure::Document, inline::Inline};

/// Serializes a document to HTML.
pub fn emit(doc: &Document) -> String {
    let mut emitter = HtmlEmitter::default();
    emitter.blocks(doc.blocks());
    emitter.out
}

#[derive(Default)]
struct HtmlEmitter {
    out: String,
}

impl HtmlEmitter {
    fn blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            self.block(block);
        }
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, content } => {
                let tag = heading_tag(*level);
                self.open(tag);
                self.inlines(content);
                self.close(tag);
            }
            Block::Paragraph { content } => {
                self.open("p");
                self.inlines(content);
                self.close("p");
            }
            Block::RawParagraph { text } => {
                self.open("p");
                self.text(text);
                self.close("p");
            }
            // Closure doesn't matter here: pending fences were resolved by the closure pass.
            Block::CodeBlock { language, raw, .. } => {
                self.out.push_str("<pre><code");
                if let Some(lang) = language {
                    self.out.push_str(" class=\"language-");
                    self.text(lang);
                    self.out.push('"');
                }
                self.out.push('>');
                self.text(raw);
                self.out.push_str("</code></pre>");
            }
            Block::List {
                ordered,
                start,
                items,
            } => {
                let tag = if *ordered { "ol" } else { "ul" };
                match start {
                    Some(n) if *ordered => self.out.push_str(&format!("<ol start=\"{n}\">")),
                    _ => self.open(tag),
                }
                self.out.push('\n');
                for item in items {
                    self.open("li");
                    self.inlines(item);
                    self.close("li");
                    self.out.push('\n');
                }
                self.close(tag);
            }
            Block::Blockquote { blocks } => {
                self.open("blockquote");
                self.out.push('\n');
                self.blocks(blocks);
                self.close("blockquote");
            }
            Block::ThematicBreak => self.out.push_str("<hr />"),
        }
        self.out.push('\n');
    }

    fn inlines(&mut self, nodes: &[Inline]) {
        for node in nodes {
            match node {
                Inline::Text(s) => self.text(s),
                Inline::Bold { content, .. } => {
                    self.open("strong");
                    self.inlines(content);
                    self.close("strong");
                }
                Inline::Italic { content, .. } => {
                    self.open("em");
                    self.inlines(content);
                    self.close("em");
                }
                Inline::InlineCode { raw, .. } => {
                    self.open("code");
                    self.text(raw);
                    self.close("code");
                }
                Inline::LineBreak => self.out.push_str("<br />\n"),
            }
        }
    }

    fn open(&mut self, tag: &str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn close(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn text(&mut self, s: &str) {
        self.out.push_str(&encode_double_quoted_attribute(s));
    }
}

fn heading_tag(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}
