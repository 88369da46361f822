// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub const DEMO: &str = include_str!("../tests/fixtures/demo.md");

#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n- Another item\n\n> Quoted text\n> > nested\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// Every prefix of `s` on a char boundary, as seen one keystroke at a time.
#[allow(dead_code)]
pub fn keystrokes(s: &str) -> Vec<&str> {
    s.char_indices()
        .map(|(i, c)| &s[..i + c.len_utf8()])
        .collect()
}
