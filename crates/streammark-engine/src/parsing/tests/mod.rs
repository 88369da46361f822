//! End-to-end tests for the parsing pipeline.
//!
//! Exact outputs for the canonical streaming cases, plus invariant checks run
//! over every prefix of a realistic document: each prefix is what the parser
//! sees after one more keystroke.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    MarkdownParser, closure, parse, parse_document,
    snapshot::{check_html, invariants},
};

const DEMO: &str = include_str!("../../../tests/fixtures/demo.md");

/// Every prefix of `s` that ends on a char boundary, including `""` and `s`.
fn prefixes(s: &str) -> impl Iterator<Item = &str> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .map(move |i| &s[..i])
}

fn assert_well_formed(input: &str) {
    let doc = parse_document(input);
    invariants(&doc);
    let html = crate::parsing::html::emit(&doc);
    if let Err(e) = check_html(&html) {
        panic!("malformed html for {input:?}: {e}\n{html}");
    }
}

#[rstest]
#[case::empty("", "")]
#[case::unterminated_bold("**bold", "<p><strong>bold</strong></p>\n")]
#[case::unterminated_fence(
    "```js\ncode",
    "<pre><code class=\"language-js\">code</code></pre>\n"
)]
#[case::code_span_escapes("`<b>`", "<p><code>&lt;b&gt;</code></p>\n")]
#[case::heading("# Title", "<h1>Title</h1>\n")]
#[case::stars_only("****", "<p>****</p>\n")]
#[case::bare_hash("#", "<h1></h1>\n")]
#[case::bare_bullet("-", "<ul>\n<li></li>\n</ul>\n")]
#[case::thematic_break("---", "<hr />\n")]
#[case::hard_break("a  \nb", "<p>a<br />\nb</p>\n")]
#[case::quote("> quote", "<blockquote>\n<p>quote</p>\n</blockquote>\n")]
#[case::list("- a\n- b", "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n")]
#[case::dangling_star("*", "<p>*</p>\n")]
#[case::star_bullet_needs_space("* ", "<ul>\n<li></li>\n</ul>\n")]
#[case::bare_plus("+", "<ul>\n<li></li>\n</ul>\n")]
#[case::half_arrived_crlf("```\ncode\r", "<pre><code>code</code></pre>\n")]
#[case::lone_carriage_return("a\rb", "<p>a\rb</p>\n")]
#[case::triple_star_opener("***b", "<p><strong>*b</strong></p>\n")]
fn streaming_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse(input), expected);
}

#[rstest]
#[case("```")]
#[case("~~~~ rust")]
#[case(">")]
#[case("> > **deep")]
#[case("1.")]
#[case("***")]
#[case("`")]
#[case("**a  \n")]
#[case("  - x\n    continued *it")]
#[case("######## too deep")]
#[case("a & b < c > d \"e\"")]
#[case("\r\n\r\n**x\r\n")]
fn edge_cases_stay_well_formed(#[case] input: &str) {
    assert_well_formed(input);
}

/// Emphasis typed at the start of a line never flashes a bullet list.
#[rstest]
#[case::italic("*it*", &[
    "",
    "<p>*</p>\n",
    "<p><em>i</em></p>\n",
    "<p><em>it</em></p>\n",
    "<p><em>it</em></p>\n",
])]
#[case::bold("**b**", &[
    "",
    "<p>*</p>\n",
    "<p>**</p>\n",
    "<p><strong>b</strong></p>\n",
    "<p><strong>b</strong></p>\n",
    "<p><strong>b</strong></p>\n",
])]
fn emphasis_at_line_start_while_typing(#[case] input: &str, #[case] expected: &[&str]) {
    let rendered: Vec<String> = prefixes(input).map(parse).collect();
    assert_eq!(rendered, expected);
}

#[test]
fn every_prefix_of_demo_is_well_formed() {
    for prefix in prefixes(DEMO) {
        assert_well_formed(prefix);
    }
}

#[test]
fn no_prefix_leaves_pending_constructs() {
    for prefix in prefixes(DEMO) {
        let doc = parse_document(prefix);
        assert_eq!(closure::pending_count(doc.blocks()), 0, "{prefix:?}");
    }
}

#[test]
fn reused_parser_matches_fresh_parse() {
    let parser = MarkdownParser::new();
    for prefix in prefixes(DEMO) {
        assert_eq!(parser.parse(prefix), parse(prefix));
    }
}

#[test]
fn output_does_not_depend_on_previous_input() {
    let parser = MarkdownParser::default();
    let fresh = parser.parse("**bold");
    parser.parse("```js\nopen fence");
    parser.parse("> `unclosed");
    assert_eq!(parser.parse("**bold"), fresh);
}

#[test]
fn fence_closes_once_delimiter_arrives() {
    let open = parse_document("```js\ncode\n``");
    let closed = parse_document("```js\ncode\n```");
    assert_eq!(
        parse("```js\ncode\n``"),
        "<pre><code class=\"language-js\">code\n``</code></pre>\n"
    );
    assert_eq!(
        parse("```js\ncode\n```"),
        "<pre><code class=\"language-js\">code</code></pre>\n"
    );
    assert!(matches!(
        open.blocks()[0],
        crate::parsing::blocks::Block::CodeBlock {
            closure: closure::Closure::Synthesized,
            ..
        }
    ));
    assert!(matches!(
        closed.blocks()[0],
        crate::parsing::blocks::Block::CodeBlock {
            closure: closure::Closure::Explicit,
            ..
        }
    ));
}

#[test]
fn demo_renders_completely() {
    insta::assert_snapshot!(parse(DEMO), @r#"
<h1>Streaming Parser Demo</h1>
<p>Welcome to the <strong>future</strong> of text processing. This parser handles streams optimistically.</p>
<p>Here is inline code: <code>console.log('Hello World')</code></p>
<p>And a code block that might be incomplete during streaming:</p>
<pre><code class="language-javascript">function simulateStream() {
  return new Promise(resolve =&gt; {
    setTimeout(resolve, 50);
  });
}</code></pre>
<h2>Features</h2>
<ul>
<li>Optimistic closing of tags</li>
<li>Real-time rendering</li>
<li>Fast and lightweight</li>
</ul>
<p>Try typing in the left pane!</p>
"#);
}
