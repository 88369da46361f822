/// Document streamed by the simulation when no `sample_path` is configured.
pub const SAMPLE_MARKDOWN: &str = r#"# Streaming Parser Demo

Welcome to the **future** of text processing. This parser handles streams optimistically.

Here is inline code: `console.log('Hello World')`

And a code block that might be incomplete during streaming:

```javascript
function simulateStream() {
  return new Promise(resolve => {
    setTimeout(resolve, 50);
  });
}
```

## Features
- Optimistic closing of tags
- Real-time rendering
- Fast and lightweight

Try typing in the left pane!
"#;
