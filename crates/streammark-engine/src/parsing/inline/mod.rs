//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones and optimistic closing.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible blocks (paragraphs, headings, list items). Code block
//! content never reaches it.
//!
//! The parser scans left to right; at an opener it searches forward for the
//! nearest closer of the same kind:
//! - Code spans suppress all other inline parsing inside them
//! - Bold and italic do not nest: other markers inside them are literal
//! - An opener without a closer wraps the rest of the text and is left
//!   `Closure::Pending` for the closure pass
//!
//! ## Modules
//!
//! - **`types`**: `Inline` enum (Text, Bold, Italic, InlineCode, LineBreak)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Emphasis)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `process()` main entry point with `scan_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence when they open first: `` `**not bold**` ``
//! parses as a single InlineCode, not as text containing Bold.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{process, text_runs};
pub use types::Inline;
