//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a parsed document as a stable, indented outline
//!   for `insta` snapshot testing and for the CLI's `--tree` output
//! - **`invariants`**: checks for parser correctness (nothing left pending,
//!   no empty spans, spans never nest, emitted HTML is balanced and escaped)
//!
//! ## Testing Strategy
//!
//! Every prefix of a document must render to well-formed HTML, so the
//! invariant checks are run over whole families of prefixes rather than
//! hand-picked inputs.

pub mod invariants;
pub mod normalize;

pub use invariants::{check as invariants, check_html};
pub use normalize::normalize;
