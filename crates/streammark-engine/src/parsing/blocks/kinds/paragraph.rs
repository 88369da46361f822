use std::sync::OnceLock;

use regex::Regex;

/// Paragraph block type.
///
/// Paragraphs have no delimiters: they are the default block when no other
/// opener matches.
pub struct Paragraph;

impl Paragraph {
    /// Characters that only ever appear as block or span markers.
    pub const MARKER_CHARS: [char; 8] = ['#', '-', '+', '*', '_', '~', '`', '='];

    /// Whether the paragraph text is nothing but marker characters that failed
    /// their structural requirement (`##`, `--`, `**`, `#######`, `1.`).
    ///
    /// Such text is rendered verbatim instead of being inline-processed.
    pub fn is_marker_only(text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        static ORDINAL_REGEX: OnceLock<Regex> = OnceLock::new();
        let ordinal =
            ORDINAL_REGEX.get_or_init(|| Regex::new(r"^[0-9]+\.$").expect("Invalid ordinal regex"));
        ordinal.is_match(trimmed)
            || trimmed
                .chars()
                .all(|c| c.is_whitespace() || Self::MARKER_CHARS.contains(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_runs() {
        assert!(Paragraph::is_marker_only("##"));
        assert!(Paragraph::is_marker_only("--"));
        assert!(Paragraph::is_marker_only("****"));
        assert!(Paragraph::is_marker_only("``"));
        assert!(Paragraph::is_marker_only("#######"));
        assert!(Paragraph::is_marker_only("1234567890."));
    }

    #[test]
    fn real_text() {
        assert!(!Paragraph::is_marker_only("#hashtag"));
        assert!(!Paragraph::is_marker_only("**bold"));
        assert!(!Paragraph::is_marker_only("2024"));
        assert!(!Paragraph::is_marker_only(""));
        assert!(!Paragraph::is_marker_only("  "));
    }
}
