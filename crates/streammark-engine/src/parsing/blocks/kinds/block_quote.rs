/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Nesting depth beyond which `>` is treated as plain text.
    pub const MAX_DEPTH: usize = 32;

    /// Strips one blockquote level from a line, returning the byte offset
    /// where the quoted content begins.
    ///
    /// One space after the `>` belongs to the marker. Deeper levels (`>>`,
    /// `> >`) are left in place for the nested classification pass.
    pub fn strip_prefix(remainder: &str) -> Option<usize> {
        let rest = remainder.strip_prefix(Self::PREFIX)?;
        let consumed = Self::PREFIX.len_utf8();
        if rest.starts_with(' ') {
            Some(consumed + 1)
        } else {
            Some(consumed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some(2));
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), Some(1));
    }

    #[test]
    fn strip_leaves_nested_marker() {
        let line = ">> hello";
        let idx = BlockQuote::strip_prefix(line).unwrap();
        assert_eq!(&line[idx..], "> hello");
    }

    #[test]
    fn strip_bare_marker() {
        assert_eq!(BlockQuote::strip_prefix(">"), Some(1));
    }
}
