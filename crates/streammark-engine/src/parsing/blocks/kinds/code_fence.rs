#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn byte(self) -> u8 {
        match self {
            FenceKind::Backticks => b'`',
            FenceKind::Tildes => b'~',
        }
    }
}

/// What a fence line looks like: its character, run length and info string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    pub kind: FenceKind,
    pub len: usize,
    /// Everything after the marker run, trimmed.
    pub info: &'a str,
}

impl<'a> FenceSig<'a> {
    /// The language token: the first word of the info string.
    pub fn language(&self) -> Option<&'a str> {
        self.info.split_whitespace().next()
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;

    /// Detects a fence marker at the start of `remainder` (indentation already stripped).
    pub fn sig(remainder: &str) -> Option<FenceSig<'_>> {
        let kind = match remainder.as_bytes().first()? {
            b'`' => FenceKind::Backticks,
            b'~' => FenceKind::Tildes,
            _ => return None,
        };
        let len = remainder
            .bytes()
            .take_while(|&b| b == kind.byte())
            .count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = remainder[len..].trim();
        // A backtick in the info string means this is inline code, not a fence.
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceSig { kind, len, info })
    }

    /// Whether `remainder` closes a fence opened with `open`.
    ///
    /// The closer must use the same character, be at least as long as the
    /// opener and carry nothing but whitespace after the marker run.
    pub fn closes(open: &FenceSig<'_>, remainder: &str) -> bool {
        match Self::sig(remainder) {
            Some(close) => {
                close.kind == open.kind && close.len >= open.len && close.info.is_empty()
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        let sig = CodeFence::sig("```rust").unwrap();
        assert_eq!(sig.kind, FenceKind::Backticks);
        assert_eq!(sig.len, 3);
        assert_eq!(sig.language(), Some("rust"));
    }

    #[test]
    fn detect_tilde_fence() {
        let sig = CodeFence::sig("~~~~").unwrap();
        assert_eq!(sig.kind, FenceKind::Tildes);
        assert_eq!(sig.len, 4);
        assert_eq!(sig.language(), None);
    }

    #[test]
    fn language_is_first_word_of_info() {
        let sig = CodeFence::sig("```  js   linenos ").unwrap();
        assert_eq!(sig.language(), Some("js"));
    }

    #[test]
    fn too_short_is_not_a_fence() {
        assert_eq!(CodeFence::sig("``"), None);
        assert_eq!(CodeFence::sig("~~"), None);
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig(""), None);
    }

    #[test]
    fn backtick_in_info_is_not_a_fence() {
        assert_eq!(CodeFence::sig("``` `x`"), None);
        assert!(CodeFence::sig("~~~ `x`").is_some());
    }

    #[test]
    fn closes_matching_fence() {
        let open = CodeFence::sig("```js").unwrap();
        assert!(CodeFence::closes(&open, "```"));
        assert!(CodeFence::closes(&open, "`````  "));
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        let open = CodeFence::sig("````").unwrap();
        assert!(!CodeFence::closes(&open, "~~~~"));
        assert!(!CodeFence::closes(&open, "```"));
        assert!(!CodeFence::closes(&open, "````js"));
        assert!(!CodeFence::closes(&open, "code"));
    }
}
