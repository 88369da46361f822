/// A cursor for byte-by-byte inline parsing with position tracking.
///
/// Delimiters are all ASCII, so any position the parser stops at to split
/// text is a char boundary even though the cursor advances by bytes.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Whether the current byte is whitespace (false at end of string).
    pub fn at_whitespace(&self) -> bool {
        self.peek().is_some_and(|b| b.is_ascii_whitespace())
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves to an absolute position, clamped to the end of the string.
    pub fn seek(&mut self, pos: usize) {
        self.i = pos.min(self.s.len());
    }

    /// Position of the next occurrence of `pat` at or after the cursor.
    pub fn find(&self, pat: &[u8]) -> Option<usize> {
        if pat.is_empty() {
            return Some(self.i);
        }
        let rest = self.s.as_bytes().get(self.i..)?;
        rest.windows(pat.len())
            .position(|w| w == pat)
            .map(|off| self.i + off)
    }

    /// Length of the run of `b` starting at the cursor.
    pub fn run_len(&self, b: u8) -> usize {
        self.s
            .as_bytes()
            .get(self.i..)
            .map_or(0, |rest| rest.iter().take_while(|&&x| x == b).count())
    }

    /// The text between two positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.s.get(start..end).unwrap_or("")
    }

    /// The text from the cursor to the end.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }
}
