/// ATX heading type with owned delimiter constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    /// Deepest heading level (`######`).
    pub const MAX_LEVEL: u8 = 6;

    /// Parses an ATX heading opener, returning `(level, text)`.
    ///
    /// The marker run must be 1-6 `#` characters followed by a space, a tab
    /// or the end of the line. A bare `#` is an empty level-1 heading so that
    /// a heading being typed never shows its marker.
    pub fn parse(remainder: &str) -> Option<(u8, &str)> {
        let run = remainder
            .bytes()
            .take_while(|&b| b == Self::MARKER)
            .count();
        if run == 0 || run > Self::MAX_LEVEL as usize {
            return None;
        }
        let rest = &remainder[run..];
        if !(rest.is_empty() || rest.starts_with([' ', '\t'])) {
            return None;
        }
        Some((run as u8, rest.trim()))
    }
}
