/// Emphasis delimiters. Only `*` is recognised; `_` is plain text.
pub struct Emphasis;

impl Emphasis {
    /// The emphasis marker character.
    pub const STAR: u8 = b'*';
    /// Opens and closes a bold span.
    pub const BOLD: &'static [u8] = b"**";
    /// Opens and closes an italic span.
    pub const ITALIC: &'static [u8] = b"*";
}
