/// Thematic break (`---`, `___`).
///
/// `*` runs are not breaks. They belong to emphasis, and `****` stays
/// literal paragraph text.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 2] = ['-', '_'];
    pub const MIN_LEN: usize = 3;

    /// Whether the line is solely a run of one break character (spaces allowed between).
    pub fn matches(remainder: &str) -> bool {
        let mut marks = remainder.chars().filter(|c| !matches!(c, ' ' | '\t'));
        let Some(first) = marks.next() else {
            return false;
        };
        if !Self::CHARS.contains(&first) {
            return false;
        }
        let mut count = 1;
        for c in marks {
            if c != first {
                return false;
            }
            count += 1;
        }
        count >= Self::MIN_LEN
    }
}
