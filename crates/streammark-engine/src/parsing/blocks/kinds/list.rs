use std::sync::OnceLock;

use regex::Regex;

/// The marker that opened a list item.
///
/// Two items belong to the same list only when their markers are equal, so
/// switching from `-` to `*`, or from bullets to numbers, starts a new list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet(char),
    Ordered,
}

impl ListMarker {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListMarker::Ordered)
    }
}

/// A list item opener found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemStart<'a> {
    pub marker: ListMarker,
    /// The ordinal of an ordered item.
    pub number: Option<u64>,
    /// Item text after the marker.
    pub text: &'a str,
}

pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    /// The bullet that needs a following space to open an item.
    pub const EMPHASIS_BULLET: char = '*';

    /// Detects a bullet (`- `, `* `, `+ `) or ordered (`1. `) item opener.
    ///
    /// A marker at the end of the line opens an empty item, except `*`: a
    /// bare star is the start of emphasis being typed, not a bullet.
    pub fn parse(remainder: &str) -> Option<ListItemStart<'_>> {
        if let Some(first) = remainder.chars().next()
            && Self::BULLETS.contains(&first)
        {
            let rest = &remainder[first.len_utf8()..];
            let bare_ok = first != Self::EMPHASIS_BULLET;
            if (rest.is_empty() && bare_ok) || rest.starts_with([' ', '\t']) {
                return Some(ListItemStart {
                    marker: ListMarker::Bullet(first),
                    number: None,
                    text: rest.trim_start(),
                });
            }
            return None;
        }

        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        let ordered = ORDERED_REGEX.get_or_init(|| {
            Regex::new(r"^([0-9]{1,9})\.(?:[ \t]|$)").expect("Invalid ordered list regex")
        });
        let caps = ordered.captures(remainder)?;
        let number = caps[1].parse().ok();
        let end = caps.get(0).map_or(remainder.len(), |m| m.end());
        Some(ListItemStart {
            marker: ListMarker::Ordered,
            number,
            text: remainder[end..].trim_start(),
        })
    }
}
