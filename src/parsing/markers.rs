//! Invisible marker characters found in WhatsApp text exports.
//!
//! iOS exports sprinkle formatting characters through every line: a narrow
//! no-break space between the time and `AM`/`PM`, and left-to-right marks
//! before the opening bracket, after the closing one, and in front of media
//! placeholders. They are rewritten to ordinary spaces before any field is
//! extracted.

use std::borrow::Cow;

/// U+200E LEFT-TO-RIGHT MARK.
pub const LEFT_TO_RIGHT_MARK: char = '\u{200E}';

/// U+202F NARROW NO-BREAK SPACE.
pub const NARROW_NO_BREAK_SPACE: char = '\u{202F}';

/// U+FEFF BYTE ORDER MARK, seen at the very start of some exports.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Marker characters that are rewritten to a plain space.
const SPACE_LIKE: [char; 2] = [LEFT_TO_RIGHT_MARK, NARROW_NO_BREAK_SPACE];

/// Marker characters allowed in front of the `[` start marker.
const LEADING: [char; 3] = [LEFT_TO_RIGHT_MARK, NARROW_NO_BREAK_SPACE, BYTE_ORDER_MARK];

/// Replaces every left-to-right mark and narrow no-break space with `' '`.
///
/// Borrows the input when there is nothing to replace.
///
/// ```
/// use chatstats::parsing::markers::normalize_markers;
///
/// assert_eq!(normalize_markers("9:15:03\u{202F}AM"), "9:15:03 AM");
/// assert_eq!(normalize_markers("plain"), "plain");
/// ```
pub fn normalize_markers(text: &str) -> Cow<'_, str> {
    if text.contains(&SPACE_LIKE[..]) {
        Cow::Owned(text.replace(&SPACE_LIKE[..], " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Drops invisible markers in front of the first visible character.
pub fn strip_leading_markers(line: &str) -> &str {
    line.trim_start_matches(&LEADING[..])
}

/// Returns `true` if `line` begins a new message.
///
/// A message start has at least two characters and, once leading markers
/// are stripped, begins with `[`. Everything else is a continuation line.
///
/// ```
/// use chatstats::parsing::markers::is_message_start;
///
/// assert!(is_message_start("[7/2/24, 9:15:03 AM] Alice: Hi"));
/// assert!(is_message_start("\u{200E}[7/2/24, 9:15:03 AM] Alice: Hi"));
/// assert!(!is_message_start("second line of a message"));
/// assert!(!is_message_start("["));
/// ```
pub fn is_message_start(line: &str) -> bool {
    line.chars().nth(1).is_some() && strip_leading_markers(line).starts_with('[')
}
