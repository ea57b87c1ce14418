//! Formatting utilities for terminal output

/// Format a remaining-time value as m:ss
///
/// # Examples
/// ```
/// use twistcore::output::formatters::format_seconds;
///
/// assert_eq!(format_seconds(120), "2:00");
/// assert_eq!(format_seconds(65), "1:05");
/// assert_eq!(format_seconds(0), "0:00");
/// ```
#[must_use]
pub fn format_seconds(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Space-separated uppercase letters for the puzzle rack display
#[must_use]
pub fn letter_rack(letters: &[char]) -> String {
    let mut rack = String::with_capacity(letters.len() * 2);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            rack.push(' ');
        }
        rack.extend(letter.to_uppercase());
    }
    rack
}
