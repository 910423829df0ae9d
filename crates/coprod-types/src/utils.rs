//! Small helpers shared by kernel consumers.

use std::fmt::Display;

/// Text used for an absent value by [`safe_to_string`].
pub const NULL_TEXT: &str = "null";

/// `Display` of a possibly absent value; absence renders as `"null"`.
pub fn safe_to_string<T: Display + ?Sized>(value: Option<&T>) -> String {
    safe_to_string_or(value, NULL_TEXT)
}

/// `Display` of a possibly absent value, with a caller chosen text for absence.
pub fn safe_to_string_or<T: Display + ?Sized>(value: Option<&T>, null_text: &str) -> String {
    match value {
        Some(v) => v.to_string(),
        None => null_text.to_string(),
    }
}
