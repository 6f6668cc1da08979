//! Calendar-date helpers.
//!
//! Dates are stored as normalized `YYYY-MM-DD` strings, so lexicographic
//! order equals chronological order and date strings can be compared and
//! grouped directly.

use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalize a date string to `YYYY-MM-DD`.
///
/// Accepts a bare calendar date or an RFC 3339 date-time (whose date part is
/// taken). Returns `None` when the input parses as neither; callers decide
/// whether that is `InvalidInput` (user-supplied) or `InvalidRecord` (read
/// back from the store).
pub fn normalize(input: &str) -> Option<String> {
    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Some(date.format(DATE_FORMAT).to_string());
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive().format(DATE_FORMAT).to_string());
    }
    None
}
