//! Date normalization for user-supplied date arguments
//!
//! Resolves the tokens `today` and `tomorrow` (case-insensitive,
//! whitespace-trimmed) against the host's local date, and validates explicit
//! dates in canonical `YYYY-MM-DD` form.

use crate::error::TodoError;
use crate::task::local_date_today;
use chrono::{Days, NaiveDate};

/// Canonical calendar date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve a date token to a canonical calendar date
///
/// # Arguments
/// * `token` - `"today"`, `"tomorrow"`, or an explicit `YYYY-MM-DD` date
///
/// # Returns
/// The resolved date, or `TodoError::InvalidDate` carrying the offending
/// input
pub fn normalize(token: &str) -> Result<NaiveDate, TodoError> {
    let token = token.trim();
    match token.to_ascii_lowercase().as_str() {
        "today" => Ok(local_date_today()),
        "tomorrow" => local_date_today()
            .checked_add_days(Days::new(1))
            .ok_or_else(|| TodoError::InvalidDate(token.to_string())),
        explicit => NaiveDate::parse_from_str(explicit, DATE_FORMAT)
            .map_err(|_| TodoError::InvalidDate(token.to_string())),
    }
}

/// Parse a signed minute offset for reschedule
pub fn parse_minutes(raw: &str) -> Result<i64, TodoError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| TodoError::InvalidMinutes(raw.trim().to_string()))
}
