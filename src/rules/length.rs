//! Length rules - password must be between 10 and 24 characters.

use super::RuleResult;

pub const MIN_LENGTH: usize = 10;
pub const MAX_LENGTH: usize = 24;

/// Length as the browser form counts it: UTF-16 code units, so a
/// character outside the BMP counts twice.
pub fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Checks the password is not shorter than [`MIN_LENGTH`].
pub fn min_length_rule(password: &str) -> RuleResult {
    if password_length(password) < MIN_LENGTH {
        return Some("Password must be at least 10 characters long");
    }
    None
}

/// Checks the password is not longer than [`MAX_LENGTH`].
pub fn max_length_rule(password: &str) -> RuleResult {
    if password_length(password) > MAX_LENGTH {
        return Some("Password must be at most 24 characters long");
    }
    None
}
