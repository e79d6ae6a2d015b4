//! Character variety rules - checks for numbers, uppercase and lowercase letters.
//!
//! Only ASCII digits and letters count towards these rules.

use super::RuleResult;

pub fn digit_rule(password: &str) -> RuleResult {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number");
    }
    None
}

pub fn uppercase_rule(password: &str) -> RuleResult {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter");
    }
    None
}

pub fn lowercase_rule(password: &str) -> RuleResult {
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter");
    }
    None
}
