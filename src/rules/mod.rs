//! Password validation rules
//!
//! Each rule checks one requirement of the signup password policy.

mod length;
mod variety;
mod whitespace;

pub use length::{max_length_rule, min_length_rule, MAX_LENGTH, MIN_LENGTH};
pub use variety::{digit_rule, lowercase_rule, uppercase_rule};
pub use whitespace::whitespace_rule;

/// Result type for rule functions.
/// - `Some(message)` - Rule violated, with the message shown to the user
/// - `None` - Rule satisfied
pub type RuleResult = Option<&'static str>;

/// A named rule, as run by the validator.
pub type Rule = (&'static str, fn(&str) -> RuleResult);

/// All rules, in the order their messages are reported.
pub const RULES: [Rule; 6] = [
    ("min_length", min_length_rule),
    ("max_length", max_length_rule),
    ("whitespace", whitespace_rule),
    ("digit", digit_rule),
    ("uppercase", uppercase_rule),
    ("lowercase", lowercase_rule),
];
