//! Whitespace rule.

use super::RuleResult;

/// Rejects passwords containing whitespace or a line terminator.
pub fn whitespace_rule(password: &str) -> RuleResult {
    if password.chars().any(is_space) {
        return Some("Password cannot contain spaces");
    }
    None
}

/// Space characters as the browser form's `\s` matches them.
///
/// U+FEFF counts; U+0085 does not.
fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
