//! Password validator - runs every rule and collects violation messages.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::rules::RULES;

/// Delay before a live validation run, so fast typing only validates once.
pub const LIVE_VALIDATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Validates a password against the signup policy.
///
/// Every rule is evaluated; a failing rule never stops the others.
///
/// # Returns
/// The violation messages in rule order. Empty when the password is acceptable.
pub fn validate_password(password: &SecretString) -> Vec<String> {
    let pwd = password.expose_secret();
    let mut messages = Vec::new();

    for (_rule_name, rule_fn) in RULES {
        if let Some(message) = rule_fn(pwd) {
            #[cfg(feature = "tracing")]
            tracing::trace!("password rule failed: {}", _rule_name);
            messages.push(message.to_string());
        }
    }

    messages
}

/// Returns `true` if the password satisfies every rule.
pub fn is_password_valid(password: &SecretString) -> bool {
    let pwd = password.expose_secret();
    RULES.iter().all(|(_, rule_fn)| rule_fn(pwd).is_none())
}

/// Debounced validation for live feedback, sending the messages via channel.
///
/// Nothing is sent if `token` is cancelled before the debounce elapses,
/// which is how a newer keystroke supersedes this run.
pub async fn validate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Vec<String>>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("live validation superseded");
            return;
        }
        _ = tokio::time::sleep(LIVE_VALIDATION_DEBOUNCE) => {}
    }

    let messages = validate_password(password);

    if let Err(_e) = tx.send(messages).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", _e);
    }
}
