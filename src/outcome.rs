//! Signup outcome - maps the server's response onto what the user is told.

use serde::Deserialize;

pub const PASSWORD_REJECTED_MESSAGE: &str =
    "Sorry, the entered password is not allowed, please try a different one.";
pub const NOT_AUTHENTICATED_MESSAGE: &str = "Not authenticated to access this resource.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, please try again.";

/// Result of a signup request once it has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// The user was created.
    Created,
    /// The server refused the password.
    PasswordRejected,
    /// The bearer credential was refused (401 or 403).
    NotAuthenticated,
    /// Any other failure, including transport errors.
    Failed,
}

impl SignupOutcome {
    /// Message to display for this outcome, `None` on success.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SignupOutcome::Created => None,
            SignupOutcome::PasswordRejected => Some(PASSWORD_REJECTED_MESSAGE),
            SignupOutcome::NotAuthenticated => Some(NOT_AUTHENTICATED_MESSAGE),
            SignupOutcome::Failed => Some(GENERIC_FAILURE_MESSAGE),
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, SignupOutcome::Created)
    }
}

/// Status and raw body of a signup response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupResponse {
    pub status: u16,
    pub body: String,
}

impl SignupResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Classifies the response. The first matching case wins:
    ///
    /// - 2xx: created
    /// - 400 whose `detail` mentions "not allowed": password rejected
    /// - 401, 403: not authenticated
    /// - anything else, including a 400 with an unreadable body: failed
    pub fn outcome(&self) -> SignupOutcome {
        match self.status {
            200..=299 => SignupOutcome::Created,
            400 if detail_disallows_password(&self.body) => SignupOutcome::PasswordRejected,
            401 | 403 => SignupOutcome::NotAuthenticated,
            _ => SignupOutcome::Failed,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

fn detail_disallows_password(body: &str) -> bool {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(serde_json::Value::String(detail)),
        }) => detail.contains("not allowed"),
        Ok(_) => false,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Unreadable signup error body: {}", _e);
            false
        }
    }
}
