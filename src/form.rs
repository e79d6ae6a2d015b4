//! Create-user form - holds the form state and drives a signup submission.

use secrecy::SecretString;
use std::fmt;
use tokio_util::sync::CancellationToken;

use crate::client::SignupClient;
use crate::outcome::{SignupOutcome, GENERIC_FAILURE_MESSAGE};
use crate::validator::validate_password;

/// Called with `true` once the user has been created.
pub type UserCreatedCallback = Box<dyn FnMut(bool) + Send>;

/// What a call to [`CreateUserForm::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Missing username or invalid password; no request was sent.
    Invalid,
    /// The token was cancelled before the request resolved.
    Cancelled,
    /// The request resolved.
    Completed(SignupOutcome),
}

/// Signup form state and its submission controller.
///
/// A UI layer forwards input events to [`set_username`](Self::set_username)
/// and [`set_password`](Self::set_password), calls [`submit`](Self::submit),
/// and renders from the accessors.
pub struct CreateUserForm<C> {
    client: C,
    on_created: UserCreatedCallback,
    username: String,
    password: SecretString,
    error_message: Option<&'static str>,
    validation_messages: Vec<String>,
    is_submitting: bool,
}

impl<C: SignupClient> CreateUserForm<C> {
    pub fn new(client: C, on_created: impl FnMut(bool) + Send + 'static) -> Self {
        Self {
            client,
            on_created: Box::new(on_created),
            username: String::new(),
            password: SecretString::new(String::new().into()),
            error_message: None,
            validation_messages: Vec::new(),
            is_submitting: false,
        }
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Stores the password and refreshes the live validation messages.
    ///
    /// Clears any error left by a previous submission.
    pub fn set_password(&mut self, password: impl Into<String>) {
        let password: String = password.into();
        self.password = SecretString::new(password.into());
        self.validation_messages = validate_password(&self.password);
        self.error_message = None;
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn validation_messages(&self) -> &[String] {
        &self.validation_messages
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error_message
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting
    }

    /// Validates the form and, if it passes, sends the signup request.
    ///
    /// # Arguments
    /// * `token` - Optional cancellation token; cancel it when the form's
    ///   owner goes away so a late response is discarded
    ///
    /// # Returns
    /// A [`SubmitResult`]. Request failures are never returned as errors:
    /// they become the form's error message.
    pub async fn submit(&mut self, token: Option<CancellationToken>) -> SubmitResult {
        self.error_message = None;
        let _submitting = SubmittingGuard::new(&mut self.is_submitting);

        self.validation_messages = validate_password(&self.password);
        if self.username.is_empty() || !self.validation_messages.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Submit blocked: username empty={} violations={}",
                self.username.is_empty(),
                self.validation_messages.len()
            );
            return SubmitResult::Invalid;
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Submitting signup for {}", self.username);

        let request = self.client.post_signup(&self.username, &self.password);
        let response = match token {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => None,
                response = request => Some(response),
            },
            None => Some(request.await),
        };

        let Some(response) = response else {
            #[cfg(feature = "tracing")]
            tracing::info!("Signup for {} cancelled", self.username);
            return SubmitResult::Cancelled;
        };

        let outcome = match response {
            Ok(response) => response.outcome(),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Signup request failed: {}", _e);
                SignupOutcome::Failed
            }
        };

        #[cfg(feature = "tracing")]
        tracing::info!("Signup for {} finished: {:?}", self.username, outcome);

        if outcome.is_created() {
            (self.on_created)(true);
        } else {
            self.error_message = Some(outcome.message().unwrap_or(GENERIC_FAILURE_MESSAGE));
        }

        SubmitResult::Completed(outcome)
    }
}

/// Holds the in-flight flag up while a submission runs.
///
/// Dropping the guard lowers the flag, including when the `submit` future
/// itself is dropped mid-request.
struct SubmittingGuard<'a>(&'a mut bool);

impl<'a> SubmittingGuard<'a> {
    fn new(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl<C> fmt::Debug for CreateUserForm<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserForm")
            .field("username", &self.username)
            .field("password", &self.password)
            .field("error_message", &self.error_message)
            .field("validation_messages", &self.validation_messages)
            .field("is_submitting", &self.is_submitting)
            .finish_non_exhaustive()
    }
}
