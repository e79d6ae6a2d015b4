//! User signup form library
//!
//! This library provides the logic behind a create-user form: live
//! password validation and submission to a signup endpoint.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `SIGNUP_API_URL`: Signup endpoint (default: the challenge signup API)
//! - `SIGNUP_API_TOKEN` or `SIGNUP_API_TOKEN_FILE`: Bearer credential
//! - `SIGNUP_TIMEOUT_SECS`: Request timeout (default: 30)
//!
//! # Example
//!
//! ```rust,no_run
//! use signup_form::{CreateUserForm, HttpSignupClient, SignupConfig, SubmitResult};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpSignupClient::new(SignupConfig::from_env()?)?;
//! let mut form = CreateUserForm::new(client, |created| println!("created: {created}"));
//!
//! form.set_username("alice");
//! form.set_password("ValidPass123");
//! for message in form.validation_messages() {
//!     println!("{message}");
//! }
//!
//! if let SubmitResult::Completed(_) = form.submit(None).await {
//!     if let Some(error) = form.error_message() {
//!         println!("{error}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Internal modules
mod client;
mod config;
mod form;
mod outcome;
mod rules;
mod validator;

// Public API
pub use client::{HttpSignupClient, SignupClient, SignupError};
pub use config::{read_token_file, ConfigError, SignupConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use form::{CreateUserForm, SubmitResult, UserCreatedCallback};
pub use outcome::{
    SignupOutcome, SignupResponse, GENERIC_FAILURE_MESSAGE, NOT_AUTHENTICATED_MESSAGE,
    PASSWORD_REJECTED_MESSAGE,
};
pub use rules::{MAX_LENGTH, MIN_LENGTH};
pub use validator::{
    is_password_valid, validate_password, validate_password_tx, LIVE_VALIDATION_DEBOUNCE,
};

// Re-export for callers building passwords and cancellation tokens
pub use secrecy::SecretString;
pub use tokio_util::sync::CancellationToken;
