//! Signup client - sends the credentials to the signup endpoint.

use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::future::Future;
use thiserror::Error;

use crate::config::SignupConfig;
use crate::outcome::SignupResponse;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Signup request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Issues signup requests.
///
/// Any HTTP response, whatever its status, is `Ok`. `Err` is reserved for
/// requests that never produced a readable response.
pub trait SignupClient {
    fn post_signup(
        &self,
        username: &str,
        password: &SecretString,
    ) -> impl Future<Output = Result<SignupResponse, SignupError>> + Send;
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// [`SignupClient`] that POSTs JSON to the configured endpoint with a bearer token.
pub struct HttpSignupClient {
    http_client: HttpClient,
    config: SignupConfig,
}

impl HttpSignupClient {
    pub fn new(config: SignupConfig) -> Result<Self, SignupError> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SignupError::ClientBuild)?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &SignupConfig {
        &self.config
    }
}

impl SignupClient for HttpSignupClient {
    async fn post_signup(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<SignupResponse, SignupError> {
        let request = SignupRequest {
            username,
            password: password.expose_secret(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("POST {} for user {}", self.config.endpoint, username);

        let response = self
            .http_client
            .post(self.config.endpoint.clone())
            .bearer_auth(self.config.bearer_token.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Signup endpoint answered {}", status);

        Ok(SignupResponse { status, body })
    }
}
