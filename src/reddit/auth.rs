// SPDX-License-Identifier: Apache-2.0

//! Authentication for the Reddit API.
//!
//! Reddit's public API requires OAuth2. This module holds the client
//! credentials for a registered "script" application and exchanges them
//! for a short-lived bearer token via the client-credentials grant.

use crate::http::{HTTPError, HTTPService};
use log::debug;
use serde::Deserialize;
use std::env;
use thiserror::Error;

/// Environment variable holding the Reddit application id.
pub const CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";

/// Environment variable holding the Reddit application secret.
pub const CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";

/// Environment variable holding the user agent sent with every request.
pub const USER_AGENT_VAR: &str = "REDDIT_USER_AGENT";

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Client credentials for a registered Reddit application.
#[derive(Clone, Debug)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    user_agent: String,
}

impl Credentials {
    /// Creates credentials from the given id, secret, and user agent.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Retrieves credentials from the environment.
    ///
    /// Reads [`CLIENT_ID_VAR`], [`CLIENT_SECRET_VAR`], and
    /// [`USER_AGENT_VAR`]. Returns an error naming the first variable that
    /// cannot be retrieved.
    pub fn from_env() -> Result<Self, AuthError> {
        let client_id = Self::var(CLIENT_ID_VAR)?;
        let client_secret = Self::var(CLIENT_SECRET_VAR)?;
        let user_agent = Self::var(USER_AGENT_VAR)?;
        Ok(Self::new(client_id, client_secret, user_agent))
    }

    fn var(name: &'static str) -> Result<String, AuthError> {
        env::var(name).map_err(|err| AuthError::Env(name, err))
    }

    /// Exchanges the credentials for a bearer token.
    ///
    /// Performs a single POST against Reddit's token endpoint using the
    /// client-credentials grant. Returns an error on any non-success
    /// response; there are no retries.
    pub async fn authenticate(&self) -> Result<BearerToken, AuthError> {
        debug!("requesting bearer token from {TOKEN_URL}");
        let resp = self
            .client()
            .post(TOKEN_URL)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(HTTPError::Request)?;

        if !resp.status().is_success() {
            return Err(AuthError::Http(HTTPError::Http(resp.status())));
        }

        let token: TokenResponse = resp.json().await.map_err(HTTPError::Body)?;
        Ok(BearerToken::new(token.access_token))
    }

    /// The user agent registered with these credentials.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl HTTPService for Credentials {
    /// Reddit wants the application's registered user agent, not the
    /// crate default.
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }
}

/// A short-lived credential presented on each API request after
/// authentication.
#[derive(Clone, Debug)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    /// Creates a new bearer token wrapping the given token string.
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        Self { token }
    }

    /// The actual token string.
    ///
    /// # Examples
    ///
    /// ```
    /// use subtally::reddit::auth::BearerToken;
    /// let token = BearerToken::new("ThisIsMyToken");
    /// assert_eq!(token.token(), "ThisIsMyToken");
    /// ```
    pub fn token(&self) -> &str {
        &self.token
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Indicates an error while building credentials or exchanging them for a
/// bearer token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An error occurred while retrieving a credential from the environment.
    #[error("Environment error: {0} ({1})")]
    Env(&'static str, #[source] env::VarError),

    /// The token exchange failed.
    #[error("Token exchange failed: {0}")]
    Http(#[from] HTTPError),
}
