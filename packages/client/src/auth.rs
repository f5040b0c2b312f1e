//! Login and logout against the authentication endpoint
//!
//! Login is the one call that bypasses the gateway: no token exists yet, so
//! the request goes out unauthenticated. A successful envelope with a token
//! initializes the session; anything else leaves the session untouched.

use std::time::Duration;

use reqwest::Client;

use crate::api::{Envelope, LoginRequest, LoginSession};
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;

const LOGIN_PATH: &str = "/Authentication/login";

/// Generic connectivity failure message surfaced for transport errors
pub const CONNECTIVITY_MESSAGE: &str = "Error connecting to server";

/// Client for the unauthenticated login endpoint
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl AuthClient {
    /// Create an auth client bound to the given session context
    pub fn new(base_url: impl Into<String>, timeout: Duration, session: SessionStore) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Exchange credentials for a session token
    ///
    /// On `success == true` with a token present, the token is committed to
    /// the session store. A transport failure or a `success == false`
    /// envelope is returned to the caller without mutating the session.
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<Envelope<LoginSession>> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);

        let response = match self.http.post(&url).json(credentials).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("login request failed: {}", e);
                return Ok(Envelope::failure(CONNECTIVITY_MESSAGE));
            }
        };

        let status = response.status();
        let envelope: Envelope<LoginSession> = response.json().await.map_err(|e| {
            ClientError::Serialization(format!(
                "invalid login response (status {}): {}",
                status, e
            ))
        })?;

        if envelope.success {
            if let Some(session_data) = &envelope.data {
                self.session.set_token(&session_data.access_token).await?;
            }
        }

        Ok(envelope)
    }

    /// Tear the session down
    pub async fn logout(&self) -> ClientResult<()> {
        self.session.clear_token().await
    }

    /// The session context this client commits into
    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}
