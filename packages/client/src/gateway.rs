//! Authenticated request gateway
//!
//! The single choke point for every entity-service HTTP call. Attaches the
//! bearer token when one exists and enforces the session-expiry contract:
//! a 401 or 403 clears the session, flags the redirect to login, and fails
//! the in-flight call before any body is parsed. Every other status is
//! returned untouched; business errors are the caller's to interpret.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;

use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;

/// Gateway for authenticated calls against the backend
#[derive(Clone)]
pub struct Gateway {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl Gateway {
    /// Create a gateway for the given base URL and session context
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

    /// The backend base URL this gateway targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session context this gateway reads from and expires
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Issue a GET request
    pub async fn get(&self, path: &str) -> ClientResult<Response> {
        self.execute(self.builder(Method::GET, path)).await
    }

    /// Issue a GET request with query parameters
    pub async fn get_query<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> ClientResult<Response> {
        self.execute(self.builder(Method::GET, path).query(query)).await
    }

    /// Issue a POST request with a JSON body
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Response> {
        self.execute(self.builder(Method::POST, path).json(body)).await
    }

    /// Issue a PUT request with a JSON body
    pub async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Response> {
        self.execute(self.builder(Method::PUT, path).json(body)).await
    }

    /// Issue a DELETE request
    pub async fn delete(&self, path: &str) -> ClientResult<Response> {
        self.execute(self.builder(Method::DELETE, path)).await
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);

        // Unauthenticated requests go out without the header
        match self.session.token() {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> ClientResult<Response> {
        let response = builder.send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::warn!(
                    status = %response.status(),
                    "authorization failure, expiring session"
                );
                self.session.expire().await;
                Err(ClientError::SessionExpired)
            }
            // All other statuses, success or not, are the caller's problem
            _ => Ok(response),
        }
    }
}
