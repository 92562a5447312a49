//! ureq-backed `Transport` with bearer-token injection.
//!
//! Non-2xx responses come back as data so the core classifies them; only
//! connection-level failures and missing credentials are transport errors.

use std::time::Duration;

use asana_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("environment variable {0} is not set")]
    Missing(String),

    #[error("environment variable {0} is empty")]
    Empty(String),
}

/// Supplies the token sent as `Authorization: Bearer <token>`.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Result<String, CredentialError>;
}

/// Reads the token from an environment variable on every request.
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    var: String,
}

impl EnvTokenProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl TokenProvider for EnvTokenProvider {
    fn token(&self) -> Result<String, CredentialError> {
        let token = std::env::var(&self.var).map_err(|_| CredentialError::Missing(self.var.clone()))?;
        let token = token.trim();
        if token.is_empty() {
            return Err(CredentialError::Empty(self.var.clone()));
        }
        Ok(token.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct StaticTokenProvider(String);

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticTokenProvider {
    fn token(&self) -> Result<String, CredentialError> {
        Ok(self.0.clone())
    }
}

pub struct UreqTransport<P> {
    agent: ureq::Agent,
    credentials: P,
}

impl<P: TokenProvider> UreqTransport<P> {
    pub fn new(credentials: P, timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent, credentials }
    }

    fn prepare<B>(
        &self,
        mut builder: ureq::RequestBuilder<B>,
        req: &HttpRequest,
        token: &str,
    ) -> ureq::RequestBuilder<B> {
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        for (name, value) in &req.query {
            builder = builder.query(name, value);
        }
        builder.header("authorization", format!("Bearer {token}"))
    }
}

impl<P: TokenProvider> Transport for UreqTransport<P> {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let token = self.credentials.token()?;
        trace!(method = %req.method, url = %req.url, "sending");

        let mut response = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => self.prepare(self.agent.get(&req.url), req, &token).call(),
            (HttpMethod::Delete, _) => self.prepare(self.agent.delete(&req.url), req, &token).call(),
            (HttpMethod::Post, Some(body)) => self
                .prepare(self.agent.post(&req.url), req, &token)
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.prepare(self.agent.post(&req.url), req, &token).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .prepare(self.agent.put(&req.url), req, &token)
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.prepare(self.agent.put(&req.url), req, &token).send_empty(),
        }?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;
        Ok(HttpResponse { status, headers, body })
    }
}
