use async_trait::async_trait;

use crate::error::ExchangeError;

/// Raw HTTP outcome: status code, reason phrase and the undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: String::new(),
            body: body.into(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Moves one serialised chat request to the inference endpoint.
///
/// Implementations own the endpoint and the credential. They report
/// [`ExchangeError::Request`] when the request cannot be built and
/// [`ExchangeError::Network`] when it cannot be sent or read back. Any HTTP
/// status, including errors, comes back as `Ok`.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post_json(&self, body: String) -> Result<TransportResponse, ExchangeError>;
}
