use async_trait::async_trait;
use domain::{ChatTransport, ExchangeError, TransportResponse};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

use crate::config::{ApiKey, ClientConfig};

const JSON: &str = "application/json";

/// reqwest-backed transport for the Fireworks chat completions endpoint.
///
/// Uses the client's default timeouts. Headers are attached per request so a
/// malformed key surfaces as [`ExchangeError::Request`] on that call instead of
/// failing construction.
#[derive(Clone)]
pub struct HttpTransport {
    client: Arc<Client>,
    url: String,
    api_key: ApiKey,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            client: Arc::new(Client::new()),
            url: url.into(),
            api_key,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone(), config.api_key.clone())
    }
}

fn classify(err: reqwest::Error) -> ExchangeError {
    if err.is_builder() {
        ExchangeError::request(err.to_string())
    } else {
        ExchangeError::network(err.to_string())
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn post_json(&self, body: String) -> Result<TransportResponse, ExchangeError> {
        debug!(url = %self.url, bytes = body.len(), "posting chat completion");

        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, self.api_key.bearer())
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default();
        let text = response.text().await.map_err(classify)?;
        Ok(TransportResponse::new(status.as_u16(), text).with_reason(reason))
    }
}
