//! The outbound HTTP call. Retries and backoff, if wanted, belong in a transport implementation.

use std::{fmt, future::Future, time::Duration};

use common::backend_response::BackendError;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::ConnectorConfig,
    error::{ConnectorError, Result},
};


/// Sends one JSON body and returns the decoded JSON reply.
pub trait SearchTransport: Send + Sync {
    fn post_json<B: Serialize + Sync>(&self, url: &str, body: &B) -> impl Future<Output = Result<Value>> + Send;
}


#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    request_timeout: Duration,
}

impl HttpTransport {
    pub fn from_config(config: &ConnectorConfig) -> Result<Self> {
        let request_timeout = Duration::from_millis(config.request_timeout_ms);
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(request_timeout)
            .build()
            .map_err(|e| ConnectorError::network(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, request_timeout })
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport").field("request_timeout", &self.request_timeout).finish()
    }
}

impl SearchTransport for HttpTransport {
    async fn post_json<B: Serialize + Sync>(&self, url: &str, body: &B) -> Result<Value> {
        let response = self.client.post(url).json(body).send().await.map_err(|e| {
            if e.is_timeout() {
                ConnectorError::network(format!("request to {url} timed out: {e}"))
            } else if e.is_connect() {
                ConnectorError::network(format!("failed to connect to {url}: {e}"))
            } else {
                ConnectorError::network(format!("request to {url} failed: {e}"))
            }
        })?;

        let status = response.status();
        let response_txt = response
            .text()
            .await
            .map_err(|e| ConnectorError::network(format!("failed to read response from {url}: {e}")))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<BackendError>(&response_txt) {
                Ok(backend_error) => format!("{url} returned {status}: {backend_error}"),
                Err(_) => format!("{url} returned {status}: {response_txt}"),
            };
            return Err(ConnectorError::Network { message, status: Some(status.as_u16()) });
        }

        serde_json::from_str(&response_txt)
            .map_err(|e| ConnectorError::malformed(format!("response from {url} is not JSON: {e}")))
    }
}
