//! HTTP transport used by the breach checker.

use std::time::Duration;
use thiserror::Error;

use crate::config::BreachConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Request(String),
}

/// A GET request for one range of hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRequest {
    pub url: String,
    pub add_padding: bool,
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs blocking GET requests.
pub trait HttpTransport {
    fn get(&self, request: &RangeRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport built on a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(config: &BreachConfig) -> Result<Self, TransportError> {
        Self::with_timeout(config.timeout, &config.user_agent)
    }

    pub fn with_timeout(timeout: Duration, user_agent: &str) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { client })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Request(err.to_string())
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, request: &RangeRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.get(&request.url);
        if request.add_padding {
            builder = builder.header("Add-Padding", "true");
        }

        let resp = builder.send().map_err(map_reqwest_error)?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(map_reqwest_error)?;

        Ok(HttpResponse { status, body })
    }
}
