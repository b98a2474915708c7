use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::errors::{TrendingError, TrendingResult};

/// A single GET request against an upstream source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub user_agent: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user_agent: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Perform the request and return the response body. Non-2xx statuses are errors.
    fn get(&self, request: &HttpRequest) -> TrendingResult<Vec<u8>>;
}

/// Blocking reqwest client shared by every source for the whole run
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration) -> TrendingResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, request: &HttpRequest) -> TrendingResult<Vec<u8>> {
        debug!(url = %request.url, "GET");

        let mut builder = self.client.get(&request.url);
        if let Some(ref user_agent) = request.user_agent {
            builder = builder.header(USER_AGENT, user_agent.as_str());
        }

        let response = builder.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(TrendingError::HttpStatus {
                url: request.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }
}
