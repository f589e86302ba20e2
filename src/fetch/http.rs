// src/fetch/http.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// Key functionality:
// - One reqwest Client per crawl, reused for every page (connection pooling)
// - Per-request timeout and a small redirect limit
// - Non-2xx responses are failures: there's nothing to crawl on a 404 page
// - Bodies are read chunk by chunk and cut off at max_body_bytes, so one
//   enormous page can't exhaust memory
// - Transport errors are sorted into FetchError variants (timeout, redirect
//   loop, connection failure, anything else)
// =============================================================================

use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use tracing::debug;

use super::PageFetcher;
use crate::config::CrawlConfig;
use crate::error::FetchError;
use crate::validate::ValidUrl;

const MAX_REDIRECTS: usize = 5;

/// Fetches pages with a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_body_bytes: usize,
}

impl HttpFetcher {
    /// Builds the HTTP client from the crawl settings.
    ///
    /// Fails only if the TLS backend can't be initialized.
    pub fn new(config: &CrawlConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes,
        })
    }

    // Fetches any URL string, validated or not.
    //
    // The crawler only reaches this through PageFetcher::fetch with a
    // ValidUrl; taking &str keeps it testable against a plain-http mock.
    pub async fn fetch_raw(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching page");

        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let too_large = || FetchError::TooLarge {
            url: url.to_string(),
            limit: self.max_body_bytes,
        };

        // Content-Length is only a hint, the loop below enforces the limit
        if response
            .content_length()
            .is_some_and(|len| len > self.max_body_bytes as u64)
        {
            return Err(too_large());
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?
        {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &ValidUrl) -> Result<String, FetchError> {
        self.fetch_raw(url.as_str()).await
    }
}
