// src/fetch/mod.rs
// =============================================================================
// This module downloads pages for the crawler.
//
// The crawler only talks to the PageFetcher trait, so the traversal can be
// tested against an in-memory site instead of the network.
//
// Submodules:
// - http: the real implementation, built on reqwest
// =============================================================================

mod http;

pub use http::HttpFetcher;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::validate::ValidUrl;

/// Something that can turn a URL into page HTML.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &ValidUrl) -> Result<String, FetchError>;
}

// An in-memory site for crawl tests: URL text -> HTML body.
// URLs that aren't in the map fail with FetchError::NotFound.
// Every fetch is recorded so tests can assert on what was requested.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub(crate) struct StaticFetcher {
        pages: HashMap<String, String>,
        requests: Mutex<Vec<String>>,
    }

    impl StaticFetcher {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }

        pub(crate) fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, url: &ValidUrl) -> Result<String, FetchError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.pages
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| FetchError::NotFound {
                    url: url.to_string(),
                })
        }
    }
}
