// src/error.rs
// =============================================================================
// Error types shared by the validator, the fetcher and the crawler.
//
// Two kinds of failure get their own type:
// - InvalidUrlError: a candidate URL was rejected. This is the only error a
//   crawl ever returns to its caller (for a bad base URL).
// - FetchError: one page could not be downloaded. The crawler logs it and
//   moves on, so it never escapes a crawl.
//
// CrawlError wraps the first for crawl_site, which also builds an HTTP
// client and so can fail in one more way.
//
// All of them use `thiserror`, which generates the Display and Error impls from the
// #[error(...)] attributes.
// =============================================================================

/// A candidate URL failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUrlError {
    /// No URL was supplied at all
    #[error("URL cannot be None")]
    Missing,

    /// The URL does not start with `https://`
    #[error("invalid URL '{url}': it must start with https://")]
    NotHttps { url: String },

    /// The URL contains a character used in injection payloads
    #[error("invalid character {ch:?} found in URL '{url}'")]
    ForbiddenCharacter { url: String, ch: char },

    /// The URL passed the character checks but has no parseable host
    #[error("malformed URL '{url}': {reason}")]
    Malformed { url: String, reason: String },
}

/// Fetching a single page failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("too many redirects fetching {url}")]
    TooManyRedirects { url: String },

    #[error("could not connect to {url}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("page at {url} is larger than {limit} bytes")]
    TooLarge { url: String, limit: usize },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Used by fetchers that don't talk HTTP (in-memory fixtures)
    #[error("no page at {url}")]
    NotFound { url: String },
}

impl FetchError {
    /// The URL the failed request was for
    pub fn url(&self) -> &str {
        match self {
            FetchError::Timeout { url }
            | FetchError::TooManyRedirects { url }
            | FetchError::Connect { url, .. }
            | FetchError::TooLarge { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Request { url, .. }
            | FetchError::NotFound { url } => url,
        }
    }

    // Sorts a reqwest error into one of our variants.
    // Same idea as the link checker's error categorization: timeouts and
    // redirect loops get their own bucket, connection problems another.
    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        let url = url.to_string();
        if error.is_timeout() {
            FetchError::Timeout { url }
        } else if error.is_redirect() {
            FetchError::TooManyRedirects { url }
        } else if error.is_connect() {
            FetchError::Connect { url, source: error }
        } else if let Some(status) = error.status() {
            FetchError::Status {
                url,
                status: status.as_u16(),
            }
        } else {
            FetchError::Request { url, source: error }
        }
    }
}

/// Failure of a one-shot HTTP crawl started with `crawl_site`.
#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrlError),

    /// The HTTP client could not be built
    #[error("failed to build HTTP client")]
    Client(#[from] reqwest::Error),
}
