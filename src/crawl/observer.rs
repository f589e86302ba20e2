// src/crawl/observer.rs
// =============================================================================
// Crawl events and the sinks that receive them.
//
// The crawler never logs directly. It reports what happens to every
// registered CrawlObserver, and TracingObserver (registered by default)
// turns those events into `tracing` log lines. Tests register their own
// observer to see exactly which links were dropped and why.
// =============================================================================

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::CrawlOutcome;
use crate::error::{FetchError, InvalidUrlError};
use crate::links::LinkRejection;
use crate::validate::ValidUrl;

/// Receives crawl events. Every method defaults to doing nothing.
pub trait CrawlObserver: Send + Sync {
    /// The base URL was accepted and the crawl is starting
    fn on_crawl_start(&self, _base: &ValidUrl, _max_pages: usize) {}

    /// The base URL failed validation; no page will be fetched
    fn on_base_rejected(&self, _error: &InvalidUrlError) {}

    /// A page was fetched and `enqueued` of its links were queued
    fn on_page_visited(&self, _url: &ValidUrl, _enqueued: usize) {}

    /// A URL came off the frontier a second time and was skipped
    fn on_already_visited(&self, _url: &ValidUrl) {}

    /// A link on `page` was dropped
    fn on_link_rejected(&self, _page: &ValidUrl, _href: &str, _reason: &LinkRejection) {}

    /// A page could not be fetched; it is a dead end
    fn on_fetch_failed(&self, _url: &ValidUrl, _error: &FetchError) {}

    /// The page-count ceiling stopped the crawl early
    fn on_truncated(&self, _max_pages: usize, _pending: usize) {}

    /// The crawl finished (normally or by truncation)
    fn on_crawl_complete(&self, _outcome: &CrawlOutcome) {}
}

/// Logs every crawl event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CrawlObserver for TracingObserver {
    fn on_crawl_start(&self, base: &ValidUrl, max_pages: usize) {
        info!(base = %base, max_pages, "starting crawl");
    }

    fn on_base_rejected(&self, error: &InvalidUrlError) {
        error!(%error, "base URL rejected");
    }

    fn on_page_visited(&self, url: &ValidUrl, enqueued: usize) {
        info!(url = %url, enqueued, "crawled page");
    }

    fn on_already_visited(&self, url: &ValidUrl) {
        debug!(url = %url, "already visited, skipping");
    }

    fn on_link_rejected(&self, page: &ValidUrl, href: &str, reason: &LinkRejection) {
        debug!(page = %page, href, %reason, "dropping link");
    }

    fn on_fetch_failed(&self, url: &ValidUrl, error: &FetchError) {
        warn!(url = %url, %error, "failed to fetch page");
    }

    fn on_truncated(&self, max_pages: usize, pending: usize) {
        warn!(max_pages, pending, "max pages reached, stopping crawl");
    }

    fn on_crawl_complete(&self, outcome: &CrawlOutcome) {
        info!(
            visited = outcome.visited.len(),
            attempts = outcome.attempts,
            failed = outcome.failed.len(),
            truncated = outcome.truncated,
            "crawl complete"
        );
    }
}

// Fans each event out to every registered observer, in registration order.
#[derive(Clone, Default)]
pub(crate) struct ObserverRegistry {
    observers: Vec<Arc<dyn CrawlObserver>>,
}

impl ObserverRegistry {
    pub(crate) fn register(&mut self, observer: Arc<dyn CrawlObserver>) {
        self.observers.push(observer);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn crawl_started(&self, base: &ValidUrl, max_pages: usize) {
        for observer in &self.observers {
            observer.on_crawl_start(base, max_pages);
        }
    }

    pub(crate) fn base_rejected(&self, error: &InvalidUrlError) {
        for observer in &self.observers {
            observer.on_base_rejected(error);
        }
    }

    pub(crate) fn page_visited(&self, url: &ValidUrl, enqueued: usize) {
        for observer in &self.observers {
            observer.on_page_visited(url, enqueued);
        }
    }

    pub(crate) fn already_visited(&self, url: &ValidUrl) {
        for observer in &self.observers {
            observer.on_already_visited(url);
        }
    }

    pub(crate) fn link_rejected(&self, page: &ValidUrl, href: &str, reason: &LinkRejection) {
        for observer in &self.observers {
            observer.on_link_rejected(page, href, reason);
        }
    }

    pub(crate) fn fetch_failed(&self, url: &ValidUrl, error: &FetchError) {
        for observer in &self.observers {
            observer.on_fetch_failed(url, error);
        }
    }

    pub(crate) fn truncated(&self, max_pages: usize, pending: usize) {
        for observer in &self.observers {
            observer.on_truncated(max_pages, pending);
        }
    }

    pub(crate) fn crawl_completed(&self, outcome: &CrawlOutcome) {
        for observer in &self.observers {
            observer.on_crawl_complete(outcome);
        }
    }
}
