// src/crawl/queue.rs
// =============================================================================
// This module implements site crawling with a breadth-first approach.
//
// How it works:
// 1. Validate the base URL and put it in the frontier
// 2. Pop the oldest URL from the frontier (one attempt against max_pages)
// 3. Skip it if it was visited already, otherwise mark it visited and fetch it
// 4. Resolve every link on the page, drop the ones that leave the site, carry
//    a fragment or fail validation, and queue the rest
// 5. Repeat until the frontier is empty or max_pages attempts were used
//
// One bad page or one bad link never stops the crawl: fetch failures make
// the page a dead end, rejected links are dropped one at a time. The only
// error a crawl returns is an invalid base URL, before anything is fetched.
// =============================================================================

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use super::observer::{CrawlObserver, ObserverRegistry, TracingObserver};
use super::state::{CrawlState, Step};
use crate::config::CrawlConfig;
use crate::error::{CrawlError, InvalidUrlError};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::links::{extract_hrefs, LinkRejection, LinkScope};
use crate::validate::{validate_url, ValidUrl};

/// Everything a finished crawl learned.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlOutcome {
    /// Every URL taken off the frontier for fetching, including failed ones
    pub visited: HashSet<ValidUrl>,
    /// Frontier pops used, out of `max_pages`
    pub attempts: usize,
    /// True if the page-count ceiling ended the crawl
    pub truncated: bool,
    /// URLs still queued when the crawl stopped
    pub pending: usize,
    /// Visited URLs whose fetch failed, in crawl order
    pub failed: Vec<ValidUrl>,
}

impl CrawlOutcome {
    /// The visited URLs in lexical order, for stable output
    pub fn sorted_urls(&self) -> Vec<&ValidUrl> {
        let mut urls: Vec<_> = self.visited.iter().collect();
        urls.sort();
        urls
    }
}

/// A breadth-first, page-count-bounded crawler.
///
/// ```ignore
/// let crawler = Crawler::builder().max_pages(200).build_http()?;
/// let pages = crawler.crawl(Some("https://waterservices.usgs.gov/docs/")).await?;
/// ```
pub struct Crawler<F = HttpFetcher> {
    fetcher: F,
    config: CrawlConfig,
    observers: ObserverRegistry,
}

impl Crawler<HttpFetcher> {
    pub fn builder() -> CrawlerBuilder {
        CrawlerBuilder::new()
    }
}

impl<F: PageFetcher> Crawler<F> {
    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Crawls from `base_url` and returns the visited set.
    pub async fn crawl(&self, base_url: Option<&str>) -> Result<HashSet<ValidUrl>, InvalidUrlError> {
        Ok(self.run(base_url).await?.visited)
    }

    /// Crawls from `base_url` and returns the visited set with bookkeeping.
    pub async fn run(&self, base_url: Option<&str>) -> Result<CrawlOutcome, InvalidUrlError> {
        let base = validate_url(base_url).inspect_err(|e| self.observers.base_rejected(e))?;

        let max_pages = self.config.max_pages;
        let scope = LinkScope::new(&base);
        self.observers.crawl_started(&base, max_pages);

        let mut state = CrawlState::seeded(base);
        let mut failed = Vec::new();
        let mut truncated = false;

        loop {
            let url = match state.advance(max_pages) {
                Step::Fetch(url) => url,
                Step::AlreadyVisited(url) => {
                    self.observers.already_visited(&url);
                    continue;
                }
                Step::Truncated { pending } => {
                    self.observers.truncated(max_pages, pending);
                    truncated = true;
                    break;
                }
                Step::Exhausted => break,
            };

            match self.fetcher.fetch(&url).await {
                Ok(html) => {
                    let enqueued = self.enqueue_links(&mut state, &scope, &url, &html);
                    self.observers.page_visited(&url, enqueued);

                    // Polite crawling: small pause between requests
                    if !self.config.delay.is_zero() {
                        tokio::time::sleep(self.config.delay).await;
                    }
                }
                Err(e) => {
                    self.observers.fetch_failed(&url, &e);
                    failed.push(url);
                }
            }
        }

        let outcome = CrawlOutcome {
            attempts: state.attempts(),
            pending: state.pending(),
            truncated,
            failed,
            visited: state.into_visited(),
        };
        self.observers.crawl_completed(&outcome);
        Ok(outcome)
    }

    // Resolves and validates every link on `page`, queuing the unseen ones.
    // Returns how many were queued.
    fn enqueue_links(
        &self,
        state: &mut CrawlState,
        scope: &LinkScope,
        page: &ValidUrl,
        html: &str,
    ) -> usize {
        let mut enqueued = 0;

        for href in extract_hrefs(html) {
            let candidate = scope
                .resolve(page.url(), &href)
                .and_then(|resolved| validate_url(Some(&resolved)).map_err(LinkRejection::from));

            match candidate {
                Ok(url) => {
                    if state.enqueue(url) {
                        enqueued += 1;
                    }
                }
                Err(reason) => self.observers.link_rejected(page, &href, &reason),
            }
        }

        enqueued
    }
}

/// Configures a [`Crawler`].
///
/// A [`TracingObserver`] is registered unless
/// [`without_default_logging`](Self::without_default_logging) is called.
pub struct CrawlerBuilder {
    config: CrawlConfig,
    observers: Vec<Arc<dyn CrawlObserver>>,
    default_logging: bool,
}

impl Default for CrawlerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CrawlerBuilder {
    pub fn new() -> Self {
        Self {
            config: CrawlConfig::default(),
            observers: Vec::new(),
            default_logging: true,
        }
    }

    /// Replaces the whole configuration
    pub fn config(mut self, config: CrawlConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the page-count ceiling (default: 1000)
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    /// Adds an event sink
    pub fn observe_with(mut self, observer: Arc<dyn CrawlObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Drops the default `tracing` sink
    pub fn without_default_logging(mut self) -> Self {
        self.default_logging = false;
        self
    }

    /// Builds a crawler around any fetcher
    pub fn build<F: PageFetcher>(self, fetcher: F) -> Crawler<F> {
        let mut observers = ObserverRegistry::default();
        if self.default_logging {
            observers.register(Arc::new(TracingObserver));
        }
        for observer in self.observers {
            observers.register(observer);
        }

        Crawler {
            fetcher,
            config: self.config,
            observers,
        }
    }

    /// Builds a crawler that fetches over HTTPS
    pub fn build_http(self) -> reqwest::Result<Crawler<HttpFetcher>> {
        let fetcher = HttpFetcher::new(&self.config)?;
        Ok(self.build(fetcher))
    }
}

/// Crawls `base_url` over HTTPS with default settings and the given ceiling.
///
/// The base URL is validated before the HTTP client is even built, so an
/// invalid URL never touches the network.
pub async fn crawl_site(base_url: &str, max_pages: usize) -> Result<HashSet<ValidUrl>, CrawlError> {
    validate_url(Some(base_url))?;

    let crawler = Crawler::builder().max_pages(max_pages).build_http()?;
    Ok(crawler.crawl(Some(base_url)).await?)
}
