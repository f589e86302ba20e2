// src/crawl/mod.rs
// =============================================================================
// This module handles site crawling.
//
// Features:
// - Breadth-first crawling starting from a validated base URL
// - Stays inside the base URL's origin and path
// - Bounded by a page-count ceiling (max_pages)
// - Never fetches the same URL twice in one crawl
// - Progress reported to pluggable observers (tracing by default)
//
// Submodules:
// - state: frontier / visited / attempts, and the step function over them
// - observer: crawl events and their sinks
// - queue: the Crawler that drives the loop
// =============================================================================

mod observer;
mod queue;
mod state;

pub use observer::{CrawlObserver, TracingObserver};
pub use queue::{crawl_site, CrawlOutcome, Crawler, CrawlerBuilder};
pub use state::{CrawlState, Step};
