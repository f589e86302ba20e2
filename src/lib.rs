// src/lib.rs
// =============================================================================
// docs-crawler: discover every same-site page under a base URL.
//
// The pieces, bottom-up:
// - validate: accepts or rejects candidate URLs (https only, no injection
//   characters, trailing slash added)
// - links: finds <a href> targets and resolves them inside the crawl scope
// - fetch: downloads pages (reqwest), behind a trait so tests can fake it
// - crawl: the breadth-first, max_pages-bounded traversal
//
// Quick start:
//
//   let pages = docs_crawler::crawl_site("https://waterservices.usgs.gov/docs/", 1000).await?;
//
// `pages` is a HashSet of validated URLs, ready for whatever consumes them.
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod links;
pub mod validate;

pub use config::{CrawlConfig, DEFAULT_MAX_PAGES};
pub use crawl::{crawl_site, CrawlObserver, CrawlOutcome, Crawler, CrawlerBuilder, TracingObserver};
pub use error::{CrawlError, FetchError, InvalidUrlError};
pub use fetch::{HttpFetcher, PageFetcher};
pub use links::LinkRejection;
pub use validate::{validate_url, ValidUrl};
