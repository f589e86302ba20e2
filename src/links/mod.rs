// src/links/mod.rs
// =============================================================================
// This module turns a fetched HTML page into candidate child URLs.
//
// Submodules:
// - html: pulls raw href values out of <a> tags
// - scope: resolves an href against its page and decides whether the result
//   stays inside the crawl (same origin, under the base path)
//
// Validation of the resolved URL is left to the caller (the crawler), which
// runs every candidate through crate::validate before it is enqueued.
// =============================================================================

mod html;
mod scope;

pub use html::extract_hrefs;
pub use scope::{LinkRejection, LinkScope};
