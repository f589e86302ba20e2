// src/crawl/state.rs
// =============================================================================
// The traversal state of one crawl, kept in a single struct instead of being
// scattered across the crawl loop:
//
// - frontier: URLs waiting to be fetched, first in first out (breadth-first)
// - visited:  URLs already taken off the frontier for fetching
// - attempts: how many times we've popped the frontier
//
// The crawl loop asks `advance` what to do next and reports discovered links
// through `enqueue`. Neither does any I/O, so the whole state machine is easy
// to test on its own.
// =============================================================================

use std::collections::{HashSet, VecDeque};

use crate::validate::ValidUrl;

/// What the crawl loop should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Fetch this page; it has just been added to the visited set
    Fetch(ValidUrl),
    /// This URL was popped but had been visited already; nothing to do
    AlreadyVisited(ValidUrl),
    /// The page-count ceiling was hit with `pending` URLs still queued
    Truncated { pending: usize },
    /// The frontier is empty; the crawl is complete
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct CrawlState {
    frontier: VecDeque<ValidUrl>,
    visited: HashSet<ValidUrl>,
    attempts: usize,
}

impl CrawlState {
    /// A fresh state with exactly `base` in the frontier
    pub fn seeded(base: ValidUrl) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(base);

        Self {
            frontier,
            visited: HashSet::new(),
            attempts: 0,
        }
    }

    /// Pops the next URL, counting the pop against `max_pages`.
    ///
    /// Every pop costs an attempt, including pops of URLs that turn out to be
    /// visited already (a URL can sit in the frontier more than once).
    pub fn advance(&mut self, max_pages: usize) -> Step {
        if self.frontier.is_empty() {
            return Step::Exhausted;
        }

        if self.attempts >= max_pages {
            return Step::Truncated {
                pending: self.frontier.len(),
            };
        }

        let Some(url) = self.frontier.pop_front() else {
            return Step::Exhausted;
        };
        self.attempts += 1;

        if self.visited.contains(&url) {
            return Step::AlreadyVisited(url);
        }

        self.visited.insert(url.clone());
        Step::Fetch(url)
    }

    /// Queues a discovered URL unless it has been visited.
    ///
    /// Returns whether it was queued. URLs already waiting in the frontier
    /// are queued again; `advance` skips the extra copies.
    pub fn enqueue(&mut self, url: ValidUrl) -> bool {
        if self.visited.contains(&url) {
            return false;
        }
        self.frontier.push_back(url);
        true
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Number of URLs still waiting in the frontier
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }

    pub fn visited(&self) -> &HashSet<ValidUrl> {
        &self.visited
    }

    /// Ends the crawl, handing back the visited set
    pub fn into_visited(self) -> HashSet<ValidUrl> {
        self.visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_url;

    fn url(s: &str) -> ValidUrl {
        validate_url(Some(s)).unwrap()
    }

    #[test]
    fn test_seeded_state_fetches_base_first() {
        let mut state = CrawlState::seeded(url("https://example.com/docs/"));
        assert_eq!(state.pending(), 1);
        assert_eq!(
            state.advance(10),
            Step::Fetch(url("https://example.com/docs/"))
        );
        assert!(state.is_visited("https://example.com/docs/"));
        assert_eq!(state.attempts(), 1);
        assert_eq!(state.advance(10), Step::Exhausted);
    }

    #[test]
    fn test_frontier_is_fifo() {
        let mut state = CrawlState::seeded(url("https://example.com/docs/"));
        state.advance(10);
        assert!(state.enqueue(url("https://example.com/docs/a/")));
        assert!(state.enqueue(url("https://example.com/docs/b/")));

        assert_eq!(state.advance(10), Step::Fetch(url("https://example.com/docs/a/")));
        assert!(state.enqueue(url("https://example.com/docs/a/c/")));
        assert_eq!(state.advance(10), Step::Fetch(url("https://example.com/docs/b/")));
        assert_eq!(state.advance(10), Step::Fetch(url("https://example.com/docs/a/c/")));
    }

    #[test]
    fn test_visited_urls_are_not_enqueued() {
        let mut state = CrawlState::seeded(url("https://example.com/docs/"));
        state.advance(10);
        assert!(!state.enqueue(url("https://example.com/docs/")));
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn test_duplicate_pop_is_skipped_but_costs_an_attempt() {
        let mut state = CrawlState::seeded(url("https://example.com/docs/"));
        state.advance(10);
        state.enqueue(url("https://example.com/docs/a/"));
        state.enqueue(url("https://example.com/docs/a/"));

        assert_eq!(state.advance(10), Step::Fetch(url("https://example.com/docs/a/")));
        assert_eq!(
            state.advance(10),
            Step::AlreadyVisited(url("https://example.com/docs/a/"))
        );
        assert_eq!(state.attempts(), 3);
        assert_eq!(state.visited().len(), 2);
    }

    #[test]
    fn test_ceiling_truncates_with_pending_count() {
        let mut state = CrawlState::seeded(url("https://example.com/docs/"));
        assert!(matches!(state.advance(1), Step::Fetch(_)));
        state.enqueue(url("https://example.com/docs/a/"));
        state.enqueue(url("https://example.com/docs/b/"));

        assert_eq!(state.advance(1), Step::Truncated { pending: 2 });
        assert_eq!(state.attempts(), 1);
        assert_eq!(state.into_visited().len(), 1);
    }

    #[test]
    fn test_zero_ceiling_visits_nothing() {
        let mut state = CrawlState::seeded(url("https://example.com/docs/"));
        assert_eq!(state.advance(0), Step::Truncated { pending: 1 });
        assert!(state.into_visited().is_empty());
    }
}
