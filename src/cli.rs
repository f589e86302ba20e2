// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use clap's "derive" API: the CLI is described by plain structs and
// enums, and the #[command] / #[arg] attributes turn them into a parser
// (with --help and --version for free).
// =============================================================================

use std::time::Duration;

use clap::{Parser, Subcommand};

use docs_crawler::{CrawlConfig, DEFAULT_MAX_PAGES};

#[derive(Parser, Debug)]
#[command(
    name = "docs-crawler",
    version,
    about = "Discover every same-site documentation page under a base URL",
    long_about = "docs-crawler walks a documentation site breadth-first from a base URL, \
                  following only https links that stay under that URL, and prints every \
                  page it visited. Useful for feeding a page list into an indexing pipeline."
)]
pub struct Cli {
    /// Log every page and every dropped link
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a site and list the pages found
    ///
    /// Example: docs-crawler crawl https://waterservices.usgs.gov/docs/ --max-pages 200
    Crawl {
        /// Base URL to start from (must start with https://)
        base_url: String,

        /// Maximum number of pages to take off the crawl queue
        #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
        max_pages: usize,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,

        /// Pause between page fetches in milliseconds
        #[arg(long, default_value_t = 100)]
        delay_ms: u64,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Whether the selected command writes machine-readable output
    pub fn wants_json(&self) -> bool {
        match self {
            Commands::Crawl { json, .. } => *json,
        }
    }
}

// Maps the crawl flags onto a CrawlConfig
pub fn crawl_config(max_pages: usize, timeout_secs: u64, delay_ms: u64) -> CrawlConfig {
    CrawlConfig::default()
        .with_max_pages(max_pages)
        .with_request_timeout(Duration::from_secs(timeout_secs))
        .with_delay(Duration::from_millis(delay_ms))
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why is max_pages a usize?
//    - It counts queue pops, and counts in Rust are usize
//    - 0 is allowed: the crawl then visits nothing and returns an empty list
//
// 2. What does `global = true` do?
//    - The flag can be given before or after the subcommand:
//      docs-crawler -v crawl URL  and  docs-crawler crawl URL -v  both work
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["docs-crawler", "crawl", "https://example.com/docs/"]).unwrap();
        match cli.command {
            Commands::Crawl {
                base_url,
                max_pages,
                timeout_secs,
                delay_ms,
                json,
            } => {
                assert_eq!(base_url, "https://example.com/docs/");
                assert_eq!(max_pages, 1000);
                assert_eq!(timeout_secs, 10);
                assert_eq!(delay_ms, 100);
                assert!(!json);
            }
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "docs-crawler",
            "crawl",
            "https://example.com/docs/",
            "--max-pages",
            "5",
            "--json",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.command.wants_json());
        let Commands::Crawl { max_pages, .. } = cli.command;
        assert_eq!(max_pages, 5);
    }

    #[test]
    fn test_config_mapping() {
        let config = crawl_config(7, 3, 0);
        assert_eq!(config.max_pages, 7);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert!(config.delay.is_zero());
    }

    #[test]
    fn test_missing_url_is_an_error() {
        assert!(Cli::try_parse_from(["docs-crawler", "crawl"]).is_err());
    }
}
