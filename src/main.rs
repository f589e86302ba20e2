// src/main.rs
// =============================================================================
// This is the entry point of the docs-crawler CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Run the crawl
// 4. Print the visited pages as a table or JSON
// 5. Exit with a proper code (0 = all pages fetched, 1 = some pages failed,
//    2 = error, including an invalid base URL)
// =============================================================================

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use docs_crawler::{CrawlOutcome, Crawler};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Warning: could not set up logging: {}", e);
    }

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout stays clean for the results.
// JSON output quiets everything but errors unless --verbose is given.
fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.command.wants_json() {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

// Returns:
//   Ok(0) = every visited page was fetched
//   Ok(1) = the crawl finished but some pages could not be fetched
//   Err   = invalid base URL or HTTP client setup failure
async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Crawl {
            base_url,
            max_pages,
            timeout_secs,
            delay_ms,
            json,
        } => {
            let config = cli::crawl_config(max_pages, timeout_secs, delay_ms);
            handle_crawl(&base_url, config, json).await
        }
    }
}

async fn handle_crawl(base_url: &str, config: docs_crawler::CrawlConfig, json: bool) -> Result<i32> {
    let crawler = Crawler::builder().config(config).build_http()?;
    let outcome = crawler.run(Some(base_url)).await?;

    print_outcome(&outcome, json)?;

    if outcome.failed.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn print_outcome(outcome: &CrawlOutcome, json: bool) -> Result<()> {
    if json {
        #[derive(serde::Serialize)]
        struct Report<'a> {
            visited: Vec<&'a docs_crawler::ValidUrl>,
            attempts: usize,
            truncated: bool,
            pending: usize,
            failed: &'a [docs_crawler::ValidUrl],
        }

        let report = Report {
            visited: outcome.sorted_urls(),
            attempts: outcome.attempts,
            truncated: outcome.truncated,
            pending: outcome.pending,
            failed: &outcome.failed,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(outcome);
    }
    Ok(())
}

fn print_table(outcome: &CrawlOutcome) {
    println!("{:<90} {:<10}", "URL", "STATUS");
    println!("{}", "=".repeat(100));

    for url in outcome.sorted_urls() {
        let status = if outcome.failed.contains(url) {
            "FAILED"
        } else {
            "OK"
        };
        println!("{:<90} {:<10}", url, status);
    }

    println!();
    println!("Summary:");
    println!("   Visited:  {}", outcome.visited.len());
    println!("   Failed:   {}", outcome.failed.len());
    println!("   Attempts: {}", outcome.attempts);
    if outcome.truncated {
        println!(
            "   Stopped at the page limit with {} URL(s) still queued",
            outcome.pending
        );
    }
}
