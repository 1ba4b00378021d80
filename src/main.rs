//! # Oldtweets
//!
//! Command line front end for the adaptive search client. It searches tweets
//! matching a query, optionally bounded by dates, and prints every tweet of every
//! page as one JSON object per line.
//!
//! ## Environment Variables
//!
//! - `OLDTWEETS_USER_AGENT`, `OLDTWEETS_AUTH_TOKEN`, `OLDTWEETS_BASE_URL`: client overrides
//! - `RUST_LOG`: log level (progress is logged at `info`)
//!
//! ## Example Usage
//!
//! ```bash
//! RUST_LOG=info oldtweets --query "rust lang" --since 2022-01-01 --until 2022-02-01
//! ```

use chrono::NaiveDate;
use clap::Parser;
use futures::StreamExt;
use log::{error, info};
use std::io::{self, Write};
use std::process::ExitCode;

use oldtweets::{ClientConfig, SearchClient, SearchQuery};

#[derive(Debug, Parser)]
#[command(author, version, about = "Search tweets and print them as JSON lines")]
struct Cli {
    /// Free text to search for
    #[arg(short, long, default_value = "")]
    query: String,
    /// Only tweets posted on or after this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    since: Option<NaiveDate>,
    /// Only tweets posted before this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    until: Option<NaiveDate>,
    /// Stop after this many pages
    #[arg(long)]
    max_pages: Option<usize>,
    /// Override the User-Agent header
    #[arg(long)]
    user_agent: Option<String>,
    /// Override the bearer token
    #[arg(long)]
    auth_token: Option<String>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", s, e))
}

impl Cli {
    fn search_query(&self) -> SearchQuery {
        SearchQuery {
            text: self.query.clone(),
            since: self.since.map(|d| d.format("%Y-%m-%d").to_string()),
            until: self.until.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }

    fn client_config(&self) -> Result<ClientConfig, Box<dyn std::error::Error + Send + Sync>> {
        let mut config = ClientConfig::from_env()?;
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }
        if let Some(auth_token) = &self.auth_token {
            config = config.with_auth_token(auth_token.clone());
        }
        Ok(config)
    }
}

async fn run(cli: Cli) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    let query = cli.search_query();
    if query.is_empty() {
        return Err("query is empty: pass --query, --since or --until".into());
    }
    if let (Some(since), Some(until)) = (cli.since, cli.until) {
        if since > until {
            return Err(format!("--since {} is after --until {}", since, until).into());
        }
    }

    let client = SearchClient::new(cli.client_config()?);
    info!("Searching for: {}", query.encode());

    let pages = client.search_all(query);
    let mut pages = match cli.max_pages {
        Some(max) => pages.take(max).boxed(),
        None => pages.boxed(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut total = 0;

    while let Some(page) = pages.next().await {
        let page = page?;
        for tweet in page.global_objects.tweets.values() {
            serde_json::to_writer(&mut out, tweet)?;
            writeln!(out)?;
            total += 1;
        }
        out.flush()?;
    }

    Ok(total)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logging system
    env_logger::init();

    match run(Cli::parse()).await {
        Ok(total) => {
            info!("Fetched {} tweets", total);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Search failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
