//! CLI administration tool for shortly.
//!
//! Works directly against the configured Redis store, without going through
//! the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Show target and click count for a short id
//! cargo run --bin admin -- lookup 1
//!
//! # Show how many links have been issued
//! cargo run --bin admin -- stats
//!
//! # Check store connectivity
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same store variables as the server (`REDIS_URL` or `REDIS_HOST`, ...).

use shortly::AppError;
use shortly::application::services::LinkService;
use shortly::config::Config;
use shortly::infrastructure::store::RedisStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shortly.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL and print its short id
    Shorten {
        /// Target URL (http or https)
        url: String,
    },

    /// Show the target URL and click count of a short id
    Lookup {
        /// Short id, with or without the trailing '+'
        short_id: String,
    },

    /// Show how many distinct URLs have been shortened
    Stats,

    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let store = RedisStore::connect(&config.redis_url)
        .await
        .context("Failed to connect to Redis")?;
    let service = LinkService::new(Arc::new(store));

    match cli.command {
        Commands::Shorten { url } => shorten(&service, &url).await?,
        Commands::Lookup { short_id } => lookup(&service, &short_id).await?,
        Commands::Stats => stats(&service).await?,
        Commands::Check => check(&service).await?,
    }

    Ok(())
}

async fn shorten(service: &LinkService, url: &str) -> Result<()> {
    match service.shorten(url).await {
        Ok(link) => {
            println!("{} {}", "✓".green().bold(), "Short link ready".green());
            println!("  {} {}", "Short id:".bold(), link.short_id.cyan());
            println!("  {} {}", "Target:  ".bold(), link.target_url);
            Ok(())
        }
        Err(AppError::InvalidInput(message)) => {
            anyhow::bail!("{} ({})", message, url)
        }
        Err(e) => Err(e.into()),
    }
}

async fn lookup(service: &LinkService, short_id: &str) -> Result<()> {
    let short_id = details_id(short_id);

    match service.get_details(short_id).await {
        Ok(details) => {
            println!("{}", format!("Short link {}", details.short_id).bold());
            println!("  {} {}", "Target:".bold(), details.target_url);
            println!(
                "  {} {}",
                "Clicks:".bold(),
                details.click_count.to_string().yellow()
            );
            Ok(())
        }
        Err(AppError::NotFound(_)) => {
            println!("{} No short link '{}'", "✗".red().bold(), short_id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Accepts both `1` and the details form `1+`; only one `+` is stripped,
/// the same way the web routes do.
fn details_id(arg: &str) -> &str {
    arg.strip_suffix('+').unwrap_or(arg)
}

async fn stats(service: &LinkService) -> Result<()> {
    let issued = service.links_issued().await?;

    println!("{}", "Statistics".bold().underline());
    println!("  {} {}", "Links issued:".bold(), issued.to_string().cyan());

    Ok(())
}

async fn check(service: &LinkService) -> Result<()> {
    if service.health_check().await {
        println!("{} {}", "✓".green().bold(), "Store connection OK".green());
        Ok(())
    } else {
        anyhow::bail!("Store did not answer PING");
    }
}
