//! CLI administration tool for vimeo-thumbnail.
//!
//! Runs resolutions and inspects the cache without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a video id the way GET /v/76979871?s=medium would
//! cargo run --bin admin -- resolve 76979871 --size medium
//!
//! # Show what is cached for a video id
//! cargo run --bin admin -- cache get 76979871 --size large
//!
//! # Check cache and upstream connectivity
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`vimeo_thumbnail::config`].

use vimeo_thumbnail::config::{self, Config};
use vimeo_thumbnail::domain::cache_policy::CachePolicy;
use vimeo_thumbnail::domain::entities::{RequestOptions, ThumbnailSize, VideoId};
use vimeo_thumbnail::domain::upstream::MetadataClient;
use vimeo_thumbnail::infrastructure::cache::CacheService;
use vimeo_thumbnail::infrastructure::upstream::VimeoClient;
use vimeo_thumbnail::server::{build_thumbnail_service, connect_cache};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing vimeo-thumbnail.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Resolve a video id to its thumbnail URL
    Resolve {
        /// Numeric Vimeo video id
        video_id: String,

        /// Thumbnail size: large, medium or small
        #[arg(short, long, default_value = "large")]
        size: String,

        /// Do not fall back to smaller sizes
        #[arg(long)]
        no_fallback: bool,

        /// Skip the cache lookup (the result is still cached)
        #[arg(long)]
        no_cache: bool,
    },

    /// Inspect cached redirects
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Check cache and Vimeo API connectivity
    Check {
        /// Video id used to probe the Vimeo API
        #[arg(long, default_value = "76979871")]
        probe_id: String,
    },
}

/// Cache inspection subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Show the cached URL for a video id and size
    Get {
        /// Numeric Vimeo video id
        video_id: String,

        /// Thumbnail size: large, medium or small
        #[arg(short, long, default_value = "large")]
        size: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let cache = connect_cache(&config).await;

    match cli.command {
        Commands::Resolve {
            video_id,
            size,
            no_fallback,
            no_cache,
        } => {
            let options = RequestOptions {
                size: parse_size(&size)?,
                size_fallback: !no_fallback,
                use_cache: !no_cache,
            };
            resolve(&config, cache, &video_id, options).await?
        }
        Commands::Cache {
            action: CacheAction::Get { video_id, size },
        } => cache_get(&config, cache, &video_id, &size).await?,
        Commands::Check { probe_id } => check(&config, cache, &probe_id).await?,
    }

    Ok(())
}

fn parse_video_id(raw: &str) -> Result<VideoId> {
    VideoId::parse(raw).map_err(|e| anyhow::anyhow!("{}", e))
}

fn parse_size(raw: &str) -> Result<ThumbnailSize> {
    raw.parse().map_err(|e| anyhow::anyhow!("{}", e))
}

/// Runs one resolution and prints the redirect target or the failure.
async fn resolve(
    config: &Config,
    cache: Arc<dyn CacheService>,
    raw_id: &str,
    options: RequestOptions,
) -> Result<()> {
    println!("{}", "🔎 Resolve thumbnail".bright_blue().bold());
    println!();

    let video_id = parse_video_id(raw_id)?;
    let service = build_thumbnail_service(config, cache)?;

    println!("  Video:    {}", video_id.to_string().cyan());
    println!("  Size:     {}", options.size.to_string().cyan());
    println!("  Fallback: {}", options.size_fallback);
    println!("  Cache:    {}", options.use_cache);
    println!();

    match service.resolve(&video_id, &options).await {
        Ok(url) => {
            println!("{} {}", "✅ 301 ->".green().bold(), url.bright_white());
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e.to_string().red());
        }
    }

    println!();
    Ok(())
}

/// Prints the cached value for a key, flagging values that would be ignored.
async fn cache_get(
    config: &Config,
    cache: Arc<dyn CacheService>,
    raw_id: &str,
    raw_size: &str,
) -> Result<()> {
    let video_id = parse_video_id(raw_id)?;
    let size = parse_size(raw_size)?;
    let policy = config.cache_policy();
    let key = policy.key(&video_id, size);

    println!(
        "{} ({})",
        "🗄  Cache entry".bright_blue().bold(),
        cache.backend_name().bright_black()
    );
    println!();
    println!("  Key: {}", key.cyan());

    match cache.get_url(&key).await {
        Ok(Some(url)) if CachePolicy::is_redirectable(&url) => {
            println!("  URL: {}", url.bright_white());
        }
        Ok(Some(url)) => {
            println!(
                "  URL: {} {}",
                format!("{url:?}").yellow(),
                "(malformed, ignored)".yellow()
            );
        }
        Ok(None) => println!("  {}", "Not cached".yellow()),
        Err(e) => println!("  {} {}", "❌ Cache error:".red(), e),
    }

    println!();
    Ok(())
}

/// Pings the cache backend and fetches metadata for `probe_id`.
async fn check(config: &Config, cache: Arc<dyn CacheService>, probe_id: &str) -> Result<()> {
    println!("{}", "🔍 Checking connectivity...".bright_blue().bold());
    println!();

    if cache.health_check().await {
        println!(
            "  {} Cache ({})",
            "✅".green(),
            cache.backend_name().bright_white()
        );
    } else {
        println!(
            "  {} Cache ({}) is not responding",
            "❌".red(),
            cache.backend_name().bright_white()
        );
    }

    let video_id = parse_video_id(probe_id)?;
    let client = VimeoClient::new(&config.vimeo_api_url, config.upstream_timeout())?;
    let url = client.metadata_url(&video_id);

    match client.fetch_metadata(&video_id).await {
        Ok(body) => println!(
            "  {} Vimeo API {} ({} bytes)",
            "✅".green(),
            url.bright_white(),
            body.len()
        ),
        Err(e) => println!("  {} Vimeo API {}: {}", "❌".red(), url.bright_white(), e),
    }

    println!();
    Ok(())
}
