//! gfi-harvest - good first issues across blockchain projects
//!
//! A CLI tool that queries GitHub for open issues with a beginner-friendly
//! label in a list of repositories, tags them by ecosystem, and writes a
//! single JSON document for a static site.
//!
//! Exit codes:
//!   0 - Success (including runs where some repositories failed)
//!   1 - Configuration error or the output document could not be written

mod catalog;
mod cli;
mod config;
mod error;
mod github;
mod harvest;
mod models;
mod report;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::Args;
use config::{Config, DEFAULT_CONFIG_FILE};
use github::GitHubClient;
use harvest::IssueAggregator;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    info!("gfi-harvest v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run_harvest(args).await {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Harvest failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .gfi-harvest.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            DEFAULT_CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("✅ Created {} with default settings.", DEFAULT_CONFIG_FILE);
    println!("   Edit it to change the repositories, labels, tags, and output path.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Run the complete harvest. Returns the exit code.
async fn run_harvest(args: Args) -> Result<i32> {
    let start_time = Instant::now();

    let mut config = load_config(&args, Path::new(DEFAULT_CONFIG_FILE))?;
    config.merge_with_args(&args);
    config.validate().context("Invalid configuration")?;

    if args.dry_run {
        return Ok(handle_dry_run(&config));
    }

    if config.github.token.is_none() {
        debug!("No GitHub token configured; unauthenticated rate limits apply");
    }

    println!(
        "📥 Harvesting {} repositories from {}",
        config.repositories.len(),
        config.github.api_url
    );

    let client = GitHubClient::new(&config.github)?;
    let aggregator = IssueAggregator::new(
        config.repositories.clone(),
        client,
        config.github.delay(),
    );

    let harvest = aggregator.collect().await;

    println!("\n📝 Writing issues...");
    let output = &config.general.output;
    if let Err(e) = report::write_issues(output, &harvest.records) {
        error!("Error writing issues to file {}: {}", output.display(), e);
        eprintln!("\n❌ Error writing issues to {}: {}", output.display(), e);
        return Ok(1);
    }
    info!("Successfully saved issues to {}", output.display());

    if let Some(ref stamp_path) = config.general.last_update_file {
        match report::write_last_update(stamp_path, harvest.records.len(), Utc::now()) {
            Ok(()) => info!("Last-update stamp saved to {}", stamp_path.display()),
            Err(e) => warn!("Failed to write last-update stamp: {}", e),
        }
    }

    let summary = &harvest.summary;
    let duration = start_time.elapsed().as_secs_f64();

    println!("\n📊 Harvest Summary:");
    println!(
        "   Repositories: {} | ✅ {} ok | ⚠️  {} failed",
        summary.repositories, summary.succeeded, summary.failed
    );
    println!(
        "   Issues received: {} | kept: {}",
        summary.received, summary.records
    );
    for (repository, reason) in &harvest.failures {
        println!("   - {}: {}", repository, reason);
    }
    println!("   Duration: {:.1}s", duration);
    println!("\n✅ Harvest complete! Issues saved to: {}", output.display());

    Ok(0)
}

/// Handle --dry-run: list what would be fetched, exit.
fn handle_dry_run(config: &Config) -> i32 {
    println!("\n🔍 Dry run: no requests will be made.\n");

    if config.repositories.is_empty() {
        println!("   No repositories configured.");
    } else {
        println!(
            "   {} repositories would be queried:\n",
            config.repositories.len()
        );
        for repo in &config.repositories {
            println!(
                "     📦 {} [label: {}] ({})",
                repo.full_name(),
                repo.label,
                repo.tags.join(", ")
            );
        }
    }

    println!("\n   Output: {}", config.general.output.display());
    println!("\n✅ Dry run complete.");
    0
}

/// Load configuration from `--config`, the default file, or built-in defaults.
///
/// A config file that exists but cannot be parsed is an error either way.
fn load_config(args: &Args, default_path: &Path) -> Result<Config> {
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    match Config::load_if_exists(default_path)? {
        Some(config) => {
            info!("Loaded default config from {}", default_path.display());
            Ok(config)
        }
        None => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
