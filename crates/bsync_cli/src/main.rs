use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use bsync_core::{ArticleSource, Result};
use bsync_fetch::{SyncConfig, SyncJob};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Debug, Clone)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total = 0u64;
        let mut digits = String::new();
        let mut has_unit = false;

        for c in s.trim().chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            let num: u64 = digits
                .parse()
                .map_err(|_| format!("expected a number before '{}'", c))?;
            total += match c {
                's' => num,
                'm' => num * 60,
                'h' => num * 3600,
                'd' => num * 86400,
                _ => return Err(format!("unknown duration unit '{}'", c)),
            };
            digits.clear();
            has_unit = true;
        }

        // a bare trailing number means seconds
        if !digits.is_empty() {
            total += digits
                .parse::<u64>()
                .map_err(|_| "invalid number in duration".to_string())?;
            has_unit = true;
        }

        if !has_unit {
            return Err("duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Keeps the portfolio's blog artifact in sync with dev.to", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the account's published articles and rewrite the local artifact
    Sync {
        /// Account whose articles are synced
        #[arg(long, env = "BSYNC_USERNAME", default_value = "parshuram_singh")]
        username: String,
        /// Article-listing endpoint
        #[arg(long, env = "BSYNC_ENDPOINT", default_value = "https://dev.to/api/articles")]
        endpoint: String,
        /// Records requested per page
        #[arg(long, env = "BSYNC_PER_PAGE", default_value_t = 30)]
        per_page: u32,
        /// Safety cap on pages fetched per run; 0 disables the cap
        #[arg(long, env = "BSYNC_MAX_PAGES", default_value_t = 100)]
        max_pages: u32,
        /// Artifact path the UI reads
        #[arg(long, env = "BSYNC_OUT", default_value = "public/blogs.json")]
        out: PathBuf,
        /// Re-run on a fixed interval (e.g. 30m, 1h) instead of once
        #[arg(long)]
        interval: Option<HumanDuration>,
    },
    /// Print the article list the UI would see right now
    Show {
        /// Artifact path the UI reads
        #[arg(long, env = "BSYNC_OUT", default_value = "public/blogs.json")]
        out: PathBuf,
        /// Show only the first N articles
        #[arg(long)]
        limit: Option<usize>,
    },
}

async fn sync_once(job: &SyncJob, out: &PathBuf) -> Result<()> {
    let count = job.run().await?;
    println!("✅ {} updated successfully! ({} articles)", out.display(), count);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Sync {
            username,
            endpoint,
            per_page,
            max_pages,
            out,
            interval,
        } => {
            let config = SyncConfig {
                username,
                endpoint,
                per_page,
                max_pages: (max_pages > 0).then_some(max_pages),
                output: out.clone(),
            };
            let job = SyncJob::new(config);

            if let Some(interval) = interval {
                info!("⏲ Running every {}s", interval.0.as_secs());
                loop {
                    if let Err(e) = sync_once(&job, &out).await {
                        eprintln!("❌ Sync failed: {}", e);
                    }
                    info!("Waiting {}s before next sync", interval.0.as_secs());
                    tokio::time::sleep(interval.0).await;
                }
            }

            sync_once(&job, &out).await?;
        }
        Commands::Show { out, limit } => {
            let source = bsync_store::sources::select(&out).await;
            info!("📚 Reading articles from the {} source", source.name());
            let articles = source.articles().await?;
            for article in articles.iter().take(limit.unwrap_or(articles.len())) {
                println!(
                    "{:>3}. {} ({} ❤️) - {}",
                    article.id, article.title, article.public_reactions_count, article.url
                );
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
