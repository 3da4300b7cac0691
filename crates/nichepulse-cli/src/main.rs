mod competitors;
mod fixtures;
mod forum;
mod gaps;
mod input;
mod report;
mod score;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use nichepulse_core::{AppConfig, ScoringConfig};
use nichepulse_engine::{DemandScorer, LexicalMatcher};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "nichepulse")]
#[command(about = "Score niche market signals and diff competitor snapshots")]
struct Cli {
    /// Scoring caps YAML (overrides NICHEPULSE_SCORING_PATH)
    #[arg(long, global = true)]
    scoring: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score one week of signals from a JSON file
    Score {
        /// Path to a `WeeklySignals` JSON file
        #[arg(long)]
        signals: PathBuf,
    },
    /// Score every `*.json` signals file in a directory concurrently
    Batch {
        /// Directory of `WeeklySignals` JSON files, one per niche
        #[arg(long)]
        dir: PathBuf,
        /// Maximum niches scored at once (defaults to NICHEPULSE_BATCH_CONCURRENCY)
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// Validate and rank gap opportunities from a JSON array
    Gaps {
        /// Path to a JSON array of gap opportunities
        #[arg(long)]
        input: PathBuf,
    },
    /// Detect changes between two snapshots of one competitor
    Diff {
        /// Path to the competitor JSON (`id`, `name`)
        #[arg(long)]
        competitor: PathBuf,
        /// Path to the earlier snapshot JSON
        #[arg(long)]
        previous: PathBuf,
        /// Path to the later snapshot JSON
        #[arg(long)]
        current: PathBuf,
    },
    /// Render a markdown demand report from weekly score history
    Report {
        /// Niche name shown in the report heading
        #[arg(long)]
        niche: String,
        /// Path to a JSON array of weekly scores
        #[arg(long)]
        history: PathBuf,
    },
    /// Print reproducible mock signals as JSON
    Mock {
        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Number of weeks to generate
        #[arg(long, default_value = "1")]
        count: usize,
    },
    /// Categorize forum posts and extract pain points, questions, requests and themes
    Posts {
        /// Path to a JSON array of posts (`title`, optional `body`)
        #[arg(long)]
        input: PathBuf,
        /// Number of common themes to list
        #[arg(long, default_value = "10")]
        top: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("nichepulse: no command given; run with --help for usage");
        return Ok(());
    };

    let config = nichepulse_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    match command {
        Commands::Score { signals } => {
            let scorer = build_scorer(&config, cli.scoring.as_deref())?;
            score::run_score(&scorer, &signals).await?;
        }
        Commands::Batch { dir, concurrency } => {
            let scorer = build_scorer(&config, cli.scoring.as_deref())?;
            let concurrency = concurrency.unwrap_or(config.batch_concurrency);
            score::run_batch(scorer, &dir, concurrency).await?;
        }
        Commands::Gaps { input } => gaps::run_rank_gaps(&input).await?,
        Commands::Diff {
            competitor,
            previous,
            current,
        } => competitors::run_diff(&competitor, &previous, &current).await?,
        Commands::Report { niche, history } => report::run_report(&niche, &history).await?,
        Commands::Mock { seed, count } => fixtures::run_mock(seed, count)?,
        Commands::Posts { input, top } => forum::run_posts(&input, top).await?,
    }

    Ok(())
}

/// Build the demand scorer from the CLI flag, then the env-configured path,
/// then built-in defaults.
fn build_scorer(
    config: &AppConfig,
    flag: Option<&Path>,
) -> anyhow::Result<DemandScorer<LexicalMatcher>> {
    let scoring = match flag.or(config.scoring_path.as_deref()) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading scoring caps");
            nichepulse_core::load_scoring_config(path)?
        }
        None => ScoringConfig::default(),
    };
    Ok(DemandScorer::new(scoring, LexicalMatcher)?)
}

#[cfg(test)]
mod tests;
