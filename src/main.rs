use clap::{Args, Parser, Subcommand};
use cp_scorer::{
    config::Settings,
    dashboard::{Dashboard, SearchOutcome},
    models::{CpScoreError, Platform, UserMetrics},
    report,
    scoring::{calculate_score, validate_metrics, WEIGHTS},
};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "cp_scorer")]
#[clap(about = "Score competitive-programming performance from Codeforces and LeetCode", long_about = None)]
struct Cli {
    /// Settings file layered over the built-in defaults
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a performance score from raw metrics
    Score {
        #[clap(flatten)]
        metrics: MetricArgs,

        /// Fill missing maxima from the configured reference values
        #[clap(long)]
        reference_maxima: bool,

        /// Print the result as JSON
        #[clap(long)]
        json: bool,
    },

    /// Report problems with a metrics set without scoring it
    Validate {
        #[clap(flatten)]
        metrics: MetricArgs,
    },

    /// Show the weight table
    Weights,

    /// Fetch and score a Codeforces handle
    Codeforces {
        handle: String,

        /// Number of submissions to fetch
        #[clap(long, value_parser = clap::value_parser!(u32).range(1..))]
        count: Option<u32>,

        #[clap(long)]
        json: bool,
    },

    /// Fetch and score a LeetCode username
    Leetcode {
        username: String,

        /// Number of recent submissions to fetch
        #[clap(long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,

        #[clap(long)]
        json: bool,
    },

    /// List upcoming Codeforces contests
    Contests {
        /// Maximum number of contests to show
        #[clap(long, default_value_t = 10)]
        limit: usize,

        #[clap(long)]
        json: bool,
    },

    /// Fetch and score a user on a platform given by name (codeforces/cf, leetcode/lc)
    Search {
        platform: String,
        handle: String,

        #[clap(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct MetricArgs {
    /// JSON metrics file (camelCase keys); flags override its values
    #[clap(long)]
    file: Option<PathBuf>,

    #[clap(long)]
    rating: Option<f64>,
    #[clap(long)]
    max_rating: Option<f64>,

    #[clap(long)]
    contests: Option<f64>,
    #[clap(long)]
    max_contests: Option<f64>,

    #[clap(long)]
    streak: Option<f64>,
    #[clap(long)]
    max_streak: Option<f64>,

    #[clap(long)]
    upsolve: Option<f64>,
    #[clap(long)]
    max_upsolve: Option<f64>,

    #[clap(long)]
    problems: Option<f64>,
    #[clap(long)]
    max_problems: Option<f64>,

    #[clap(long)]
    topics: Option<f64>,
    #[clap(long)]
    max_topics: Option<f64>,

    /// Submission success percentage (0-100)
    #[clap(long)]
    accuracy: Option<f64>,

    /// Virtual contest performance percentage (0-100)
    #[clap(long)]
    virtual_performance: Option<f64>,
}

impl MetricArgs {
    fn to_metrics(&self) -> anyhow::Result<UserMetrics> {
        let mut metrics = match &self.file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
                serde_json::from_str::<UserMetrics>(&raw).map_err(CpScoreError::from)?
            }
            None => UserMetrics::default(),
        };

        metrics.overlay(&UserMetrics {
            rating: self.rating,
            max_rating: self.max_rating,
            contests_participated: self.contests,
            max_contests: self.max_contests,
            streak_days: self.streak,
            max_streak: self.max_streak,
            upsolve_count: self.upsolve,
            max_upsolve: self.max_upsolve,
            total_problems: self.problems,
            max_problems: self.max_problems,
            topics_covered: self.topics,
            max_topics: self.max_topics,
            accuracy: self.accuracy,
            virtual_performance: self.virtual_performance,
        });

        Ok(metrics)
    }
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<(Settings, bool)> {
    match path {
        Some(path) => {
            let settings = Settings::from_file(path)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?;
            Ok((settings, false))
        }
        None => Ok(Settings::new()
            .map(|s| (s, false))
            .unwrap_or_else(|_| (Settings::default(), true))),
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_codeforces(settings: &Settings, handle: &str, json: bool) -> anyhow::Result<()> {
    let dashboard = Dashboard::from_settings(settings)?;

    match dashboard.search_codeforces(handle).await? {
        SearchOutcome::Applied(snapshot) if json => print_json(&snapshot)?,
        SearchOutcome::Applied(snapshot) => print!("{}", report::format_codeforces(&snapshot)),
        SearchOutcome::Superseded => info!("Codeforces search for {} was superseded", handle),
    }
    Ok(())
}

async fn run_leetcode(settings: &Settings, username: &str, json: bool) -> anyhow::Result<()> {
    let dashboard = Dashboard::from_settings(settings)?;

    match dashboard.search_leetcode(username).await? {
        SearchOutcome::Applied(snapshot) if json => print_json(&snapshot)?,
        SearchOutcome::Applied(snapshot) => print!("{}", report::format_leetcode(&snapshot)),
        SearchOutcome::Superseded => info!("LeetCode search for {} was superseded", username),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut settings, used_defaults) = load_settings(cli.config.as_deref())?;

    init_tracing(&settings.app.log_level);
    if used_defaults {
        info!("Using default settings");
    }

    // Validate settings
    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    match cli.command {
        Commands::Score {
            metrics,
            reference_maxima,
            json,
        } => {
            let mut metrics = metrics.to_metrics()?;
            if reference_maxima {
                metrics = metrics.with_reference_maxima(&settings.scoring.reference_maxima);
            }

            for warning in validate_metrics(&metrics) {
                warn!("{}", warning);
            }

            let result = calculate_score(&metrics);
            if json {
                print_json(&result)?;
            } else {
                print!("{}", report::format_score(&result));
            }
        }

        Commands::Validate { metrics } => {
            let metrics = metrics.to_metrics()?;
            print!("{}", report::format_warnings(&validate_metrics(&metrics)));
        }

        Commands::Weights => {
            print!("{}", report::format_weights(&WEIGHTS));
        }

        Commands::Codeforces { handle, count, json } => {
            if let Some(count) = count {
                settings.api.submission_count = count;
            }
            run_codeforces(&settings, &handle, json).await?;
        }

        Commands::Leetcode { username, limit, json } => {
            if let Some(limit) = limit {
                settings.api.recent_submission_limit = limit;
            }
            run_leetcode(&settings, &username, json).await?;
        }

        Commands::Contests { limit, json } => {
            let upcoming = Dashboard::from_settings(&settings)?.upcoming_contests(limit).await?;
            if json {
                print_json(&upcoming)?;
            } else {
                print!("{}", report::format_upcoming(&upcoming));
            }
        }

        Commands::Search { platform, handle, json } => {
            match Platform::from_str(&platform) {
                Some(Platform::Codeforces) => run_codeforces(&settings, &handle, json).await?,
                Some(Platform::LeetCode) => run_leetcode(&settings, &handle, json).await?,
                None => return Err(CpScoreError::PlatformNotSupported(platform).into()),
            }
        }
    }

    Ok(())
}
