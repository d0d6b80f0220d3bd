use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use review_lag::config::{self, ApiConfig};
use review_lag::github::{ListOptions, RepoId};
use review_lag::ReportError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_OUTPUT: i32 = 5;

#[derive(Parser, Debug)]
#[command(name = "review-lag")]
#[command(about = "Export time to first review for GitHub pull requests as CSV", long_about = None)]
#[command(version)]
struct Cli {
    /// Comma-separated repositories, e.g. "octocat/Hello-World,rust-lang/rust"
    repos: String,

    /// Path of the CSV file to write
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/review-lag/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long)]
    api_url: Option<String>,

    /// Items requested per page (1-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    per_page: Option<u8>,

    /// Pages fetched per listing; 0 fetches every page
    #[arg(long)]
    max_pages: Option<u32>,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info,review_lag=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(err: &ReportError) -> i32 {
    match err {
        ReportError::InvalidIdentifier { .. } => EXIT_INPUT,
        ReportError::InvalidApiUrl { .. } | ReportError::Client { .. } => EXIT_CONFIG,
        ReportError::UpstreamRequestFailed { .. } => EXIT_NETWORK,
        ReportError::OutputIo { .. } => EXIT_OUTPUT,
    }
}

fn fail(err: ReportError) -> ! {
    let code = exit_code(&err);
    error!("{:#}", anyhow::Error::from(err));
    std::process::exit(code);
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let start_time = Instant::now();

    let file_config = match config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let repos = RepoId::parse_list(&cli.repos).unwrap_or_else(|e| fail(e));
    info!("processing repos: {}", cli.repos);
    info!("output file: {}", cli.output.display());

    // an explicit page size applies to reviews too; otherwise GitHub's default
    let explicit_per_page = cli.per_page.or(file_config.per_page);
    let options = ListOptions {
        per_page: explicit_per_page.unwrap_or(config::DEFAULT_PER_PAGE),
        review_per_page: explicit_per_page,
        max_pages: cli
            .max_pages
            .or(file_config.max_pages)
            .unwrap_or(config::DEFAULT_MAX_PAGES),
    };

    let token = review_lag::credentials::get_token_from_env();
    if token.is_none() {
        warn!(
            "{} is not set; sending unauthenticated requests",
            review_lag::credentials::ENV_TOKEN_VAR
        );
    }
    let api = ApiConfig {
        api_url: cli
            .api_url
            .or(file_config.api_url)
            .unwrap_or_else(|| config::DEFAULT_API_URL.to_string()),
        token,
    };

    let client = review_lag::github::create_client(&api).unwrap_or_else(|e| fail(e));

    let records = review_lag::report::collect_records(&client, &repos, &options)
        .await
        .unwrap_or_else(|e| fail(e));

    review_lag::output::write_csv(&records, &cli.output).unwrap_or_else(|e| fail(e));

    info!(
        "wrote {} pull requests to {} in {:?}",
        records.len(),
        cli.output.display(),
        start_time.elapsed()
    );
    std::process::exit(EXIT_SUCCESS);
}
