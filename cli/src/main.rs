//! # review-insight
//!
//! Classify product reviews from the command line.
//!
//! ## Usage
//!
//! ```bash
//! # One review per line, from a file or stdin
//! review-insight analyze reviews.txt
//! cat reviews.txt | review-insight analyze --json
//!
//! # CSV export and a standalone HTML report
//! review-insight analyze reviews.txt --export out/ --report report.html
//!
//! # Print a random example set
//! review-insight example --seed 7
//! ```

mod download;
mod http_classifier;
mod output;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use review_insight::export::export_results_as;
use review_insight::session::split_reviews;
use review_insight::{InsightConfig, ModelStatus, Session, SessionController, corpus};
use review_report::{ReportOptions, render_report};

use download::DirectoryDownload;
use http_classifier::HttpModelLoader;

#[derive(Parser, Debug)]
#[command(name = "review-insight")]
#[command(about = "Sentiment analysis for product reviews")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Config file (default: .review-insight/config.toml in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify reviews, one per line
    Analyze(AnalyzeArgs),
    /// Print a random selection of example reviews
    Example {
        /// Seed for a reproducible selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Input file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Analyze a random example set instead of the input
    #[arg(long, conflicts_with = "input")]
    example: bool,

    /// Seed for --example
    #[arg(long, requires = "example")]
    seed: Option<u64>,

    /// Directory to write the CSV export into
    #[arg(long)]
    export: Option<PathBuf>,

    /// Write a standalone HTML report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> Result<InsightConfig> {
    match path {
        Some(path) => InsightConfig::try_load_from_path(path)
            .with_context(|| format!("invalid config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("cannot resolve current directory")?;
            Ok(InsightConfig::load(&cwd))
        }
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
    }
}

async fn analyze(config: InsightConfig, args: AnalyzeArgs) -> Result<()> {
    let mut session = Session::with_example_range(config.examples);
    if args.example {
        session.load_example(&mut rng(args.seed));
    } else {
        session.set_input(read_input(args.input.as_deref())?);
    }

    let results = if split_reviews(session.input_text()).is_empty() {
        debug!("input has no reviews, skipping model load");
        Vec::new()
    } else {
        let loader = HttpModelLoader::new(config.classifier.clone());
        let mut controller = SessionController::with_session(loader, session);
        if let ModelStatus::Failed(reason) = controller.start().await {
            bail!("sentiment model unavailable: {reason}");
        }
        controller.analyze().await.context("analysis failed")?.to_vec()
    };

    let highlighter = config.highlighter();
    if args.json {
        println!("{}", output::render_json(&results)?);
    } else {
        print!("{}", output::render_text(&results, &highlighter));
    }

    if let Some(dir) = args.export {
        let target = DirectoryDownload::new(&dir);
        if export_results_as(&results, &config.export.filename, &target)? {
            info!("CSV written to {}", target.path_for(&config.export.filename).display());
        }
    }

    if let Some(path) = args.report {
        let html = render_report(&results, &highlighter, &ReportOptions::default());
        std::fs::write(&path, html)
            .with_context(|| format!("cannot write report {}", path.display()))?;
        info!("HTML report written to {}", path.display());
    }
    Ok(())
}

fn example(config: &InsightConfig, seed: Option<u64>) {
    println!("{}", corpus::example_text(config.examples, &mut rng(seed)));
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Analyze(args) => analyze(config, args).await,
        Command::Example { seed } => {
            example(&config, seed);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
