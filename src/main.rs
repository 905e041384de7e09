mod app;
mod debounce;
mod format;
mod histogram;
mod normal;
mod page;
mod pixels;
mod viz;
mod vote_counts;

use crate::histogram::{Category, WinProbabilities};
use crate::page::Page;
use clap::{Args, Parser, Subcommand};
use log::*;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid page: {0}")]
    InvalidPage(String),
}

#[derive(Parser, Debug, Clone)]
#[command(name = "forecast-widgets")]
#[command(about = "Electoral-vote tooltip and win-probability sparklines in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Interactive dashboard: hover the vote-count bars, resize to re-bucket
    Tui(TuiArgs),
    /// Print the default tooltip and every race histogram
    Summary(SummaryArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// JSON page document with vote counts and races
    page: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs here instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct TuiArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
struct SummaryArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Histogram width in pixels (defaults to the terminal width)
    #[arg(long)]
    width: Option<u32>,
}

fn init_logging(args: &CommonArgs) -> Result<(), Error> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level));
    if let Some(path) = &args.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

fn summary(args: SummaryArgs, page: Page) {
    let columns = terminal_size::terminal_size().map(|(width, _)| width.0);
    let visualizer = columns
        .map(viz::DistributionVisualizer::for_columns)
        .unwrap_or_default();

    if let Some(vote_counts) = &page.vote_counts {
        visualizer.display_default_tooltip(&vote_counts.bars());
    }

    let Some(races) = &page.races else {
        warn!("Page has no races");
        return;
    };
    let mut win_probabilities = WinProbabilities::new();
    for category in Category::ALL {
        win_probabilities.collect_histograms(category, races.category(category));
    }
    // Same width a race row would get in the dashboard.
    let width = args
        .width
        .unwrap_or_else(|| columns.map_or(62, |c| c.saturating_sub(20) as u32));
    let n_buckets = win_probabilities.compute(width);
    info!("{} buckets for {} pixels", n_buckets, width);
    visualizer.display_histograms(&win_probabilities);
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    let common = match &cli.command {
        Command::Tui(args) => &args.common,
        Command::Summary(args) => &args.common,
    };
    init_logging(common)?;
    debug!("{:#?}", cli);

    let page = Page::load(&common.page)?;
    match cli.command {
        Command::Tui(_) => app::run(page)?,
        Command::Summary(args) => summary(args, page),
    }
    Ok(())
}
