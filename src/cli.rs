use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pagescore",
    version,
    about = "Blog page quality scoring and recommendation CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract signals from a local HTML snapshot and score the page
    Analyze(AnalyzeCommand),
    /// Score a signals JSON document produced by an external collector
    Score(ScoreCommand),
    /// Print the signals extracted from a local HTML snapshot as JSON
    Signals(SignalsCommand),
    /// Print the validated criterion weights
    Weights(WeightsCommand),
}

#[derive(Args)]
pub struct PageArgs {
    /// Saved HTML of the rendered page
    pub html: PathBuf,
    /// Extracted main text; derived from the HTML when omitted
    #[arg(long)]
    pub text: Option<PathBuf>,
    /// Address the page was served from
    #[arg(long)]
    pub url: Option<String>,
    /// Day freshness is measured against (defaults to today, UTC)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct ScoringArgs {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Exit with status 1 when the overall score is below this value
    #[arg(long, value_name = "SCORE")]
    pub fail_under: Option<f64>,
    /// Project configuration file (defaults to ./pagescore.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub page: PageArgs,
    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub signals: PathBuf,
    /// Address recorded in the report envelope
    #[arg(long)]
    pub url: Option<String>,
    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Args)]
pub struct SignalsCommand {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args)]
pub struct WeightsCommand {
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
