mod analyze;
mod cli;
mod config;
mod error;
mod report;
mod scan;
mod types;

use crate::analyze::Engine;
use crate::error::PageScoreError;
use crate::scan::filesystem::{read_input, read_optional_input};
use crate::types::report::{AnalysisResult, PageReport};
use crate::types::signals::PageSignals;
use chrono::Utc;
use clap::Parser;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 1;
    pub const CONFIG_FAILURE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pagescore={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_engine(explicit: Option<&Path>) -> Result<Engine, PageScoreError> {
    let root = std::env::current_dir()?;
    let loaded = config::load_config(&root, explicit).map_err(|err| match err {
        PageScoreError::PathNotFound(path) => {
            PageScoreError::Configuration(format!("config file not found: {path}"))
        }
        other => other,
    })?;
    Engine::from_config(&loaded)
}

/// Length-prefixed so that moving bytes between parts changes the digest.
fn fingerprint(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

fn page_input(page: &cli::PageArgs) -> Result<(scan::PageInput, String), PageScoreError> {
    let html = read_input(&page.html)?;
    let text = read_optional_input(page.text.as_deref())?;
    let source_sha256 = fingerprint(&[html.as_str(), text.as_deref().unwrap_or_default()]);
    let reference_date = page.date.unwrap_or_else(|| Utc::now().date_naive());
    let mut input = scan::PageInput::new(reference_date);
    input.html = Some(html);
    input.text = text;
    input.url = page.url.clone();
    Ok((input, source_sha256))
}

fn validate_fail_under(fail_under: Option<f64>) -> Result<(), PageScoreError> {
    match fail_under {
        Some(value) if !value.is_finite() || !(0.0..=100.0).contains(&value) => Err(
            PageScoreError::Configuration(format!("--fail-under must be within 0-100, got {value}")),
        ),
        _ => Ok(()),
    }
}

fn emit_report(
    result: AnalysisResult,
    url: Option<String>,
    source_sha256: String,
    scoring: &cli::ScoringArgs,
) -> Result<i32, PageScoreError> {
    let page_report = PageReport {
        url,
        analyzed_at: Utc::now().to_rfc3339(),
        source_sha256,
        result,
    };
    let output_format = match scoring.format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    };
    let rendered = report::render(&page_report, output_format)?;
    println!("{rendered}");

    match scoring.fail_under {
        Some(threshold) if page_report.result.overall_score < threshold => {
            eprintln!(
                "overall score {:.2} is below --fail-under {threshold}",
                page_report.result.overall_score
            );
            Ok(exit_code::BELOW_THRESHOLD)
        }
        _ => Ok(exit_code::SUCCESS),
    }
}

fn run() -> Result<i32, PageScoreError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    match cli.command {
        cli::Commands::Analyze(cmd) => {
            validate_fail_under(cmd.scoring.fail_under)?;
            let engine = load_engine(cmd.scoring.config.as_deref())?;
            let (input, source_sha256) = page_input(&cmd.page)?;
            let signals = scan::discover(&input);
            let result = analyze::analyze(&signals, &engine);
            emit_report(result, input.url, source_sha256, &cmd.scoring)
        }
        cli::Commands::Score(cmd) => {
            validate_fail_under(cmd.scoring.fail_under)?;
            let engine = load_engine(cmd.scoring.config.as_deref())?;
            let raw = read_input(&cmd.signals)?;
            let signals: PageSignals = serde_json::from_str(&raw).map_err(|err| {
                PageScoreError::InvalidSignals(format!("{}: {err}", cmd.signals.display()))
            })?;
            let result = analyze::analyze(&signals, &engine);
            emit_report(result, cmd.url, fingerprint(&[raw.as_str()]), &cmd.scoring)
        }
        cli::Commands::Signals(cmd) => {
            let (input, _) = page_input(&cmd.page)?;
            let signals = scan::discover(&input);
            println!("{}", serde_json::to_string_pretty(&signals)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Weights(cmd) => {
            let engine = load_engine(cmd.config.as_deref())?;
            for (criterion, weight) in engine.weights().iter() {
                println!("{:<20} {weight:.3}", criterion.as_str());
            }
            println!("{:<20} {:.3}", "total", engine.weights().sum());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_configuration() {
                exit_code::CONFIG_FAILURE
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
