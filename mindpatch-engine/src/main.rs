//! MindPatch
//!
//! Terminal driver for the persuasion-susceptibility exercise.
//! Loads and validates content once, then plays sessions until the player stops.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mindpatch::{
    cli::{self, PlayOutcome, Prompter},
    content, Config, GameSession, SessionReport, Sway, SwayConvention, VERSION,
};

#[derive(Parser, Debug)]
#[command(name = "mindpatch")]
#[command(about = "See which persuasion techniques move you the most", version)]
struct Args {
    /// Round content (JSON array of records); overrides MINDPATCH_CONTENT
    content: Option<PathBuf>,

    /// Rounds with a sway above this many points are reviewed at the end
    #[arg(long)]
    review_threshold: Option<Sway>,

    /// Aggregate |delta| instead of signed delta
    #[arg(long)]
    absolute: bool,

    /// Print the session report as JSON after the analysis
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = resolve_config(&args);

    info!("MindPatch v{}", VERSION);
    info!("Content: {}", config.content_path.display());

    let rounds = content::load(&config.content_path)
        .with_context(|| format!("failed to load game data from {}", config.content_path.display()))?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    prompter.line(&format!("MindPatch v{} | {} rounds", VERSION, rounds.len()))?;

    loop {
        let mut session = GameSession::new(rounds.clone());
        let started_at = Utc::now();
        info!("Starting session {}", session.id_string());

        if cli::play(&mut session, &mut prompter)? == PlayOutcome::Aborted {
            prompter.line("\nInput closed; leaving without an analysis.")?;
            break;
        }

        prompter.line("\nGame over! Here is your X-Ray analysis:")?;
        cli::show_results(&session, &mut prompter, config.sway_convention, config.review_threshold)?;

        if args.json {
            let report = SessionReport::build(
                &session,
                config.sway_convention,
                config.review_threshold,
                started_at,
                Utc::now(),
            );
            prompter.line(&report.to_json().context("failed to serialize session report")?)?;
        }

        if !prompter.confirm("\nPlay again? [y/N] ")? {
            break;
        }
    }

    Ok(())
}

/// Environment first, then command-line flags on top.
fn resolve_config(args: &Args) -> Config {
    let mut config = Config::from_env();

    if let Some(path) = &args.content {
        config.content_path = path.clone();
    }
    if let Some(threshold) = args.review_threshold {
        config.review_threshold = threshold;
    }
    if args.absolute {
        config.sway_convention = SwayConvention::Absolute;
    }

    config
}
