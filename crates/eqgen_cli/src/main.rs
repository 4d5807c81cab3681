use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use eqgen_core::{feasible_count, EquationCollection, OperatorMode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod format;
mod json_types;
mod prompt;

use config::{EqgenConfig, OutputFormat};

/// Generate unique addition and subtraction drill equations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of equations to generate (prompted for when omitted)
    #[arg(allow_negative_numbers = true)]
    count: Option<i64>,

    /// Lowest accepted operand and result (operands are drawn from 0..=100)
    #[arg(long, allow_negative_numbers = true)]
    min: Option<i32>,

    /// Highest accepted operand and result (operands are drawn from 0..=100)
    #[arg(long, allow_negative_numbers = true)]
    max: Option<i32>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// How the displayed operator is chosen: from-kind, independent
    #[arg(long, value_parser = config::parse_operator_mode)]
    operator_mode: Option<OperatorMode>,

    /// Config file (defaults to ./eqgen_config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = EqgenConfig::load(cli.config.as_deref())?;
    if let Some(min) = cli.min {
        config.min = min;
    }
    if let Some(max) = cli.max {
        config.max = max;
    }
    if let Some(mode) = cli.operator_mode {
        config.operator_mode = mode;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    let checker = config.checker()?;

    let requested = match cli.count {
        Some(n) => n,
        None => {
            let stdin = io::stdin();
            prompt::read_count(&mut stdin.lock(), &mut io::stderr())?
        }
    };
    if requested < 0 {
        warn!(requested, "negative count, generating nothing");
    }
    let count = prompt::clamp_count(requested);

    if count > 0 {
        let available = feasible_count(&checker, config.operator_mode)?;
        if available < count {
            bail!(
                "cannot generate {} equations in range [{}, {}]: only {} distinct equations fit",
                count,
                checker.min(),
                checker.max(),
                available
            );
        }
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(count, min = checker.min(), max = checker.max(), "starting generation");
    let mut collection = EquationCollection::new(count).with_operator_mode(config.operator_mode);
    let stats = collection
        .generate(&checker, &mut rng)
        .context("equation generation failed")?;
    info!(
        attempts = stats.attempts,
        rejected = stats.rejected,
        duplicates = stats.duplicates,
        "generation complete"
    );

    let rendered = match config.format {
        OutputFormat::Text => format::render_text(&collection)?,
        OutputFormat::Json => {
            let output = format::json_output(&collection, &checker)?;
            let mut json = serde_json::to_string_pretty(&output)?;
            json.push('\n');
            json
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(rendered.as_bytes())?;
    handle.flush()?;
    Ok(())
}
