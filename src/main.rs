//! `ahp-priority` command line entry point.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use ahp_priority::adapters::{
    load_handoff, load_ranking_problem, load_weighing_problem, save_handoff, writer_for,
};
use ahp_priority::application::{RankAlternativesHandler, WeighCriteriaHandler};
use ahp_priority::config::AppConfig;
use ahp_priority::ports::{ReportFormat, ReportWriter};

#[derive(Parser)]
#[command(name = "ahp-priority")]
#[command(about = "Weigh criteria and rank alternatives with the Analytic Hierarchy Process")]
#[command(version)]
struct Cli {
    /// Configuration file (JSON, YAML or TOML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report format [json, yaml]; overrides the configured format
    #[arg(long, short = 'f', global = true)]
    format: Option<ReportFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive criteria weights from a pairwise comparison problem
    #[command(after_help = "\
Problem file (YAML):
  criteria: \"Price, Comfort, Style\"
  comparisons:
    - [1, 3, 5]
    - [\"1/3\", 1, 2]
    - [\"1/5\", \"1/2\", 1]")]
    Weigh {
        /// Weighting problem file (.json, .yaml, .yml)
        problem: PathBuf,

        /// Save the derived weights here for a later `rank`
        #[arg(long, value_name = "PATH")]
        handoff: Option<PathBuf>,
    },

    /// Rank alternatives against weighted criteria
    #[command(after_help = "\
Problem file (YAML):
  alternatives: \"Car A, Car B\"
  criteria_weights:          # omit when --criteria-weights is given
    criteria: \"Price, Comfort\"
    weights: \"0.6, 0.4\"
  comparisons:
    Price: [[1, 3], [0, 1]]
    Comfort: [[1, \"1/2\"], [0, 1]]")]
    Rank {
        /// Ranking problem file (.json, .yaml, .yml)
        problem: PathBuf,

        /// Criteria weights saved by `weigh --handoff`
        #[arg(long, value_name = "PATH")]
        criteria_weights: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    config.logging.init()?;

    let format = cli.format.unwrap_or(config.output.format);
    let writer = writer_for(format, config.output.precision);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Weigh { problem, handoff } => {
            cmd_weigh(&problem, handoff.as_deref(), writer.as_ref(), &mut out)
        }
        Commands::Rank {
            problem,
            criteria_weights,
        } => cmd_rank(&problem, criteria_weights.as_deref(), writer.as_ref(), &mut out),
    }?;

    out.flush()?;
    Ok(())
}

fn cmd_weigh(
    problem: &Path,
    handoff: Option<&Path>,
    writer: &dyn ReportWriter,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let cmd = load_weighing_problem(problem)
        .with_context(|| format!("Cannot weigh criteria from {}", problem.display()))?;
    let result = WeighCriteriaHandler::new().handle(cmd)?;

    writer.write_weighting(&result, out)?;

    if let Some(path) = handoff {
        save_handoff(path, &result.handoff())?;
        info!(path = %path.display(), "Criteria weights saved");
    }

    Ok(())
}

fn cmd_rank(
    problem: &Path,
    criteria_weights: Option<&Path>,
    writer: &dyn ReportWriter,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let previous = criteria_weights
        .map(load_handoff)
        .transpose()
        .context("Cannot load criteria weights")?;
    let cmd = load_ranking_problem(problem, previous)
        .with_context(|| format!("Cannot rank alternatives from {}", problem.display()))?;
    let result = RankAlternativesHandler::new().handle(cmd)?;

    writer.write_ranking(&result, out)?;
    Ok(())
}
