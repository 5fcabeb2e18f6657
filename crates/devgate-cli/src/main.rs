//! Devgate - pre-commit gate CLI
//!
//! The `devgate` command runs the commit gate (build, test, fmt,
//! clippy) and installs itself as a git pre-commit hook.
//!
//! ## Commands
//!
//! - `run`: execute the gate, stopping at the first failing step
//! - `install`: write `.git/hooks/pre-commit` for the current repo
//!
//! Invoked with no arguments (as git invokes hooks) it behaves like
//! `run`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use devgate::{telemetry, BuiltinStep, GatePipeline, GateReport, StepConfig};

#[derive(Parser)]
#[command(name = "devgate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pre-commit gate runner: build, test, fmt, clippy", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the commit gate (default when no subcommand is given)
    Run {
        /// Print the final gate report as JSON on stdout
        #[arg(long)]
        report_json: bool,
    },

    /// Install the gate as this repository's pre-commit hook
    Install {
        /// Overwrite an existing pre-commit hook
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    telemetry::init_tracing(cli.json, level);

    // Git invokes pre-commit hooks with no arguments, so an empty
    // command line means "run the gate".
    let command = cli.command.unwrap_or(Commands::Run { report_json: false });

    match command {
        Commands::Run { report_json } => cmd_run(report_json).await,
        Commands::Install { force } => cmd_install(force),
    }
}

async fn cmd_run(report_json: bool) -> Result<()> {
    let steps: Vec<StepConfig> = BuiltinStep::all()
        .iter()
        .map(|s| StepConfig::from_builtin(*s))
        .collect();

    let report = GatePipeline::run(&steps)
        .await
        .context("gate execution failed")?;

    if report_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if report.success {
        return Ok(());
    }

    std::process::exit(failure_exit_code(&report));
}

/// Map a failed gate to the runner's own exit status.
///
/// The failing step's code is passed through so the caller can tell a
/// build break from a lint break; anything unrepresentable as a
/// process exit code (0, negative, >255) collapses to 1.
fn failure_exit_code(report: &GateReport) -> i32 {
    report
        .first_failure()
        .map(|s| s.exit_code)
        .filter(|c| (1..=255).contains(c))
        .unwrap_or(1)
}

fn cmd_install(force: bool) -> Result<()> {
    // Like git itself, resolve everything from the current directory.
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let hook = devgate::install::install_pre_commit(&cwd, force)
        .context("failed to install pre-commit hook")?;
    info!(hook = %hook.display(), "Installed pre-commit hook");
    Ok(())
}
