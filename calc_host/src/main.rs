//! # keycalc
//!
//! Command-line entry point for the keystroke calculator.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use calc_host::{HostRuntime, HostRuntimeConfig, HostRuntimeError, HostSettings};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "keycalc")]
#[command(about = "Keystroke-driven pocket calculator")]
struct Cli {
    /// Keys to press, in order
    #[arg(short, long)]
    keys: Option<String>,
    /// Input script file
    #[arg(short, long)]
    script: Option<PathBuf>,
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Display width override
    #[arg(short, long)]
    width: Option<usize>,
    /// Print a JSON snapshot after every key press
    #[arg(long)]
    trace: bool,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn build_config(cli: Cli) -> Result<HostRuntimeConfig, HostRuntimeError> {
    let mut settings = match &cli.config {
        Some(path) => HostSettings::load(path)?,
        None => HostSettings::default(),
    };
    if let Some(width) = cli.width {
        settings.display_width = width;
    }

    let script = match &cli.script {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    Ok(HostRuntimeConfig {
        script,
        keys: cli.keys,
        settings,
        trace: cli.trace,
    })
}

fn run(cli: Cli) -> Result<(), HostRuntimeError> {
    let interactive = cli.keys.is_none() && cli.script.is_none();
    let mut runtime = HostRuntime::new(build_config(cli)?)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if interactive {
        runtime.run_interactive(io::stdin().lock(), &mut out)?;
    } else {
        runtime.run(&mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
