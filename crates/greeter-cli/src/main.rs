use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use greeter_core::Greeter;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GREETER_LOG";

/// Prints a fixed greeting
#[derive(Parser)]
#[command(
    name = "greeter",
    disable_help_flag = true,
    disable_version_flag = true,
    long_about = None
)]
struct Cli {
    /// Accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    args: Vec<OsString>,
}

fn init_tracing() {
    // Logs go to stderr; stdout carries only the greeting.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    debug!(ignored_args = cli.args.len(), "starting greeter");

    let greeter = Greeter::new();
    let message = greeter.greeting();

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}").context("failed to write greeting to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    trace!(message, "greeting written");
    Ok(())
}
