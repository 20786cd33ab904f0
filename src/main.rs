// src/main.rs
//
// CLI flags:
//   -v, --verbose   : more log output (repeatable: debug, then trace)
//   -q, --quiet     : errors only
// RUST_LOG overrides both. Logs go to stderr.
// With no positional arguments the default file names are used.

use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "verbose")]
    quiet: bool,

    /// HTML file to embed
    #[arg(default_value = htmlembed::DEFAULT_INPUT)]
    input: PathBuf,

    /// Header file to generate (created or truncated)
    #[arg(default_value = htmlembed::DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let summary = htmlembed::run(&cli.input, &cli.output).with_context(|| {
        format!(
            "could not embed {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    tracing::debug!(written = summary.written, "done");
    Ok(())
}
