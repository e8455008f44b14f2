use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use store::SUPPORTED_MAXIMUM;
use tools::{run_session, walkthrough, DriverConfig, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dlist",
    version,
    about = "Console driver for the dlist delta list"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read one magnitude per line from stdin and insert it into a delta list.
    Run {
        /// Capacity of the delta list.
        #[arg(
            long,
            default_value_t = 1000,
            value_parser = clap::value_parser!(u16).range(1..=i64::from(SUPPORTED_MAXIMUM))
        )]
        capacity: u16,
        /// Size of the text buffer the list is rendered into after every step.
        #[arg(long, default_value_t = 1000)]
        render_bytes: usize,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Run the scripted positional store demonstration.
    Walkthrough,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            capacity,
            render_bytes,
            format,
        } => {
            let config = DriverConfig {
                capacity,
                render_bytes,
            };
            config.validate().context("invalid driver configuration")?;
            let summary = run_session(
                &config,
                io::stdin().lock(),
                io::stdout().lock(),
                format.into(),
            )?;
            if summary.inserted == 0 && summary.failed + summary.unparsed > 0 {
                tracing::warn!("no magnitude was inserted");
            }
        }
        Command::Walkthrough => {
            walkthrough(io::stdout().lock())?;
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
