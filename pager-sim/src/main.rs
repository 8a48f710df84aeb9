use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod output;
mod replay;
mod scenario;

use replay::Replay;
use scenario::Scenario;

#[derive(Parser)]
#[command(name = "pager-sim")]
#[command(version, about = "Replays gesture scenarios through swipe-pager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario file and print every step
    Run {
        /// Path to the scenario JSON file
        scenario: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print a sample scenario to start from
    Sample,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("off,pager_sim=info,swipe_pager=info"))
        .unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
}

fn run(path: PathBuf, format: Format) -> Result<()> {
    let scenario = Scenario::load(&path)?;
    match format {
        Format::Text => {
            output::status("Replaying", format!("{} ({})", scenario.name, path.display()));
            let mut replay = Replay::new(&scenario);
            for step in &scenario.steps {
                output::print_step(&replay.apply(step));
            }
            let pager = replay.pager();
            let data = pager.data();
            let viewport = pager.viewport();
            output::status(
                "Finished",
                format!(
                    "settled on page {} of {} ({} items x {}) in a {}x{} viewport",
                    pager.page(),
                    pager.total_pages(),
                    data.source_len(),
                    data.repeat(),
                    viewport.x,
                    viewport.y
                ),
            );
        }
        Format::Json => {
            let reports = replay::run(&scenario);
            let json =
                serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let Cli { command } = Cli::parse();

    match command {
        Commands::Run { scenario, format } => run(scenario, format)?,
        Commands::Sample => {
            let json = serde_json::to_string_pretty(&Scenario::sample())
                .context("Failed to serialize the sample scenario")?;
            println!("{json}");
        }
    }

    Ok(())
}
