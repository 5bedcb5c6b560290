//! Replays a recorded touch trace through the gesture recognizer.
mod output;
mod trace;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;

use output::OutputFormat;
use trace::Trace;

#[derive(Debug, Parser)]
#[command(name = "tactile-replay")]
#[command(about = "Replays a touch trace and prints the recognized gestures")]
struct Cli {
    /// The trace file (TOML).
    trace: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let trace = Trace::load(&cli.trace)?;
    let gestures = trace.replay()?;

    let mut out = io::stdout().lock();
    for gesture in &gestures {
        writeln!(out, "{}", cli.format.render(gesture)?)?;
    }
    Ok(())
}
