use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    compute::{self, ComputeArgs},
    demo::{self, DemoArgs},
    version,
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "tof-sim", about = "Energetic span TOF calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute span descriptors for an energy profile.
    Compute(ComputeArgs),
    /// Run the bundled example cycle.
    Demo(DemoArgs),
    /// Print the package version.
    Version,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Compute(args) => compute::run(&args),
        Command::Demo(args) => demo::run(&args),
        Command::Version => version::run(),
    }
}
