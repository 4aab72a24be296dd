use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Moo Mover: simulates a robot that collects, mixes and serves cattle feed.
#[derive(Parser, Debug)]
#[command(name = "moo-mover")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the farm configuration JSON file.
    #[arg(short, long, global = true, default_value = "farm.json")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run daily feeding cycles and print the transcript.
    Run(RunArgs),

    /// Write the default farm configuration to the config path.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of daily cycles to run.
    #[arg(long, default_value = "1")]
    pub cycles: u32,

    /// Random seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write the feeding log to this CSV file.
    #[arg(long)]
    pub log_csv: Option<PathBuf>,

    /// Only print per-cycle summaries, not every log line.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            cycles: 1,
            seed: None,
            log_csv: None,
            quiet: false,
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Run(RunArgs::default())
    }
}
