use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use moo_mover_rs::cli::{Cli, Command, RunArgs};
use moo_mover_rs::config::FarmConfig;
use moo_mover_rs::error::{FeedError, Result};
use moo_mover_rs::interface::{display_farm, display_log, display_summary};
use moo_mover_rs::state::{load_config, save_config, write_log_csv};
use moo_mover_rs::{CycleDriver, RandomConditions};

fn main() {
    let cli = Cli::parse();
    let quiet = matches!(&cli.command, Some(Command::Run(args)) if args.quiet);
    moo_mover_rs::logging::init(if quiet { "error" } else { "warn" });

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Run(args) => cmd_run(&cli.config, &args),
        Command::InitConfig { force } => cmd_init_config(&cli.config, force),
    }
}

/// Run the requested number of feeding cycles.
fn cmd_run(config_path: &Path, args: &RunArgs) -> Result<()> {
    let config = if config_path.exists() {
        let config = load_config(config_path)?;
        println!("Loaded farm configuration from {}", config_path.display());
        config
    } else {
        info!(path = %config_path.display(), "no configuration file, using the demo farm");
        FarmConfig::default()
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let conditions = RandomConditions::new(rng, &config.behaviour, &config.battery);
    let mut driver = CycleDriver::from_config(&config, conditions)?;

    display_farm(driver.session());

    let mut outcome = Ok(());
    for _ in 0..args.cycles {
        match driver.run_cycle() {
            Ok(report) => {
                if !args.quiet {
                    display_log(report.cycle, &report.entries);
                }
                display_summary(&report);
            }
            Err(e) => {
                // Show what happened before the robot stopped
                let cycle = driver.current_cycle();
                let entries: Vec<_> = driver.session().log.cycle(cycle).cloned().collect();
                display_log(cycle, &entries);
                outcome = Err(e);
                break;
            }
        }
    }

    if let Some(path) = &args.log_csv {
        write_log_csv(path, driver.session().log.entries())?;
        println!("Wrote feeding log to {}", path.display());
    }

    outcome
}

/// Write the demo farm configuration.
fn cmd_init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        return Err(FeedError::InvalidInput(format!(
            "{} already exists, use --force to overwrite",
            config_path.display()
        )));
    }

    save_config(config_path, &FarmConfig::default())?;
    println!("Wrote default farm configuration to {}", config_path.display());
    Ok(())
}
