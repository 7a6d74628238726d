//! GuideMode command-line interface.
//!
//! Rasterise waveguide cross-sections from TOML job files and prepare solver
//! requests:
//! ```sh
//! guidemode-cli run job.toml
//! guidemode-cli validate job.toml
//! guidemode-cli materials
//! ```

mod config;
mod exchange;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "guidemode-cli")]
#[command(about = "GuideMode: Waveguide Cross-Section Rasteriser")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rasterise a cross-section from a TOML job file and write the solver
    /// request (and mode output, if a solver response is configured).
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file without rasterising.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Display the available material presets.
    Materials,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("GuideMode Rasteriser");
            println!("====================");
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));
            runner::run_job(&job, &out_dir)?;

            println!("Done.");
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            let stack = runner::validate_job(&job)?;
            println!(
                "Configuration is valid: {} ({} layers, {}x{} grid)",
                config.display(),
                stack.len(),
                job.domain.nx(),
                job.domain.ny(),
            );
            Ok(())
        }
        Commands::Materials => {
            println!("Available materials:");
            println!();
            println!("  Silicon — n = 3.48");
            println!("  Silica  — n = 1.44");
            println!("  Air     — n = 1.0");
            println!("  Custom  — user-supplied index (> 0), via 'index = ...'");
            Ok(())
        }
    }
}
