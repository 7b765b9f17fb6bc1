mod cli;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use summalaunch::workflows::setup::{self, SetupOutcome};
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("🚀 summa-launch v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let working_dir = std::env::current_dir()?;
    debug!("Working directory: {}", working_dir.display());

    match setup::run(&working_dir)? {
        SetupOutcome::Initialized { settings_path } => {
            info!("No settings document found; wrote a fresh one.");
            println!(
                "Created {}.\nFill in the placeholder values, then run summa-launch again to generate the batch artifacts.",
                settings_path.display()
            );
        }
        SetupOutcome::Derived {
            file_manager,
            runtime_config,
            batch_script,
            layout,
        } => {
            info!("Derivation complete.");
            println!("✅ Batch run artifacts are ready:");
            println!("   file manager:   {}", file_manager.display());
            println!("   runtime config: {}", runtime_config.display());
            println!("   batch script:   {}", batch_script.display());
            println!("   NetCDF output:  {}", layout.netcdf_dir.display());
            println!("\nSubmit with: sbatch {}", batch_script.display());
        }
    }

    Ok(())
}
