use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

/// summa-launch takes no positional arguments or functional flags: behavior
/// branches entirely on whether `Summa_Actors_Settings.json` exists in the
/// current directory. Only logging knobs live here.
#[derive(Parser, Debug)]
#[command(
    author = "Global Water Futures computing group",
    version,
    about = "summa-launch - Bootstraps SUMMA-Actors batch runs: creates the settings document on first run, then derives the file manager, CAF runtime config, and SLURM array script from it.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
