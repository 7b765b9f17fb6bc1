use crate::error::SetupError;
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

/// SLURM expands `%A` to the parent job id and `%a` to the array index, so
/// each array element gets its own log file. Submission is rejected without a
/// file name on the output path.
pub const SLURM_LOG_PATTERN: &str = "slurm-%A_%a.out";

/// The derived output tree for one run day: `<base>/<Mon-DD-YYYY>/` with
/// `netcdf/`, `slurm/`, and `csv/` beneath it. Computed fresh on every
/// derivation run, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    /// Where the executable writes NetCDF results.
    pub netcdf_dir: PathBuf,
    /// Per-array-element log destination, pattern file name included.
    pub batch_log: PathBuf,
    /// Where the job actors write CSV diagnostics.
    pub csv_dir: PathBuf,
}

impl OutputLayout {
    /// Prepares today's output tree beneath `base`.
    ///
    /// Fails with [`SetupError::OutputBaseMissing`] if `base` itself does not
    /// exist: the base directory is the operator's responsibility, only the
    /// dated subtree is created here.
    pub fn prepare(base: &Path) -> Result<Self, SetupError> {
        Self::prepare_for_date(base, Local::now().date_naive())
    }

    /// Date-injected variant of [`prepare`](Self::prepare); `prepare` passes
    /// today's date.
    pub fn prepare_for_date(base: &Path, date: NaiveDate) -> Result<Self, SetupError> {
        if !base.is_dir() {
            return Err(SetupError::OutputBaseMissing {
                path: base.to_path_buf(),
            });
        }

        let dated = base.join(date.format("%b-%d-%Y").to_string());
        let netcdf_dir = dated.join("netcdf");
        let slurm_dir = dated.join("slurm");
        let csv_dir = dated.join("csv");

        // create_dir_all is a no-op for directories that already exist, so
        // re-running on the same day is safe.
        fs::create_dir_all(&netcdf_dir)?;
        fs::create_dir_all(&slurm_dir)?;
        fs::create_dir_all(&csv_dir)?;

        Ok(Self {
            netcdf_dir,
            batch_log: slurm_dir.join(SLURM_LOG_PATTERN),
            csv_dir,
        })
    }
}
