use crate::core::partition::JobPlan;
use crate::error::SetupError;
use std::fs;
use std::path::{Path, PathBuf};

pub const BATCH_SCRIPT_NAME: &str = "run_summa.sh";

/// Fixed wall-clock request; runs that need more get resubmitted by the
/// operator with a hand-edited script.
pub const WALL_CLOCK_LIMIT: &str = "24:00:00";

/// Everything the batch script embeds. Paths arrive pre-derived; this module
/// performs no filesystem reads of its own.
#[derive(Debug, Clone)]
pub struct BatchScriptInputs<'a> {
    pub cpus_per_task: u32,
    pub memory: &'a str,
    pub job_name: &'a str,
    pub account: &'a str,
    pub executable_path: &'a str,
    /// Per-array-element log destination (pattern file name included).
    pub batch_log: &'a Path,
    /// The CAF runtime configuration handed to the executable.
    pub runtime_config: &'a Path,
    /// Working directory holding the settings document, passed as `-c`.
    pub config_dir: &'a Path,
    pub plan: JobPlan,
}

/// Renders the sbatch script: the `#SBATCH` directive block, then the
/// per-element chunk arithmetic, then the executable invocation.
///
/// The shell block is the dispatch-time mirror of
/// [`partition::element_range`](crate::core::partition::element_range):
/// `gruStart = 1 + gruCount*offset`, and the last element shrinks its count
/// rather than overrun `gruMax`. It is evaluated by each array element once
/// SLURM assigns `SLURM_ARRAY_TASK_ID`, which is why it is emitted as shell
/// arithmetic instead of being precomputed here.
pub fn render(inputs: &BatchScriptInputs) -> String {
    let mut script = String::new();
    script.push_str("#!/bin/bash\n");
    script.push_str(&format!("#SBATCH --cpus-per-task={}\n", inputs.cpus_per_task));
    script.push_str(&format!("#SBATCH --time={}\n", WALL_CLOCK_LIMIT));
    script.push_str(&format!("#SBATCH --mem={}\n", inputs.memory));
    script.push_str(&format!("#SBATCH --job-name={}\n", inputs.job_name));
    script.push_str(&format!("#SBATCH --account={}\n", inputs.account));
    script.push_str(&format!("#SBATCH --output={}\n", inputs.batch_log.display()));
    script.push_str(&format!("#SBATCH --array=0-{}\n\n", inputs.plan.max_index));

    script.push_str(&format!("gruMax={}\n", inputs.plan.total_units));
    script.push_str(&format!("gruCount={}\n", inputs.plan.chunk_size));
    script.push_str("offset=$SLURM_ARRAY_TASK_ID\n");
    script.push_str("gruStart=$(( 1 + gruCount*offset ))\n");
    script.push_str("check=$(( $gruStart + $gruCount ))\n");
    script.push_str("if [ $check -gt $gruMax ]\n");
    script.push_str("then\n");
    script.push_str("    gruCount=$(( gruMax-gruStart+1 ))\n");
    script.push_str("fi\n\n");

    script.push_str(&format!(
        "{} -g ${{gruStart}} -n ${{gruCount}} -c {} --config-file={}\n",
        inputs.executable_path,
        inputs.config_dir.display(),
        inputs.runtime_config.display()
    ));
    script
}

/// Writes `run_summa.sh` into `dir`, marks it executable on Unix, and returns
/// its path.
pub fn emit(inputs: &BatchScriptInputs, dir: &Path) -> Result<PathBuf, SetupError> {
    let path = dir.join(BATCH_SCRIPT_NAME);
    fs::write(&path, render(inputs))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    }
    Ok(path)
}
