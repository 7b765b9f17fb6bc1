use crate::error::SetupError;
use std::fs;
use std::path::{Path, PathBuf};

pub const RUNTIME_CONFIG_NAME: &str = "caf-application.conf";

/// Renders the CAF runtime configuration bounding the executable's scheduler
/// thread pool.
pub fn render(cpu_count: u32) -> String {
    format!(
        "caf {{ \n  scheduler {{\n   max-threads = {}\n    }}\n}}",
        cpu_count
    )
}

/// Writes `caf-application.conf` into `dir` and returns its path. A thread
/// pool of zero workers would deadlock the executable at startup, so a
/// non-positive count is rejected here rather than passed through.
pub fn emit(cpu_count: u32, dir: &Path) -> Result<PathBuf, SetupError> {
    if cpu_count < 1 {
        return Err(SetupError::InvalidResourceSpec {
            field: "JobSubmissionParams.cpus-per-task",
            value: cpu_count as u64,
        });
    }
    let path = dir.join(RUNTIME_CONFIG_NAME);
    fs::write(&path, render(cpu_count))?;
    Ok(path)
}
