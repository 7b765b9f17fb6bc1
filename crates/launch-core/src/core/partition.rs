//! Job-array partition arithmetic.
//!
//! A run over `total_units` GRUs is split into chunks of at most
//! `chunk_size`, one chunk per SLURM array element. The plan records the
//! zero-based *maximum array index* (the scheduler consumes an inclusive
//! `0-max_index` range), and [`element_range`] gives each element its 1-based
//! start and clamped count. The emitted batch script carries the same
//! arithmetic in shell form, evaluated per element at dispatch time; this
//! module is the directly-testable source of truth for it.

use crate::error::SetupError;

/// How one total workload count is spread over a job array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobPlan {
    pub total_units: u64,
    pub chunk_size: u64,
    /// Zero-based maximum array index; the array has `max_index + 1` elements.
    pub max_index: u64,
}

/// Computes the array plan: `max_index = ceil(total/chunk) - 1`.
///
/// A chunk size larger than the total is legal and yields a single-element
/// array. Zero on either side is a configuration error, not an empty plan.
pub fn plan(total_units: u64, chunk_size: u64) -> Result<JobPlan, SetupError> {
    if total_units < 1 || chunk_size < 1 {
        return Err(SetupError::InvalidPartition {
            total_units,
            chunk_size,
        });
    }
    Ok(JobPlan {
        total_units,
        chunk_size,
        max_index: (total_units - 1) / chunk_size,
    })
}

/// The 1-based unit range worked by array element `index`: `(start, count)`.
///
/// Every element below `max_index` gets a full chunk; the last element's
/// count is clamped so `start + count - 1` never exceeds `total_units`.
pub fn element_range(index: u64, chunk_size: u64, total_units: u64) -> (u64, u64) {
    let start = 1 + chunk_size * index;
    let count = if start + chunk_size > total_units {
        total_units - start + 1
    } else {
        chunk_size
    };
    (start, count)
}
