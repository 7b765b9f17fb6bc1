//! # summa-launch Core Library
//!
//! Bootstraps batch runs of the SUMMA-Actors simulation executable on a SLURM
//! cluster. One canonical settings document (`Summa_Actors_Settings.json`) is
//! the single source of truth; from it the library deterministically derives
//! the three artifacts a run needs: the executable's plain-text file manager,
//! a CAF runtime configuration bounding its worker-thread pool, and a batch
//! script that partitions the total GRU count across a SLURM job array.
//!
//! The library is split into two layers:
//!
//! - **[`core`]: The Foundation.** The settings document and its on-disk
//!   store, the dated output-directory layout, the job-array partition
//!   arithmetic, and the artifact emitters.
//!
//! - **[`workflows`]: The Public API.** The end-to-end setup entry point that
//!   decides between initializing a fresh settings document and deriving all
//!   artifacts from an existing one.

pub mod core;
pub mod error;
pub mod workflows;
