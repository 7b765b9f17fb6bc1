//! Emitters for the three derived artifacts.
//!
//! Each emitter is a pure `render` producing the full artifact text, plus a
//! thin `emit` that overwrites the target file and returns its path. Formats
//! are dictated by their consumers (the executable's line-based file-manager
//! parser, the CAF runtime, and SLURM's sbatch), so none of them escape or
//! re-quote values.

pub mod batch_script;
pub mod file_manager;
pub mod runtime_config;
