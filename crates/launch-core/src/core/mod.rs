//! # Core Module
//!
//! The foundation layer of summa-launch: the settings document and its store,
//! the dated output-directory layout, the job-array partition arithmetic, and
//! the emitters for the three derived artifacts.
//!
//! Everything here is synchronous and run-to-completion; the only concurrency
//! this code touches is the thread count and array parallelism it *configures*
//! for the downstream executable and scheduler.

pub mod io;
pub mod layout;
pub mod partition;
pub mod settings;
