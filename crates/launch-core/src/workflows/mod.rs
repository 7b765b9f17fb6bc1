//! # Workflows Module
//!
//! Top-level entry points tying the core pieces into complete procedures.
//! There is one workflow: [`setup`], the init-or-derive pipeline a cluster
//! user runs from their working directory.

pub mod setup;
