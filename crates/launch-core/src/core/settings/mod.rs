//! The canonical settings document and its on-disk store.
//!
//! `Summa_Actors_Settings.json` is read both by this tool and by the
//! SUMMA-Actors executable itself, so the section and key names (including the
//! historical `OuputStructureSize` spelling) are an external interface and
//! must not change.

pub mod document;
pub mod store;
