use super::document::SettingsDocument;
use crate::error::SetupError;
use std::fs;
use std::path::{Path, PathBuf};

/// File name the SUMMA-Actors executable expects; fixed interface.
pub const SETTINGS_FILE_NAME: &str = "Summa_Actors_Settings.json";

/// Owns the on-disk settings document for one working directory.
///
/// The store is the only code that reads or writes the document; the pipeline
/// loads it once and persists it once per derivation run.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(working_dir: &Path) -> Self {
        Self {
            path: working_dir.join(SETTINGS_FILE_NAME),
        }
    }

    /// Absolute location of the settings document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Presence of the document is the sole init-vs-derive signal.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Writes a full placeholder document for the operator to fill in.
    /// Callers check `exists()` first; an existing document is never
    /// clobbered with defaults.
    pub fn create_default(&self) -> Result<SettingsDocument, SetupError> {
        let doc = SettingsDocument::default();
        self.persist(&doc)?;
        Ok(doc)
    }

    pub fn load(&self) -> Result<SettingsDocument, SetupError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| SetupError::MalformedSettings {
            path: self.path.clone(),
            reason: format!("cannot read: {}", e),
        })?;
        serde_json::from_str(&raw).map_err(|e| SetupError::MalformedSettings {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Full rewrite of the document. Key order is the struct declaration
    /// order, which keeps the file diffable; it carries no semantic weight.
    pub fn persist(&self, doc: &SettingsDocument) -> Result<(), SetupError> {
        let json = serde_json::to_string_pretty(doc).map_err(|e| SetupError::MalformedSettings {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn exists_reflects_document_presence() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        assert!(!store.exists());
        store.create_default().unwrap();
        assert!(store.exists());
    }

    #[test]
    fn default_document_round_trips_through_load() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        let written = store.create_default().unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(written, loaded);
        assert_eq!(loaded.job_submission_params.cpus_per_task, 1);
        assert_eq!(loaded.configuration.output_path, "");
    }

    #[test]
    fn persist_keeps_operator_edits() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        let mut doc = store.create_default().unwrap();
        doc.job_submission_params.num_hrus = 51_135;
        doc.job_actor.file_manager_path = "/work/fileManager.txt".to_string();
        store.persist(&doc).unwrap();
        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(
            store.load(),
            Err(SetupError::MalformedSettings { .. })
        ));
    }

    #[test]
    fn load_rejects_missing_section() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        // Valid JSON, but the JobSubmissionParams section is gone.
        let mut value: serde_json::Value =
            serde_json::to_value(crate::core::settings::document::SettingsDocument::default())
                .unwrap();
        value.as_object_mut().unwrap().remove("JobSubmissionParams");
        std::fs::write(store.path(), serde_json::to_string_pretty(&value).unwrap()).unwrap();
        assert!(matches!(
            store.load(),
            Err(SetupError::MalformedSettings { .. })
        ));
    }

    #[test]
    fn load_rejects_missing_key_within_section() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        let mut value: serde_json::Value =
            serde_json::to_value(crate::core::settings::document::SettingsDocument::default())
                .unwrap();
        value["JobSubmissionParams"]
            .as_object_mut()
            .unwrap()
            .remove("numHRUs");
        std::fs::write(store.path(), serde_json::to_string(&value).unwrap()).unwrap();
        assert!(matches!(
            store.load(),
            Err(SetupError::MalformedSettings { .. })
        ));
    }

    #[test]
    fn persisted_file_is_indented_for_hand_editing() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        store.create_default().unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("  \"Configuration\""));
        assert!(raw.lines().count() > 10);
    }
}
