use crate::core::io::{batch_script, file_manager, runtime_config};
use crate::core::layout::OutputLayout;
use crate::core::partition;
use crate::core::settings::document::SettingsDocument;
use crate::core::settings::store::SettingsStore;
use crate::error::SetupError;
use std::path::{Path, PathBuf};

/// What a setup invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// No settings document existed; a placeholder one was written. The
    /// operator fills it in and re-runs.
    Initialized { settings_path: PathBuf },
    /// A settings document existed; every artifact was derived from it.
    Derived {
        file_manager: PathBuf,
        runtime_config: PathBuf,
        batch_script: PathBuf,
        layout: OutputLayout,
    },
}

/// Runs the full setup pipeline in `working_dir`.
///
/// Presence of the settings document decides the branch: absent means
/// initialize-and-stop, present means derive all three artifacts. Any failure
/// aborts the run where it stands; artifacts already written stay on disk and
/// the operator re-runs after fixing the document.
pub fn run(working_dir: &Path) -> Result<SetupOutcome, SetupError> {
    let store = SettingsStore::new(working_dir);
    if !store.exists() {
        store.create_default()?;
        return Ok(SetupOutcome::Initialized {
            settings_path: store.path().to_path_buf(),
        });
    }
    derive(working_dir, &store)
}

fn derive(working_dir: &Path, store: &SettingsStore) -> Result<SetupOutcome, SetupError> {
    let mut doc = store.load()?;

    if let Some(field) = doc.unconfigured_field() {
        return Err(SetupError::MalformedSettings {
            path: store.path().to_path_buf(),
            reason: format!("'{}' has not been filled in yet", field),
        });
    }

    let layout = OutputLayout::prepare(Path::new(&doc.configuration.output_path))?;

    // The file-manager artifact points the executable at the dated NetCDF
    // directory. The persisted document keeps the plain base path, so
    // re-running derivation never nests a second date segment.
    let file_manager_path = emit_file_manager(&doc, &layout, working_dir)?;

    doc.job_actor.file_manager_path = file_manager_path.display().to_string();
    doc.job_actor.csv_path = format!("{}/", layout.csv_dir.display());
    store.persist(&doc)?;

    let runtime_config_path = runtime_config::emit(
        doc.job_submission_params.cpus_per_task,
        working_dir,
    )?;

    let plan = partition::plan(
        doc.job_submission_params.num_hrus,
        doc.job_submission_params.max_grus_per_submission,
    )?;

    let inputs = batch_script::BatchScriptInputs {
        cpus_per_task: doc.job_submission_params.cpus_per_task,
        memory: &doc.job_submission_params.memory,
        job_name: &doc.job_submission_params.job_name,
        account: &doc.job_submission_params.account,
        executable_path: &doc.job_submission_params.executable_path,
        batch_log: &layout.batch_log,
        runtime_config: &runtime_config_path,
        config_dir: working_dir,
        plan,
    };
    let batch_script_path = batch_script::emit(&inputs, working_dir)?;

    Ok(SetupOutcome::Derived {
        file_manager: file_manager_path,
        runtime_config: runtime_config_path,
        batch_script: batch_script_path,
        layout,
    })
}

fn emit_file_manager(
    doc: &SettingsDocument,
    layout: &OutputLayout,
    working_dir: &Path,
) -> Result<PathBuf, SetupError> {
    let mut rendered_config = doc.configuration.clone();
    rendered_config.output_path = format!("{}/", layout.netcdf_dir.display());
    file_manager::emit(&rendered_config, working_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::store::SETTINGS_FILE_NAME;
    use tempfile::tempdir;

    fn configured_store(working_dir: &Path, output_base: &Path) -> SettingsStore {
        let store = SettingsStore::new(working_dir);
        let mut doc = store.create_default().unwrap();
        doc.configuration.output_path = output_base.display().to_string();
        doc.configuration.out_file_prefix = "bow".to_string();
        doc.job_submission_params.cpus_per_task = 4;
        doc.job_submission_params.memory = "32G".to_string();
        doc.job_submission_params.job_name = "summa-bow".to_string();
        doc.job_submission_params.account = "def-hydro".to_string();
        doc.job_submission_params.num_hrus = 10;
        doc.job_submission_params.max_grus_per_submission = 3;
        doc.job_submission_params.executable_path = "/opt/summa/bin/summa_actors".to_string();
        store.persist(&doc).unwrap();
        store
    }

    #[test]
    fn first_run_initializes_and_stops() {
        let dir = tempdir().unwrap();
        let outcome = run(dir.path()).unwrap();

        let settings_path = dir.path().join(SETTINGS_FILE_NAME);
        assert_eq!(
            outcome,
            SetupOutcome::Initialized {
                settings_path: settings_path.clone()
            }
        );
        assert!(settings_path.exists());
        // Only the document is written on the init branch.
        assert!(!dir.path().join("fileManager.txt").exists());
        assert!(!dir.path().join("run_summa.sh").exists());
    }

    #[test]
    fn second_run_on_placeholder_document_refuses_derivation() {
        let dir = tempdir().unwrap();
        run(dir.path()).unwrap();
        let err = run(dir.path()).unwrap_err();
        assert!(matches!(err, SetupError::MalformedSettings { .. }));
        assert!(err.to_string().contains("outputPath"));
    }

    #[test]
    fn derivation_writes_all_three_artifacts() {
        let workdir = tempdir().unwrap();
        let output_base = tempdir().unwrap();
        let store = configured_store(workdir.path(), output_base.path());

        let outcome = run(workdir.path()).unwrap();
        let SetupOutcome::Derived {
            file_manager,
            runtime_config,
            batch_script,
            layout,
        } = outcome
        else {
            panic!("expected derivation");
        };

        assert_eq!(file_manager, workdir.path().join("fileManager.txt"));
        assert_eq!(runtime_config, workdir.path().join("caf-application.conf"));
        assert_eq!(batch_script, workdir.path().join("run_summa.sh"));
        assert!(layout.netcdf_dir.is_dir());
        assert!(layout.csv_dir.is_dir());

        // File manager points at the dated NetCDF directory.
        let fm = std::fs::read_to_string(&file_manager).unwrap();
        assert!(fm.contains(&format!("outputPath    '{}/'", layout.netcdf_dir.display())));
        assert!(fm.contains("outFilePrefix    'bow'"));

        // Runtime config carries the cpu count.
        let caf = std::fs::read_to_string(&runtime_config).unwrap();
        assert!(caf.contains("max-threads = 4"));

        // Batch script carries the partition of 10 HRUs into chunks of 3.
        let script = std::fs::read_to_string(&batch_script).unwrap();
        assert!(script.contains("#SBATCH --array=0-3"));
        assert!(script.contains("gruMax=10"));
        assert!(script.contains(&format!("--output={}", layout.batch_log.display())));

        // Document checkpoint: derived paths recorded, base path untouched.
        let doc = store.load().unwrap();
        assert_eq!(doc.job_actor.file_manager_path, file_manager.display().to_string());
        assert_eq!(
            doc.job_actor.csv_path,
            format!("{}/", layout.csv_dir.display())
        );
        assert_eq!(
            doc.configuration.output_path,
            output_base.path().display().to_string()
        );
    }

    #[test]
    fn rederivation_is_stable_within_a_day() {
        let workdir = tempdir().unwrap();
        let output_base = tempdir().unwrap();
        let store = configured_store(workdir.path(), output_base.path());

        let first = run(workdir.path()).unwrap();
        let second = run(workdir.path()).unwrap();
        assert_eq!(first, second);

        // The persisted base path survived both runs, so no nested dates.
        let doc = store.load().unwrap();
        assert_eq!(
            doc.configuration.output_path,
            output_base.path().display().to_string()
        );
    }

    #[test]
    fn missing_output_base_aborts_before_any_artifact() {
        let workdir = tempdir().unwrap();
        let output_base = tempdir().unwrap();
        let gone = output_base.path().join("not-created");
        configured_store(workdir.path(), &gone);

        let err = run(workdir.path()).unwrap_err();
        assert!(matches!(err, SetupError::OutputBaseMissing { .. }));
        assert!(!workdir.path().join("fileManager.txt").exists());
        assert!(!workdir.path().join("caf-application.conf").exists());
        assert!(!workdir.path().join("run_summa.sh").exists());
    }

    #[test]
    fn zero_chunk_size_aborts_with_invalid_partition() {
        let workdir = tempdir().unwrap();
        let output_base = tempdir().unwrap();
        let store = configured_store(workdir.path(), output_base.path());
        let mut doc = store.load().unwrap();
        doc.job_submission_params.max_grus_per_submission = 0;
        store.persist(&doc).unwrap();

        let err = run(workdir.path()).unwrap_err();
        assert!(matches!(err, SetupError::InvalidPartition { chunk_size: 0, .. }));
        // Fail-fast, no rollback: earlier artifacts stay in place.
        assert!(workdir.path().join("fileManager.txt").exists());
        assert!(!workdir.path().join("run_summa.sh").exists());
    }
}
