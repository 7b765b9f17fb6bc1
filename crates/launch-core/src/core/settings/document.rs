use serde::{Deserialize, Serialize};

/// The `Configuration` section: simulation time range, time zone handling,
/// and the fixed set of input/output paths the executable's file manager
/// enumerates. All fields are strings; declared order is the order rendered
/// into the file-manager artifact.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    #[serde(rename = "controlVersion")]
    pub control_version: String,
    #[serde(rename = "simStartTime")]
    pub sim_start_time: String,
    #[serde(rename = "simEndTime")]
    pub sim_end_time: String,
    #[serde(rename = "tmZoneInfo")]
    pub tm_zone_info: String,
    #[serde(rename = "settingsPath")]
    pub settings_path: String,
    #[serde(rename = "forcingPath")]
    pub forcing_path: String,
    #[serde(rename = "outputPath")]
    pub output_path: String,
    #[serde(rename = "forcingFreq")]
    pub forcing_freq: String,
    #[serde(rename = "forcingStart")]
    pub forcing_start: String,
    #[serde(rename = "decisionsFile")]
    pub decisions_file: String,
    #[serde(rename = "outputControlFile")]
    pub output_control_file: String,
    #[serde(rename = "globalHruParamFile")]
    pub global_hru_param_file: String,
    #[serde(rename = "globalGruParamFile")]
    pub global_gru_param_file: String,
    #[serde(rename = "attributeFile")]
    pub attribute_file: String,
    #[serde(rename = "trialParamFile")]
    pub trial_param_file: String,
    #[serde(rename = "forcingListFile")]
    pub forcing_list_file: String,
    #[serde(rename = "initConditionFile")]
    pub init_condition_file: String,
    #[serde(rename = "outFilePrefix")]
    pub out_file_prefix: String,
    #[serde(rename = "vegTableFile")]
    pub veg_table_file: String,
    #[serde(rename = "soilTableFile")]
    pub soil_table_file: String,
    #[serde(rename = "generalTableFile")]
    pub general_table_file: String,
    #[serde(rename = "noahmpTableFile")]
    pub noahmp_table_file: String,
}

impl Configuration {
    /// Every key/value pair in declared order. The file-manager emitter
    /// renders exactly this walk, so adding a field here adds a line there.
    pub fn entries(&self) -> [(&'static str, &str); 22] {
        [
            ("controlVersion", &self.control_version),
            ("simStartTime", &self.sim_start_time),
            ("simEndTime", &self.sim_end_time),
            ("tmZoneInfo", &self.tm_zone_info),
            ("settingsPath", &self.settings_path),
            ("forcingPath", &self.forcing_path),
            ("outputPath", &self.output_path),
            ("forcingFreq", &self.forcing_freq),
            ("forcingStart", &self.forcing_start),
            ("decisionsFile", &self.decisions_file),
            ("outputControlFile", &self.output_control_file),
            ("globalHruParamFile", &self.global_hru_param_file),
            ("globalGruParamFile", &self.global_gru_param_file),
            ("attributeFile", &self.attribute_file),
            ("trialParamFile", &self.trial_param_file),
            ("forcingListFile", &self.forcing_list_file),
            ("initConditionFile", &self.init_condition_file),
            ("outFilePrefix", &self.out_file_prefix),
            ("vegTableFile", &self.veg_table_file),
            ("soilTableFile", &self.soil_table_file),
            ("generalTableFile", &self.general_table_file),
            ("noahmpTableFile", &self.noahmp_table_file),
        ]
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            control_version: String::new(),
            sim_start_time: String::new(),
            sim_end_time: String::new(),
            tm_zone_info: String::new(),
            settings_path: String::new(),
            forcing_path: String::new(),
            output_path: String::new(),
            forcing_freq: String::new(),
            forcing_start: String::new(),
            decisions_file: String::new(),
            output_control_file: String::new(),
            global_hru_param_file: String::new(),
            global_gru_param_file: String::new(),
            attribute_file: String::new(),
            trial_param_file: String::new(),
            forcing_list_file: String::new(),
            init_condition_file: String::new(),
            out_file_prefix: String::new(),
            veg_table_file: String::new(),
            soil_table_file: String::new(),
            general_table_file: String::new(),
            noahmp_table_file: String::new(),
        }
    }
}

/// SLURM resource requests plus the workload split parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct JobSubmissionParams {
    #[serde(rename = "cpus-per-task")]
    pub cpus_per_task: u32,
    pub memory: String,
    #[serde(rename = "job-name")]
    pub job_name: String,
    pub account: String,
    #[serde(rename = "numHRUs")]
    pub num_hrus: u64,
    #[serde(rename = "maxNumberOfJobs")]
    pub max_number_of_jobs: u32,
    #[serde(rename = "maxGRUsPerSubmission")]
    pub max_grus_per_submission: u64,
    #[serde(rename = "executablePath")]
    pub executable_path: String,
}

impl Default for JobSubmissionParams {
    fn default() -> Self {
        Self {
            cpus_per_task: 1,
            memory: String::new(),
            job_name: String::new(),
            account: String::new(),
            num_hrus: 1,
            max_number_of_jobs: 1,
            max_grus_per_submission: 1,
            executable_path: String::new(),
        }
    }
}

/// Pass-through tuning for the executable's top-level actor. Not interpreted
/// by this tool.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SummaActor {
    // Misspelling is load-bearing: the executable looks this key up verbatim.
    #[serde(rename = "OuputStructureSize")]
    pub ouput_structure_size: u64,
    #[serde(rename = "maxGRUPerJob")]
    pub max_gru_per_job: u64,
}

impl Default for SummaActor {
    fn default() -> Self {
        Self {
            ouput_structure_size: 1,
            max_gru_per_job: 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileAccessActor {
    pub num_vectors_in_output_manager: u64,
}

impl Default for FileAccessActor {
    fn default() -> Self {
        Self {
            num_vectors_in_output_manager: 1,
        }
    }
}

/// Per-job actor settings. `FileManagerPath` and `csvPath` are the two fields
/// this tool fills in after deriving the file-manager artifact; the rest is
/// pass-through.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct JobActor {
    #[serde(rename = "FileManagerPath")]
    pub file_manager_path: String,
    #[serde(rename = "outputCSV")]
    pub output_csv: String,
    #[serde(rename = "csvPath")]
    pub csv_path: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HruActor {
    #[serde(rename = "printOutput")]
    pub print_output: String,
    #[serde(rename = "outputFrequency")]
    pub output_frequency: u64,
}

impl Default for HruActor {
    fn default() -> Self {
        Self {
            print_output: String::new(),
            output_frequency: 1,
        }
    }
}

/// The whole settings document. Exactly one exists per working directory; its
/// absence is the signal to initialize rather than derive.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct SettingsDocument {
    #[serde(rename = "Configuration")]
    pub configuration: Configuration,
    #[serde(rename = "JobSubmissionParams")]
    pub job_submission_params: JobSubmissionParams,
    #[serde(rename = "SummaActor")]
    pub summa_actor: SummaActor,
    #[serde(rename = "FileAccessActor")]
    pub file_access_actor: FileAccessActor,
    #[serde(rename = "JobActor")]
    pub job_actor: JobActor,
    #[serde(rename = "HRUActor")]
    pub hru_actor: HruActor,
}

impl SettingsDocument {
    /// A freshly initialized document uses empty strings (and 1 for counts)
    /// as "not yet configured" placeholders. Returns the first field that is
    /// still a placeholder among those derivation cannot proceed without, or
    /// `None` once the operator has filled them all in.
    pub fn unconfigured_field(&self) -> Option<&'static str> {
        let required = [
            ("Configuration.outputPath", &self.configuration.output_path),
            (
                "JobSubmissionParams.executablePath",
                &self.job_submission_params.executable_path,
            ),
            ("JobSubmissionParams.memory", &self.job_submission_params.memory),
            (
                "JobSubmissionParams.job-name",
                &self.job_submission_params.job_name,
            ),
            (
                "JobSubmissionParams.account",
                &self.job_submission_params.account,
            ),
        ];
        required
            .into_iter()
            .find(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
    }
}
