use crate::core::settings::document::Configuration;
use crate::error::SetupError;
use std::fs;
use std::path::{Path, PathBuf};

pub const FILE_MANAGER_NAME: &str = "fileManager.txt";

/// Renders the file-manager text: one line per `Configuration` key in
/// declared order, `<key>    '<value>'`. Values go out verbatim, empty
/// strings included; the executable's parser splits on whitespace and strips
/// the single quotes, nothing more.
pub fn render(configuration: &Configuration) -> String {
    let mut out = String::new();
    for (key, value) in configuration.entries() {
        out.push_str(key);
        out.push_str("    '");
        out.push_str(value);
        out.push_str("'\n");
    }
    out
}

/// Writes `fileManager.txt` into `dir`, fully replacing any previous file,
/// and returns its path.
pub fn emit(configuration: &Configuration, dir: &Path) -> Result<PathBuf, SetupError> {
    let path = dir.join(FILE_MANAGER_NAME);
    fs::write(&path, render(configuration))?;
    Ok(path)
}
