use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::WalkDir;

/// Top-level keys that mark a JSON file as runway-survey data.
const SURVEY_KEYS: &[&str] = &["runways", "runway", "corners"];

/// Walks the tree under `root` and collects every JSON file that looks
/// like survey data. Unreadable and unparseable files are skipped, not
/// reported.
pub fn find_survey_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().map_or(false, |ext| ext == "json"))
        .filter(|entry| is_survey_data(entry.path()))
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

fn is_survey_data(path: &Path) -> bool {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return false,
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(data) => SURVEY_KEYS.iter().any(|&key| data.get(key).is_some()),
        Err(_) => false,
    }
}
