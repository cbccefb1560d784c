use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read an assessment file and deserialise into a typed struct.
///
/// Dispatches on extension: .yaml and .yml parse as YAML, everything else
/// as JSON.
pub fn read_assessment<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;

    let value: T = if is_yaml(&canonical) {
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    } else {
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    };
    Ok(value)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

/// Resolve and validate the path.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }
    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }
    Ok(canonical)
}
