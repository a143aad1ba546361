use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Load a request from a JSON file.
pub fn read_request_file<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let resolved = resolve_request_path(path)?;
    let contents = fs::read_to_string(&resolved)
        .map_err(|e| format!("Cannot read request file '{}': {}", resolved.display(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Invalid request in '{}': {}", resolved.display(), e).into())
}

/// Relative paths resolve against the working directory.
fn resolve_request_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !resolved.is_file() {
        return Err(format!("Request file not found: {}", resolved.display()).into());
    }
    Ok(resolved)
}
