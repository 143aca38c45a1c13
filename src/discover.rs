//! Input file discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Recursively collect every .json file under `dir`, in ascending path
/// order so runs are deterministic.
pub fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect(dir, &mut files).with_context(|| format!("Failed to scan {}", dir.display()))?;

    files.sort();
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            collect(&path, files)?;
        } else if path.extension().is_some_and(|e| e == "json") {
            files.push(path);
        }
    }

    Ok(())
}
