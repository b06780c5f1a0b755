//! Input file expansion.

use anyhow::{Context, Result};
use headergen_core::Category;
use std::fs;
use std::path::{Path, PathBuf};

/// Expand paths, directories and glob patterns into a sorted list of files.
///
/// Directories are scanned non-recursively for files with a supported
/// extension. A plain path that does not exist yet is kept, so new files can
/// be started with a header.
pub fn expand(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && is_supported(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        if !is_glob(pattern) {
            files.push(path.to_path_buf());
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| Category::from_extension(&format!(".{}", e)).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn directory_scan_keeps_supported_files() {
        let dir = TempDir::new().unwrap();
        for name in ["a.c", "b.py", "notes.txt", "Makefile"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let files = expand(&[dir.path().to_string_lossy().into_owned()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.c", "b.py"]);
    }

    #[test]
    fn glob_matches_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("x.h"), "").unwrap();
        fs::write(dir.path().join("y.h"), "").unwrap();
        let pattern = format!("{}/*.h", dir.path().display());
        assert_eq!(expand(&[pattern]).unwrap().len(), 2);
    }

    #[test]
    fn missing_plain_path_is_kept() {
        let dir = TempDir::new().unwrap();
        let new_file = dir.path().join("new.py");
        let files = expand(&[new_file.to_string_lossy().into_owned()]).unwrap();
        assert_eq!(files, vec![new_file]);
    }

    #[test]
    fn duplicates_are_removed() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.c");
        fs::write(&file, "").unwrap();
        let arg = file.to_string_lossy().into_owned();
        assert_eq!(expand(&[arg.clone(), arg]).unwrap().len(), 1);
    }
}
