use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects regular files under `dir` whose name ends with `extension`.
///
/// Paths are absolute and sorted by walk order so runs are reproducible.
/// Anything in `exclude` (compared canonically) is left out.
pub fn collect_targets(
    dir: &Path,
    recursive: bool,
    extension: &str,
    exclude: &[PathBuf],
) -> anyhow::Result<Vec<PathBuf>> {
    let root = dir
        .canonicalize()
        .map_err(|e| anyhow::anyhow!("cannot read directory {}: {}", dir.display(), e))?;
    if !root.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }
    let excluded: HashSet<PathBuf> = exclude
        .iter()
        .filter_map(|p| p.canonicalize().ok())
        .collect();

    let mut walker = WalkDir::new(&root).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut out = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry during scan");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(extension) {
            continue;
        }
        let path = entry.into_path();
        if excluded.contains(&path) {
            tracing::debug!(path = %path.display(), "excluding from targets");
            continue;
        }
        out.push(path);
    }
    Ok(out)
}

/// Files the tool must never edit: the spec file and the running binary.
pub fn default_exclusions(header_file: Option<&Path>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Some(p) = header_file {
        out.push(p.to_path_buf());
    }
    if let Ok(exe) = std::env::current_exe() {
        out.push(exe);
    }
    out
}
