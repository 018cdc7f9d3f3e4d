use crate::domain::errors::FileError;
use crate::domain::models::{FileOutcome, FileReport, HeaderFooterSpec, TagContext};
use crate::services::resolver::{apply_tags, compute_new_content, detect, frame, insertion_for};
use std::path::{Path, PathBuf};

/// Processes every target in order. Recoverable per-file failures become
/// `Skipped` reports; anything else aborts the batch.
pub fn apply_to_files(
    paths: &[PathBuf],
    spec: &HeaderFooterSpec,
    tags_enabled: bool,
    detection_enabled: bool,
) -> anyhow::Result<Vec<FileReport>> {
    let (header, footer) = frame(spec);
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        let report = match apply_to_file(path, &header, &footer, tags_enabled, detection_enabled)
        {
            Ok(r) => r,
            Err(e) if e.is_recoverable() => {
                tracing::warn!(path = %path.display(), error = %e, "skipping file");
                FileReport {
                    path: path.display().to_string(),
                    outcome: FileOutcome::Skipped {
                        reason: e.to_string(),
                    },
                    detection: None,
                }
            }
            Err(e) => return Err(e.into()),
        };
        reports.push(report);
    }
    Ok(reports)
}

fn apply_to_file(
    path: &Path,
    header: &str,
    footer: &str,
    tags_enabled: bool,
    detection_enabled: bool,
) -> Result<FileReport, FileError> {
    let ctx = TagContext::from_path(path);
    let header = apply_tags(header, &ctx, tags_enabled);
    let footer = apply_tags(footer, &ctx, tags_enabled);

    let content =
        std::fs::read_to_string(path).map_err(|e| FileError::from_io(path.to_path_buf(), e))?;
    let detection = detection_enabled.then(|| detect(&content, &header, &footer));
    tracing::debug!(path = %path.display(), ?detection, "resolved file state");

    let outcome = match insertion_for(detection) {
        None => FileOutcome::Unchanged,
        Some(insertion) => {
            let updated = compute_new_content(&content, &header, &footer, detection);
            std::fs::write(path, updated)
                .map_err(|e| FileError::from_io(path.to_path_buf(), e))?;
            tracing::info!(path = %path.display(), insertion = insertion.label(), "updated file");
            FileOutcome::Modified { insertion }
        }
    };

    Ok(FileReport {
        path: path.display().to_string(),
        outcome,
        detection,
    })
}
