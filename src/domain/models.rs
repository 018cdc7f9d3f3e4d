use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Header/footer text before per-file tag substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderFooterSpec {
    pub header: Option<String>,
    pub footer: Option<String>,
}

impl HeaderFooterSpec {
    pub fn new(header: Option<String>, footer: Option<String>) -> Self {
        Self { header, footer }
    }

    pub fn header_text(&self) -> &str {
        self.header.as_deref().unwrap_or("")
    }

    pub fn footer_text(&self) -> &str {
        self.footer.as_deref().unwrap_or("")
    }

    pub fn file_state(&self) -> FileState {
        match (self.header_text().is_empty(), self.footer_text().is_empty()) {
            (true, true) => FileState::NoHeaderFooter,
            (false, true) => FileState::HasHeader,
            (true, false) => FileState::HasFooter,
            (false, false) => FileState::HasHeaderAndFooter,
        }
    }
}

/// Per-file substitution values for `{FILE_NAME}` and `{FOLDER_NAME}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagContext {
    pub file_name: String,
    pub folder_name: String,
}

impl TagContext {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let folder_name = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            file_name,
            folder_name,
        }
    }
}

/// Which of header/footer a spec supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileState {
    NoHeaderFooter,
    HasHeader,
    HasFooter,
    HasHeaderAndFooter,
}

/// What a target file already contains when detection is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionResult {
    AlreadyPresent,
    FooterOnlyPresent,
    HeaderOnlyPresent,
    NeitherPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Insertion {
    HeaderAndFooter,
    HeaderOnly,
    FooterOnly,
}

impl Insertion {
    pub fn label(self) -> &'static str {
        match self {
            Insertion::HeaderAndFooter => "header/footer",
            Insertion::HeaderOnly => "header",
            Insertion::FooterOnly => "footer",
        }
    }
}

/// Terminal state of one target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Skipped { reason: String },
    Unchanged,
    Modified { insertion: Insertion },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
    pub detection: Option<DetectionResult>,
}

#[derive(Debug, Default, Serialize)]
pub struct ApplySummary {
    pub modified: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl ApplySummary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self::default();
        for r in reports {
            match r.outcome {
                FileOutcome::Modified { .. } => summary.modified += 1,
                FileOutcome::Unchanged => summary.unchanged += 1,
                FileOutcome::Skipped { .. } => summary.skipped += 1,
            }
        }
        summary
    }
}

/// Options resolved from CLI flags and the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    pub recursive: bool,
    pub allow_whitespace: bool,
    pub tags_enabled: bool,
    pub detection_enabled: bool,
    pub extension: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: ConfigDefaults,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigDefaults {
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub whitespace: bool,
    #[serde(default)]
    pub disable_tags: bool,
    #[serde(default)]
    pub detect_header: bool,
    #[serde(default)]
    pub extension: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BitPatternReport {
    pub width: usize,
    pub unsigned: String,
    pub bytes: String,
}
