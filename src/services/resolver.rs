//! Header/footer state resolution.
//!
//! Everything here is pure: callers pass the spec text, file content and
//! options in, and get new content (or a classification) back. No I/O.

use crate::domain::constants::{
    FILE_NAME_TAG, FOLDER_NAME_TAG, FOOTER_END_TAG, FOOTER_START_TAG, HEADER_END_TAG,
    HEADER_START_TAG,
};
use crate::domain::errors::SpecError;
use crate::domain::models::{DetectionResult, HeaderFooterSpec, Insertion, TagContext};

/// Extracts header/footer blocks from spec file text.
///
/// A side whose start/end marker pair is missing stays `None`. Only when
/// neither side can be extracted is the source rejected.
pub fn parse_spec(source: &str) -> Result<HeaderFooterSpec, SpecError> {
    let header = extract_block(source, HEADER_START_TAG, HEADER_END_TAG);
    let footer = extract_block(source, FOOTER_START_TAG, FOOTER_END_TAG);
    if header.is_none() && footer.is_none() {
        return Err(SpecError::Empty);
    }
    Ok(HeaderFooterSpec::new(header, footer))
}

/// Combines inline header/footer text with an optional spec file.
///
/// Blocks found in the file win; inline text fills the sides the file leaves
/// unset. A file with no blocks at all is rejected even if inline text exists.
pub fn resolve_sources(
    top: &str,
    bottom: &str,
    file_source: Option<&str>,
) -> Result<HeaderFooterSpec, SpecError> {
    let inline = |s: &str| (!s.is_empty()).then(|| s.to_string());
    let Some(source) = file_source else {
        return Ok(HeaderFooterSpec::new(inline(top), inline(bottom)));
    };
    let parsed = parse_spec(source)?;
    Ok(HeaderFooterSpec::new(
        parsed.header.or_else(|| inline(top)),
        parsed.footer.or_else(|| inline(bottom)),
    ))
}

fn extract_block(source: &str, start_tag: &str, end_tag: &str) -> Option<String> {
    let start = source.find(start_tag)? + start_tag.len();
    let end = start + source[start..].find(end_tag)?;
    let body = &source[start..end];
    // marker lines own their line breaks
    let body = body
        .strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body);
    let body = body
        .strip_suffix("\r\n")
        .or_else(|| body.strip_suffix('\n'))
        .unwrap_or(body);
    Some(body.to_string())
}

pub fn apply_tags(text: &str, ctx: &TagContext, tags_enabled: bool) -> String {
    if !tags_enabled {
        return text.to_string();
    }
    text.replace(FILE_NAME_TAG, &ctx.file_name)
        .replace(FOLDER_NAME_TAG, &ctx.folder_name)
}

/// Clears empty sides (and whitespace-only sides unless `allow_whitespace`).
pub fn apply_whitespace_policy(
    spec: HeaderFooterSpec,
    allow_whitespace: bool,
) -> Result<HeaderFooterSpec, SpecError> {
    let keep = |side: Option<String>| {
        side.filter(|s| !s.is_empty() && (allow_whitespace || !s.trim().is_empty()))
    };
    let spec = HeaderFooterSpec::new(keep(spec.header), keep(spec.footer));
    if spec.header.is_none() && spec.footer.is_none() {
        return Err(SpecError::Empty);
    }
    Ok(spec)
}

/// Puts a non-empty header and footer on their own lines around the body.
pub fn frame(spec: &HeaderFooterSpec) -> (String, String) {
    let mut header = spec.header_text().to_string();
    let mut footer = spec.footer_text().to_string();
    if !header.is_empty() {
        header.push('\n');
    }
    if !footer.is_empty() {
        footer.insert(0, '\n');
    }
    (header, footer)
}

/// Classifies trimmed `content` against tag-resolved `header`/`footer`.
///
/// Trimmed content cannot keep a header's leading or a footer's trailing
/// whitespace, so those are dropped before comparing. Padding where a block
/// meets the body may also have been trimmed away. A file that holds nothing
/// but one block counts as having that block.
///
/// Precedence matters when content matches both partial patterns: the
/// full match wins, then the footer-end check, then the header-start check.
pub fn detect(content: &str, header: &str, footer: &str) -> DetectionResult {
    let content = content.trim();
    let header = header.trim_start();
    let footer = footer.trim_end();
    let bare_header = header.trim_end();
    let bare_footer = footer.trim_start();
    let starts = content.starts_with(header)
        || content == bare_header
        || content.starts_with(&format!("{bare_header}\n"));
    let ends = content.ends_with(footer)
        || content == bare_footer
        || content.ends_with(&format!("\n{bare_footer}"));

    if !content.is_empty() && starts && ends {
        DetectionResult::AlreadyPresent
    } else if !footer.is_empty() && !header.is_empty() && ends {
        DetectionResult::FooterOnlyPresent
    } else if !header.is_empty() && !footer.is_empty() && starts {
        DetectionResult::HeaderOnlyPresent
    } else {
        DetectionResult::NeitherPresent
    }
}

/// What gets inserted for a detection result; `None` leaves the file alone.
pub fn insertion_for(detection: Option<DetectionResult>) -> Option<Insertion> {
    match detection {
        None | Some(DetectionResult::NeitherPresent) => Some(Insertion::HeaderAndFooter),
        Some(DetectionResult::AlreadyPresent) => None,
        Some(DetectionResult::FooterOnlyPresent) => Some(Insertion::HeaderOnly),
        Some(DetectionResult::HeaderOnlyPresent) => Some(Insertion::FooterOnly),
    }
}

/// `detection` is `None` when detection is disabled: the content is then
/// always wrapped. Content already carrying both blocks comes back as is.
pub fn compute_new_content(
    content: &str,
    header: &str,
    footer: &str,
    detection: Option<DetectionResult>,
) -> String {
    let Some(insertion) = insertion_for(detection) else {
        return content.to_string();
    };
    let body = content.trim();
    match insertion {
        Insertion::HeaderOnly => format!("{header}{body}"),
        Insertion::FooterOnly => format!("{body}{footer}"),
        Insertion::HeaderAndFooter => format!("{header}{body}{footer}"),
    }
}
