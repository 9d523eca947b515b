//! Dependency block toggling.
//!
//! The server manifest carries two alternative sources for the UI crate right
//! under a marker table, one live and one commented out:
//!
//! ```toml
//! [dependencies.blog-ui]
//! path = "../blog-ui"
//! #git = "https://example.com/blog-ui.git"
//! ```
//!
//! Toggling swaps the comment state of those two lines. Running it twice
//! restores the original file. When both lines share a state, the first is
//! commented out and the second made live.

use std::path::Path;

use serde::Serialize;

use crate::error::{BlockIncompleteDetails, Error, Result};
use crate::lines::LineBuffer;
use crate::utils::validation;

pub const DEFAULT_MARKER: &str = "[dependencies.blog-ui]";
pub const DEFAULT_COMMENT: &str = "#";

/// One edited line, 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChange {
    pub line: usize,
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleOutcome {
    pub marker_found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_line: Option<usize>,
    pub changes: Vec<LineChange>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleReport {
    pub file: String,
    pub marker: String,
    #[serde(flatten)]
    pub outcome: ToggleOutcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

pub fn is_commented(body: &str, comment: &str) -> bool {
    body.trim_start().starts_with(comment)
}

/// Leading whitespace is dropped before the comment marker is prefixed.
pub fn comment_out(body: &str, comment: &str) -> String {
    format!("{}{}", comment, body.trim_start())
}

/// Strip every leading comment marker, keeping indentation.
pub fn uncomment(body: &str, comment: &str) -> String {
    let rest = body.trim_start();
    let indent = &body[..body.len() - rest.len()];

    let mut rest = rest;
    while let Some(stripped) = rest.strip_prefix(comment) {
        rest = stripped;
    }

    format!("{}{}", indent, rest)
}

fn with_state(body: &str, commented: bool, comment: &str) -> String {
    match (is_commented(body, comment), commented) {
        (false, true) => comment_out(body, comment),
        (true, false) => uncomment(body, comment),
        _ => body.to_string(),
    }
}

/// Swap the comment state of the two lines after the first `marker` line.
///
/// If both lines are live or both are commented, the first is commented and
/// the second uncommented instead.
pub fn toggle_lines(buffer: &mut LineBuffer, marker: &str, comment: &str) -> Result<ToggleOutcome> {
    toggle_block(buffer, marker, comment, None)
}

fn toggle_block(
    buffer: &mut LineBuffer,
    marker: &str,
    comment: &str,
    source: Option<&Path>,
) -> Result<ToggleOutcome> {
    validation::require_non_empty(marker, "marker", "Marker cannot be empty")?;
    validation::require_non_empty(comment, "comment", "Comment marker cannot be empty")?;

    let Some(index) = buffer.find(marker) else {
        return Ok(ToggleOutcome {
            marker_found: false,
            marker_line: None,
            changes: Vec::new(),
        });
    };

    let (Some(first), Some(second)) = (buffer.body(index + 1), buffer.body(index + 2)) else {
        return Err(Error::toggle_block_incomplete(BlockIncompleteDetails {
            path: source.map(|p| p.display().to_string()),
            marker: marker.to_string(),
            marker_line: index + 1,
            total_lines: buffer.len(),
        }));
    };

    let first = first.to_string();
    let second = second.to_string();
    let first_commented = is_commented(&first, comment);
    let second_commented = is_commented(&second, comment);
    // Mixed blocks swap. Equal-state blocks get the first line commented and
    // the second live.
    let (first_target, second_target) = if first_commented != second_commented {
        (second_commented, first_commented)
    } else {
        (true, false)
    };
    let new_first = with_state(&first, first_target, comment);
    let new_second = with_state(&second, second_target, comment);

    let mut changes = Vec::new();
    for (offset, before, after) in [(1, first, new_first), (2, second, new_second)] {
        if before == after {
            continue;
        }
        buffer.set_body(index + offset, &after);
        changes.push(LineChange {
            line: index + offset + 1,
            before,
            after,
        });
    }

    Ok(ToggleOutcome {
        marker_found: true,
        marker_line: Some(index + 1),
        changes,
    })
}

/// Toggle the block in `path` and write the file back.
///
/// The file is rewritten even when the marker is absent. A truncated block
/// fails before anything is written.
pub fn toggle_file(path: &Path, marker: &str, comment: &str) -> Result<ToggleReport> {
    let mut buffer = LineBuffer::read(path)?;
    let outcome = toggle_block(&mut buffer, marker, comment, Some(path))?;
    buffer.write(path)?;

    let mut hints = Vec::new();
    if outcome.marker_found {
        for change in &outcome.changes {
            log_status!("toggle", "Line {}: {} -> {}", change.line, change.before, change.after);
        }
    } else {
        hints.push(format!("Marker '{}' not found; file left unchanged.", marker));
    }

    Ok(ToggleReport {
        file: path.display().to_string(),
        marker: marker.to_string(),
        outcome,
        hints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = "[package]\nname = \"blog-server-api\"\n\n[dependencies.blog-ui]\npath = \"../blog-ui\"\n#git = \"https://example.com/blog-ui.git\"\n\n[dependencies]\nserde = \"1\"\n";

    #[test]
    fn comment_out_strips_leading_whitespace() {
        assert_eq!(comment_out("   path = \"x\"", "#"), "#path = \"x\"");
    }

    #[test]
    fn uncomment_strips_repeated_markers_and_keeps_indent() {
        assert_eq!(uncomment("##git = \"y\"", "#"), "git = \"y\"");
        assert_eq!(uncomment("  # git", "#"), "   git");
    }

    #[test]
    fn toggle_swaps_live_and_commented_lines() {
        let mut buffer = LineBuffer::parse(MANIFEST);

        let outcome = toggle_lines(&mut buffer, DEFAULT_MARKER, DEFAULT_COMMENT).unwrap();

        assert_eq!(outcome.marker_line, Some(4));
        assert_eq!(outcome.changes.len(), 2);
        assert_eq!(buffer.body(4), Some("#path = \"../blog-ui\""));
        assert_eq!(buffer.body(5), Some("git = \"https://example.com/blog-ui.git\""));
    }

    #[test]
    fn toggle_twice_restores_original() {
        let mut buffer = LineBuffer::parse(MANIFEST);

        toggle_lines(&mut buffer, DEFAULT_MARKER, DEFAULT_COMMENT).unwrap();
        toggle_lines(&mut buffer, DEFAULT_MARKER, DEFAULT_COMMENT).unwrap();

        assert_eq!(buffer.render(), MANIFEST);
    }

    #[test]
    fn two_live_lines_comment_the_first() {
        let mut buffer = LineBuffer::parse("[dependencies.blog-ui]\npath = \"a\"\ngit = \"b\"\n");

        let outcome = toggle_lines(&mut buffer, DEFAULT_MARKER, DEFAULT_COMMENT).unwrap();

        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes[0].line, 2);
        assert_eq!(buffer.render(), "[dependencies.blog-ui]\n#path = \"a\"\ngit = \"b\"\n");
    }

    #[test]
    fn two_commented_lines_uncomment_the_second() {
        let mut buffer = LineBuffer::parse("[dependencies.blog-ui]\n#path = \"a\"\n#git = \"b\"\n");

        let outcome = toggle_lines(&mut buffer, DEFAULT_MARKER, DEFAULT_COMMENT).unwrap();

        assert_eq!(outcome.changes.len(), 1);
        assert_eq!(outcome.changes[0].line, 3);
        assert_eq!(buffer.render(), "[dependencies.blog-ui]\n#path = \"a\"\ngit = \"b\"\n");
    }

    #[test]
    fn only_first_marker_is_toggled() {
        let content = "[dependencies.blog-ui]\na\n#b\n[dependencies.blog-ui]\nc\n#d\n";
        let mut buffer = LineBuffer::parse(content);

        toggle_lines(&mut buffer, DEFAULT_MARKER, DEFAULT_COMMENT).unwrap();

        assert_eq!(
            buffer.render(),
            "[dependencies.blog-ui]\n#a\nb\n[dependencies.blog-ui]\nc\n#d\n"
        );
    }

    #[test]
    fn missing_marker_leaves_buffer_untouched() {
        let mut buffer = LineBuffer::parse("[package]\nname = \"x\"\n");

        let outcome = toggle_lines(&mut buffer, DEFAULT_MARKER, DEFAULT_COMMENT).unwrap();

        assert!(!outcome.marker_found);
        assert!(outcome.changes.is_empty());
        assert_eq!(buffer.render(), "[package]\nname = \"x\"\n");
    }

    #[test]
    fn marker_near_end_fails_fast() {
        let mut buffer = LineBuffer::parse("[package]\n[dependencies.blog-ui]\npath = \"x\"\n");

        let err = toggle_lines(&mut buffer, DEFAULT_MARKER, DEFAULT_COMMENT).unwrap_err();

        assert_eq!(err.code.as_str(), "toggle.block_incomplete");
        assert_eq!(err.details["markerLine"], 2);
        assert!(err.details.get("path").is_none());
    }

    #[test]
    fn toggle_file_rewrites_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, MANIFEST).unwrap();

        let report = toggle_file(&path, DEFAULT_MARKER, DEFAULT_COMMENT).unwrap();

        assert!(report.outcome.marker_found);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n#path = \"../blog-ui\"\ngit = "));
    }

    #[test]
    fn toggle_file_does_not_write_truncated_block() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "[dependencies.blog-ui]\npath = \"x\"").unwrap();

        let err = toggle_file(&path, DEFAULT_MARKER, DEFAULT_COMMENT).unwrap_err();

        assert_eq!(err.details["path"], path.display().to_string());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[dependencies.blog-ui]\npath = \"x\"");
    }

    #[cfg(unix)]
    #[test]
    fn toggle_file_keeps_symlinked_manifest() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("server.toml");
        let link = dir.path().join("Cargo.toml");
        fs::write(&real, MANIFEST).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        toggle_file(&link, DEFAULT_MARKER, DEFAULT_COMMENT).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert!(fs::read_to_string(&real).unwrap().contains("\n#path = \"../blog-ui\"\n"));
    }

    #[test]
    fn toggle_file_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = toggle_file(&dir.path().join("Cargo.toml"), DEFAULT_MARKER, DEFAULT_COMMENT)
            .unwrap_err();
        assert!(err.code.is_not_found());
    }
}
