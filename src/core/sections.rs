//! Section-scoped value replacement.
//!
//! The UI manifest pins a couple of lines per deploy: the shared crate source
//! under `[dependencies]` and the build feature under `[features]`. A line is
//! matched by the leading characters of the replacement itself, so passing
//! `blog-generic = { git = "...", rev = "abc" }` rewrites whichever
//! `blog-generic = ...` line follows the header.

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::lines::LineBuffer;
use crate::utils::{parser, validation};

/// Characters of the replacement value used to find the line it replaces.
pub const DEFAULT_PREFIX_LEN: usize = 10;
pub const DEPENDENCIES_HEADER: &str = "[dependencies]";
pub const FEATURES_HEADER: &str = "[features]";

/// Outcome of one header pass. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReplacement {
    pub header: String,
    pub value: String,
    pub replaced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplaceReport {
    pub file: String,
    pub replacements: Vec<SectionReplacement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

/// Header and value pair for one pass.
#[derive(Debug, Clone)]
pub struct SectionValue<'a> {
    pub header: &'a str,
    pub value: &'a str,
}

/// Replace the first line at or after `header` that starts with the value's prefix.
///
/// The replaced line keeps its terminator, or gains `\n` if it had none.
/// Returns the 0-based index of the replaced line.
pub fn replace_in_section(
    buffer: &mut LineBuffer,
    header: &str,
    value: &str,
    prefix_len: usize,
) -> Option<usize> {
    let prefix = parser::char_prefix(value, prefix_len);

    let mut in_section = false;
    let mut target = None;
    for (index, body) in buffer.bodies().enumerate() {
        if body.contains(header) {
            in_section = true;
        }

        if in_section && body.trim().starts_with(prefix) {
            target = Some(index);
            break;
        }
    }

    let index = target?;
    buffer.replace_line(index, value);
    Some(index)
}

/// Run one pass per pair, in order, over the same buffer.
pub fn replace_sections(
    buffer: &mut LineBuffer,
    pairs: &[SectionValue<'_>],
    prefix_len: usize,
) -> Result<Vec<SectionReplacement>> {
    validation::require_positive(prefix_len, "prefix_len")?;
    for pair in pairs {
        validation::require_non_empty(pair.value, "value", "Replacement value cannot be empty")?;
    }

    let mut results = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let snapshot = buffer.clone();
        let index = replace_in_section(buffer, pair.header, pair.value, prefix_len);

        results.push(SectionReplacement {
            header: pair.header.to_string(),
            value: pair.value.to_string(),
            replaced: index.is_some(),
            line: index.map(|i| i + 1),
            before: index.and_then(|i| snapshot.body(i).map(str::to_string)),
        });
    }

    Ok(results)
}

/// Rewrite the `[dependencies]` and `[features]` values in `path`.
pub fn replace_file(
    path: &Path,
    dependencies_value: &str,
    features_value: &str,
    prefix_len: usize,
) -> Result<ReplaceReport> {
    let pairs = [
        SectionValue {
            header: DEPENDENCIES_HEADER,
            value: dependencies_value,
        },
        SectionValue {
            header: FEATURES_HEADER,
            value: features_value,
        },
    ];
    replace_file_with(path, &pairs, prefix_len)
}

pub fn replace_file_with(
    path: &Path,
    pairs: &[SectionValue<'_>],
    prefix_len: usize,
) -> Result<ReplaceReport> {
    let mut buffer = LineBuffer::read(path)?;
    let replacements = replace_sections(&mut buffer, pairs, prefix_len)?;
    buffer.write(path)?;

    let mut hints = Vec::new();
    for replacement in &replacements {
        match replacement.line {
            Some(line) => log_status!("replace", "{} line {}: {}", replacement.header, line, replacement.value),
            None => hints.push(format!(
                "No line under {} starts with '{}'.",
                replacement.header,
                parser::char_prefix(&replacement.value, prefix_len)
            )),
        }
    }

    Ok(ReplaceReport {
        file: path.display().to_string(),
        replacements,
        hints,
    })
}
