//! Stale artifact pruning.
//!
//! A deploy publishes a fresh set of hashed bundles (`main.3f9a1c.js`,
//! `style.77b0e2.css`, ...) next to the previous ones. Anything in the folder
//! that shares a name prefix with a current artifact but is not itself current
//! is a leftover from an older build and gets deleted.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::utils::{io, parser, validation};

/// Characters of a current artifact name that identify its family.
///
/// Provisional: matches the hashed bundle names the UI build emits today.
pub const DEFAULT_PREFIX_LEN: usize = 6;

/// Deletion plan computed from a directory listing.
#[derive(Debug, Clone, Serialize)]
pub struct PrunePlan {
    pub folder: String,
    pub prefix_len: usize,
    pub delete: Vec<String>,
    pub keep: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PruneSummary {
    pub deleted: usize,
    pub kept: usize,
}

/// Result of a pruning run.
#[derive(Debug, Clone, Serialize)]
pub struct PruneReport {
    pub folder: String,
    pub summary: PruneSummary,
    pub deleted: Vec<String>,
    pub kept: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

/// Parse the comma-separated keep-list passed on the command line.
pub fn parse_keep_list(raw: &str) -> Vec<String> {
    parser::split_csv(raw)
}

/// A file is stale when it is not current but shares a prefix with a current name.
pub fn is_stale(file_name: &str, keep_list: &[String], prefix_len: usize) -> bool {
    if keep_list.iter().any(|keep| keep == file_name) {
        return false;
    }

    keep_list
        .iter()
        .any(|keep| file_name.starts_with(parser::char_prefix(keep, prefix_len)))
}

/// List `dir` and decide which files to delete. Nothing is touched.
pub fn plan(dir: &Path, keep_list: &[String], prefix_len: usize) -> Result<PrunePlan> {
    validation::require_non_empty_vec(keep_list, "keep_list", "Keep-list cannot be empty")?;
    validation::require_positive(prefix_len, "prefix_len")?;

    let entries = fs::read_dir(dir).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::prune_directory_not_found(dir.display().to_string())
        } else {
            Error::internal_io(e.to_string(), Some("list artifact folder".to_string()))
        }
    })?;

    let mut delete = Vec::new();
    let mut keep = Vec::new();

    for entry in entries {
        let entry = entry
            .map_err(|e| Error::internal_io(e.to_string(), Some("list artifact folder".to_string())))?;

        // Symlinks are not followed; a stale link is removed, never its target.
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            log_status!("prune", "Skipping non UTF-8 name {:?}", entry.file_name());
            continue;
        };

        if is_stale(&name, keep_list, prefix_len) {
            delete.push(name);
        } else {
            keep.push(name);
        }
    }

    delete.sort();
    keep.sort();

    Ok(PrunePlan {
        folder: dir.display().to_string(),
        prefix_len,
        delete,
        keep,
    })
}

/// Delete every stale artifact in `dir`.
pub fn prune(dir: &Path, keep_list: &[String], prefix_len: usize) -> Result<PruneReport> {
    let plan = plan(dir, keep_list, prefix_len)?;

    for name in &plan.delete {
        io::remove_file(&dir.join(name), "delete stale artifact")?;
        log_status!("prune", "Deleted {}", name);
    }

    let mut hints = Vec::new();
    if plan.delete.is_empty() {
        hints.push("No stale artifacts found.".to_string());
    }

    Ok(PruneReport {
        folder: plan.folder,
        summary: PruneSummary {
            deleted: plan.delete.len(),
            kept: plan.keep.len(),
        },
        deleted: plan.delete,
        kept: plan.keep,
        hints,
    })
}
