use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::io;
use crate::{paths, prune, sections, toggle};

/// Root configuration structure for blog-deploy.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BlogDeployConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via blog-deploy.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Defaults {
    #[serde(default)]
    pub prune: PruneConfig,

    #[serde(default)]
    pub toggle: ToggleConfig,

    #[serde(default)]
    pub replace: ReplaceConfig,
}

/// Configuration for artifact pruning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PruneConfig {
    #[serde(default = "default_prune_prefix_len")]
    pub prefix_len: usize,
}

/// Configuration for dependency toggling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleConfig {
    #[serde(default = "default_marker")]
    pub marker: String,

    #[serde(default = "default_comment")]
    pub comment: String,
}

/// Configuration for section value replacement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceConfig {
    #[serde(default = "default_replace_prefix_len")]
    pub prefix_len: usize,

    #[serde(default = "default_dependencies_header")]
    pub dependencies_header: String,

    #[serde(default = "default_features_header")]
    pub features_header: String,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            prefix_len: default_prune_prefix_len(),
        }
    }
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            comment: default_comment(),
        }
    }
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self {
            prefix_len: default_replace_prefix_len(),
            dependencies_header: default_dependencies_header(),
            features_header: default_features_header(),
        }
    }
}

// =============================================================================
// Default value functions (match the deploy pipeline's hardcoded behavior)
// =============================================================================

fn default_prune_prefix_len() -> usize {
    prune::DEFAULT_PREFIX_LEN
}

fn default_marker() -> String {
    toggle::DEFAULT_MARKER.to_string()
}

fn default_comment() -> String {
    toggle::DEFAULT_COMMENT.to_string()
}

fn default_replace_prefix_len() -> usize {
    sections::DEFAULT_PREFIX_LEN
}

fn default_dependencies_header() -> String {
    sections::DEPENDENCIES_HEADER.to_string()
}

fn default_features_header() -> String {
    sections::FEATURES_HEADER.to_string()
}

impl Defaults {
    /// Reject values the editors cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.prune.prefix_len == 0 {
            return Err(Error::config_invalid_value(
                "defaults.prune.prefix_len",
                Some("0".to_string()),
                "Must be at least 1",
            ));
        }
        if self.replace.prefix_len == 0 {
            return Err(Error::config_invalid_value(
                "defaults.replace.prefix_len",
                Some("0".to_string()),
                "Must be at least 1",
            ));
        }

        let required = [
            ("defaults.toggle.marker", &self.toggle.marker),
            ("defaults.toggle.comment", &self.toggle.comment),
            ("defaults.replace.dependencies_header", &self.replace.dependencies_header),
            ("defaults.replace.features_header", &self.replace.features_header),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(Error::config_invalid_value(key, None, "Cannot be empty"));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full blog-deploy.json config, falling back to defaults on any error.
pub fn load_config() -> BlogDeployConfig {
    let Ok(path) = paths::blog_deploy_json() else {
        return BlogDeployConfig::default();
    };

    if !path.exists() {
        return BlogDeployConfig::default();
    }

    match load_config_at(&path) {
        Ok(config) => config,
        Err(err) => {
            log_status!("config", "Ignoring {}: {}", path.display(), err.details);
            BlogDeployConfig::default()
        }
    }
}

/// Load and validate config from an explicit path.
pub fn load_config_at(path: &Path) -> Result<BlogDeployConfig> {
    let content = io::read_file(path, "read blog-deploy.json")?;

    let config: BlogDeployConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    config.defaults.validate()?;
    Ok(config)
}

/// Save config to blog-deploy.json file (creates if missing).
pub fn save_config(config: &BlogDeployConfig) -> Result<()> {
    save_config_at(&paths::blog_deploy_json()?, config)
}

pub fn save_config_at(path: &Path, config: &BlogDeployConfig) -> Result<()> {
    config.defaults.validate()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize blog-deploy.json".to_string()))
    })?;

    io::write_file_atomic(path, &content, "write blog-deploy.json")
}

/// Check if blog-deploy.json file exists
pub fn config_exists() -> bool {
    paths::blog_deploy_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Delete blog-deploy.json file (reset to defaults)
pub fn reset_config() -> Result<bool> {
    let path = paths::blog_deploy_json()?;

    if path.exists() {
        io::remove_file(&path, "delete blog-deploy.json")?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to blog-deploy.json (for display purposes)
pub fn config_path() -> Result<String> {
    Ok(paths::blog_deploy_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}

/// Set `value` at a JSON pointer inside `config`, re-validating the result.
pub fn set_value(config: &BlogDeployConfig, pointer: &str, value: Value) -> Result<BlogDeployConfig> {
    let mut root = serde_json::to_value(config).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize config".to_string()))
    })?;

    set_json_pointer(&mut root, pointer, value)?;

    let updated: BlogDeployConfig = serde_json::from_value(root).map_err(|e| {
        Error::validation_invalid_json(e, Some("deserialize config".to_string()), None)
    })?;
    updated.defaults.validate()?;
    Ok(updated)
}

fn set_json_pointer(root: &mut Value, pointer: &str, new_value: Value) -> Result<()> {
    if !pointer.starts_with('/') || pointer == "/" {
        return Err(Error::validation_invalid_argument(
            "pointer",
            format!("JSON pointer must start with '/' and name a key: {}", pointer),
            None,
            None,
        ));
    }

    let (parent_ptr, token) = pointer.rsplit_once('/').unwrap_or(("", pointer));
    let token = token.replace("~1", "/").replace("~0", "~");

    match root.pointer_mut(parent_ptr) {
        Some(Value::Object(map)) => {
            map.insert(token, new_value);
            Ok(())
        }
        _ => Err(Error::config_invalid_value(
            pointer,
            None,
            "Parent of pointer is not an existing object",
        )),
    }
}
