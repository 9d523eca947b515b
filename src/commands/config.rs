use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use blog_deploy::defaults::{self, Defaults};

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the prune, toggle and replace settings in effect
    Show {
        /// Ignore blog-deploy.json and show the built-in values
        #[arg(long)]
        builtin: bool,
    },
    /// Set one setting by JSON pointer
    Set {
        /// Setting to change (e.g. /defaults/prune/prefix_len, /defaults/toggle/marker)
        pointer: String,
        /// New value as JSON (e.g. 8 or "\"[dependencies.blog-ui]\"")
        value: String,
    },
    /// Delete blog-deploy.json and fall back to built-in values
    Reset,
    /// Show where blog-deploy.json lives
    Path,
}

/// Where the settings being shown came from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SettingsSource {
    File,
    Builtin,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ConfigOutput {
    Show {
        command: String,
        source: SettingsSource,
        defaults: Defaults,
    },
    Set {
        command: String,
        path: String,
        pointer: String,
        value: Value,
        defaults: Defaults,
    },
    Reset {
        command: String,
        path: String,
        deleted: bool,
        defaults: Defaults,
    },
    Path {
        command: String,
        path: String,
        exists: bool,
    },
}

pub fn run(args: ConfigArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ConfigOutput> {
    let output = match args.command {
        ConfigCommand::Show { builtin } => show(builtin),
        ConfigCommand::Set { pointer, value } => set(pointer, &value)?,
        ConfigCommand::Reset => ConfigOutput::Reset {
            command: "config.reset".to_string(),
            deleted: defaults::reset_config()?,
            path: defaults::config_path()?,
            defaults: defaults::builtin_defaults(),
        },
        ConfigCommand::Path => ConfigOutput::Path {
            command: "config.path".to_string(),
            path: defaults::config_path()?,
            exists: defaults::config_exists(),
        },
    };

    Ok((output, 0))
}

fn show(builtin: bool) -> ConfigOutput {
    let (source, values) = if builtin || !defaults::config_exists() {
        (SettingsSource::Builtin, defaults::builtin_defaults())
    } else {
        (SettingsSource::File, defaults::load_defaults())
    };

    ConfigOutput::Show {
        command: "config.show".to_string(),
        source,
        defaults: values,
    }
}

fn set(pointer: String, raw: &str) -> blog_deploy::Result<ConfigOutput> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        blog_deploy::Error::validation_invalid_json(
            e,
            Some("parse value".to_string()),
            Some(raw.chars().take(200).collect::<String>()),
        )
    })?;

    let config = defaults::set_value(&defaults::load_config(), &pointer, value.clone())?;
    defaults::save_config(&config)?;

    Ok(ConfigOutput::Set {
        command: "config.set".to_string(),
        path: defaults::config_path()?,
        pointer,
        value,
        defaults: config.defaults,
    })
}
