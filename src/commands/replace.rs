use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use blog_deploy::defaults;
use blog_deploy::sections::{self, ReplaceReport, SectionValue};

use super::{allow_not_found, CmdResult, CommandStatus};

#[derive(Args)]
pub struct ReplaceArgs {
    /// Manifest to edit in place
    pub file: PathBuf,

    /// Full replacement line for the [dependencies] section
    #[arg(allow_hyphen_values = true)]
    pub dependencies_value: String,

    /// Full replacement line for the [features] section
    #[arg(allow_hyphen_values = true)]
    pub features_value: String,

    /// Leading characters of each value used to find its line (default from config)
    #[arg(long)]
    pub prefix_len: Option<usize>,
}

#[derive(Serialize)]
pub struct ReplaceOutput {
    pub command: &'static str,
    pub status: CommandStatus,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReplaceReport>,
}

pub fn run(args: ReplaceArgs, _global: &super::GlobalArgs) -> CmdResult<ReplaceOutput> {
    let config = defaults::load_defaults().replace;
    let prefix_len = args.prefix_len.unwrap_or(config.prefix_len);

    let pairs = [
        SectionValue {
            header: &config.dependencies_header,
            value: &args.dependencies_value,
        },
        SectionValue {
            header: &config.features_header,
            value: &args.features_value,
        },
    ];

    let (status, report, message) =
        allow_not_found(sections::replace_file_with(&args.file, &pairs, prefix_len))?;

    let message = message.or_else(|| Some(format!("Changes applied to {}", args.file.display())));

    Ok((
        ReplaceOutput {
            command: "replace",
            status,
            file: args.file.display().to_string(),
            message,
            report,
        },
        0,
    ))
}
