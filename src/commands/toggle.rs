use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use blog_deploy::defaults;
use blog_deploy::toggle::{self, ToggleReport};

use super::{allow_not_found, CmdResult, CommandStatus};

#[derive(Args)]
pub struct ToggleArgs {
    /// Manifest to edit in place
    pub file: PathBuf,

    /// Line marking the dependency block (default from config)
    #[arg(long)]
    pub marker: Option<String>,

    /// Comment prefix used to disable a line (default from config)
    #[arg(long)]
    pub comment: Option<String>,
}

#[derive(Serialize)]
pub struct ToggleOutput {
    pub command: &'static str,
    pub status: CommandStatus,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ToggleReport>,
}

pub fn run(args: ToggleArgs, _global: &super::GlobalArgs) -> CmdResult<ToggleOutput> {
    let config = defaults::load_defaults().toggle;
    let marker = args.marker.unwrap_or(config.marker);
    let comment = args.comment.unwrap_or(config.comment);

    let (status, report, message) =
        allow_not_found(toggle::toggle_file(&args.file, &marker, &comment))?;

    let message = message.or_else(|| Some(format!("Changes applied to {}", args.file.display())));

    Ok((
        ToggleOutput {
            command: "toggle",
            status,
            file: args.file.display().to_string(),
            message,
            report,
        },
        0,
    ))
}
