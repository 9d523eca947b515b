use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use blog_deploy::defaults;
use blog_deploy::prune::{self, PruneReport};

use super::{allow_not_found, CmdResult, CommandStatus};

#[derive(Args)]
pub struct PruneArgs {
    /// Folder holding the deployed artifacts
    pub folder: PathBuf,

    /// Comma-separated names of the current artifacts
    pub keep_list: String,

    /// Characters of a current name that identify its family (default from config)
    #[arg(long)]
    pub prefix_len: Option<usize>,
}

#[derive(Serialize)]
pub struct PruneOutput {
    pub command: &'static str,
    pub status: CommandStatus,
    pub folder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PruneReport>,
}

pub fn run(args: PruneArgs, _global: &super::GlobalArgs) -> CmdResult<PruneOutput> {
    let prefix_len = args
        .prefix_len
        .unwrap_or_else(|| defaults::load_defaults().prune.prefix_len);
    let keep_list = prune::parse_keep_list(&args.keep_list);

    let (status, report, message) =
        allow_not_found(prune::prune(&args.folder, &keep_list, prefix_len))?;

    Ok((
        PruneOutput {
            command: "prune",
            status,
            folder: args.folder.display().to_string(),
            message,
            report,
        },
        0,
    ))
}
