//! `prune-artifacts <folder_path> <comma_separated_current_filenames>`
//!
//! Deletes artifacts in the folder that share a name prefix with a current
//! file but are not current themselves.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use blog_deploy::{defaults, prune, script};

#[derive(Parser)]
#[command(name = "prune-artifacts", version, about = "Delete stale build artifacts")]
struct Args {
    folder_path: PathBuf,
    comma_separated_current_filenames: String,
}

fn main() -> ExitCode {
    let args = match script::parse_args::<Args>() {
        Ok(args) => args,
        Err(code) => return code,
    };

    let keep_list = prune::parse_keep_list(&args.comma_separated_current_filenames);
    let prefix_len = defaults::load_defaults().prune.prefix_len;

    let result = prune::prune(&args.folder_path, &keep_list, prefix_len);
    script::outcome(result, |report| {
        format!(
            "Deleted {} stale file(s) from {}",
            report.summary.deleted, report.folder
        )
    })
    .emit()
}
