//! `toggle-dependency <filename>`
//!
//! Swaps the live and commented source lines under `[dependencies.blog-ui]`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use blog_deploy::{defaults, script, toggle};

#[derive(Parser)]
#[command(name = "toggle-dependency", version, about = "Toggle the blog-ui dependency source")]
struct Args {
    filename: PathBuf,
}

fn main() -> ExitCode {
    let args = match script::parse_args::<Args>() {
        Ok(args) => args,
        Err(code) => return code,
    };

    let config = defaults::load_defaults().toggle;
    let result = toggle::toggle_file(&args.filename, &config.marker, &config.comment);
    script::outcome(result, |report| format!("Changes applied to {}", report.file)).emit()
}
