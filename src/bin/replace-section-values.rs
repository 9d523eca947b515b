//! `replace-section-values <filename> <dependencies_value> <features_value>`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use blog_deploy::sections::{self, SectionValue};
use blog_deploy::{defaults, script};

#[derive(Parser)]
#[command(
    name = "replace-section-values",
    version,
    about = "Replace pinned lines under [dependencies] and [features]"
)]
struct Args {
    filename: PathBuf,
    #[arg(allow_hyphen_values = true)]
    dependencies_value: String,
    #[arg(allow_hyphen_values = true)]
    features_value: String,
}

fn main() -> ExitCode {
    let args = match script::parse_args::<Args>() {
        Ok(args) => args,
        Err(code) => return code,
    };

    let config = defaults::load_defaults().replace;
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

    let result = sections::replace_file_with(&args.filename, &pairs, config.prefix_len);
    script::outcome(result, |report| format!("Changes applied to {}", report.file)).emit()
}
