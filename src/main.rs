use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{config, error, prune, replace, toggle};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "blog-deploy")]
#[command(version = VERSION)]
#[command(about = "Deployment helpers for the blog stack")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete stale build artifacts that share a prefix with current ones
    Prune(prune::PruneArgs),
    /// Swap the commented and live lines under the dependency marker
    Toggle(toggle::ToggleArgs),
    /// Replace pinned lines under [dependencies] and [features]
    Replace(replace::ReplaceArgs),
    /// Manage global blog-deploy configuration
    Config(config::ConfigArgs),
    /// Inspect error codes
    Error(error::ErrorArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
