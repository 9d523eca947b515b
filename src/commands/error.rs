use clap::{Args, Subcommand};
use serde::Serialize;

use blog_deploy::error::{self, ErrorHelp, ErrorHelpSummary};

use super::CmdResult;

#[derive(Args)]
pub struct ErrorArgs {
    #[command(subcommand)]
    command: ErrorCommand,
}

#[derive(Subcommand)]
enum ErrorCommand {
    /// List error codes, optionally for one area (prune, toggle, file, ...)
    Codes {
        /// Code area, the part before the dot
        #[arg(long)]
        area: Option<String>,
    },
    /// Explain an error code
    Explain {
        /// Error code (example: `toggle.block_incomplete`)
        code: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorOutput {
    Codes {
        command: String,
        codes: Vec<ErrorHelpSummary>,
    },
    Explain {
        command: String,
        help: ErrorHelp,
    },
}

pub fn run(args: ErrorArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ErrorOutput> {
    match args.command {
        ErrorCommand::Codes { area } => Ok((
            ErrorOutput::Codes {
                command: "error.codes".to_string(),
                codes: codes_in(area.as_deref()),
            },
            0,
        )),
        ErrorCommand::Explain { code } => {
            let Some(code_enum) = error::parse_code(&code) else {
                return Err(blog_deploy::Error::validation_unknown_error_code(code));
            };

            Ok((
                ErrorOutput::Explain {
                    command: "error.explain".to_string(),
                    help: error::explain(code_enum),
                },
                0,
            ))
        }
    }
}

fn codes_in(area: Option<&str>) -> Vec<ErrorHelpSummary> {
    error::list()
        .into_iter()
        .filter(|summary| match area {
            Some(area) => summary.code.split('.').next() == Some(area),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_filter_by_area() {
        let codes: Vec<String> = codes_in(Some("toggle")).into_iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["toggle.block_incomplete"]);
        assert_eq!(codes_in(None).len(), error::all_codes().len());
    }
}
