use blog_deploy::log_status;
use serde::Serialize;

pub type CmdResult<T> = blog_deploy::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// How an edit command ended when the target may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Applied,
    NotFound,
}

/// Split a not-found failure off into a reportable outcome.
///
/// A missing file or folder is reported and exits 0; any other error keeps
/// propagating.
pub(crate) fn allow_not_found<T>(
    result: blog_deploy::Result<T>,
) -> blog_deploy::Result<(CommandStatus, Option<T>, Option<String>)> {
    match result {
        Ok(report) => Ok((CommandStatus::Applied, Some(report), None)),
        Err(err) if err.code.is_not_found() => {
            log_status!("blog-deploy", "{}", err.message);
            Ok((CommandStatus::NotFound, None, Some(err.message)))
        }
        Err(err) => Err(err),
    }
}

pub mod config;
pub mod error;
pub mod prune;
pub mod replace;
pub mod toggle;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (blog_deploy::Result<serde_json::Value>, i32) {
    crate::tty::status("blog-deploy is working...");

    match command {
        crate::Commands::Prune(args) => dispatch!(args, global, prune),
        crate::Commands::Toggle(args) => dispatch!(args, global, toggle),
        crate::Commands::Replace(args) => dispatch!(args, global, replace),
        crate::Commands::Config(args) => dispatch!(args, global, config),
        crate::Commands::Error(args) => dispatch!(args, global, error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_not_found_reports_missing_file() {
        let result: blog_deploy::Result<()> = Err(blog_deploy::Error::file_not_found("Cargo.toml"));

        let (status, report, message) = allow_not_found(result).unwrap();

        assert_eq!(status, CommandStatus::NotFound);
        assert!(report.is_none());
        assert_eq!(message.as_deref(), Some("File Cargo.toml not found."));
    }

    #[test]
    fn allow_not_found_propagates_other_errors() {
        let result: blog_deploy::Result<()> =
            Err(blog_deploy::Error::internal_io("denied", None));

        assert!(allow_not_found(result).is_err());
    }
}
