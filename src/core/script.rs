//! Plain-text front end for the standalone deploy scripts.
//!
//! Each script takes positional arguments only. A wrong argument count prints
//! the usage line and exits 1. A missing file or folder is reported on stdout
//! and exits 0. Any other failure goes to stderr and exits 1.

use std::fmt::Display;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::error::Result;

/// What a script prints and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutcome {
    pub message: String,
    pub to_stderr: bool,
    pub exit_code: u8,
}

impl ScriptOutcome {
    fn stdout(message: String) -> Self {
        Self {
            message,
            to_stderr: false,
            exit_code: 0,
        }
    }

    pub fn emit(self) -> ExitCode {
        if self.to_stderr {
            eprintln!("{}", self.message);
        } else {
            println!("{}", self.message);
        }
        ExitCode::from(self.exit_code)
    }
}

/// Parse script arguments, or produce the exit code to stop with.
pub fn parse_args<P: Parser>() -> std::result::Result<P, ExitCode> {
    match P::try_parse() {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            Err(ExitCode::SUCCESS)
        }
        Err(_) => Err(usage(P::command().render_usage()).emit()),
    }
}

pub fn usage(usage: impl Display) -> ScriptOutcome {
    ScriptOutcome {
        message: usage.to_string(),
        to_stderr: false,
        exit_code: 1,
    }
}

/// Map a script result to its printed message and exit code.
pub fn outcome<T>(result: Result<T>, on_success: impl FnOnce(&T) -> String) -> ScriptOutcome {
    match result {
        Ok(report) => ScriptOutcome::stdout(on_success(&report)),
        Err(err) if err.code.is_not_found() => ScriptOutcome::stdout(err.message),
        Err(err) => {
            let mut message = format!("Error [{}]: {}", err.code.as_str(), err.message);
            for hint in &err.hints {
                message.push_str(&format!("\n  hint: {}", hint.message));
            }
            ScriptOutcome {
                message,
                to_stderr: true,
                exit_code: 1,
            }
        }
    }
}
