use super::{codes, ErrorCode, Hint};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHelpSummary {
    pub code: String,
    pub summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHelp {
    pub code: String,
    pub summary: String,
    pub details_schema: serde_json::Value,
    pub hints: Vec<Hint>,
}

pub fn list() -> Vec<ErrorHelpSummary> {
    codes::all_codes()
        .iter()
        .copied()
        .map(|code| {
            let help = explain(code);
            ErrorHelpSummary {
                code: help.code,
                summary: help.summary,
            }
        })
        .collect()
}

fn help(code: ErrorCode, summary: &str, details_schema: serde_json::Value, hint: &str) -> ErrorHelp {
    ErrorHelp {
        code: code.as_str().to_string(),
        summary: summary.to_string(),
        details_schema,
        hints: vec![Hint {
            message: hint.to_string(),
        }],
    }
}

pub fn explain(code: ErrorCode) -> ErrorHelp {
    match code {
        ErrorCode::ConfigInvalidJson => help(
            code,
            "Configuration JSON is invalid",
            serde_json::json!({"path":"string","error":"string"}),
            "Fix JSON syntax in blog-deploy.json or run `blog-deploy config reset`",
        ),
        ErrorCode::ConfigInvalidValue => help(
            code,
            "Configuration value is invalid",
            serde_json::json!({"key":"string","value":"string?","problem":"string"}),
            "Correct the config value to match expected type/format",
        ),
        ErrorCode::ValidationInvalidArgument => help(
            code,
            "Invalid CLI argument",
            serde_json::json!({"field":"string","problem":"string","id":"string?","tried":"string[]?"}),
            "Verify the argument value and try again",
        ),
        ErrorCode::ValidationInvalidJson => help(
            code,
            "Invalid JSON input",
            serde_json::json!({"error":"string","context":"string?","inputPreview":"string?"}),
            "Validate the JSON you passed to the command",
        ),
        ErrorCode::ValidationUnknownErrorCode => help(
            code,
            "Unknown error code",
            serde_json::json!({"code":"string"}),
            "Run `blog-deploy error codes` to list available codes",
        ),
        ErrorCode::FileNotFound => help(
            code,
            "File to edit does not exist",
            serde_json::json!({"path":"string"}),
            "Check the manifest path passed to the command",
        ),
        ErrorCode::PruneDirectoryNotFound => help(
            code,
            "Artifact directory does not exist",
            serde_json::json!({"path":"string"}),
            "Nothing was deleted; check the folder path",
        ),
        ErrorCode::ToggleBlockIncomplete => help(
            code,
            "Marker line is not followed by two lines to toggle",
            serde_json::json!({"path":"string?","marker":"string","markerLine":"number","totalLines":"number"}),
            "Place the active and commented dependency lines right after the marker",
        ),
        ErrorCode::InternalIoError => help(
            code,
            "Filesystem IO error",
            serde_json::json!({"error":"string","context":"string?"}),
            "Check file permissions and paths",
        ),
        ErrorCode::InternalJsonError => help(
            code,
            "Internal JSON serialization error",
            serde_json::json!({"error":"string","context":"string?"}),
            "Report this issue with the command you ran",
        ),
        ErrorCode::InternalUnexpected => help(
            code,
            "Unexpected internal error",
            serde_json::json!({"error":"string"}),
            "Report this issue with the command you ran",
        ),
    }
}
