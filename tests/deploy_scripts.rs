use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SERVER_MANIFEST: &str = "[package]\nname = \"blog-server-api\"\n\n[dependencies.blog-ui]\npath = \"../blog-ui\"\n#git = \"https://example.com/blog-ui.git\"\n\n[dependencies]\nserde = \"1\"\n";

const UI_MANIFEST: &str = "[package]\nname = \"blog-ui\"\n\n[dependencies]\nblog-generic = { path = \"../blog-generic\" }\n\n[features]\ndefault = [\"hydrate\"]\n";

/// Run a binary with an isolated config directory.
fn run(bin: &str, home: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env("HOME", home)
        .env("APPDATA", home)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn toggle_dependency_swaps_and_restores() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("Cargo.toml");
    fs::write(&manifest, SERVER_MANIFEST).unwrap();
    let path = manifest.to_str().unwrap();

    let first = run(env!("CARGO_BIN_EXE_toggle-dependency"), dir.path(), &[path]);
    assert!(first.status.success());
    assert!(stdout(&first).contains("Changes applied to"));

    let toggled = fs::read_to_string(&manifest).unwrap();
    assert!(toggled.contains("\n#path = \"../blog-ui\"\ngit = \"https://example.com/blog-ui.git\"\n"));

    let second = run(env!("CARGO_BIN_EXE_toggle-dependency"), dir.path(), &[path]);
    assert!(second.status.success());
    assert_eq!(fs::read_to_string(&manifest).unwrap(), SERVER_MANIFEST);
}

#[test]
fn toggle_dependency_requires_one_argument() {
    let dir = TempDir::new().unwrap();

    let output = run(env!("CARGO_BIN_EXE_toggle-dependency"), dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn toggle_dependency_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("Cargo.toml");

    let output = run(
        env!("CARGO_BIN_EXE_toggle-dependency"),
        dir.path(),
        &[missing.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output).trim(),
        format!("File {} not found.", missing.display())
    );
}

#[test]
fn toggle_dependency_refuses_truncated_block() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("Cargo.toml");
    fs::write(&manifest, "[dependencies.blog-ui]\npath = \"../blog-ui\"\n").unwrap();

    let output = run(
        env!("CARGO_BIN_EXE_toggle-dependency"),
        dir.path(),
        &[manifest.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        fs::read_to_string(&manifest).unwrap(),
        "[dependencies.blog-ui]\npath = \"../blog-ui\"\n"
    );
}

#[test]
fn replace_section_values_rewrites_both_sections() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("Cargo.toml");
    fs::write(&manifest, UI_MANIFEST).unwrap();
    let dependency = "blog-generic = { git = \"https://example.com/blog.git\", rev = \"4f2a\" }";

    let output = run(
        env!("CARGO_BIN_EXE_replace-section-values"),
        dir.path(),
        &[manifest.to_str().unwrap(), dependency, "default = [\"ssr\"]"],
    );

    assert!(output.status.success());
    let written = fs::read_to_string(&manifest).unwrap();
    assert!(written.contains(&format!("[dependencies]\n{}\n", dependency)));
    assert!(written.ends_with("[features]\ndefault = [\"ssr\"]\n"));
    assert!(written.starts_with("[package]\nname = \"blog-ui\"\n"));
}

#[test]
fn replace_section_values_requires_three_arguments() {
    let dir = TempDir::new().unwrap();

    let output = run(
        env!("CARGO_BIN_EXE_replace-section-values"),
        dir.path(),
        &["Cargo.toml", "only-one"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn prune_artifacts_keeps_current_and_unrelated_files() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("static");
    fs::create_dir(&folder).unwrap();
    for name in ["abcdef123.bin", "abcdef999.bin", "other.txt"] {
        File::create(folder.join(name)).unwrap();
    }

    let output = run(
        env!("CARGO_BIN_EXE_prune-artifacts"),
        dir.path(),
        &[folder.to_str().unwrap(), "abcdef123.bin"],
    );

    assert!(output.status.success());
    assert!(folder.join("abcdef123.bin").exists());
    assert!(folder.join("other.txt").exists());
    assert!(!folder.join("abcdef999.bin").exists());
}

#[test]
fn prune_artifacts_reports_missing_folder() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("static");

    let output = run(
        env!("CARGO_BIN_EXE_prune-artifacts"),
        dir.path(),
        &[missing.to_str().unwrap(), "main.js"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output).trim(),
        format!("The folder '{}' does not exist.", missing.display())
    );
}

#[test]
fn umbrella_cli_wraps_results_in_json_envelope() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("Cargo.toml");
    fs::write(&manifest, SERVER_MANIFEST).unwrap();

    let output = run(
        env!("CARGO_BIN_EXE_blog-deploy"),
        dir.path(),
        &["toggle", manifest.to_str().unwrap()],
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "applied");
    assert_eq!(json["data"]["report"]["marker_line"], 4);
    assert_eq!(json["data"]["report"]["changes"].as_array().unwrap().len(), 2);
}

#[test]
fn umbrella_cli_reports_missing_file_as_success() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("Cargo.toml");

    let output = run(
        env!("CARGO_BIN_EXE_blog-deploy"),
        dir.path(),
        &["replace", missing.to_str().unwrap(), "blog-generic = 1", "default = []"],
    );

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["status"], "not_found");
    assert!(json["data"].get("report").is_none());
}

#[test]
fn umbrella_cli_maps_validation_errors_to_exit_code_2() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("static");
    fs::create_dir(&folder).unwrap();

    let output = run(
        env!("CARGO_BIN_EXE_blog-deploy"),
        dir.path(),
        &["prune", folder.to_str().unwrap(), "main.js", "--prefix-len", "0"],
    );

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "validation.invalid_argument");
}

#[test]
fn config_set_is_picked_up_by_scripts() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("static");
    fs::create_dir(&folder).unwrap();
    for name in ["main.aaaa.js", "main.aabb.js"] {
        File::create(folder.join(name)).unwrap();
    }

    let set = run(
        env!("CARGO_BIN_EXE_blog-deploy"),
        dir.path(),
        &["config", "set", "/defaults/prune/prefix_len", "9"],
    );
    assert!(set.status.success());

    run(
        env!("CARGO_BIN_EXE_prune-artifacts"),
        dir.path(),
        &[folder.to_str().unwrap(), "main.aaaa.js"],
    );

    // Six characters ("main.a") would match; nine ("main.aaaa") do not.
    assert!(folder.join("main.aabb.js").exists());
}
