//! Integration tests for the codesniff binary

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn codesniff(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("codesniff").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("CODESNIFF_CONFIG")
        .arg("--plain");
    cmd
}

fn json_stdout(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

#[test]
fn test_detect_file_as_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("add.txt"), "def add(a, b):\n    return a + b\n").unwrap();

    let output = codesniff(&dir)
        .args(["detect", "add.txt", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["source"], "add.txt");
    assert_eq!(json["top"]["language"], "python");
}

#[test]
fn test_detect_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let output = codesniff(&dir)
        .args(["detect", "--format", "json"])
        .write_stdin("fn main() { println!(\"hi\"); }")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_stdout(&output)["top"]["language"], "rust");
}

#[test]
fn test_detect_terminal_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() { println!(\"hi\"); }\n").unwrap();

    let output = codesniff(&dir).args(["detect", "main.rs"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("main.rs"));
    assert!(stdout.contains("Rust"));
}

#[test]
fn test_validate_mismatch_is_reported() {
    let dir = TempDir::new().unwrap();
    let output = codesniff(&dir)
        .args(["validate", "--lang", "javascript", "--format", "json"])
        .write_stdin("interface Foo { bar: string }")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["matches"], false);
    assert_eq!(json["detected"], "typescript");
}

#[test]
fn test_validate_strict_fails_on_mismatch() {
    let dir = TempDir::new().unwrap();
    codesniff(&dir)
        .args(["validate", "--lang", "javascript", "--strict"])
        .write_stdin("interface Foo { bar: string }")
        .assert()
        .failure();

    codesniff(&dir)
        .args(["validate", "--lang", "typescript", "--strict"])
        .write_stdin("interface Foo { bar: string }")
        .assert()
        .success();
}

#[test]
fn test_validate_unknown_language_fails() {
    let dir = TempDir::new().unwrap();
    let output = codesniff(&dir)
        .args(["validate", "--lang", "klingon"])
        .write_stdin("fn main() {}")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("klingon"));
}

#[test]
fn test_languages_lists_catalog() {
    let dir = TempDir::new().unwrap();
    let output = codesniff(&dir)
        .args(["languages", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    let languages = json.as_array().unwrap();
    assert_eq!(languages.len(), 15);
    assert!(languages.iter().any(|l| l["id"] == "cpp" && l["name"] == "C++"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    codesniff(&dir).arg("init").assert().success();
    assert!(dir.path().join(".codesniff.toml").exists());

    codesniff(&dir).arg("init").assert().failure();
    codesniff(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_config_default_format_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".codesniff.toml"),
        "[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();

    let output = codesniff(&dir)
        .arg("detect")
        .write_stdin("SELECT id FROM users;")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_stdout(&output)["top"]["language"], "sql");
}

#[test]
fn test_explicit_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[detection]\nmatch_tolerance = 4.0\n").unwrap();

    codesniff(&dir)
        .args(["--config", config.to_str().unwrap(), "languages"])
        .assert()
        .failure();
}
