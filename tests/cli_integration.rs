//! Exit codes and messages of the command-line tool

use std::path::{Path, PathBuf};
use std::process::Command;

const TWO_HEX_JSON: &str = include_str!("data/two_hex.json");
const COLLIDING_JSON: &str = r#"{ "hexagons": [ { "id": "a" }, { "id": "b" } ] }"#;

fn compiler() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hexmap-compiler"));
    cmd.env_remove("HEXMAP_CONFIG").env_remove("HEXMAP_STRICT");
    cmd
}

#[test]
fn test_success_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("map.json");
    let output = dir.path().join("map_data.h");
    std::fs::write(&input, TWO_HEX_JSON).unwrap();

    let result = compiler().arg(&input).arg(&output).output().unwrap();
    assert!(result.status.success());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Generated map header:"));
    assert!(stdout.contains("  Hexagons: 2"));
    assert!(stdout.contains("  Color Index: 0"));
    assert!(output.exists());
}

#[test]
fn test_missing_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let result = compiler()
        .arg(dir.path().join("nope.json"))
        .arg(dir.path().join("out.h"))
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("ERROR: Input file '"));
    assert!(stderr.contains("not found"));
}

#[test]
fn test_malformed_json_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("map.json");
    std::fs::write(&input, "not json").unwrap();

    let result = compiler().arg(&input).arg(dir.path().join("out.h")).output().unwrap();
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("ERROR: Invalid JSON in '"));
}

#[test]
fn test_unwritable_output_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("map.json");
    std::fs::write(&input, TWO_HEX_JSON).unwrap();

    let result = compiler()
        .arg(&input)
        .arg(dir.path().join("missing-dir").join("out.h"))
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("ERROR: "));
}

#[test]
fn test_strict_env_rejects_collision() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("map.json");
    let output = dir.path().join("out.h");
    std::fs::write(&input, COLLIDING_JSON).unwrap();

    let result = compiler()
        .env("HEXMAP_STRICT", "1")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
}

fn write_inputs(dir: &Path, config_toml: &str) -> (PathBuf, PathBuf) {
    let input = dir.join("map.json");
    let config = dir.join("hexmap.toml");
    std::fs::write(&input, COLLIDING_JSON).unwrap();
    std::fs::write(&config, config_toml).unwrap();
    (input, config)
}

#[test]
fn test_config_file_enables_strict_mode() {
    let dir = tempfile::tempdir().unwrap();
    let (input, config) = write_inputs(dir.path(), "strict = true\n");
    let output = dir.path().join("out.h");

    let result = compiler()
        .env("HEXMAP_CONFIG", &config)
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("ERROR: Map failed validation:"));
    assert!(!output.exists());
}

#[test]
fn test_strict_env_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let (input, config) = write_inputs(dir.path(), "strict = true\n");
    let output = dir.path().join("out.h");

    let result = compiler()
        .env("HEXMAP_CONFIG", &config)
        .env("HEXMAP_STRICT", "0")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("  Warnings: 1"));
    assert!(output.exists());
}

#[test]
fn test_invalid_strict_flag_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let (input, _) = write_inputs(dir.path(), "");
    let output = dir.path().join("out.h");

    let result = compiler()
        .env("HEXMAP_STRICT", "sometimes")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("ERROR: Config error: HEXMAP_STRICT must be a boolean flag"));
    assert!(!output.exists());
}

#[test]
fn test_unreadable_config_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let (input, _) = write_inputs(dir.path(), "");

    let result = compiler()
        .env("HEXMAP_CONFIG", dir.path().join("absent.toml"))
        .arg(&input)
        .arg(dir.path().join("out.h"))
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("ERROR: Config error: "));
}
