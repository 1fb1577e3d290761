use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use zigpkg::{LEGACY_OPTIONS, OPTIONS};

/// Run the driver in an empty directory so no stray zigpkg.toml or .env applies.
fn driver(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("zigpkg").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[cfg(all(feature = "add", not(feature = "subtract")))]
#[test]
fn compute_prints_result_and_options() {
    let dir = TempDir::new().unwrap();
    driver(&dir)
        .arg("5")
        .assert()
        .success()
        .stdout(format!("{}\n{OPTIONS}\n", 5 + zigpkg::DELTA));
}

#[cfg(feature = "add")]
#[test]
fn compute_overflow_fails() {
    let dir = TempDir::new().unwrap();
    driver(&dir)
        .arg("4294967295")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Result overflowed"));
}

#[test]
fn non_numeric_argument_is_usage_error() {
    let dir = TempDir::new().unwrap();
    driver(&dir)
        .arg("abc")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Invalid seed: abc"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn missing_argument_is_usage_error() {
    let dir = TempDir::new().unwrap();
    driver(&dir)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage:").and(predicate::str::contains("<num>")));
}

#[test]
fn extra_argument_is_usage_error() {
    let dir = TempDir::new().unwrap();
    driver(&dir)
        .args(["1", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn seed_beyond_u32_rejected() {
    let dir = TempDir::new().unwrap();
    driver(&dir)
        .arg("4294967296")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Invalid seed: 4294967296"));
}

#[test]
fn add_rejects_values_above_255() {
    let dir = TempDir::new().unwrap();
    driver(&dir)
        .args(["--op", "add", "999"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Invalid num: 999"))
        .stderr(predicate::str::contains("<num>"));
}

#[test]
fn add_prints_wrapped_result_and_legacy_options() {
    let dir = TempDir::new().unwrap();
    driver(&dir)
        .args(["--op", "add", "255"])
        .assert()
        .success()
        .stdout(format!("{}\n{LEGACY_OPTIONS}\n", zigpkg::add(255)));
}

#[test]
fn unknown_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();
    driver(&dir)
        .args(["--bogus", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn json_format() {
    let dir = TempDir::new().unwrap();
    let output = driver(&dir)
        .args(["--op", "add", "--format", "json", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["result"], u64::from(zigpkg::add(7)));
    assert_eq!(value["options"], serde_json::to_value(LEGACY_OPTIONS).unwrap());
}

#[test]
fn config_file_selects_operation() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("zigpkg.toml"),
        "[driver]\noperation = \"add\"\n",
    )
    .unwrap();
    driver(&dir)
        .arg("10")
        .assert()
        .success()
        .stdout(format!("{}\n{LEGACY_OPTIONS}\n", zigpkg::add(10)));
}

#[test]
fn cli_flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("zigpkg.toml"),
        "[driver]\noperation = \"add\"\n",
    )
    .unwrap();
    let assert = driver(&dir).args(["--op", "compute", "999"]).assert();
    match zigpkg::compute(999) {
        Ok(v) => {
            assert.success().stdout(format!("{v}\n{OPTIONS}\n"));
        }
        Err(_) => {
            assert
                .code(1)
                .stderr(predicate::str::contains("Result overflowed"));
        }
    }
}

#[test]
fn explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    driver(&dir)
        .args(["--config", "missing.toml", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn explicit_malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.toml"), "[driver\n").unwrap();
    driver(&dir)
        .args(["--config", "bad.toml", "5"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn usage_error_wins_over_broken_default_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("zigpkg.toml"), "[driver\n").unwrap();
    driver(&dir)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("Config error").not());
}

#[cfg(unix)]
#[test]
fn non_utf8_program_name_still_prints_usage() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::process::CommandExt;

    let dir = TempDir::new().unwrap();
    let mut std_cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("zigpkg"));
    std_cmd
        .arg0(OsStr::from_bytes(b"zig\xffpkg"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG");
    Command::from_std(std_cmd)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: zig\u{fffd}pkg <num>"));
}

#[test]
fn options_line_lists_every_field() {
    let line = OPTIONS.to_string();
    assert!(line.starts_with("add="));
    assert!(line.contains(" subtract="));
}
