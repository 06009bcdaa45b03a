use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("cpcd-parser")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn extract_constants_to_fortran_module() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cpcd_mod.F90");

    let mut cmd = cargo_bin_cmd!("cpcd");
    cmd.current_dir(dir.path())
        .arg("-d")
        .arg(fixture_path("pcd.yaml"))
        .arg("-r")
        .arg(fixture_path("req.yaml"))
        .arg("-o")
        .arg(&output);
    cmd.assert().success();

    let module = fs::read_to_string(&output).unwrap();
    assert!(module.starts_with("module cpcd\n"));
    assert!(module.contains("  real(cpcd_kind), parameter :: earth_g = 9.80665_cpcd_kind\n"));
    assert!(module.ends_with("end module cpcd\n"));
}

#[test]
fn completion_is_logged_once() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cpcd_mod.F90");

    let mut cmd = cargo_bin_cmd!("cpcd");
    cmd.current_dir(dir.path())
        .env("RUST_LOG", "info")
        .arg("-d")
        .arg(fixture_path("pcd.yaml"))
        .arg("-r")
        .arg(fixture_path("req.yaml"))
        .arg("-o")
        .arg(&output);
    let out = cmd.output().unwrap();
    assert!(out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("3 constants from 2 sets").count(), 1);
}

#[test]
fn validate_only_passes_for_reference_dictionary() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("cpcd");
    cmd.current_dir(dir.path())
        .arg("--validate")
        .arg("--dictionary")
        .arg(fixture_path("pcd.yaml"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Validating physical constant dictionary ... passed"));
    assert!(!dir.path().join("cpcd_mod.F90").exists());
}

#[test]
fn validate_only_fails_for_broken_dictionary() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("cpcd");
    cmd.current_dir(dir.path())
        .arg("-x")
        .arg("-d")
        .arg(fixture_path("pcd_no_entries.yaml"));

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("FAILED"))
        .stderr(predicate::str::contains("Error: invalid dictionary"));
}

#[test]
fn strict_requires_validate() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("cpcd");
    cmd.current_dir(dir.path())
        .arg("--strict")
        .arg("-d")
        .arg(fixture_path("pcd.yaml"));

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("--validate"));
    assert!(!dir.path().join("cpcd_mod.F90").exists());
}

#[test]
fn strict_validation_passes_for_reference_dictionary() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("cpcd");
    cmd.current_dir(dir.path())
        .arg("-x")
        .arg("--strict")
        .arg("-d")
        .arg(fixture_path("pcd.yaml"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("... passed"));
}

#[test]
fn nested_request_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cpcd_mod.F90");

    let mut cmd = cargo_bin_cmd!("cpcd");
    cmd.current_dir(dir.path())
        .arg("-d")
        .arg(fixture_path("pcd.yaml"))
        .arg("-r")
        .arg(fixture_path("req_nested.yaml"))
        .arg("-o")
        .arg(&output);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("requests should not include nested maps"));
    assert!(!output.exists());
}

#[test]
fn inline_request_with_yaml_format() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("constants.yaml");

    let mut cmd = cargo_bin_cmd!("cpcd");
    cmd.current_dir(dir.path())
        .arg("-d")
        .arg(fixture_path("pcd.yaml"))
        .arg("--request-inline")
        .arg("universal: h")
        .arg("--format")
        .arg("yaml")
        .arg("-o")
        .arg(&output);
    cmd.assert().success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("universal:"));
    assert!(text.contains("name: h"));
}

#[test]
fn defaults_come_from_project_config() {
    let dir = TempDir::new().unwrap();
    fs::copy(fixture_path("pcd.yaml"), dir.path().join("constants.yaml")).unwrap();
    fs::write(dir.path().join("req.yaml"), "earth: radius\n").unwrap();
    fs::write(
        dir.path().join("cpcd.toml"),
        "[paths]\ndictionary = \"constants.yaml\"\noutput = \"out.F90\"\n\n[emit.fortran]\nmodule_name = \"earth_consts\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("cpcd");
    cmd.current_dir(dir.path()).arg("--verbose");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Actual query:"));

    let module = fs::read_to_string(dir.path().join("out.F90")).unwrap();
    assert!(module.starts_with("module earth_consts\n"));
    assert!(module.contains("earth_radius = 6371000.0_cpcd_kind"));
}

#[test]
fn unknown_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("cpcd");
    cmd.current_dir(dir.path())
        .arg("-d")
        .arg(fixture_path("pcd.yaml"))
        .arg("-f")
        .arg("cobol");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("format 'cobol' not found"));
}

#[test]
fn no_arguments_prints_help_and_fails() {
    let mut cmd = cargo_bin_cmd!("cpcd");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: cpcd"));
}

#[test]
fn version_flag_succeeds() {
    let mut cmd = cargo_bin_cmd!("cpcd");
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cpcd"));
}
