//! Whole-pipeline runs over the fixture dictionary

use cpcd::{CpcdError, Outcome, Pipeline, PipelineOptions, RequestSource};
use cpcd_babel::FortranOptions;
use cpcd_parser::{RequestError, SchemaError};
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("cpcd-parser")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn options(dir: &TempDir, request: RequestSource) -> PipelineOptions {
    PipelineOptions {
        dictionary: fixture_path("pcd.yaml"),
        request,
        output: dir.path().join("cpcd_mod.F90"),
        ..PipelineOptions::default()
    }
}

#[test]
fn test_emits_fortran_module_for_request_file() {
    let dir = TempDir::new().unwrap();
    let opts = options(&dir, RequestSource::File(fixture_path("req.yaml")));
    let output = opts.output.clone();

    let outcome = Pipeline::new(opts).run(&mut Vec::new()).unwrap();
    assert_eq!(
        outcome,
        Outcome::Emitted {
            output: output.clone(),
            groups: 2,
            constants: 3,
        }
    );

    let module = fs::read_to_string(output).unwrap();
    insta::assert_snapshot!(module);
}

#[test]
fn test_inline_request_matches_file_request() {
    let dir = TempDir::new().unwrap();
    let from_file = options(&dir, RequestSource::File(fixture_path("req.yaml")));
    Pipeline::new(from_file.clone()).run(&mut Vec::new()).unwrap();
    let expected = fs::read_to_string(&from_file.output).unwrap();

    let inline = PipelineOptions {
        output: dir.path().join("inline.F90"),
        ..options(
            &dir,
            RequestSource::Inline("earth: g\nuniversal: [c, pi]\n".to_string()),
        )
    };
    Pipeline::new(inline.clone()).run(&mut Vec::new()).unwrap();
    assert_eq!(fs::read_to_string(&inline.output).unwrap(), expected);
}

#[test]
fn test_nested_request_stops_before_extraction() {
    let dir = TempDir::new().unwrap();
    let opts = options(&dir, RequestSource::File(fixture_path("req_nested.yaml")));
    let output = opts.output.clone();

    let err = Pipeline::new(opts).run(&mut Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        CpcdError::Request(RequestError::NestedMapNotAllowed { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn test_validate_only_reports_passed() {
    let dir = TempDir::new().unwrap();
    let opts = PipelineOptions {
        validate_only: true,
        strict: true,
        ..options(&dir, RequestSource::File(fixture_path("req.yaml")))
    };
    let output = opts.output.clone();

    let mut report = Vec::new();
    let outcome = Pipeline::new(opts).run(&mut report).unwrap();
    assert_eq!(outcome, Outcome::Validated);
    assert!(String::from_utf8(report)
        .unwrap()
        .ends_with("Validating physical constant dictionary ... passed\n"));
    assert!(!output.exists());
}

#[test]
fn test_validate_only_reports_failed() {
    let dir = TempDir::new().unwrap();
    let opts = PipelineOptions {
        dictionary: fixture_path("pcd_no_entries.yaml"),
        validate_only: true,
        ..options(&dir, RequestSource::File(fixture_path("req.yaml")))
    };

    let mut report = Vec::new();
    let err = Pipeline::new(opts).run(&mut report).unwrap_err();
    assert!(matches!(err, CpcdError::Schema(SchemaError::SequenceMismatch { .. })));
    assert!(String::from_utf8(report).unwrap().ends_with("FAILED\n"));
}

#[test]
fn test_verbose_shows_request_and_query() {
    let dir = TempDir::new().unwrap();
    let opts = PipelineOptions {
        verbose: true,
        ..options(&dir, RequestSource::Inline("earth: [g, g]\n".to_string()))
    };

    let mut report = Vec::new();
    Pipeline::new(opts).run(&mut report).unwrap();
    let report = String::from_utf8(report).unwrap();
    assert!(report.contains("User request:"));
    assert!(report.contains("Actual query:"));
    assert!(report.contains("Parsing ..."));
    assert!(report.contains("value: 9.80665"));
}

#[test]
fn test_print_writes_dictionary() {
    let dir = TempDir::new().unwrap();
    let opts = PipelineOptions {
        print: true,
        validate_only: true,
        ..options(&dir, RequestSource::File(fixture_path("req.yaml")))
    };

    let mut report = Vec::new();
    Pipeline::new(opts).run(&mut report).unwrap();
    let report = String::from_utf8(report).unwrap();
    assert!(report.starts_with("physical_constants_dictionary:"));
    assert!(report.contains("institution: National Earth System Prediction Capability"));
}

#[rstest]
#[case::malformed("malformed.yaml")]
#[case::missing("does_not_exist.yaml")]
fn test_unreadable_dictionary_is_a_load_error(#[case] name: &str) {
    let dir = TempDir::new().unwrap();
    let opts = PipelineOptions {
        dictionary: fixture_path(name),
        ..options(&dir, RequestSource::File(fixture_path("req.yaml")))
    };
    let err = Pipeline::new(opts).run(&mut Vec::new()).unwrap_err();
    assert!(matches!(err, CpcdError::Load(_)));
}

#[test]
fn test_yaml_format_output() {
    let dir = TempDir::new().unwrap();
    let opts = PipelineOptions {
        format: "yaml".to_string(),
        ..options(&dir, RequestSource::Inline("earth: g\n".to_string()))
    };
    let output = opts.output.clone();
    Pipeline::new(opts).run(&mut Vec::new()).unwrap();
    let text = fs::read_to_string(output).unwrap();
    assert_eq!(
        cpcd_parser::load_str(&text).unwrap(),
        cpcd_parser::load_str("earth:\n  - {name: g, value: 9.80665}\n").unwrap()
    );
}

#[rstest]
#[case::quad_precision("3.14159265358979323846264338327950288")]
#[case::beyond_u64("18446744073709551617")]
#[case::trailing_zero("1.50")]
#[case::hexadecimal("0x1F")]
fn test_values_are_emitted_as_written(#[case] literal: &str) {
    let dir = TempDir::new().unwrap();
    let dictionary = dir.path().join("pcd.yaml");
    fs::write(
        &dictionary,
        format!(
            "physical_constants_dictionary:\n  set:\n    - universal:\n        entries:\n          - name: pi\n            value: {}\n",
            literal
        ),
    )
    .unwrap();

    let opts = PipelineOptions {
        dictionary,
        fortran: FortranOptions {
            kind_value: "selected_real_kind(33)".to_string(),
            ..FortranOptions::default()
        },
        ..options(&dir, RequestSource::Inline("universal: pi\n".to_string()))
    };
    let output = opts.output.clone();
    Pipeline::new(opts).run(&mut Vec::new()).unwrap();

    let module = fs::read_to_string(output).unwrap();
    assert!(module.contains("  integer, parameter :: cpcd_kind = selected_real_kind(33)\n"));
    assert!(module.contains(&format!(
        "  real(cpcd_kind), parameter :: universal_pi = {}_cpcd_kind\n",
        literal
    )));
}
