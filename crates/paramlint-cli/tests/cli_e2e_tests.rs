//! CLI end-to-end tests that invoke the compiled `paramlint` binary.

use assert_cmd::Command;
use paramlint_test_utils::TestProject;
use predicates::prelude::*;

/// `paramlint` running inside the project directory, without a results file
/// unless the test asks for one.
fn paramlint(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("paramlint").unwrap();
    cmd.current_dir(project.root()).env_remove("RUST_LOG");
    cmd
}

fn sample_project() -> TestProject {
    let project = TestProject::new();
    project.write_parameters(
        r#"
find_replace:
  - find_value: "dev-lakehouse-id"
    replace_value:
      PROD: "prod-lakehouse-id"
    item_type: Notebook
    item_name: Sales
    file_path: "Sales.Notebook/notebook-content.py"
"#,
    );
    project.add_artifact("Sales.Notebook");
    project.add_artifact("reports/Orphan.Report");
    project
}

#[test]
fn test_help_exits_zero() {
    Command::cargo_bin("paramlint")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parameter.yml"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("paramlint")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("paramlint"));
}

#[test]
fn test_reports_unreferenced_artifact() {
    let project = sample_project();

    paramlint(&project)
        .args([".", "--no-log-file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Artifact Orphan is not referenced"))
        .stdout(predicate::str::contains("No invalid file_path references found"));
}

#[test]
fn test_missing_parameter_file_fails() {
    let project = TestProject::new();

    paramlint(&project)
        .args([".", "--no-log-file"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parameter.yml was not found"));
}

#[test]
fn test_missing_workspace_fails() {
    let project = TestProject::new();

    paramlint(&project)
        .args(["does-not-exist", "--no-log-file"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Workspace directory was not found"));
}

#[test]
fn test_strict_exit_code_on_broken_file_path() {
    let project = TestProject::new();
    project.write_parameters("find_replace:\n  - file_path: \"Renamed.Notebook/x.py\"\n");

    paramlint(&project)
        .args([".", "--no-log-file"])
        .assert()
        .success();

    paramlint(&project)
        .args([".", "--no-log-file", "--strict"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "The file_path entry containing Renamed was not found within the project.",
        ));
}

#[test]
fn test_exclusion_flag_hides_artifacts() {
    let project = sample_project();

    paramlint(&project)
        .args([".", "--no-log-file", "-x", "reports"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Orphan").not());
}

#[test]
fn test_json_output() {
    let project = sample_project();

    let output = paramlint(&project)
        .args([".", "--no-log-file", "--json", "-t", "Notebook", "-t", "Report"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["project_artifacts"], serde_json::json!(["Orphan", "Sales"]));
    assert_eq!(report["findings"][2]["axis"], "project");
    assert_eq!(report["findings"][2]["missing"], serde_json::json!(["Orphan"]));
}

#[test]
fn test_results_file_receives_findings() {
    let project = sample_project();

    paramlint(&project)
        .args(["."])
        .assert()
        .success();

    project.assert_exists("paramlint_results.log");
    let log = std::fs::read_to_string(project.path("paramlint_results.log")).unwrap();
    assert!(log.contains("WARN"));
    assert!(log.contains("Artifact Orphan is not referenced"));
    assert!(!log.contains("DEBUG"));
    assert!(!log.contains('\u{1b}'), "results file must not contain ANSI escapes");
}

#[test]
fn test_settings_file_is_discovered() {
    let project = sample_project();
    project.write_file("paramlint.toml", "item_types = [\"Notebook\"]\n");

    paramlint(&project)
        .args([".", "--no-log-file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Orphan").not());
}

#[test]
fn test_invalid_axis_fails() {
    let project = sample_project();

    paramlint(&project)
        .args([".", "--no-log-file", "--axis", "everything"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid analysis axis"));
}
