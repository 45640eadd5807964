//! CLI-level tests. Everything here fails before any network request is
//! made, so no endpoint needs to exist.

use assert_cmd::Command;
use predicates::prelude::*;

fn awscmd() -> Command {
    Command::cargo_bin("awscmd").expect("binary builds")
}

#[test]
fn help_lists_service_subcommands() {
    awscmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("transcoder"))
        .stdout(predicate::str::contains("cloudmap"))
        .stdout(predicate::str::contains("kvwebrtc"))
        .stdout(predicate::str::contains("list-ops"));
}

#[test]
fn version_flag_works() {
    awscmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("awscmd"));
}

#[test]
fn list_ops_shows_the_catalog() {
    awscmd()
        .args(["--no-color", "list-ops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ListJobsByPipeline"))
        .stdout(predicate::str::contains("DiscoverInstances"))
        .stdout(predicate::str::contains("JoinStorageSession"));
}

#[test]
fn list_ops_filters_by_service() {
    awscmd()
        .args(["--no-color", "list-ops", "servicediscovery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ListNamespaces"))
        .stdout(predicate::str::contains("ListJobsByPipeline").not());
}

#[test]
fn list_ops_rejects_unknown_service() {
    awscmd()
        .args(["list-ops", "nosuchservice"])
        .assert()
        .code(2);
}

#[test]
fn unknown_operation_is_a_validation_error() {
    awscmd()
        .args(["transcoder", "ListEverything"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ListEverything"));
}

#[test]
fn missing_required_parameter_fails_before_any_call() {
    awscmd()
        .args(["transcoder", "ListJobsByPipeline"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("PipelineId"));
}

#[test]
fn unknown_parameter_is_rejected() {
    awscmd()
        .args([
            "transcoder",
            "ListJobsByPipeline",
            "PipelineId=1234",
            "Bogus=1",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Bogus"));
}

#[test]
fn unknown_select_field_is_rejected() {
    awscmd()
        .args([
            "transcoder",
            "ListJobsByPipeline",
            "PipelineId=1234",
            "--select",
            "NotAField",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NotAField"));
}

#[test]
fn echo_selection_requires_a_bound_parameter() {
    awscmd()
        .args([
            "transcoder",
            "ListJobsByPipeline",
            "PipelineId=1234",
            "--select",
            "^Ascending",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Ascending"));
}

#[test]
fn starting_token_on_unpaginated_operation_is_rejected() {
    awscmd()
        .args([
            "cloudmap",
            "DiscoverInstances",
            "NamespaceName=prod",
            "ServiceName=web",
            "--starting-token",
            "tok",
        ])
        .assert()
        .code(2);
}

#[test]
fn mutating_operation_refuses_without_a_terminal_or_force() {
    // stdin is a pipe here, so the confirmation gate cannot prompt.
    awscmd()
        .args([
            "kvwebrtc",
            "JoinStorageSession",
            "ChannelArn=arn:aws:kinesisvideo:us-east-1:111122223333:channel/demo/1",
        ])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn kebab_case_operation_names_resolve() {
    // Resolves the operation, then fails on the missing required parameter.
    awscmd()
        .args(["transcoder", "list-jobs-by-pipeline"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("PipelineId"));
}
