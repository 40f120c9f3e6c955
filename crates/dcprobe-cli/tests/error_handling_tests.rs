//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write as _;

fn dcprobe() -> Command {
    let mut cmd = Command::cargo_bin("dcprobe").unwrap();
    cmd.env_remove("DCPROBE_HOST")
        .env_remove("DCPROBE_USERNAME")
        .env_remove("DCPROBE_PASSWORD")
        .env_remove("DCPROBE_INVENTORY")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn guarded_fixture() -> tempfile::NamedTempFile {
    fixture(
        r#"
        [endpoint]
        username = "root"
        password = "password"

        datacenters = ["DC0"]
        "#,
    )
}

#[test]
fn missing_host_is_a_user_error_with_suggestions() {
    let inv = fixture(r#"datacenters = ["DC0"]"#);

    dcprobe()
        .args(["datacenters", "--inventory"])
        .arg(inv.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Host address must not be empty"))
        .stderr(predicate::str::contains("--host"));
}

#[test]
fn bad_credentials_exit_with_remote_code() {
    let inv = guarded_fixture();

    dcprobe()
        .args([
            "datacenters",
            "--host",
            "192.168.1.86",
            "-u",
            "root",
            "-p",
            "wrong",
            "--inventory",
        ])
        .arg(inv.path())
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("authentication rejected"))
        // No datacenter output after a failed connect — fail-fast.
        .stdout(predicate::str::contains("DC: ").not());
}

#[test]
fn anonymous_connect_against_guarded_endpoint_fails_remote() {
    let inv = guarded_fixture();

    dcprobe()
        .args(["datacenters", "--host", "192.168.1.86", "--inventory"])
        .arg(inv.path())
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("requires credentials"));
}

#[test]
fn username_without_password_is_rejected_off_terminal() {
    let inv = fixture(r#"datacenters = ["DC0"]"#);

    dcprobe()
        .args([
            "datacenters",
            "--host",
            "192.168.1.86",
            "-u",
            "root",
            "--inventory",
        ])
        .arg(inv.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("together"));
}

#[test]
fn missing_inventory_file_is_not_found() {
    dcprobe()
        .args([
            "check",
            "--host",
            "vcenter.local",
            "--inventory",
            "/definitely/not/here.toml",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Inventory not found"));
}

#[test]
fn no_backend_configured_is_a_configuration_error() {
    dcprobe()
        .args(["check", "--host", "vcenter.local"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("--inventory"));
}

#[test]
fn malformed_inventory_is_a_configuration_error() {
    let inv = fixture("this is not toml = [");

    dcprobe()
        .args(["check", "--host", "vcenter.local", "--inventory"])
        .arg(inv.path())
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid inventory"));
}

#[test]
fn explicit_missing_config_file_fails_startup() {
    dcprobe()
        .args([
            "check",
            "--host",
            "vcenter.local",
            "--config",
            "/definitely/not/here.toml",
        ])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn unknown_subcommand_is_an_argument_error() {
    dcprobe().arg("frobnicate").assert().failure().code(2);
}

#[test]
fn errors_offer_verbose_hint() {
    dcprobe()
        .args(["check", "--host", "vcenter.local"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--verbose"));
}
