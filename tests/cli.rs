//! Binary-level tests: argument/environment handling and output format

use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::{Matcher, Server};
use predicates::prelude::*;

const CONFIG_VARS: [&str; 6] = [
    "GITHUB_REPO",
    "GITHUB_TOKEN",
    "GITHUB_API_URL",
    "PIP_PACKAGE",
    "PYPI_URL",
    "RUST_LOG",
];

fn version_checker() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("version-checker"));
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn github_tag_without_repository_exits_with_one_and_no_output() {
    version_checker()
        .args(["github-tag", "--token", "secret"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn github_tag_without_token_exits_with_one_and_no_output() {
    version_checker()
        .env("GITHUB_REPO", "owner/repo")
        .arg("github-tag")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn pypi_package_without_package_exits_with_one_and_no_output() {
    version_checker()
        .arg("pypi-package")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn github_tag_prints_highest_version_from_environment_config() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/repos/owner/repo/tags")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"name": "v2.0.0-rc1"},
                {"name": "v1.9.0"},
                {"name": "v1.0.0"},
                {"name": "garbage"}
            ]"#,
        )
        .create();

    version_checker()
        .env("GITHUB_REPO", "owner/repo")
        .env("GITHUB_TOKEN", "secret")
        .env("GITHUB_API_URL", server.url())
        .arg("github-tag")
        .assert()
        .success()
        .stdout("2.0.0-rc1\n");

    mock.assert();
}

#[test]
fn github_tag_prefers_explicit_arguments_over_environment() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/repos/explicit/repo/tags")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer explicit-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"name": "v1.02.03"}]"#)
        .create();

    version_checker()
        .env("GITHUB_REPO", "env/repo")
        .env("GITHUB_TOKEN", "env-token")
        .args([
            "github-tag",
            "explicit/repo",
            "--token",
            "explicit-token",
            "--api-url",
        ])
        .arg(server.url())
        .assert()
        .success()
        .stdout("1.2.3\n");

    mock.assert();
}

#[test]
fn github_tag_prints_zero_version_when_no_tag_parses() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/repos/owner/repo/tags")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"name": "nightly"}, {"name": "release-1.0.0"}]"#)
        .create();

    version_checker()
        .args(["github-tag", "owner/repo", "--token", "secret", "--api-url"])
        .arg(server.url())
        .assert()
        .success()
        .stdout("0.0.0\n");

    mock.assert();
}

#[test]
fn github_tag_fails_on_http_error_without_stdout() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/repos/owner/repo/tags")
        .match_query(Matcher::Any)
        .with_status(500)
        .expect(1)
        .create();

    version_checker()
        .args(["github-tag", "owner/repo", "--token", "secret", "--api-url"])
        .arg(server.url())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("500"));

    mock.assert();
}

#[test]
fn pypi_package_prints_package_and_version() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/pypi/requests/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"info": {"version": "2.32.5"}}"#)
        .create();

    version_checker()
        .env("PIP_PACKAGE", "requests")
        .env("PYPI_URL", server.url())
        .arg("pypi-package")
        .assert()
        .success()
        .stdout("requests=2.32.5\n");

    mock.assert();
}

#[test]
fn pypi_package_prefers_explicit_argument_over_environment() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/pypi/Django/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"info": {"version": "5.1rc1"}}"#)
        .create();

    version_checker()
        .env("PIP_PACKAGE", "requests")
        .args(["pypi-package", "Django", "--index-url"])
        .arg(server.url())
        .assert()
        .success()
        .stdout("Django=5.1rc1\n");

    mock.assert();
}

#[test]
fn pypi_package_fails_on_missing_package() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/pypi/nonexistent/json")
        .with_status(404)
        .create();

    version_checker()
        .args(["pypi-package", "nonexistent", "--index-url"])
        .arg(server.url())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nonexistent"));

    mock.assert();
}
