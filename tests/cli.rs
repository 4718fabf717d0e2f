#![allow(clippy::unwrap_used)]

use std::net::TcpListener;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cmd(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("github-repo-searching").unwrap();
    cmd.env("GITHUB_API_URI", format!("{}/search", server.uri()))
        .env_remove("RUST_LOG");
    cmd
}

async fn respond_with(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn prints_aligned_rows_with_language_prefix() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"full_name": "jashkenas/coffeescript", "language": "CoffeeScript",
                 "description": "Unfancy JavaScript"},
                {"full_name": "a/b", "language": "Rust", "description": "tiny"}
            ]
        })),
    )
    .await;

    cmd(&server)
        .arg("script")
        .assert()
        .success()
        .stdout(
            "[Coffee] jashkenas/coffeescript Unfancy JavaScript\n\
             [Rust]   a/b                    tiny\n",
        );
}

#[tokio::test]
async fn language_filter_drops_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "foo language:Go"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"full_name": "golang/go", "language": "Go", "description": "Go"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    cmd(&server)
        .args(["foo", "--language", "Go"])
        .assert()
        .success()
        .stdout("golang/go Go\n");
}

#[tokio::test]
async fn empty_items_prints_nothing() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"items": []})),
    )
    .await;

    cmd(&server).assert().success().stdout("");
}

#[tokio::test]
async fn invalid_json_fails_without_output() {
    let server = MockServer::start().await;
    respond_with(&server, ResponseTemplate::new(200).set_body_string("{oops")).await;

    cmd(&server)
        .arg("foo")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("error in parsing response: "));
}

#[test]
fn unreachable_api_fails() {
    // Bind then release a port so nothing is listening on it
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    Command::cargo_bin("github-repo-searching")
        .unwrap()
        .env("GITHUB_API_URI", format!("http://127.0.0.1:{}/search", port))
        .env_remove("RUST_LOG")
        .arg("foo")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("error in requesting: "));
}

#[tokio::test]
async fn invalid_choice_fails_before_requesting() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    cmd(&server)
        .args(["--sort", "name"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("invalid value"));
}

#[tokio::test]
async fn help_exits_successfully() {
    let server = MockServer::start().await;

    cmd(&server)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--in-readme"));
}
