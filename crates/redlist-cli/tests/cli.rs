//! End-to-end tests for the redlist binary.
//!
//! Each test runs the built binary against a wiremock server standing in for
//! both Reddit hosts. The binary runs in a fresh temporary directory so no
//! stray `.env` file is picked up.

use std::path::Path;
use std::process::Output;

use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::process::Command;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CREDENTIAL_VARS: [&str; 7] = [
    "REDDIT_CLIENT_ID",
    "REDDIT_CLIENT_SECRET",
    "REDDIT_PASSWORD",
    "REDDIT_USER_AGENT",
    "REDDIT_USERNAME",
    "REDDIT_AUTH_URL",
    "REDDIT_API_URL",
];

fn base_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

fn credential_env(base: &str) -> Vec<(&'static str, String)> {
    vec![
        ("REDDIT_CLIENT_ID", "client-id".to_string()),
        ("REDDIT_CLIENT_SECRET", "client-secret".to_string()),
        ("REDDIT_PASSWORD", "hunter2".to_string()),
        ("REDDIT_USER_AGENT", "script:redlist-test:v0.1".to_string()),
        ("REDDIT_USERNAME", "alice".to_string()),
        ("REDDIT_AUTH_URL", base.to_string()),
        ("REDDIT_API_URL", base.to_string()),
    ]
}

/// Run the binary in `dir` with only the given Reddit variables set.
async fn run_cli(dir: &Path, env: &[(&'static str, String)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_redlist"));
    cmd.current_dir(dir);
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd.env("RUST_LOG", "off");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().await.expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-token",
            "token_type": "bearer",
            "expires_in": 86400,
            "scope": "*"
        })))
        .mount(server)
        .await;
}

async fn mount_me(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "alice" })))
        .mount(server)
        .await;
}

fn listing(posts: &[(&str, Option<&str>, i64)]) -> Value {
    let children: Vec<_> = posts
        .iter()
        .enumerate()
        .map(|(i, (title, author, score))| {
            json!({
                "kind": "t3",
                "data": {
                    "id": format!("p{i}"),
                    "title": title,
                    "author": author.unwrap_or("[deleted]"),
                    "score": score,
                    "created_utc": 1_700_000_000.0 - i as f64
                }
            })
        })
        .collect();

    json!({
        "kind": "Listing",
        "data": { "after": null, "children": children }
    })
}

async fn mount_cats(server: &MockServer, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/r/cats/new"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_prints_five_newest_posts() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_me(&server).await;
    mount_cats(
        &server,
        listing(&[
            ("First", Some("a"), 10),
            ("Second", Some("b"), 0),
            ("Third", None, -4),
            ("Fourth", Some("d"), 3),
            ("Fifth", Some("e"), 1),
            ("Sixth", Some("f"), 1),
        ]),
        1,
    )
    .await;

    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &credential_env(&base_url(&server))).await;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Starting authentication..."));
    assert_eq!(out.matches("User alice has logged in").count(), 1);
    assert_eq!(out.matches("Post title: ").count(), 5);
    assert_eq!(out.matches("Post author: ").count(), 5);
    assert_eq!(out.matches("Post upvote count: ").count(), 5);
    assert!(!out.contains("Sixth"));

    let titles: Vec<_> = out
        .lines()
        .filter_map(|l| l.strip_prefix("Post title: "))
        .collect();
    assert_eq!(titles, ["First", "Second", "Third", "Fourth", "Fifth"]);

    assert!(out.contains("Post author: [deleted]"));
    assert!(out.contains("Post upvote count: -4"));
}

#[tokio::test]
async fn test_prints_fewer_posts_when_forum_is_small() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_me(&server).await;
    mount_cats(
        &server,
        listing(&[("Only", Some("a"), 1), ("Two", Some("b"), 2)]),
        1,
    )
    .await;

    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &credential_env(&base_url(&server))).await;
    let out = stdout(&output);

    assert!(output.status.success());
    assert_eq!(out.matches("Post title: ").count(), 2);
    assert!(!out.contains("exception"));
}

#[tokio::test]
async fn test_invalid_password_skips_listing_and_exits_zero() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "invalid_grant"
        })))
        .mount(&server)
        .await;
    mount_cats(&server, listing(&[]), 0).await;

    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &credential_env(&base_url(&server))).await;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(
        out.contains("An authentication exception has happened - invalid username or password.")
    );
    assert!(out.contains("An exception has occurred: Problem with authentication."));
    assert!(!out.contains("has logged in"));
    assert!(!out.contains("Post title"));
}

#[tokio::test]
async fn test_unreachable_network_reports_generic_failure() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &credential_env("http://127.0.0.1:1")).await;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("An exception has occurred: transport error"));
    assert!(!out.contains("An authentication exception"));
    assert!(out.contains("Problem with authentication."));
}

#[tokio::test]
async fn test_missing_environment_reports_library_failure() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &[]).await;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("A client library exception has occurred"));
    assert!(out.contains("REDDIT_CLIENT_ID"));
}

#[tokio::test]
async fn test_reads_credentials_from_dotenv_file() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_me(&server).await;
    mount_cats(&server, listing(&[("From dotenv", Some("a"), 7)]), 1).await;

    let dir = TempDir::new().unwrap();
    let contents: String = credential_env(&base_url(&server))
        .into_iter()
        .map(|(key, value)| format!("{key}={value}\n"))
        .collect();
    std::fs::write(dir.path().join(".env"), contents).unwrap();

    let output = run_cli(dir.path(), &[]).await;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("User alice has logged in"));
    assert!(out.contains("Post title: From dotenv"));
}

#[tokio::test]
async fn test_listing_failure_is_reported_and_exits_zero() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_me(&server).await;

    Mock::given(method("GET"))
        .and(path("/r/cats/new"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", "https://www.reddit.com/subreddits/search.json?q=cats"),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = run_cli(dir.path(), &credential_env(&base_url(&server))).await;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("User alice has logged in"));
    assert!(!out.contains("Post title"));

    let failure: Vec<_> = out
        .lines()
        .filter(|l| l.contains("An exception has occurred"))
        .collect();
    assert_eq!(
        failure,
        ["✗ An exception has occurred: protocol error: HTTP 302 [Redirect]: \
          redirected to https://www.reddit.com/subreddits/search.json?q=cats"]
    );
}
