//! End-to-end tests for commands backed by the content API.
//!
//! A mock server stands in for the hosted source; the binary is pointed at
//! it via `--api-url`. Multi-threaded runtimes are required because the
//! binary runs as a blocking child process while the mock serves requests.

mod common;

use common::{run_cli, run_cli_success};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_args<'a>(uri: &'a str, rest: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["--api-url", uri, "--api-key", "test-key"];
    args.extend_from_slice(rest);
    args
}

#[tokio::test(flavor = "multi_thread")]
async fn businesses_render_from_remote_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/businesses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "b1",
                "name": "SheCodes Studio",
                "owner": "Brenda Lee",
                "category": "Technology",
            },
        ])))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let uri = server.uri();
    let stdout = run_cli_success(&api_args(&uri, &["showcase", "businesses"]), home.path());

    assert!(stdout.contains("SheCodes Studio"));
    assert!(stdout.contains("Brenda Lee"));
}

#[tokio::test(flavor = "multi_thread")]
async fn merged_list_prefers_local_copy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/stories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "r1",
                "created_at": "2020-01-01T00:00:00Z",
                "title": "A Remote Story Title",
                "excerpt": "An excerpt.",
                "body": "A body.",
                "author": "Remote Author",
            },
        ])))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let body = "b".repeat(220);
    run_cli_success(
        &[
            "stories",
            "submit",
            "--title",
            "A Local Story Title",
            "--excerpt",
            "An excerpt comfortably long enough to pass the submission rules.",
            "--body",
            &body,
            "--author",
            "Local Author",
        ],
        home.path(),
    );

    let uri = server.uri();
    let stdout = run_cli_success(&api_args(&uri, &["stories", "list"]), home.path());

    assert!(stdout.contains("A Local Story Title"));
    assert!(stdout.contains("A Remote Story Title"));
    // Local stories are newer and sort first under the default order.
    let local_pos = stdout.find("A Local Story Title").unwrap();
    let remote_pos = stdout.find("A Remote Story Title").unwrap();
    assert!(local_pos < remote_pos);
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_failure_degrades_to_local_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/stories"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let body = "b".repeat(220);
    run_cli_success(
        &[
            "stories",
            "submit",
            "--title",
            "A Story That Survives",
            "--excerpt",
            "An excerpt comfortably long enough to pass the submission rules.",
            "--body",
            &body,
            "--author",
            "Local Author",
        ],
        home.path(),
    );

    let uri = server.uri();
    let output = run_cli(&api_args(&uri, &["stories", "list"]), home.path());

    // The command still succeeds and lists the local story.
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("A Story That Survives"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not fetch"), "stderr: {}", stderr);
}

#[tokio::test(flavor = "multi_thread")]
async fn post_reply_hits_the_replies_table() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/forum_replies"))
        .and(body_partial_json(json!({
            "topic_id": "f1",
            "content": "A helpful reply.",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let uri = server.uri();
    run_cli_success(
        &api_args(
            &uri,
            &["community", "post", "f1", "--content", "A helpful reply."],
        ),
        home.path(),
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn new_topic_counts_characters_not_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/forum_topics"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let uri = server.uri();
    // 600 characters but 1200 bytes: inside the limit only when counted
    // as characters.
    let description = "é".repeat(600);
    run_cli_success(
        &api_args(
            &uri,
            &[
                "community",
                "new-topic",
                "--title",
                "Gründung",
                "--description",
                &description,
            ],
        ),
        home.path(),
    );

    // Three characters in six bytes: a byte count would let this title
    // through, a character count rejects it.
    let output = run_cli(
        &api_args(
            &uri,
            &[
                "community",
                "new-topic",
                "--title",
                "ééé",
                "--description",
                &description,
            ],
        ),
        home.path(),
    );
    assert!(!output.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn new_topic_validation_fails_before_any_request() {
    let server = MockServer::start().await;
    // No mocks mounted: a request would 404 and fail the command anyway,
    // but validation must reject first.

    let home = TempDir::new().unwrap();
    let uri = server.uri();
    let output = run_cli(
        &api_args(
            &uri,
            &[
                "community",
                "new-topic",
                "--title",
                "hey",
                "--description",
                "too short",
            ],
        ),
        home.path(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("between 5 and 100"), "stderr: {}", stderr);
    assert!(stderr.contains("between 20 and 1000"), "stderr: {}", stderr);
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}
