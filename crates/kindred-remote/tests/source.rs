//! Remote source tests against a mock table API.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kindred_core::error::Error;
use kindred_core::types::{ApiUrl, RecordId};
use kindred_remote::RemoteSource;

async fn source_for(server: &MockServer) -> RemoteSource {
    let base = ApiUrl::new(server.uri()).unwrap();
    RemoteSource::new(base, "test-key")
}

#[tokio::test]
async fn stories_drop_malformed_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/stories"))
        .and(query_param("published", "eq.true"))
        .and(header("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "r1",
                "created_at": "2024-01-01T00:00:00Z",
                "title": "Tech Leap",
                "excerpt": "An excerpt.",
                "body": "A body.",
                "author": "Priya Sharma",
                "tags": ["tech"],
                "likes": 5,
                "published": true,
            },
            {
                // Missing title: fails the validity invariant.
                "id": "r2",
                "created_at": "2024-02-01T00:00:00Z",
                "excerpt": "An excerpt.",
                "body": "A body.",
                "author": "Anjali Singh",
            },
            {
                "id": "r3",
                "created_at": "2024-03-01T00:00:00Z",
                "title": "Second Story",
                "excerpt": "Another excerpt.",
                "body": "Another body.",
                "author": "Anjali Singh",
            },
        ])))
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let stories = source.stories().await.unwrap();

    let ids: Vec<&str> = stories.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r3"]);
}

#[tokio::test]
async fn fetch_failure_surfaces_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "XX000",
            "message": "internal error",
        })))
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let err = source.profiles().await.unwrap_err();

    match err {
        Error::Protocol(p) => {
            assert_eq!(p.status, 500);
            assert_eq!(p.message.as_deref(), Some("internal error"));
        }
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_story_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/stories"))
        .and(query_param("id", "eq.r404"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let id = RecordId::new("r404").unwrap();
    assert!(source.story(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn forum_topics_read_joined_counts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/forum_topics"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "f1",
                "created_at": "2024-03-01T09:00:00Z",
                "title": "Funding options",
                "description": "Grants and loans compared.",
                "category": "Funding",
                "profiles": {"name": "Financial Expert"},
                "forum_replies": [{"count": 18}],
            },
        ])))
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let topics = source.forum_topics().await.unwrap();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].author, "Financial Expert");
    assert_eq!(topics[0].replies, 18);
}

#[tokio::test]
async fn post_reply_inserts_row() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/forum_replies"))
        .and(header("apikey", "test-key"))
        .and(body_partial_json(json!({
            "topic_id": "f1",
            "content": "Great summary, thanks.",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let topic = RecordId::new("f1").unwrap();
    source
        .post_reply(&topic, "Great summary, thanks.", None)
        .await
        .unwrap();
}

#[tokio::test]
async fn write_failure_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/businesses"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let err = source
        .add_business("SheCodes", "Brenda Lee", "", "Technology", None, "b@s.example")
        .await
        .unwrap_err();

    match err {
        Error::Protocol(p) => assert_eq!(p.status, 409),
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_story_targets_id() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/stories"))
        .and(query_param("id", "eq.r1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let id = RecordId::new("r1").unwrap();
    source.delete_story(&id).await.unwrap();
}
