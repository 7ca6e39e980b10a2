use std::time::Duration;

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::types::{CreateSessionRequest, SendMessageRequest, SourceContext};
use crate::{Config, JulesClient, JulesError, TimeoutPolicy};

async fn setup() -> (MockServer, JulesClient) {
    let server = MockServer::start().await;
    let config = Config::new("test-key")
        .with_api_base_url(server.uri())
        .with_request_timeout(5);
    let client = JulesClient::new(config).unwrap();
    (server, client)
}

#[tokio::test]
async fn list_sources_success() {
    let (server, client) = setup().await;

    let response_body = serde_json::json!({
        "sources": [
            {
                "name": "sources/github/acme/widgets",
                "id": "source-1",
                "githubRepo": { "owner": "acme", "repo": "widgets" }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/sources"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .mount(&server)
        .await;

    let response = client.list_sources(None).await.unwrap();
    assert_eq!(response.sources.len(), 1);
    assert_eq!(response.sources[0].name, "sources/github/acme/widgets");
    assert_eq!(
        response.sources[0].github_repo.as_ref().unwrap().owner,
        "acme"
    );
    assert!(response.next_page_token.is_none());
}

#[tokio::test]
async fn list_sources_forwards_page_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sources"))
        .and(query_param("nextPageToken", "page-2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "sources": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    client.list_sources(Some("page-2")).await.unwrap();
}

#[tokio::test]
async fn get_source_success() {
    let (server, client) = setup().await;

    let response_body = serde_json::json!({
        "name": "sources/github/acme/widgets",
        "id": "source-1"
    });

    Mock::given(method("GET"))
        .and(path("/sources/source-1"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .mount(&server)
        .await;

    let source = client.get_source("source-1").await.unwrap();
    assert_eq!(source.id, "source-1");
    assert!(source.github_repo.is_none());
}

#[tokio::test]
async fn create_session_round_trip() {
    let (server, client) = setup().await;

    let request = CreateSessionRequest::new(
        "Fix the flaky login test",
        SourceContext::new("sources/github/acme/widgets").with_starting_branch("main"),
        "Flaky login fix",
    );

    // The wire body is camelCase; requirePlanApproval is omitted when off.
    let expected_body = serde_json::json!({
        "prompt": "Fix the flaky login test",
        "sourceContext": {
            "source": "sources/github/acme/widgets",
            "githubRepoContext": { "startingBranch": "main" }
        },
        "title": "Flaky login fix"
    });

    let response_body = serde_json::json!({
        "name": "sessions/session-1",
        "id": "session-1",
        "title": "Flaky login fix",
        "sourceContext": {
            "source": "sources/github/acme/widgets",
            "githubRepoContext": { "startingBranch": "main" }
        },
        "prompt": "Fix the flaky login test"
    });

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .mount(&server)
        .await;

    let session = client.create_session(&request).await.unwrap();
    assert_eq!(session.id, "session-1");
    assert_eq!(session.name, "sessions/session-1");
    assert_eq!(session.title, "Flaky login fix");
    assert_eq!(session.prompt.as_deref(), Some("Fix the flaky login test"));
}

#[tokio::test]
async fn approve_plan_tolerates_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/sessions/session-1:approvePlan"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.approve_plan("session-1").await.unwrap();
}

#[tokio::test]
async fn send_message_posts_prompt() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/sessions/session-1:sendMessage"))
        .and(body_json(serde_json::json!({ "prompt": "Add some styling" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let request = SendMessageRequest::new("Add some styling");
    client.send_message("session-1", &request).await.unwrap();
}

#[tokio::test]
async fn list_activities_success() {
    let (server, client) = setup().await;

    let response_body = serde_json::json!({
        "activities": [
            {
                "name": "sessions/session-1/activities/act-1",
                "id": "act-1",
                "type": "PLAN_GENERATED",
                "content": "Proposed a three step plan",
                "timestamp": "2024-05-01T12:00:00Z"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/sessions/session-1/activities"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .mount(&server)
        .await;

    let response = client
        .list_activities("session-1", Some(10), None)
        .await
        .unwrap();
    assert_eq!(response.activities.len(), 1);
    assert_eq!(response.activities[0].r#type, "PLAN_GENERATED");
    assert!(response.activities[0].timestamp.is_some());
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let (server, client) = setup().await;

    let body = serde_json::json!({
        "error": { "message": "API key not valid", "status": "UNAUTHENTICATED" }
    });

    Mock::given(method("GET"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(body))
        .mount(&server)
        .await;

    let err = client.list_sessions(None, None).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    assert!(err.to_string().contains("API key not valid"));
}

#[tokio::test]
async fn missing_required_field_is_a_decode_error() {
    let (server, client) = setup().await;

    // A session without name/title must never decode to defaults.
    Mock::given(method("GET"))
        .and(path("/sessions/session-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "session-1" })),
        )
        .mount(&server)
        .await;

    let err = client.get_session("session-1").await.unwrap_err();
    assert!(matches!(err, JulesError::Decode(_)));
}

#[tokio::test]
async fn tiny_timeout_is_classified_as_timeout() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sources"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "sources": [] }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let err = client
        .with_timeout_policy(TimeoutPolicy::Bounded(Duration::from_millis(20)))
        .list_sources(None)
        .await
        .unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got: {err}");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error_without_status() {
    let config = Config::new("test-key").with_api_base_url("http://127.0.0.1:9");
    let client = JulesClient::new(config).unwrap();

    let err = client.list_sources(None).await.unwrap_err();
    assert!(matches!(err, JulesError::Transport { .. }));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn until_ready_retries_through_404() {
    let (server, client) = setup().await;

    // Two not-yet-available answers, then the session appears.
    Mock::given(method("GET"))
        .and(path("/sessions/session-1"))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    let response_body = serde_json::json!({
        "name": "sessions/session-1",
        "id": "session-1",
        "title": "Eventually ready"
    });
    Mock::given(method("GET"))
        .and(path("/sessions/session-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .mount(&server)
        .await;

    let session = client
        .with_timeout_policy(TimeoutPolicy::UntilReady)
        .get_session("session-1")
        .await
        .unwrap();
    assert_eq!(session.title, "Eventually ready");
}

#[tokio::test]
async fn until_ready_is_cancellable_by_dropping_the_future() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sessions/session-1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let polling_client = client.with_timeout_policy(TimeoutPolicy::UntilReady);
    let polling = polling_client.get_session("session-1");
    let cancelled = tokio::time::timeout(Duration::from_millis(100), polling).await;
    assert!(cancelled.is_err(), "the retry loop must not outlive its caller");
}

#[test]
fn empty_api_key_fails_construction() {
    let err = JulesClient::new(Config::new("")).unwrap_err();
    assert!(matches!(err, JulesError::Configuration(_)));
}
