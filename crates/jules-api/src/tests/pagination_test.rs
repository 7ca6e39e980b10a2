use futures::TryStreamExt;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{Config, JulesClient};

async fn setup() -> (MockServer, JulesClient) {
    let server = MockServer::start().await;
    let config = Config::new("test-key")
        .with_api_base_url(server.uri())
        .with_request_timeout(5);
    let client = JulesClient::new(config).unwrap();
    (server, client)
}

fn session_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "name": format!("sessions/{id}"),
        "id": id,
        "title": format!("Session {id}")
    })
}

#[tokio::test]
async fn sessions_stream_walks_every_page() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sessions"))
        .and(query_param_is_missing("nextPageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sessions": [session_json("s-1"), session_json("s-2")],
            "nextPageToken": "page-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sessions"))
        .and(query_param("nextPageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sessions": [session_json("s-3")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sessions: Vec<_> = client
        .list_sessions_stream(Some(2))
        .try_collect()
        .await
        .unwrap();

    let ids: Vec<&str> = sessions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["s-1", "s-2", "s-3"]);
}

#[tokio::test]
async fn stream_ends_on_a_page_without_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sources": [{ "name": "sources/github/acme/widgets", "id": "source-1" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sources: Vec<_> = client.list_sources_stream().try_collect().await.unwrap();
    assert_eq!(sources.len(), 1);
}

#[tokio::test]
async fn stream_surfaces_errors_and_stops() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sessions/session-1/activities"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut stream = client.list_activities_stream("session-1", None);
    let first = futures::StreamExt::next(&mut stream).await;
    assert!(matches!(first, Some(Err(_))));
    let second = futures::StreamExt::next(&mut stream).await;
    assert!(second.is_none());
}
