//! Endpoint tests for the SyncFlow project client.
//!
//! Each test runs the client against a local mock server and verifies the
//! request discipline (paths, auth headers) and the response handling
//! (typed parsing, error wrapping).

use httpmock::{Method, MockServer};
use serde_json::json;
use sfcli::client::{ClientError, ProjectClient};
use sfcli::configuration::Configuration;
use sfcli::model::{CreateSessionRequest, RegisterDeviceRequest};
use url::Url;

fn client_for(server: &MockServer) -> ProjectClient {
    let configuration = Configuration::builder()
        .server_url(Url::parse(&server.base_url()).unwrap())
        .project_id("p1")
        .api_key("k")
        .api_secret("s")
        .build()
        .unwrap();
    ProjectClient::new(&configuration).unwrap()
}

fn session_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Demo",
        "startedAt": 0,
        "comments": "",
        "emptyTimeout": 300,
        "maxParticipants": 10,
        "livekitRoomName": "r1",
        "projectId": "p1",
        "status": "active",
        "numParticipants": 0,
        "numRecordings": 0,
        "duration": 0
    })
}

#[tokio::test]
async fn create_session_returns_typed_session() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/projects/p1/create-session")
            .header_matches("authorization", "^Bearer .+")
            .header("content-type", "application/json")
            .json_body(json!({"name": "Demo"}));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(session_json("s1"));
    });

    let client = client_for(&server);
    let request = CreateSessionRequest {
        name: Some("Demo".to_string()),
        ..Default::default()
    };
    let session = client.create_session(&request).await.unwrap();

    mock.assert();
    assert_eq!(session.id, "s1");
    assert_eq!(session.max_participants, 10);
    assert_eq!(session.livekit_room_name, "r1");
}

#[tokio::test]
async fn not_found_surfaces_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/projects/p1");
        then.status(404).body("project p1 not found");
    });

    let client = client_for(&server);
    let error = client.get_project_details().await.unwrap_err();

    match error {
        ClientError::UnexpectedResponse { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "project p1 not found");
        }
        other => panic!("expected UnexpectedResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn list_sessions_preserves_count_and_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/projects/p1/sessions");
        then.status(200).json_body(json!([
            session_json("s1"),
            session_json("s2"),
            session_json("s3")
        ]));
    });

    let client = client_for(&server);
    let sessions = client.list_sessions().await.unwrap();

    assert_eq!(sessions.len(), 3);
    let ids: Vec<&str> = sessions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2", "s3"]);
}

#[tokio::test]
async fn device_without_comments_parses() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/projects/p1/devices/d1");
        then.status(200).json_body(json!({
            "id": "d1",
            "name": "camera-1",
            "group": "lab",
            "projectId": "p1"
        }));
    });

    let client = client_for(&server);
    let device = client.list_device("d1").await.unwrap();

    assert_eq!(device.id, "d1");
    assert_eq!(device.comments, None);
}

#[tokio::test]
async fn register_device_posts_camel_case_payload() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/projects/p1/devices/register")
            .json_body(json!({"name": "camera-1", "group": "lab"}));
        then.status(200).json_body(json!({
            "id": "d1",
            "name": "camera-1",
            "group": "lab",
            "projectId": "p1"
        }));
    });

    let client = client_for(&server);
    let request = RegisterDeviceRequest {
        name: "camera-1".to_string(),
        group: "lab".to_string(),
        comments: None,
    };
    let device = client.register_device(&request).await.unwrap();

    mock.assert();
    assert_eq!(device.group, "lab");
}

#[tokio::test]
async fn stop_session_posts_empty_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/projects/p1/sessions/s1/stop")
            .header("content-type", "application/json");
        then.status(200).json_body(session_json("s1"));
    });

    let client = client_for(&server);
    let session = client.stop_session("s1").await.unwrap();

    mock.assert();
    assert_eq!(session.id, "s1");
}

#[tokio::test]
async fn livekit_info_stays_raw_json() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET)
            .path("/projects/p1/sessions/s1/livekit-session-info");
        then.status(200).json_body(json!({
            "room": {"sid": "RM_1", "unstableField": [1, 2, 3]}
        }));
    });

    let client = client_for(&server);
    let info = client.get_livekit_session_info("s1").await.unwrap();

    assert_eq!(info["room"]["sid"], "RM_1");
    assert_eq!(info["room"]["unstableField"], json!([1, 2, 3]));
}

#[tokio::test]
async fn token_is_reused_across_calls() {
    let server = MockServer::start();
    let client = client_for(&server);

    // within the validity window every request carries the same token
    let token = client.api_token().unwrap();
    let mock = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/projects/p1/devices")
            .header("authorization", format!("Bearer {}", token));
        then.status(200).json_body(json!([]));
    });

    client.list_devices().await.unwrap();
    client.list_devices().await.unwrap();

    mock.assert_hits(2);
}

#[tokio::test]
async fn transport_failure_propagates_as_http_error() {
    // a port nothing listens on
    let configuration = Configuration::builder()
        .server_url(Url::parse("http://127.0.0.1:1").unwrap())
        .project_id("p1")
        .api_key("k")
        .api_secret("s")
        .build()
        .unwrap();
    let client = ProjectClient::new(&configuration).unwrap();

    let error = client.list_sessions().await.unwrap_err();
    assert!(matches!(error, ClientError::HttpError(_)));
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/projects/p1/summarize");
        then.status(200).body("not json at all");
    });

    let client = client_for(&server);
    let error = client.summarize_project().await.unwrap_err();

    assert!(matches!(error, ClientError::JsonError(_)));
}
