// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;
use skyquery::client::{
    Endpoint, ErrorKind, QueryClient, QueryResult, ReqwestTransport, StatusCategory,
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with_timeout(timeout: Duration) -> QueryClient {
    let transport = ReqwestTransport::with_options(timeout, "skyquery-tests").unwrap();
    QueryClient::new(Arc::new(transport))
}

fn client() -> QueryClient {
    client_with_timeout(Duration::from_secs(10))
}

#[tokio::test]
async fn test_fetch_json_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"a":1}"#))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = Endpoint::parse(&format!("{}/data", server.uri())).unwrap();
    let result = client().fetch(&endpoint).await;

    assert_eq!(
        result,
        QueryResult::Success {
            status_code: 200,
            body: json!({"a": 1}),
        }
    );
}

#[tokio::test]
async fn test_fetch_sends_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/iss-pass.json"))
        .and(query_param("lat", "40.71"))
        .and(query_param("lon", "-74"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "success"})))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = Endpoint::parse(&format!("{}/iss-pass.json", server.uri()))
        .unwrap()
        .with_param("lat", 40.71)
        .with_param("lon", -74);
    let result = client().fetch(&endpoint).await;

    assert!(result.is_success());
    assert_eq!(result.body().unwrap()["message"], "success");
}

#[tokio::test]
async fn test_fetch_not_found_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let endpoint = Endpoint::parse(&format!("{}/this-api-doesnt-exist", server.uri())).unwrap();
    let failure = client().fetch(&endpoint).await.into_result().unwrap_err();

    assert_eq!(failure.kind, ErrorKind::HttpError);
    assert_eq!(failure.status_code, Some(404));
    assert_eq!(failure.category(), Some(StatusCategory::NotFound));
    assert!(failure.detail.contains("404"));
}

#[tokio::test]
async fn test_fetch_redirect_without_location_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(301))
        .mount(&server)
        .await;

    let endpoint = Endpoint::parse(&server.uri()).unwrap();
    let failure = client().fetch(&endpoint).await.into_result().unwrap_err();

    assert_eq!(failure.kind, ErrorKind::HttpError);
    assert_eq!(failure.category(), Some(StatusCategory::Redirect));
}

#[tokio::test]
async fn test_fetch_invalid_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let endpoint = Endpoint::parse(&server.uri()).unwrap();
    let failure = client().fetch(&endpoint).await.into_result().unwrap_err();

    assert_eq!(failure.kind, ErrorKind::InvalidBody);
    assert_eq!(failure.status_code, Some(200));
}

#[tokio::test]
async fn test_fetch_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = Endpoint::parse(&format!("http://{}/astros.json", addr)).unwrap();
    let failure = client().fetch(&endpoint).await.into_result().unwrap_err();

    assert_eq!(failure.kind, ErrorKind::TransportError);
    assert_eq!(failure.status_code, None);
}

#[tokio::test]
async fn test_fetch_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let endpoint = Endpoint::parse(&server.uri()).unwrap();
    let failure = client_with_timeout(Duration::from_millis(200))
        .fetch(&endpoint)
        .await
        .into_result()
        .unwrap_err();

    assert_eq!(failure.kind, ErrorKind::TransportError);
    assert_eq!(failure.status_code, None);
}

#[test]
fn test_default_transport_is_reqwest() {
    let client = QueryClient::with_default_transport().unwrap();
    assert_eq!(client.transport_name(), "reqwest");
}
