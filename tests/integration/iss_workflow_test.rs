// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;
use skyquery::client::{Endpoint, QueryClient, ReqwestTransport};
use skyquery::projection::{astronauts, iss_passes, DisplayZone, PassEntry};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn start_open_notify() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/iss-pass.json"))
        .and(query_param("lat", "40.71"))
        .and(query_param("lon", "-74"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "success",
            "request": {
                "altitude": 100,
                "datetime": 1568062811,
                "latitude": 40.71,
                "longitude": -74.0,
                "passes": 3
            },
            "response": [
                {"duration": 395, "risetime": 1568082479},
                {"duration": 640, "risetime": 1568088118},
                {"duration": 614, "risetime": 1568093944}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/astros.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "success",
            "number": 3,
            "people": [
                {"name": "Alexey Ovchinin", "craft": "ISS"},
                {"name": "Nick Hague", "craft": "ISS"},
                {"name": "Christina Koch", "craft": "ISS"}
            ]
        })))
        .mount(&server)
        .await;

    server
}

fn client() -> QueryClient {
    let transport =
        ReqwestTransport::with_options(Duration::from_secs(10), "skyquery-tests").unwrap();
    QueryClient::new(Arc::new(transport))
}

#[tokio::test]
async fn test_pass_times_end_to_end() {
    let server = start_open_notify().await;
    let base = Endpoint::parse(&format!("{}/", server.uri())).unwrap();
    let endpoint = base
        .join("iss-pass.json")
        .unwrap()
        .with_param("lat", 40.71)
        .with_param("lon", -74);

    let (status_code, body) = client().fetch(&endpoint).await.into_result().unwrap();
    assert_eq!(status_code, 200);

    let passes = iss_passes(&body).unwrap();
    assert_eq!(
        passes,
        vec![
            PassEntry::new(395, 1568082479),
            PassEntry::new(640, 1568088118),
            PassEntry::new(614, 1568093944),
        ]
    );

    let cdt = DisplayZone::from_offset_seconds(-5 * 3600).unwrap();
    let times: Vec<String> = passes
        .iter()
        .map(|p| cdt.format_epoch(p.risetime_epoch).unwrap())
        .collect();
    assert_eq!(
        times,
        vec![
            "2019-09-09 21:27:59",
            "2019-09-09 23:01:58",
            "2019-09-10 00:39:04",
        ]
    );
}

#[tokio::test]
async fn test_astronauts_end_to_end() {
    let server = start_open_notify().await;
    let endpoint = Endpoint::parse(&format!("{}/astros.json", server.uri())).unwrap();

    let (_, body) = client().fetch(&endpoint).await.into_result().unwrap();
    let people = astronauts(&body).unwrap();

    assert_eq!(people.len(), 3);
    assert_eq!(people[2].name, "Christina Koch");
}
