//! Failure injection tests for the OSRM integration: retry on 500,
//! exhaustion of the attempt budget, and the fail-fast data-error paths.

use route_ranker::lifecycle::Shutdown;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

const DATA_ERROR: &str = "Cannot UNMARSHAL the response Body from OSRM or Code Response is not Ok";

#[tokio::test]
async fn transient_500_recovers_and_uses_the_retried_payload() {
    let osrm = MockServer::start().await;

    // The first attempt gets a 500; the retry sees a healthy response.
    Mock::given(method("GET"))
        .and(path("/route/v1/driving/1,2;3,4"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&osrm)
        .await;
    Mock::given(method("GET"))
        .and(path("/route/v1/driving/1,2;3,4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "Ok",
            "routes": [{ "duration": 42.0, "distance": 7.0 }]
        })))
        .expect(1)
        .mount(&osrm)
        .await;

    let shutdown = Shutdown::new();
    let addr = common::spawn_service(common::test_config(&osrm.uri()), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/routes?src=1,2&dst=3,4", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["routes"][0]["duration"], 42.0);
    assert_eq!(body["routes"][0]["distance"], 7.0);

    shutdown.trigger();
}

#[tokio::test]
async fn persistent_500_exhausts_the_attempt_budget() {
    let osrm = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/route/v1/driving/1,2;3,4"))
        .respond_with(ResponseTemplate::new(500))
        .expect(5)
        .mount(&osrm)
        .await;

    let shutdown = Shutdown::new();
    let addr = common::spawn_service(common::test_config(&osrm.uri()), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/routes?src=1,2&dst=3,4", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "code": 502, "body": "Tried very hard, but no luck" }));
    assert_eq!(osrm.received_requests().await.unwrap().len(), 5);

    shutdown.trigger();
}

#[tokio::test]
async fn non_ok_code_fails_without_retrying() {
    let osrm = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/route/v1/driving/1,2;3,4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "NoRoute",
            "routes": []
        })))
        .expect(1)
        .mount(&osrm)
        .await;

    let shutdown = Shutdown::new();
    let addr = common::spawn_service(common::test_config(&osrm.uri()), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/routes?src=1,2&dst=3,4", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "code": 502, "body": DATA_ERROR }));

    shutdown.trigger();
}

#[tokio::test]
async fn client_error_status_is_not_retried() {
    // Only a 500 triggers the retry loop. A 4xx flows straight into the
    // decode and code check.
    let osrm = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/route/v1/driving/1,2;3,4"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "InvalidQuery",
            "message": "Query string malformed close to position 0"
        })))
        .expect(1)
        .mount(&osrm)
        .await;

    let shutdown = Shutdown::new();
    let addr = common::spawn_service(common::test_config(&osrm.uri()), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/routes?src=1,2&dst=3,4", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "code": 502, "body": DATA_ERROR }));
    assert_eq!(osrm.received_requests().await.unwrap().len(), 1);

    shutdown.trigger();
}

#[tokio::test]
async fn undecodable_body_is_a_data_error() {
    let osrm = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/route/v1/driving/1,2;3,4"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&osrm)
        .await;

    let shutdown = Shutdown::new();
    let addr = common::spawn_service(common::test_config(&osrm.uri()), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/routes?src=1,2&dst=3,4", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "code": 502, "body": DATA_ERROR }));

    shutdown.trigger();
}

#[tokio::test]
async fn ok_code_with_no_routes_is_a_data_error() {
    let osrm = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/route/v1/driving/1,2;3,4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "Ok",
            "routes": []
        })))
        .expect(1)
        .mount(&osrm)
        .await;

    let shutdown = Shutdown::new();
    let addr = common::spawn_service(common::test_config(&osrm.uri()), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/routes?src=1,2&dst=3,4", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "code": 502, "body": DATA_ERROR }));

    shutdown.trigger();
}

#[tokio::test]
async fn unreachable_upstream_reports_send_failure() {
    // Bind a port, then drop it so nothing listens there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let unreachable = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let shutdown = Shutdown::new();
    let addr = common::spawn_service(common::test_config(&unreachable), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/routes?src=1,2&dst=3,4", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "code": 502, "body": "Cannot send request to OSRM" }));

    shutdown.trigger();
}

#[tokio::test]
async fn late_destination_failure_discards_earlier_successes() {
    // The first destination resolves, the second has no route. The whole
    // request fails and the upstream sees the destinations in query order.
    let osrm = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/route/v1/driving/1,2;3,4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "Ok",
            "routes": [{ "duration": 10.0, "distance": 100.0 }]
        })))
        .expect(1)
        .mount(&osrm)
        .await;
    Mock::given(method("GET"))
        .and(path("/route/v1/driving/1,2;5,6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "NoRoute",
            "routes": []
        })))
        .expect(1)
        .mount(&osrm)
        .await;

    let shutdown = Shutdown::new();
    let addr = common::spawn_service(common::test_config(&osrm.uri()), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/routes?src=1,2&dst=3,4&dst=5,6", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "code": 502, "body": DATA_ERROR }));

    let requests = osrm.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url.path(), "/route/v1/driving/1,2;3,4");
    assert_eq!(requests[1].url.path(), "/route/v1/driving/1,2;5,6");

    shutdown.trigger();
}
