//! End-to-end tests against the real server on a TCP socket.

use std::time::Duration;

use products_service::config::ServiceConfig;
use serde_json::{json, Value};

mod common;

use common::{spawn_server, API_KEY};

#[tokio::test]
async fn test_crud_over_tcp() {
    let (addr, shutdown, handle) = spawn_server(ServiceConfig::default()).await;
    let base = format!("http://{addr}/api/products");

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap();

    let res = client.get(&base).send().await.expect("server unreachable");
    assert_eq!(res.status(), 401);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Unauthorized: Invalid API Key" }));

    let res = client
        .post(&base)
        .header("x-api-key", API_KEY)
        .json(&json!({
            "name": "Hat",
            "description": "Warm",
            "price": 20,
            "category": "fashion",
            "inStock": true
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    assert!(res.headers().contains_key("x-request-id"));
    let created: Value = res.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let res = client
        .get(format!("{base}/stats"))
        .header("x-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let stats: Value = res.json().await.unwrap();
    assert_eq!(stats, json!({ "stats": { "electronics": 1, "fashion": 2 } }));

    let res = client
        .delete(format!("{base}/{id}"))
        .header("x-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);
    assert!(res.bytes().await.unwrap().is_empty());

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop after shutdown")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_malformed_json_over_tcp() {
    let (addr, shutdown, _handle) = spawn_server(ServiceConfig::default()).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .post(format!("http://{addr}/api/products"))
        .header("x-api-key", API_KEY)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Malformed JSON body");

    shutdown.trigger();
}
