mod common;

use std::sync::Arc;

use arena_status::api::create_router;
use arena_status::config::AppConfig;
use axum_test::TestServer;
use serde_json::Value;

use common::{spawn_responder, target, FULL_STATUS, GARBAGE};

async fn test_server() -> TestServer {
    let up = spawn_responder(FULL_STATUS).await;
    let down = spawn_responder(GARBAGE).await;
    let config = Arc::new(AppConfig {
        listen_port: 0,
        targets: vec![target("FFA", up), target("CTF", down)],
    });
    TestServer::new(create_router(config)).unwrap()
}

#[tokio::test]
async fn landing_page_is_uncached_html_with_one_row_per_target() {
    let server = test_server().await;

    let response = server.get("/").await;
    response.assert_status_ok();
    assert_eq!(response.header("cache-control"), "no-store");

    let body = response.text();
    assert!(body.contains("2/8 players — Map: q3dm17"));
    assert!(body.contains("ONLINE"));
    assert!(body.contains("OFFLINE"));
    assert!(body.contains("FFA"));
    assert!(body.contains("CTF"));
    assert!(!body.contains("<script"));
}

#[tokio::test]
async fn status_json_reports_every_target() {
    let server = test_server().await;

    let response = server.get("/status.json").await;
    response.assert_status_ok();

    let statuses: Vec<Value> = response.json();
    assert_eq!(statuses.len(), 2);

    assert_eq!(statuses[0]["name"], "FFA");
    assert_eq!(statuses[0]["online"], true);
    assert_eq!(statuses[0]["hostname"], "Mock Arena");
    assert_eq!(statuses[0]["map"], "q3dm17");
    assert_eq!(statuses[0]["players"], 2);
    assert_eq!(statuses[0]["maxPlayers"], 8);
    assert_eq!(statuses[0]["motd"], "Welcome home");

    assert_eq!(statuses[1]["name"], "CTF");
    assert_eq!(statuses[1]["online"], false);
    assert!(statuses[1]["error"].as_str().unwrap().contains("Malformed response"));
    assert!(statuses[1].get("players").is_none());
}

#[tokio::test]
async fn both_presenters_show_the_same_probe_data() {
    let server = test_server().await;

    let statuses: Vec<Value> = server.get("/status.json").await.json();
    let html = server.get("/").await.text();

    let players = statuses[0]["players"].as_u64().unwrap();
    let max_players = statuses[0]["maxPlayers"].as_u64().unwrap();
    let map = statuses[0]["map"].as_str().unwrap();
    assert!(html.contains(&format!("{players}/{max_players} players — Map: {map}")));
}
