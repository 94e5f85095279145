use locus_server::{AppConfig, build_app};
use serde_json::{Value, json};
use tokio::task::JoinHandle;

const API_KEY: &str = "test-secret";

async fn start_server() -> (String, tokio::sync::oneshot::Sender<()>, JoinHandle<()>) {
    let mut cfg = AppConfig::default();
    cfg.auth.api_key = API_KEY.to_string();
    let app = build_app(&cfg);

    // Bind to an ephemeral port
    let listener = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind");
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await;
    });

    (format!("http://{addr}"), tx, server)
}

fn central_park() -> Value {
    json!({
        "name": "Central Park",
        "streetAddress": "123 Park Ave",
        "postalCode": "10001",
        "cityName": "New York",
        "mapId": "map123",
        "carDirection": "Take FDR Drive"
    })
}

#[tokio::test]
async fn health_endpoints_are_public() {
    let (base, shutdown_tx, handle) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/")).send().await.unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["service"], "Locus");
    assert_eq!(body["status"], "ok");

    let resp = client.get(format!("{base}/healthz")).send().await.unwrap();
    assert!(resp.status().is_success());

    let resp = client.get(format!("{base}/readyz")).send().await.unwrap();
    assert!(resp.status().is_success());

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn location_routes_require_the_api_key() {
    let (base, shutdown_tx, handle) = start_server().await;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/locations");

    // Missing key
    let resp = client.get(&url).send().await.unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid or missing api-key.");

    // Wrong key
    let resp = client
        .get(&url)
        .header("location-api-key", "wrong")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid api-key.");

    // Correct key
    let resp = client
        .get(&url)
        .header("location-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn crud_flow_over_rest() {
    let (base, shutdown_tx, handle) = start_server().await;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/locations");

    // Create
    let resp = client
        .post(&url)
        .header("location-api-key", API_KEY)
        .json(&central_park())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    let id = created["id"].as_str().expect("generated id").to_string();
    assert!(!id.is_empty());
    assert_eq!(created["name"], "Central Park");
    assert_eq!(created["streetAddress"], "123 Park Ave");
    assert_eq!(created["carDirection"], "Take FDR Drive");

    // List
    let resp = client
        .get(&url)
        .header("location-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let listed: Value = resp.json().await.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Point read
    let resp = client
        .get(format!("{url}/{id}"))
        .header("location-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched["postalCode"], "10001");
    assert_eq!(fetched["cityName"], "New York");
    assert_eq!(fetched["mapId"], "map123");

    // Existence check
    let resp = client
        .head(format!("{url}/{id}"))
        .header("location-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let resp = client
        .head(format!("{url}/does-not-exist"))
        .header("location-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Update in place
    let resp = client
        .put(&url)
        .header("location-api-key", API_KEY)
        .json(&json!({
            "id": id,
            "name": "Central Park West",
            "streetAddress": "1 Central Park West",
            "postalCode": "10023",
            "cityName": "New York",
            "mapId": "map123"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("{url}/{id}"))
        .header("location-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["name"], "Central Park West");
    assert!(updated.get("carDirection").is_none());

    // Delete, then observe it is gone
    let resp = client
        .delete(format!("{url}/{id}"))
        .header("location-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("{url}/{id}"))
        .header("location-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Deleting a missing target is the documented 400, not 404
    let resp = client
        .delete(format!("{url}/{id}"))
        .header("location-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn create_rejects_incomplete_input() {
    let (base, shutdown_tx, handle) = start_server().await;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/locations");

    let resp = client
        .post(&url)
        .header("location-api-key", API_KEY)
        .json(&json!({
            "name": "No Address",
            "streetAddress": "",
            "postalCode": "10001",
            "cityName": "New York",
            "mapId": "map123"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("streetAddress")
    );

    // A field left out of the body entirely takes the same 400 path.
    let resp = client
        .post(&url)
        .header("location-api-key", API_KEY)
        .json(&json!({
            "name": "No Address",
            "postalCode": "10001",
            "cityName": "New York",
            "mapId": "map123"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn listing_is_ordered_by_name() {
    let (base, shutdown_tx, handle) = start_server().await;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/locations");

    for name in ["Zoo Gate", "Airport Desk", "Main Square"] {
        let mut body = central_park();
        body["name"] = json!(name);
        let resp = client
            .post(&url)
            .header("location-api-key", API_KEY)
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let resp = client
        .get(&url)
        .header("location-api-key", API_KEY)
        .send()
        .await
        .unwrap();
    let listed: Value = resp.json().await.unwrap();
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Airport Desk", "Main Square", "Zoo Gate"]);

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}
