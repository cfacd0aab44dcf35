use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = boxoffice_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn post_purchase(
    client: &reqwest::Client,
    base_url: &str,
    body: serde_json::Value,
) -> reqwest::Response {
    client
        .post(format!("{}/purchases", base_url))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn single_adult_purchase_returns_receipt() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = post_purchase(
        &client,
        &server.base_url,
        json!({
            "account_id": 1,
            "tickets": [{"category": "adult", "quantity": 1}]
        }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let receipt: serde_json::Value = res.json().await.unwrap();
    assert_eq!(receipt["account_id"], 1);
    assert_eq!(receipt["total_amount"], 25);
    assert_eq!(receipt["seats_reserved"], 1);
    assert!(receipt["purchase_id"].is_string());
}

#[tokio::test]
async fn mixed_family_purchase_prices_and_seats_correctly() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = post_purchase(
        &client,
        &server.base_url,
        json!({
            "account_id": 2,
            "tickets": [
                {"category": "adult", "quantity": 2},
                {"category": "child", "quantity": 3},
                {"category": "infant", "quantity": 1}
            ]
        }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let receipt: serde_json::Value = res.json().await.unwrap();
    assert_eq!(receipt["total_amount"], 95);
    assert_eq!(receipt["seats_reserved"], 5);
}

#[tokio::test]
async fn missing_account_id_is_rejected() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for body in [
        json!({"tickets": [{"category": "adult", "quantity": 1}]}),
        json!({"account_id": null, "tickets": [{"category": "adult", "quantity": 1}]}),
        json!({"account_id": 0, "tickets": [{"category": "adult", "quantity": 1}]}),
        json!({"account_id": -5, "tickets": [{"category": "adult", "quantity": 1}]}),
    ] {
        let res = post_purchase(&client, &server.base_url, body).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: serde_json::Value = res.json().await.unwrap();
        assert_eq!(err["error"], "invalid_purchase");
    }
}

#[tokio::test]
async fn empty_or_absent_ticket_list_is_rejected() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for body in [
        json!({"account_id": 1, "tickets": []}),
        json!({"account_id": 1}),
    ] {
        let res = post_purchase(&client, &server.base_url, body).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn unaccompanied_children_are_rejected() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = post_purchase(
        &client,
        &server.base_url,
        json!({
            "account_id": 1,
            "tickets": [{"category": "child", "quantity": 2}]
        }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "invalid_purchase");
}

#[tokio::test]
async fn purchases_over_the_ticket_ceiling_are_rejected() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = post_purchase(
        &client,
        &server.base_url,
        json!({
            "account_id": 1,
            "tickets": [
                {"category": "adult", "quantity": 20},
                {"category": "child", "quantity": 6}
            ]
        }),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_category_is_rejected_at_the_boundary() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = post_purchase(
        &client,
        &server.base_url,
        json!({
            "account_id": 1,
            "tickets": [{"category": "senior", "quantity": 1}]
        }),
    )
    .await;

    // Serde rejects the unknown enum variant before the domain runs.
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
