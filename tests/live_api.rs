//! Live API tests against a running server backed by MongoDB

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Helper to create a book and return its id
async fn create_book(client: &Client, title: &str, author: &str) -> String {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": title, "author": author }))
        .send()
        .await
        .expect("Failed to send create request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse create response");
    body["data"]["id"].as_str().expect("No book ID").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_readiness() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();
    let id = create_book(&client, "Dune", "Herbert").await;

    let response = client
        .get(format!("{}/books?id={}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["title"], "Dune");
    assert_eq!(body["data"]["author"], "Herbert");

    let response = client
        .put(format!("{}/books?id={}", BASE_URL, id))
        .json(&json!({ "title": "Dune Messiah", "author": "Herbert" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .delete(format!("{}/books?id={}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/books?id={}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();
    let id = create_book(&client, "Solaris", "Lem").await;

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body["data"].as_array().expect("No book list");
    assert!(books.iter().any(|b| b["id"] == id.as_str()));

    // Cleanup
    let _ = client
        .delete(format!("{}/books?id={}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_invalid_id() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books?id=not-a-hex-id", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
