mod common;

use anyhow::Result;
use serde_json::{json, Value};

#[tokio::test]
async fn unknown_route() -> Result<()> {
    let server = common::server().await?;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/no-such-thing")).send().await?;
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await?;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(404));
    assert_eq!(body["message"], json!("resource not found"));
    Ok(())
}

#[tokio::test]
async fn method_not_allowed() -> Result<()> {
    let server = common::server().await?;
    let client = reqwest::Client::new();

    // Method checks answer before the auth gates, so no token is needed.
    let response = client.delete(server.url("/nutritionists")).send().await?;
    assert_eq!(response.status(), 405);

    let body: Value = response.json().await?;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(405));
    assert_eq!(body["message"], json!("Method not allowed"));

    let response = client.post(server.url("/")).send().await?;
    assert_eq!(response.status(), 405, "root only answers GET");

    let response = client.put(server.url("/articles")).send().await?;
    assert_eq!(response.status(), 405);
    Ok(())
}

#[tokio::test]
async fn create_nutritionist_requires_fields() -> Result<()> {
    let server = common::server().await?;
    let client = reqwest::Client::new();
    let token = common::token(&["create:nutritionist"]);

    let response = client
        .post(server.url("/nutritionists"))
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(response.status(), 412);

    let body: Value = response.json().await?;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(412));
    assert_eq!(body["message"], json!("required fields expected"));

    // Empty strings count as missing.
    let response = client
        .post(server.url("/nutritionists"))
        .bearer_auth(&token)
        .json(&json!({ "name": "", "specialization": "keto", "email": "a@b.c" }))
        .send()
        .await?;
    assert_eq!(response.status(), 412);
    Ok(())
}

#[tokio::test]
async fn create_client_requires_fields() -> Result<()> {
    let server = common::server().await?;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/clients"))
        .bearer_auth(common::token(&["create:client"]))
        .json(&json!({ "name": "Ana", "email": "ana@example.com" }))
        .send()
        .await?;
    assert_eq!(response.status(), 412);

    let body: Value = response.json().await?;
    assert_eq!(body["message"], json!("required fields expected"));
    Ok(())
}

#[tokio::test]
async fn create_article_requires_author() -> Result<()> {
    let server = common::server().await?;
    let client = reqwest::Client::new();
    let token = common::token(&["create:article"]);

    let response = client
        .post(server.url("/articles"))
        .bearer_auth(&token)
        .json(&json!({ "title": "Greens", "content": "Eat them." }))
        .send()
        .await?;
    assert_eq!(response.status(), 412);

    // An author id of zero reads as absent.
    let response = client
        .post(server.url("/articles"))
        .bearer_auth(&token)
        .json(&json!({ "title": "Greens", "content": "Eat them.", "nutritionist": 0 }))
        .send()
        .await?;
    assert_eq!(response.status(), 412);

    let body: Value = response.json().await?;
    assert_eq!(body["message"], json!("required fields expected"));
    Ok(())
}

#[tokio::test]
async fn patch_requires_id() -> Result<()> {
    let server = common::server().await?;
    let client = reqwest::Client::new();

    let response = client
        .patch(server.url("/nutritionists"))
        .bearer_auth(common::token(&["edit:nutritionist"]))
        .json(&json!({ "name": "Renamed" }))
        .send()
        .await?;
    assert_eq!(response.status(), 412);

    let body: Value = response.json().await?;
    assert_eq!(body["message"], json!("precondition failed"));

    let response = client
        .patch(server.url("/articles"))
        .bearer_auth(common::token(&["edit:article"]))
        .json(&json!({ "title": "Renamed" }))
        .send()
        .await?;
    assert_eq!(response.status(), 412);
    Ok(())
}

#[tokio::test]
async fn subscription_requires_both_parties() -> Result<()> {
    let server = common::server().await?;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/subscriptions"))
        .bearer_auth(common::token(&["subscribe:client"]))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(response.status(), 412);

    let body: Value = response.json().await?;
    assert_eq!(
        body["message"],
        json!("provide accurate data for required fields")
    );
    Ok(())
}

#[tokio::test]
async fn malformed_json_body() -> Result<()> {
    let server = common::server().await?;
    let client = reqwest::Client::new();
    let token = common::token(&["create:nutritionist"]);

    let response = client
        .post(server.url("/nutritionists"))
        .bearer_auth(&token)
        .header("Content-Type", "application/json")
        .body("{ this is not json")
        .send()
        .await?;
    assert_eq!(response.status(), 422);

    let body: Value = response.json().await?;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(422));
    assert_eq!(body["message"], json!("unprocessed request"));

    // No JSON content type at all lands the same way.
    let response = client
        .post(server.url("/nutritionists"))
        .bearer_auth(&token)
        .body("{}")
        .send()
        .await?;
    assert_eq!(response.status(), 422);
    Ok(())
}

#[tokio::test]
async fn non_numeric_path_id() -> Result<()> {
    let server = common::server().await?;
    let client = reqwest::Client::new();

    let response = client
        .get(server.url("/nutritionists/abc"))
        .bearer_auth(common::token(&["view:nutritionist"]))
        .send()
        .await?;
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await?;
    assert_eq!(body["message"], json!("resource not found"));

    let response = client
        .get(server.url("/clients/abc"))
        .bearer_auth(common::token(&["view:client"]))
        .send()
        .await?;
    assert_eq!(response.status(), 404);
    Ok(())
}

#[tokio::test]
async fn non_numeric_article_filter() -> Result<()> {
    let server = common::server().await?;
    let client = reqwest::Client::new();
    let token = common::token(&["read:article"]);

    let response = client
        .get(server.url("/articles?client_id=abc"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(response.status(), 404);

    let response = client
        .get(server.url("/articles?nutritionist_id=abc"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(response.status(), 404);
    Ok(())
}
