mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{admin_token, send_json, test_app};

#[tokio::test]
async fn subscribing_twice_conflicts_and_stores_one_record() -> anyhow::Result<()> {
    let (app, ctx) = test_app().await?;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/subscribers/add",
        None,
        Some(json!({"email": "parent@example.com"})),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Subscriber added successfully"));
    assert_eq!(body["data"]["email"], json!("parent@example.com"));

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/subscribers/add",
        None,
        Some(json!({"email": "parent@example.com"})),
    )
    .await?;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Email is already subscribed"));

    assert_eq!(ctx.subscriber_repo.count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn subscribe_validates_email() -> anyhow::Result<()> {
    let (app, _ctx) = test_app().await?;

    let (status, body) =
        send_json(&app, "POST", "/api/subscribers/add", None, Some(json!({}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Email is required"));

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/subscribers/add",
        None,
        Some(json!({"email": "not an address"})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Please enter a valid email address"));

    Ok(())
}

#[tokio::test]
async fn subscriber_management_is_admin_only() -> anyhow::Result<()> {
    let (app, ctx) = test_app().await?;
    let token = admin_token(&ctx).await?;

    send_json(
        &app,
        "POST",
        "/api/subscribers/add",
        None,
        Some(json!({"email": "parent@example.com"})),
    )
    .await?;

    // Listing without a token is rejected
    let (status, _) = send_json(&app, "GET", "/api/subscribers", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send_json(&app, "GET", "/api/subscribers", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], json!(1));
    let id = body["data"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/api/subscribers/delete?id={}", id),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Subscriber deleted successfully"));

    assert_eq!(ctx.subscriber_repo.count().await?, 0);

    Ok(())
}
