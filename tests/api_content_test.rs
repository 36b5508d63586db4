mod common;

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use bulletin::{
    domain::{Announcement, Statistics, Subscriber},
    error::{AppError, Result},
    notify::Mailer,
};

use common::{admin_token, send_json, test_app, test_app_with_mailer};

/// Accepts everything except explicitly poisoned addresses.
struct RecordingMailer {
    sent: Mutex<Vec<String>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, _subject: &str, _text: String, _html: String) -> Result<()> {
        if to.ends_with("@bounce.invalid") {
            return Err(AppError::External("mailbox unavailable".to_string()));
        }
        self.sent.lock().unwrap().push(to.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn announcement_publish_flow() -> anyhow::Result<()> {
    let (app, ctx) = test_app().await?;
    let token = admin_token(&ctx).await?;

    // Mutations are rejected without a bearer token
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/announcements/add",
        None,
        Some(json!({"content": "Enrollment opens March 20"})),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let before = Utc::now();
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/announcements/add",
        Some(&token),
        Some(json!({"content": "Enrollment opens March 20"})),
    )
    .await?;
    let after = Utc::now();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["content"], json!("Enrollment opens March 20"));
    assert!(body["data"]["id"].as_str().is_some());

    // Stored timestamp falls inside the request's execution window
    let created_at: chrono::DateTime<Utc> =
        serde_json::from_value(body["data"]["createdAt"].clone())?;
    assert!(created_at >= before && created_at <= after);

    // No subscribers yet, so the fan-out reports an empty round
    assert_eq!(body["emailNotifications"]["total"], json!(0));
    assert_eq!(body["emailNotifications"]["sent"], json!(0));

    // Newest-first ordering: a later announcement lists before the first
    tokio::time::sleep(Duration::from_millis(5)).await;
    send_json(
        &app,
        "POST",
        "/api/announcements/add",
        Some(&token),
        Some(json!({"content": "Second announcement"})),
    )
    .await?;

    let (status, body) = send_json(&app, "GET", "/api/announcements", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["content"], json!("Second announcement"));
    assert_eq!(body["data"][1]["content"], json!("Enrollment opens March 20"));
    assert_eq!(body["pagination"]["total"], json!(2));

    Ok(())
}

#[tokio::test]
async fn create_with_missing_field_persists_nothing() -> anyhow::Result<()> {
    let (app, ctx) = test_app().await?;
    let token = admin_token(&ctx).await?;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/announcements/add",
        Some(&token),
        Some(json!({})),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Content is required"));

    let (_, body) = send_json(&app, "GET", "/api/announcements", None, None).await?;
    assert_eq!(body["pagination"]["total"], json!(0));

    // Same check against a multi-field type: a blank author is still missing
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/news/add",
        Some(&token),
        Some(json!({"title": "Title", "author": "   ", "content": "Body"})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Author is required"));

    let (_, body) = send_json(&app, "GET", "/api/news", None, None).await?;
    assert_eq!(body["pagination"]["total"], json!(0));

    Ok(())
}

#[tokio::test]
async fn delete_validates_id_before_touching_the_store() -> anyhow::Result<()> {
    let (app, ctx) = test_app().await?;
    let token = admin_token(&ctx).await?;

    // Malformed id
    let (status, body) = send_json(
        &app,
        "DELETE",
        "/api/announcements/delete?id=not-a-uuid",
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Invalid announcement ID format"));

    // Missing id
    let (status, body) = send_json(
        &app,
        "DELETE",
        "/api/announcements/delete",
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Announcement ID is required"));

    // Well-formed but absent
    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/api/announcements/delete?id={}", Uuid::new_v4()),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Existing id removes exactly one document
    let (_, created) = send_json(
        &app,
        "POST",
        "/api/announcements/add",
        Some(&token),
        Some(json!({"content": "Going away"})),
    )
    .await?;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (_, body) = send_json(&app, "GET", "/api/announcements", None, None).await?;
    assert_eq!(body["pagination"]["total"], json!(1));

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/api/announcements/delete?id={}", id),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Announcement deleted successfully"));

    let (_, body) = send_json(&app, "GET", "/api/announcements", None, None).await?;
    assert_eq!(body["pagination"]["total"], json!(0));

    Ok(())
}

#[tokio::test]
async fn pagination_window_over_twelve_documents() -> anyhow::Result<()> {
    let (app, ctx) = test_app().await?;

    for i in 0..12 {
        ctx.announcement_repo
            .create(Announcement {
                id: Uuid::new_v4(),
                content: format!("Announcement {}", i),
                created_at: Utc::now() - chrono::Duration::seconds(i),
            })
            .await?;
    }

    let (status, body) =
        send_json(&app, "GET", "/api/announcements?page=2&limit=5", None, None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["pagination"]["total"], json!(12));
    assert_eq!(body["pagination"]["page"], json!(2));
    assert_eq!(body["pagination"]["limit"], json!(5));
    assert_eq!(body["pagination"]["pages"], json!(3));

    // Non-numeric parameters fall back to the defaults
    let (status, body) =
        send_json(&app, "GET", "/api/announcements?page=abc&limit=xyz", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], json!(1));
    assert_eq!(body["pagination"]["limit"], json!(10));
    assert_eq!(body["data"].as_array().unwrap().len(), 10);

    Ok(())
}

#[tokio::test]
async fn publish_notifies_every_subscriber_and_tallies_failures() -> anyhow::Result<()> {
    let mailer = Arc::new(RecordingMailer {
        sent: Mutex::new(Vec::new()),
    });
    let (app, ctx) = test_app_with_mailer(Some(mailer.clone())).await?;
    let token = admin_token(&ctx).await?;

    for email in ["a@example.com", "b@bounce.invalid", "c@example.com"] {
        ctx.subscriber_repo
            .create(Subscriber {
                id: Uuid::new_v4(),
                email: email.to_string(),
                created_at: Utc::now(),
            })
            .await?;
    }

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/announcements/add",
        Some(&token),
        Some(json!({"content": "Enrollment opens March 20"})),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["emailNotifications"]["total"], json!(3));
    assert_eq!(body["emailNotifications"]["sent"], json!(2));
    assert_eq!(body["emailNotifications"]["failed"], json!(1));

    let delivered = mailer.sent.lock().unwrap().clone();
    assert!(delivered.contains(&"a@example.com".to_string()));
    assert!(delivered.contains(&"c@example.com".to_string()));

    Ok(())
}

#[tokio::test]
async fn opting_out_skips_the_fan_out() -> anyhow::Result<()> {
    let mailer = Arc::new(RecordingMailer {
        sent: Mutex::new(Vec::new()),
    });
    let (app, ctx) = test_app_with_mailer(Some(mailer.clone())).await?;
    let token = admin_token(&ctx).await?;

    ctx.subscriber_repo
        .create(Subscriber {
            id: Uuid::new_v4(),
            email: "a@example.com".to_string(),
            created_at: Utc::now(),
        })
        .await?;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/news/add",
        Some(&token),
        Some(json!({
            "title": "Quiet release",
            "author": "Editor",
            "content": "No emails for this one",
            "sendNotifications": false
        })),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["emailNotifications"]["success"], json!(false));
    assert_eq!(body["emailNotifications"]["sent"], json!(0));
    assert!(mailer.sent.lock().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn events_list_in_calendar_order() -> anyhow::Result<()> {
    let (app, ctx) = test_app().await?;
    let token = admin_token(&ctx).await?;

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/events/add",
        Some(&token),
        Some(json!({
            "title": "Graduation",
            "date": "2026-04-10",
            "time": "9:00 AM",
            "location": "Auditorium"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    send_json(
        &app,
        "POST",
        "/api/events/add",
        Some(&token),
        Some(json!({
            "title": "Foundation Day",
            "date": "2026-03-20",
            "time": "8:00 AM",
            "location": "Gymnasium"
        })),
    )
    .await?;

    // Earliest date first, regardless of creation order
    let (_, body) = send_json(&app, "GET", "/api/events", None, None).await?;
    assert_eq!(body["data"][0]["title"], json!("Foundation Day"));
    assert_eq!(body["data"][1]["title"], json!("Graduation"));

    // An unparseable date is a validation error, not a stored document
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/events/add",
        Some(&token),
        Some(json!({
            "title": "Bad date",
            "date": "soon",
            "time": "8:00 AM",
            "location": "Gymnasium"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    let (_, body) = send_json(&app, "GET", "/api/events", None, None).await?;
    assert_eq!(body["pagination"]["total"], json!(2));

    Ok(())
}

#[tokio::test]
async fn statistics_update_in_place() -> anyhow::Result<()> {
    let (app, ctx) = test_app().await?;
    let token = admin_token(&ctx).await?;

    let stats = ctx
        .statistics_repo
        .create(Statistics {
            id: Uuid::new_v4(),
            teaching: "40".to_string(),
            nonteaching: "25".to_string(),
            students: "1100".to_string(),
            created_at: Utc::now(),
        })
        .await?;

    // Reads are public
    let (status, body) = send_json(&app, "GET", "/api/statistics", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["teaching"], json!("40"));

    // Partial payloads are rejected as a whole
    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/statistics/update?id={}", stats.id),
        Some(&token),
        Some(json!({"teaching": "45"})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("All fields are required"));

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/statistics/update?id={}", stats.id),
        Some(&token),
        Some(json!({"teaching": "45", "nonteaching": "28", "students": "1200"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["teaching"], json!("45"));
    assert_eq!(body["data"]["students"], json!("1200"));

    Ok(())
}

#[tokio::test]
async fn contact_inquiries_lifecycle() -> anyhow::Result<()> {
    let (app, ctx) = test_app().await?;
    let token = admin_token(&ctx).await?;

    // The public form rejects malformed email addresses
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/contact",
        None,
        Some(json!({
            "name": "Maria Santos",
            "email": "not-an-address",
            "mobile": "09171234567",
            "address": "Sample St.",
            "courseStrand": "STEM",
            "message": "How do I enroll?"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/contact",
        None,
        Some(json!({
            "name": "Maria Santos",
            "email": "maria@example.com",
            "mobile": "09171234567",
            "address": "Sample St.",
            "courseStrand": "STEM",
            "message": "How do I enroll?"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["is_done"], json!(false));
    let id = created["data"]["id"].as_str().unwrap().to_string();

    // Listing inquiries is admin-only
    let (status, _) = send_json(&app, "GET", "/api/contact", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Mark handled, then filter by state
    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/contact?id={}", id),
        Some(&token),
        Some(json!({"is_done": true})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_done"], json!(true));

    let (_, body) = send_json(&app, "GET", "/api/contact?is_done=false", Some(&token), None).await?;
    assert_eq!(body["pagination"]["total"], json!(0));

    let (_, body) = send_json(&app, "GET", "/api/contact?is_done=true", Some(&token), None).await?;
    assert_eq!(body["pagination"]["total"], json!(1));

    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/api/contact?id={}", id),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let inquiries = ctx.contact_repo.count(None).await?;
    assert_eq!(inquiries, 0);

    Ok(())
}

#[tokio::test]
async fn event_missing_field_is_named() -> anyhow::Result<()> {
    let (app, ctx) = test_app().await?;
    let token = admin_token(&ctx).await?;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/events/add",
        Some(&token),
        Some(json!({"title": "No date", "time": "8:00 AM", "location": "Gym"})),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Date is required"));

    let total = ctx.event_repo.count().await?;
    assert_eq!(total, 0);

    Ok(())
}

#[tokio::test]
async fn organization_requires_full_profile() -> anyhow::Result<()> {
    let (app, ctx) = test_app().await?;
    let token = admin_token(&ctx).await?;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/organizations/add",
        Some(&token),
        Some(json!({
            "clubName": "Science Club",
            "description": "For future researchers"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Officers is required"));

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/organizations/add",
        Some(&token),
        Some(json!({
            "clubName": "Science Club",
            "description": "For future researchers",
            "officers": "Pres: A, VP: B",
            "adviser": "Mr. Reyes",
            "activities": "Science fairs, quiz bees",
            "image_path": "uploads/science.jpg",
            "logo_path": "uploads/science-logo.jpg"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["clubName"], json!("Science Club"));

    Ok(())
}
