use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use bulletin::{
    domain::{ContactInquiry, Event, NewsArticle, Statistics, Subscriber},
    repository::{
        ContactRepository, EventRepository, NewsRepository, SqliteContactRepository,
        SqliteEventRepository, SqliteNewsRepository, SqliteStatisticsRepository,
        SqliteSubscriberRepository, StatisticsRepository, SubscriberRepository,
    },
};

async fn test_pool() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePool::connect(":memory:").await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

#[tokio::test]
async fn news_crud_roundtrip() -> anyhow::Result<()> {
    let pool = test_pool().await?;
    let repo = SqliteNewsRepository::new(pool);

    let article = repo
        .create(NewsArticle {
            id: Uuid::new_v4(),
            title: "Science Fair Winners".to_string(),
            author: "J. Cruz".to_string(),
            content: "Our students placed first.".to_string(),
            images: vec![
                "uploads/fair-1.jpg".to_string(),
                "uploads/fair-2.jpg".to_string(),
            ],
            created_at: Utc::now(),
        })
        .await?;

    assert_eq!(article.title, "Science Fair Winners");

    // The image list survives the JSON column roundtrip in order
    let found = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(
        found.images,
        vec!["uploads/fair-1.jpg".to_string(), "uploads/fair-2.jpg".to_string()]
    );

    assert_eq!(repo.count().await?, 1);
    assert_eq!(repo.list(10, 0).await?.len(), 1);

    repo.delete(article.id).await?;
    assert!(repo.find_by_id(article.id).await?.is_none());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn subscriber_email_is_unique() -> anyhow::Result<()> {
    let pool = test_pool().await?;
    let repo = SqliteSubscriberRepository::new(pool);

    repo.create(Subscriber {
        id: Uuid::new_v4(),
        email: "parent@example.com".to_string(),
        created_at: Utc::now(),
    })
    .await?;

    let duplicate = repo
        .create(Subscriber {
            id: Uuid::new_v4(),
            email: "parent@example.com".to_string(),
            created_at: Utc::now(),
        })
        .await;

    assert!(duplicate.is_err());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn contact_inquiry_done_flag_toggles() -> anyhow::Result<()> {
    let pool = test_pool().await?;
    let repo = SqliteContactRepository::new(pool);

    let inquiry = repo
        .create(ContactInquiry {
            id: Uuid::new_v4(),
            name: "Maria Santos".to_string(),
            email: "maria@example.com".to_string(),
            mobile: "09171234567".to_string(),
            address: "Sample St.".to_string(),
            course_strand: "STEM".to_string(),
            message: "How do I enroll?".to_string(),
            is_done: false,
            created_at: Utc::now(),
        })
        .await?;

    assert!(!inquiry.is_done);
    assert_eq!(repo.count(Some(false)).await?, 1);
    assert_eq!(repo.count(Some(true)).await?, 0);

    let updated = repo.set_done(inquiry.id, true).await?;
    assert!(updated.is_done);
    assert_eq!(repo.count(Some(true)).await?, 1);
    assert_eq!(repo.list(10, 0, Some(false)).await?.len(), 0);

    Ok(())
}

#[tokio::test]
async fn events_list_by_calendar_date() -> anyhow::Result<()> {
    let pool = test_pool().await?;
    let repo = SqliteEventRepository::new(pool);

    repo.create(Event {
        id: Uuid::new_v4(),
        title: "Graduation".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
        time: "9:00 AM".to_string(),
        location: "Auditorium".to_string(),
        created_at: Utc::now(),
    })
    .await?;

    repo.create(Event {
        id: Uuid::new_v4(),
        title: "Foundation Day".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
        time: "8:00 AM".to_string(),
        location: "Gymnasium".to_string(),
        created_at: Utc::now(),
    })
    .await?;

    let events = repo.list(10, 0).await?;
    assert_eq!(events[0].title, "Foundation Day");
    assert_eq!(events[1].title, "Graduation");

    Ok(())
}

#[tokio::test]
async fn statistics_update_preserves_identity() -> anyhow::Result<()> {
    let pool = test_pool().await?;
    let repo = SqliteStatisticsRepository::new(pool);

    let stats = repo
        .create(Statistics {
            id: Uuid::new_v4(),
            teaching: "40".to_string(),
            nonteaching: "25".to_string(),
            students: "1100".to_string(),
            created_at: Utc::now(),
        })
        .await?;

    let updated = repo.update(stats.id, "45", "28", "1200").await?;

    assert_eq!(updated.id, stats.id);
    assert_eq!(updated.teaching, "45");
    assert_eq!(updated.nonteaching, "28");
    assert_eq!(updated.students, "1200");
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
