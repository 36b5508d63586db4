use chrono::{Duration, Utc};
use clap::Parser;
use fake::faker::address::en::CityName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::Name;
use fake::Fake;
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

use bulletin::{
    auth::AuthService,
    domain::{Achievement, Announcement, Event, NewsArticle, Statistics, Subscriber},
    repository::{
        AchievementRepository, AnnouncementRepository, EventRepository, NewsRepository,
        SqliteAchievementRepository, SqliteAnnouncementRepository, SqliteEventRepository,
        SqliteNewsRepository, SqliteStatisticsRepository, SqliteSubscriberRepository,
        SqliteUserRepository, StatisticsRepository, SubscriberRepository, UserRepository,
    },
};

/// Seeds the database with the admin account, the statistics row (which
/// has no create endpoint), and optional generated sample content.
#[derive(Parser)]
#[command(name = "seed")]
struct Args {
    /// Database URL; falls back to DATABASE_URL, then a local file
    #[arg(long)]
    database_url: Option<String>,

    /// Admin account to create
    #[arg(long, default_value = "admin")]
    admin_username: String,

    #[arg(long, default_value = "admin123")]
    admin_password: String,

    /// Generate this many sample items per content type
    #[arg(long, default_value_t = 0)]
    sample: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("🌱 Starting database seeding...");

    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:bulletin.db".to_string());

    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    // Run migrations first
    println!("📋 Running migrations...");
    sqlx::migrate!("./migrations").run(&db_pool).await?;

    // Admin account
    let user_repo = SqliteUserRepository::new(db_pool.clone());
    match user_repo.find_by_username(&args.admin_username).await? {
        Some(_) => println!("  ⏭  Admin user '{}' already exists", args.admin_username),
        None => {
            let hash = AuthService::hash_password(&args.admin_password).await?;
            user_repo.create(&args.admin_username, &hash).await?;
            println!(
                "  ✅ Created admin user ({} / {})",
                args.admin_username, args.admin_password
            );
        }
    }

    // Statistics row: the dashboard can only update it in place
    let statistics_repo = SqliteStatisticsRepository::new(db_pool.clone());
    if statistics_repo.count().await? == 0 {
        statistics_repo
            .create(Statistics {
                id: Uuid::new_v4(),
                teaching: "45".to_string(),
                nonteaching: "28".to_string(),
                students: "1200".to_string(),
                created_at: Utc::now(),
            })
            .await?;
        println!("  ✅ Created statistics record");
    } else {
        println!("  ⏭  Statistics record already exists");
    }

    if args.sample > 0 {
        seed_sample_content(&db_pool, args.sample).await?;
    }

    println!("🎉 Seeding complete");

    Ok(())
}

async fn seed_sample_content(db_pool: &sqlx::SqlitePool, count: usize) -> anyhow::Result<()> {
    println!("📰 Generating {} sample items per content type...", count);

    let news_repo = SqliteNewsRepository::new(db_pool.clone());
    let announcement_repo = SqliteAnnouncementRepository::new(db_pool.clone());
    let achievement_repo = SqliteAchievementRepository::new(db_pool.clone());
    let event_repo = SqliteEventRepository::new(db_pool.clone());
    let subscriber_repo = SqliteSubscriberRepository::new(db_pool.clone());

    for i in 0..count {
        news_repo
            .create(NewsArticle {
                id: Uuid::new_v4(),
                title: Sentence(3..8).fake(),
                author: Name().fake(),
                content: Paragraph(3..6).fake(),
                images: Vec::new(),
                created_at: Utc::now() - Duration::days(i as i64),
            })
            .await?;

        announcement_repo
            .create(Announcement {
                id: Uuid::new_v4(),
                content: Sentence(8..16).fake(),
                created_at: Utc::now() - Duration::days(i as i64),
            })
            .await?;

        achievement_repo
            .create(Achievement {
                id: Uuid::new_v4(),
                category: ["Academic", "Sports", "Arts"][i % 3].to_string(),
                headline: Sentence(3..8).fake(),
                description: Paragraph(2..4).fake(),
                image_path: None,
                created_at: Utc::now() - Duration::days(i as i64),
            })
            .await?;

        event_repo
            .create(Event {
                id: Uuid::new_v4(),
                title: Sentence(2..5).fake(),
                date: (Utc::now() + Duration::days(7 * (i as i64 + 1))).date_naive(),
                time: "8:00 AM".to_string(),
                location: CityName().fake(),
                created_at: Utc::now(),
            })
            .await?;

        // Generated addresses can repeat across runs; skip known ones
        let email: String = SafeEmail().fake();
        if subscriber_repo.find_by_email(&email).await?.is_none() {
            subscriber_repo
                .create(Subscriber {
                    id: Uuid::new_v4(),
                    email,
                    created_at: Utc::now(),
                })
                .await?;
        }
    }

    println!("  ✅ Sample content created");

    Ok(())
}
