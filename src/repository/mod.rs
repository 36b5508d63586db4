use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::*;
use crate::error::Result;

pub mod achievement_repository;
pub mod announcement_repository;
pub mod contact_repository;
pub mod event_repository;
pub mod news_repository;
pub mod organization_repository;
pub mod statistics_repository;
pub mod subscriber_repository;
pub mod user_repository;

pub use achievement_repository::SqliteAchievementRepository;
pub use announcement_repository::SqliteAnnouncementRepository;
pub use contact_repository::SqliteContactRepository;
pub use event_repository::SqliteEventRepository;
pub use news_repository::SqliteNewsRepository;
pub use organization_repository::SqliteOrganizationRepository;
pub use statistics_repository::SqliteStatisticsRepository;
pub use subscriber_repository::SqliteSubscriberRepository;
pub use user_repository::SqliteUserRepository;

#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn create(&self, article: NewsArticle) -> Result<NewsArticle>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<NewsArticle>>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<NewsArticle>>;
    async fn count(&self) -> Result<i64>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn create(&self, announcement: Announcement) -> Result<Announcement>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Announcement>>;
    async fn count(&self) -> Result<i64>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn create(&self, achievement: Achievement) -> Result<Achievement>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Achievement>>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Achievement>>;
    async fn count(&self) -> Result<i64>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: Event) -> Result<Event>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>>;
    /// Ordered by event date, earliest first (the public calendar order).
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Event>>;
    async fn count(&self) -> Result<i64>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    async fn create(&self, organization: Organization) -> Result<Organization>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Organization>>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Organization>>;
    async fn count(&self) -> Result<i64>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, inquiry: ContactInquiry) -> Result<ContactInquiry>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactInquiry>>;
    async fn list(&self, limit: i64, offset: i64, is_done: Option<bool>) -> Result<Vec<ContactInquiry>>;
    async fn count(&self, is_done: Option<bool>) -> Result<i64>;
    async fn set_done(&self, id: Uuid, is_done: bool) -> Result<ContactInquiry>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    async fn create(&self, subscriber: Subscriber) -> Result<Subscriber>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Subscriber>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Subscriber>>;
    /// The notification fan-out addresses every subscriber at once.
    async fn list_all(&self) -> Result<Vec<Subscriber>>;
    async fn count(&self) -> Result<i64>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait StatisticsRepository: Send + Sync {
    async fn create(&self, statistics: Statistics) -> Result<Statistics>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Statistics>>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Statistics>>;
    async fn count(&self) -> Result<i64>;
    async fn update(
        &self,
        id: Uuid,
        teaching: &str,
        nonteaching: &str,
        students: &str,
    ) -> Result<Statistics>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, username: &str, password_hash: &str) -> Result<User>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    /// Hash lookup is separate so the hash never rides along on `User`.
    async fn password_hash(&self, username: &str) -> Result<Option<String>>;
}
