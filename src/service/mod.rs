use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::AuthService;
use crate::notify::{Mailer, Notifier};
use crate::repository::*;

/// Everything the handlers need, built once at startup and shared. All
/// repositories run against the same pool; the notifier borrows the
/// subscriber repository so the fan-out always sees the live list.
pub struct ServiceContext {
    pub news_repo: Arc<dyn NewsRepository>,
    pub announcement_repo: Arc<dyn AnnouncementRepository>,
    pub achievement_repo: Arc<dyn AchievementRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub organization_repo: Arc<dyn OrganizationRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub subscriber_repo: Arc<dyn SubscriberRepository>,
    pub statistics_repo: Arc<dyn StatisticsRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub auth_service: Arc<AuthService>,
    pub notifier: Arc<Notifier>,
    pub db_pool: SqlitePool,
}

impl ServiceContext {
    pub fn new(
        db_pool: SqlitePool,
        auth_service: Arc<AuthService>,
        mailer: Option<Arc<dyn Mailer>>,
        site_url: String,
    ) -> Self {
        let subscriber_repo: Arc<dyn SubscriberRepository> =
            Arc::new(SqliteSubscriberRepository::new(db_pool.clone()));

        let notifier = Arc::new(Notifier::new(subscriber_repo.clone(), mailer, site_url));

        Self {
            news_repo: Arc::new(SqliteNewsRepository::new(db_pool.clone())),
            announcement_repo: Arc::new(SqliteAnnouncementRepository::new(db_pool.clone())),
            achievement_repo: Arc::new(SqliteAchievementRepository::new(db_pool.clone())),
            event_repo: Arc::new(SqliteEventRepository::new(db_pool.clone())),
            organization_repo: Arc::new(SqliteOrganizationRepository::new(db_pool.clone())),
            contact_repo: Arc::new(SqliteContactRepository::new(db_pool.clone())),
            subscriber_repo,
            statistics_repo: Arc::new(SqliteStatisticsRepository::new(db_pool.clone())),
            user_repo: Arc::new(SqliteUserRepository::new(db_pool.clone())),
            auth_service,
            notifier,
            db_pool,
        }
    }
}
