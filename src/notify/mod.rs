pub mod mailer;
pub mod message;

pub use mailer::{Mailer, SmtpMailer};
pub use message::Publication;

use std::sync::Arc;

use futures_util::future;
use serde::Serialize;

use crate::{domain::Subscriber, repository::SubscriberRepository};

/// Outcome of one fan-out, reported back to the create endpoint beside the
/// stored document. `sent + failed == total` whenever a delivery round ran.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationReport {
    pub success: bool,
    pub sent: usize,
    pub failed: usize,
    pub total: usize,
}

impl NotificationReport {
    /// The caller opted out via `sendNotifications: false`.
    pub fn skipped() -> Self {
        Self {
            success: false,
            sent: 0,
            failed: 0,
            total: 0,
        }
    }

    fn unavailable(total: usize) -> Self {
        Self {
            success: false,
            sent: 0,
            failed: 0,
            total,
        }
    }
}

/// Emails every subscriber when a news article, announcement, or event is
/// published. Fire-all, collect-results: each delivery is attempted
/// independently and tallied; there is no retry, backoff, or queueing.
pub struct Notifier {
    subscriber_repo: Arc<dyn SubscriberRepository>,
    mailer: Option<Arc<dyn Mailer>>,
    site_url: String,
}

impl Notifier {
    pub fn new(
        subscriber_repo: Arc<dyn SubscriberRepository>,
        mailer: Option<Arc<dyn Mailer>>,
        site_url: String,
    ) -> Self {
        Self {
            subscriber_repo,
            mailer,
            site_url,
        }
    }

    /// Never returns an error: a mail problem must not fail the content
    /// creation that triggered it, so every failure lands in the tally.
    pub async fn broadcast(&self, publication: &Publication<'_>) -> NotificationReport {
        let subscribers = match self.subscriber_repo.list_all().await {
            Ok(subscribers) => subscribers,
            Err(e) => {
                tracing::error!("Failed to load subscribers for notification: {}", e);
                return NotificationReport::unavailable(0);
            }
        };

        let total = subscribers.len();
        if total == 0 {
            return NotificationReport {
                success: true,
                sent: 0,
                failed: 0,
                total: 0,
            };
        }

        let Some(mailer) = &self.mailer else {
            tracing::warn!(
                "Email delivery disabled; skipping notification of {} subscribers",
                total
            );
            return NotificationReport::unavailable(total);
        };

        let subject = publication.subject();
        let text = publication.text_body(&self.site_url);
        let html = publication.html_body(&self.site_url);

        // All sends go out at once and each settles on its own; one bad
        // mailbox cannot abort the rest.
        let deliveries = subscribers
            .iter()
            .map(|subscriber| Self::deliver(mailer.as_ref(), subscriber, &subject, &text, &html));
        let results = future::join_all(deliveries).await;

        let sent = results.iter().filter(|delivered| **delivered).count();

        NotificationReport {
            success: true,
            sent,
            failed: total - sent,
            total,
        }
    }

    async fn deliver(
        mailer: &dyn Mailer,
        subscriber: &Subscriber,
        subject: &str,
        text: &str,
        html: &str,
    ) -> bool {
        let address = subscriber.email.trim();
        if address.is_empty() {
            tracing::warn!(
                "Subscriber {} has no email address (recipient unknown)",
                subscriber.id
            );
            return false;
        }

        match mailer
            .send(address, subject, text.to_string(), html.to_string())
            .await
        {
            Ok(()) => {
                tracing::debug!("Notification sent to {}", address);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to send notification to {}: {}", address, e);
                false
            }
        }
    }
}
