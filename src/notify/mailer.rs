use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{
    config::EmailConfig,
    error::{AppError, Result},
};

/// Delivery backend for subscriber notifications. The fan-out only needs
/// one operation; tests substitute a recording implementation.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, text: String, html: String) -> Result<()>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    /// Returns None when email is disabled or the configuration is not
    /// usable, so the server can still start without a mail relay.
    pub fn new(config: &EmailConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }

        let sender: Mailbox =
            match format!("{} <{}>", config.sender_name, config.sender_address).parse() {
                Ok(mailbox) => mailbox,
                Err(e) => {
                    tracing::warn!("Invalid mail sender address: {}", e);
                    return None;
                }
            };

        let transport = match AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host) {
            Ok(builder) => builder
                .credentials(Credentials::new(
                    config.smtp_username.clone(),
                    config.smtp_password.clone(),
                ))
                .build(),
            Err(e) => {
                tracing::warn!("Invalid SMTP configuration: {}", e);
                return None;
            }
        };

        Some(Self { transport, sender })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, text: String, html: String) -> Result<()> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|e| AppError::Validation(format!("Invalid recipient address: {}", e)))?;

        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(text, html))
            .map_err(|e| AppError::Internal(format!("Failed to build message: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::External(format!("SMTP delivery failed: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
pub mod test_utils {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct SentMail {
        pub to: String,
        pub subject: String,
    }

    /// Records deliveries, failing any address listed in `fail_to`.
    #[derive(Default)]
    pub struct FakeMailer {
        pub sent: Mutex<Vec<SentMail>>,
        pub fail_to: Vec<String>,
    }

    impl FakeMailer {
        pub fn failing_for(addresses: &[&str]) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_to: addresses.iter().map(|a| a.to_string()).collect(),
            }
        }

        pub fn deliveries(&self) -> Vec<SentMail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for FakeMailer {
        async fn send(&self, to: &str, subject: &str, _text: String, _html: String) -> Result<()> {
            if self.fail_to.iter().any(|a| a == to) {
                return Err(AppError::External(format!("Mailbox {} unavailable", to)));
            }

            self.sent.lock().unwrap().push(SentMail {
                to: to.to_string(),
                subject: subject.to_string(),
            });

            Ok(())
        }
    }
}
