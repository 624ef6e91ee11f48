use super::{IMailer, MailerError};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mailer that keeps the mails in memory instead of delivering them.
/// Used when no SMTP server is configured and for testing.
pub struct InMemoryMailer {
    sent: Mutex<Vec<SentMail>>,
    failing: AtomicBool,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    /// When set, every following send is rejected
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent_mails(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for InMemoryMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMailer for InMemoryMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailerError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(MailerError::Rejected(format!(
                "In memory mailer is set to fail, recipient: {}",
                to
            )));
        }

        info!("Storing mail to: {} in memory instead of delivering it", to);
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_sent_mails() {
        let mailer = InMemoryMailer::new();
        mailer
            .send("someone@example.com", "Reminder", "Water the plants")
            .await
            .expect("To send mail");

        assert_eq!(
            mailer.sent_mails(),
            vec![SentMail {
                to: "someone@example.com".into(),
                subject: "Reminder".into(),
                body: "Water the plants".into(),
            }]
        );
    }

    #[tokio::test]
    async fn rejects_mails_while_failing() {
        let mailer = InMemoryMailer::new();
        mailer.set_failing(true);
        assert!(mailer.send("someone@example.com", "Reminder", "Hi").await.is_err());
        assert!(mailer.sent_mails().is_empty());

        mailer.set_failing(false);
        assert!(mailer.send("someone@example.com", "Reminder", "Hi").await.is_ok());
        assert_eq!(mailer.sent_mails().len(), 1);
    }
}
