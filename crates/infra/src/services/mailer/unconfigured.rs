use super::{IMailer, MailerError};

/// Used when no mail transport is configured. Every mail is rejected so that
/// due reminders stay pending until a transport is available.
pub struct UnconfiguredMailer {}

#[async_trait::async_trait]
impl IMailer for UnconfiguredMailer {
    async fn send(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), MailerError> {
        Err(MailerError::Rejected(
            "No mail transport is configured".into(),
        ))
    }
}
