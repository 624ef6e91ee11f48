mod inmemory;
mod smtp;
mod unconfigured;

pub use inmemory::{InMemoryMailer, SentMail};
pub use smtp::{SmtpMailer, SmtpSettings};
pub use unconfigured::UnconfiguredMailer;

use lettre::{address::AddressError, Address};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Lettre(#[from] lettre::error::Error),

    #[error(transparent)]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("The mail was rejected: {0}")]
    Rejected(String),
}

/// Outbound mail transport used to deliver reminders
#[async_trait::async_trait]
pub trait IMailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailerError>;
}

/// Checks that the given string is a deliverable email address
pub fn is_valid_email_address(address: &str) -> bool {
    address.parse::<Address>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_email_addresses() {
        assert!(is_valid_email_address("someone@example.com"));
        assert!(!is_valid_email_address("someone"));
        assert!(!is_valid_email_address("someone@"));
        assert!(!is_valid_email_address(""));
    }
}
