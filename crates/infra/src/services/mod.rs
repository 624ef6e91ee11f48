mod mailer;

pub use mailer::{
    is_valid_email_address, IMailer, InMemoryMailer, MailerError, SentMail, SmtpMailer,
    SmtpSettings, UnconfiguredMailer,
};
