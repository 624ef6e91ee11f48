use super::{IMailer, MailerError};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub username: String,
    pub password: String,
    /// The address reminders are sent from
    pub from: String,
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_mailbox: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: SmtpSettings) -> Result<Self, MailerError> {
        let from_mailbox = settings.from.parse::<Mailbox>()?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
            .credentials(Credentials::new(settings.username, settings.password))
            .build();

        Ok(Self {
            transport,
            from_mailbox,
        })
    }
}

#[async_trait::async_trait]
impl IMailer for SmtpMailer {
    #[tracing::instrument(name = "Sending email", skip(self, body))]
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailerError> {
        let message = Message::builder()
            .from(self.from_mailbox.clone())
            .to(to.parse::<Mailbox>()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        let response = self.transport.send(message).await?;
        info!("Mail accepted by the SMTP server with code: {}", response.code());

        Ok(())
    }
}
