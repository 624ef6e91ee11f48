mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{IReminderRepo, InMemoryReminderRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::{info, warn};

#[derive(Clone)]
pub struct NudgeContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub mailer: Arc<dyn IMailer>,
}

struct ContextParams {
    pub postgres_connection_string: Option<String>,
    pub smtp: Option<SmtpSettings>,
}

impl NudgeContext {
    /// Context where nothing leaves the process and every mail is recorded
    /// by an `InMemoryMailer`, used for testing
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            mailer: Arc::new(InMemoryMailer::new()),
        }
    }

    async fn create(params: ContextParams) -> Self {
        let repos = match params.postgres_connection_string {
            Some(connection_string) => Repos::create_postgres(&connection_string)
                .await
                .expect("Postgres credentials must be valid"),
            None => Repos::create_inmemory(),
        };
        let mailer: Arc<dyn IMailer> = match params.smtp {
            Some(smtp) => {
                Arc::new(SmtpMailer::new(smtp).expect("SMTP settings must be valid"))
            }
            None => Arc::new(UnconfiguredMailer {}),
        };

        Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            mailer,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> NudgeContext {
    NudgeContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
        smtp: get_smtp_settings(),
    })
    .await
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    match std::env::var(PSQL_CONNECTION_STRING) {
        Ok(connection_string) => {
            info!("{} env var was provided. Going to use postgres.", PSQL_CONNECTION_STRING);
            Some(connection_string)
        }
        Err(_) => {
            warn!(
                "{} env var was not provided. Going to use inmemory reminder storage, reminders will be lost on restart.",
                PSQL_CONNECTION_STRING
            );
            None
        }
    }
}

fn get_smtp_settings() -> Option<SmtpSettings> {
    const SMTP_HOST: &str = "SMTP_HOST";
    const SMTP_USERNAME: &str = "SMTP_USERNAME";
    const SMTP_PASSWORD: &str = "SMTP_PASSWORD";
    const MAIL_FROM: &str = "MAIL_FROM";

    match (std::env::var(SMTP_USERNAME), std::env::var(SMTP_PASSWORD)) {
        (Ok(username), Ok(password)) => {
            let host = std::env::var(SMTP_HOST).unwrap_or_else(|_| "smtp.gmail.com".into());
            let from = std::env::var(MAIL_FROM).unwrap_or_else(|_| username.clone());
            info!("SMTP credentials were provided. Going to send mails through: {}", host);
            Some(SmtpSettings {
                host,
                username,
                password,
                from,
            })
        }
        _ => {
            warn!(
                "{} and {} env vars were not provided. Due reminders will stay pending until they are provided.",
                SMTP_USERNAME, SMTP_PASSWORD
            );
            None
        }
    }
}
