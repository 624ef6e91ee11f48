use std::{str::FromStr, time::Duration};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// How often the due `Reminder`s are looked up and sent.
    /// A minute by default, like a `* * * * *` cron job.
    pub dispatch_interval: Duration,
    /// Subject line used for every reminder email
    pub reminder_subject: String,
    /// Upper bound for a single call to the mail transport
    pub mail_timeout: Duration,
    /// Upper bound for a single reminder store call made by the dispatcher
    pub store_timeout: Duration,
}

fn env_or_default<T: FromStr>(key: &str, default_value: T) -> T
where
    T: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default_value
                );
                default_value
            }
        },
        Err(_) => default_value,
    }
}

impl Config {
    pub fn new() -> Self {
        let port = env_or_default("PORT", 5000usize);

        let mut dispatch_interval_secs = env_or_default("NUDGE_DISPATCH_INTERVAL_SECS", 60u64);
        if dispatch_interval_secs == 0 {
            warn!("NUDGE_DISPATCH_INTERVAL_SECS cannot be 0, falling back to the default: 60.");
            dispatch_interval_secs = 60;
        }
        let reminder_subject = env_or_default("NUDGE_REMINDER_SUBJECT", String::from("Reminder"));
        let mail_timeout_secs = env_or_default("NUDGE_MAIL_TIMEOUT_SECS", 30u64);
        let store_timeout_secs = env_or_default("NUDGE_STORE_TIMEOUT_SECS", 10u64);

        Self {
            port,
            dispatch_interval: Duration::from_secs(dispatch_interval_secs),
            reminder_subject,
            mail_timeout: Duration::from_secs(mail_timeout_secs),
            store_timeout: Duration::from_secs(store_timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
