mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
use nudge_domain::{Reminder, ID};
pub use postgres::PostgresReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    /// All `Reminder`s sorted by `scheduled_ts`, earliest first
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    /// All `Reminder`s that are not sent yet and are scheduled at or before `now`
    async fn find_due(&self, now: i64) -> anyhow::Result<Vec<Reminder>>;
    /// Marks the `Reminder` as sent. Marking an already sent `Reminder` is a no-op.
    async fn mark_sent(&self, reminder_id: &ID) -> anyhow::Result<()>;
}
