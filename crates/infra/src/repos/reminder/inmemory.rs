use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use nudge_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(find(reminder_id, &self.reminders))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |_| true);
        reminders.sort_by_key(|r| r.scheduled_ts);
        Ok(reminders)
    }

    async fn find_due(&self, now: i64) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| r.is_due(now)))
    }

    async fn mark_sent(&self, reminder_id: &ID) -> anyhow::Result<()> {
        if update(reminder_id, &self.reminders, |r| r.mark_sent()) {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Reminder: {} was not found", reminder_id))
        }
    }
}
