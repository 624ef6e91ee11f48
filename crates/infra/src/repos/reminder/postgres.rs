use super::IReminderRepo;
use nudge_domain::{Reminder, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    email: String,
    message: String,
    scheduled_ts: i64,
    sent: bool,
}

impl From<ReminderRaw> for Reminder {
    fn from(raw: ReminderRaw) -> Self {
        Self {
            id: raw.reminder_uid.into(),
            email: raw.email,
            message: raw.message,
            scheduled_ts: raw.scheduled_ts,
            sent: raw.sent,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, email, message, scheduled_ts, sent)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.email)
        .bind(&reminder.message)
        .bind(reminder.scheduled_ts)
        .bind(reminder.sent)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let reminder = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to find reminder: {}. Error: {:?}", reminder_id, e);
            e
        })?;

        Ok(reminder.map(|r| r.into()))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            ORDER BY r.scheduled_ts ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn find_due(&self, now: i64) -> anyhow::Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.scheduled_ts <= $1 AND r.sent = FALSE
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }

    async fn mark_sent(&self, reminder_id: &ID) -> anyhow::Result<()> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE reminders
            SET sent = TRUE
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            anyhow::bail!("Reminder: {} was not found", reminder_id);
        }
        Ok(())
    }
}
