use chrono::{DateTime, TimeZone, Utc};
use nudge_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub email: String,
    pub message: String,
    pub scheduled_time: DateTime<Utc>,
    pub sent: bool,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            email: reminder.email,
            message: reminder.message,
            scheduled_time: Utc
                .timestamp_millis_opt(reminder.scheduled_ts)
                .single()
                .unwrap_or_else(|| Utc.timestamp_nanos(0)),
            sent: reminder.sent,
        }
    }
}
