use crate::shared::entity::{Entity, ID};
use thiserror::Error;

/// A `Reminder` is a message that should be emailed to a recipient
/// once its `scheduled_ts` has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// The address the `message` should be sent to
    pub email: String,
    /// The body of the email
    pub message: String,
    /// The timestamp in millis at which the `Reminder` becomes due.
    /// Timestamps in the past are allowed and make the `Reminder` due right away.
    pub scheduled_ts: i64,
    /// Set once the email has been delivered to the mail transport.
    /// It never goes back to `false`.
    pub sent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderStatus {
    Pending,
    Sent,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidReminderError {
    #[error("The email address of a reminder cannot be empty")]
    EmptyEmail,
    #[error("The message of a reminder cannot be empty")]
    EmptyMessage,
}

impl Reminder {
    pub fn new(
        email: &str,
        message: impl Into<String>,
        scheduled_ts: i64,
    ) -> Result<Self, InvalidReminderError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(InvalidReminderError::EmptyEmail);
        }
        let message = message.into();
        if message.is_empty() {
            return Err(InvalidReminderError::EmptyMessage);
        }

        Ok(Self {
            id: Default::default(),
            email: email.to_string(),
            message,
            scheduled_ts,
            sent: false,
        })
    }

    /// Whether the `Reminder` should be dispatched by a tick running at `now`
    pub fn is_due(&self, now: i64) -> bool {
        !self.sent && self.scheduled_ts <= now
    }

    pub fn status(&self) -> ReminderStatus {
        if self.sent {
            ReminderStatus::Sent
        } else {
            ReminderStatus::Pending
        }
    }

    pub fn mark_sent(&mut self) {
        self.sent = true;
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reminders_are_pending() {
        let reminder = Reminder::new("  someone@example.com ", "Water the plants", 1000).unwrap();
        assert_eq!(reminder.email, "someone@example.com");
        assert_eq!(reminder.status(), ReminderStatus::Pending);
        assert!(!reminder.sent);
    }

    #[test]
    fn rejects_empty_fields() {
        assert_eq!(
            Reminder::new(" ", "Water the plants", 0),
            Err(InvalidReminderError::EmptyEmail)
        );
        assert_eq!(
            Reminder::new("someone@example.com", "", 0),
            Err(InvalidReminderError::EmptyMessage)
        );
    }

    #[test]
    fn keeps_whitespace_only_message() {
        let reminder = Reminder::new("someone@example.com", "   ", 0).unwrap();
        assert_eq!(reminder.message, "   ");
    }

    #[test]
    fn due_at_and_after_scheduled_ts() {
        let reminder = Reminder::new("someone@example.com", "Hello", 1000).unwrap();
        assert!(!reminder.is_due(999));
        assert!(reminder.is_due(1000));
        assert!(reminder.is_due(1001));
    }

    #[test]
    fn sent_reminders_are_never_due_again() {
        let mut reminder = Reminder::new("someone@example.com", "Hello", 1000).unwrap();
        reminder.mark_sent();
        reminder.mark_sent();
        assert_eq!(reminder.status(), ReminderStatus::Sent);
        assert!(!reminder.is_due(5000));
    }
}
