mod reminder;
mod shared;

pub use reminder::{InvalidReminderError, Reminder, ReminderStatus};
pub use shared::entity::{Entity, ID};
