mod base;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use nudge_api_structs::dtos::*;
pub use nudge_domain::ID;
use reminder::ReminderClient;
pub use reminder::CreateReminderInput;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use nudge_api_structs::dtos::ReminderDTO as Reminder;

/// Nudge Server SDK
///
/// The SDK contains methods for interacting with the Nudge server
/// API.
#[derive(Clone)]
pub struct NudgeSDK {
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl NudgeSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { reminder, status }
    }
}
