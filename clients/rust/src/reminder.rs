use crate::{APIResponse, BaseClient, ID};
use chrono::{DateTime, Utc};
use nudge_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub email: String,
    pub message: String,
    pub scheduled_time: DateTime<Utc>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            email: input.email,
            message: input.message,
            scheduled_time: input.scheduled_time,
        };
        self.base
            .post(body, "reminder".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, reminder_id: &ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminder/{}", reminder_id), StatusCode::OK)
            .await
    }

    /// All reminders, the earliest scheduled first
    pub async fn list(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminder".into(), StatusCode::OK).await
    }
}
