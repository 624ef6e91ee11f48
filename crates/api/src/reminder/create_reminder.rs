use crate::{
    error::NudgeError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use nudge_api_structs::create_reminder::{APIResponse, RequestBody};
use nudge_domain::{InvalidReminderError, Reminder};
use nudge_infra::{is_valid_email_address, NudgeContext};

fn error_handler(e: UseCaseErrors) -> NudgeError {
    match e {
        UseCaseErrors::StorageError => NudgeError::InternalError,
        UseCaseErrors::InvalidReminder(e) => NudgeError::BadClientData(e.to_string()),
        UseCaseErrors::InvalidEmail(email) => NudgeError::BadClientData(format!(
            "The given email address: {:?} is not valid",
            email
        )),
    }
}

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<NudgeContext>,
) -> Result<HttpResponse, NudgeError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        email: body.email,
        message: body.message,
        scheduled_ts: body.scheduled_time.timestamp_millis(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(error_handler)
}

/// Stores a new pending `Reminder`. The scheduled time is not checked against
/// the current time, a `Reminder` in the past is sent on the next dispatch tick.
#[derive(Debug)]
struct CreateReminderUseCase {
    pub email: String,
    pub message: String,
    pub scheduled_ts: i64,
}

#[derive(Debug)]
enum UseCaseErrors {
    InvalidReminder(InvalidReminderError),
    InvalidEmail(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Errors> {
        let reminder = Reminder::new(&self.email, self.message.clone(), self.scheduled_ts)
            .map_err(UseCaseErrors::InvalidReminder)?;
        if !is_valid_email_address(&reminder.email) {
            return Err(UseCaseErrors::InvalidEmail(reminder.email));
        }

        match ctx.repos.reminders.insert(&reminder).await {
            Ok(_) => Ok(reminder),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn creates_pending_reminder() {
        let ctx = NudgeContext::create_inmemory();
        let usecase = CreateReminderUseCase {
            email: " someone@example.com ".into(),
            message: "Water the plants".into(),
            scheduled_ts: 1000,
        };

        let reminder = execute(usecase, &ctx).await.expect("To create reminder");
        assert_eq!(reminder.email, "someone@example.com");
        assert!(!reminder.sent);
        assert_eq!(
            ctx.repos.reminders.find(&reminder.id).await.unwrap(),
            Some(reminder)
        );
    }

    #[actix_web::test]
    async fn rejects_invalid_email() {
        let ctx = NudgeContext::create_inmemory();
        let usecase = CreateReminderUseCase {
            email: "not an email".into(),
            message: "Water the plants".into(),
            scheduled_ts: 1000,
        };

        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::InvalidEmail(_))
        ));
        assert!(ctx.repos.reminders.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rejects_empty_message() {
        let ctx = NudgeContext::create_inmemory();
        let usecase = CreateReminderUseCase {
            email: "someone@example.com".into(),
            message: "".into(),
            scheduled_ts: 1000,
        };

        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::InvalidReminder(
                InvalidReminderError::EmptyMessage
            ))
        ));
    }
}
