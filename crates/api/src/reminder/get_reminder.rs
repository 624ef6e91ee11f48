use crate::{
    error::NudgeError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use nudge_api_structs::get_reminder::{APIResponse, PathParams};
use nudge_domain::{Reminder, ID};
use nudge_infra::NudgeContext;

pub async fn get_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<NudgeContext>,
) -> Result<HttpResponse, NudgeError> {
    let usecase = GetReminderUseCase {
        reminder_id: path_params.reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(|e| match e {
            UseCaseErrors::NotFound(reminder_id) => NudgeError::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseErrors::StorageError => NudgeError::InternalError,
        })
}

#[derive(Debug)]
struct GetReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetReminder";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.reminders.find(&self.reminder_id).await {
            Ok(Some(reminder)) => Ok(reminder),
            Ok(None) => Err(UseCaseErrors::NotFound(self.reminder_id)),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}
