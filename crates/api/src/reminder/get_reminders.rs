use crate::{
    error::NudgeError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use nudge_api_structs::get_reminders::APIResponse;
use nudge_domain::Reminder;
use nudge_infra::NudgeContext;

pub async fn get_reminders_controller(
    ctx: web::Data<NudgeContext>,
) -> Result<HttpResponse, NudgeError> {
    execute(GetRemindersUseCase {}, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(|e| match e {
            UseCaseErrors::StorageError => NudgeError::InternalError,
        })
}

/// Lists every `Reminder`, the earliest scheduled first
#[derive(Debug)]
struct GetRemindersUseCase {}

#[derive(Debug)]
enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
