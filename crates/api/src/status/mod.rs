use actix_web::{web, HttpResponse};
use nudge_api_structs::get_service_health::*;
use nudge_infra::NudgeContext;

async fn status(ctx: web::Data<NudgeContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
        server_timestamp: ctx.sys.get_timestamp_millis(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
