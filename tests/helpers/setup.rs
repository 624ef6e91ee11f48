use nudge_api::Application;
use nudge_infra::{Config, InMemoryMailer, NudgeContext};
use nudge_sdk::NudgeSDK;
use std::{sync::Arc, time::Duration};

pub struct TestApp {
    pub config: Config,
    pub mailer: Arc<InMemoryMailer>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, NudgeSDK, String) {
    let mut ctx = NudgeContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.dispatch_interval = Duration::from_secs(1);
    let mailer = Arc::new(InMemoryMailer::new());
    ctx.mailer = mailer.clone();

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config, mailer };
    let sdk = NudgeSDK::new(address.clone());
    (app, sdk, address)
}
