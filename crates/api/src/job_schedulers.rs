use crate::{
    reminder::send_due_reminders::SendDueRemindersUseCase,
    shared::usecase::execute,
};
use nudge_infra::NudgeContext;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::info;

/// Time left until the next multiple of `interval_millis` on the wall clock
pub fn get_start_delay(now_ts: i64, interval_millis: i64) -> Duration {
    let millis_into_interval = now_ts.rem_euclid(interval_millis);
    if millis_into_interval == 0 {
        Duration::from_millis(0)
    } else {
        Duration::from_millis((interval_millis - millis_into_interval) as u64)
    }
}

pub fn start_send_reminders_job(ctx: NudgeContext) {
    actix_web::rt::spawn(async move {
        let period = ctx.config.dispatch_interval;
        let now = ctx.sys.get_timestamp_millis();
        let start = Instant::now() + get_start_delay(now, period.as_millis() as i64);
        info!(
            "Sending due reminders every {} seconds",
            period.as_secs_f64()
        );

        let mut dispatch_interval = interval_at(start, period);
        // A slow tick pushes the following ones back instead of making them burst
        dispatch_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            dispatch_interval.tick().await;
            // Awaited in place so that two ticks never run at the same time
            let _ = execute(SendDueRemindersUseCase {}, &ctx).await;
        }
    });
}
