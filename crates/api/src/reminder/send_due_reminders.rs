use crate::shared::usecase::UseCase;
use nudge_domain::{Reminder, ID};
use nudge_infra::{MailerError, NudgeContext};
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, error, info};

/// Sends every `Reminder` that is due and marks it as sent afterwards.
///
/// A `Reminder` is only marked as sent once the mail transport has accepted
/// the email. Any failure leaves it pending so that it is picked up again by
/// the next tick, there is no other retry mechanism. If the process dies after
/// the email was sent but before the `Reminder` was marked, the email is sent
/// a second time after a restart: delivery is at least once.
#[derive(Debug)]
pub struct SendDueRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[derive(Debug, Error)]
pub enum DispatchFailure {
    #[error("Unable to send the reminder email: {0}")]
    Send(#[from] MailerError),
    #[error("Sending the reminder email timed out")]
    SendTimeout,
    #[error("Unable to mark the reminder as sent: {0}")]
    MarkSent(anyhow::Error),
    #[error("Marking the reminder as sent timed out")]
    MarkSentTimeout,
}

/// Outcome of a single dispatch tick
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub sent: Vec<ID>,
    pub failed: Vec<(ID, DispatchFailure)>,
}

async fn dispatch(reminder: &Reminder, ctx: &NudgeContext) -> Result<(), DispatchFailure> {
    timeout(
        ctx.config.mail_timeout,
        ctx.mailer.send(
            &reminder.email,
            &ctx.config.reminder_subject,
            &reminder.message,
        ),
    )
    .await
    .map_err(|_| DispatchFailure::SendTimeout)??;

    timeout(
        ctx.config.store_timeout,
        ctx.repos.reminders.mark_sent(&reminder.id),
    )
    .await
    .map_err(|_| DispatchFailure::MarkSentTimeout)?
    .map_err(DispatchFailure::MarkSent)
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueRemindersUseCase {
    type Response = DispatchReport;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SendDueReminders";

    /// This will run every dispatch interval
    async fn execute(&mut self, ctx: &NudgeContext) -> Result<Self::Response, Self::Errors> {
        // Single cutoff for the whole tick
        let now = ctx.sys.get_timestamp_millis();

        let due_reminders =
            match timeout(ctx.config.store_timeout, ctx.repos.reminders.find_due(now)).await {
                Ok(Ok(reminders)) => reminders,
                Ok(Err(e)) => {
                    error!("Unable to look up due reminders: {:?}", e);
                    return Err(UseCaseErrors::StorageError);
                }
                Err(_) => {
                    error!("Looking up due reminders timed out");
                    return Err(UseCaseErrors::StorageError);
                }
            };

        let mut report = DispatchReport::default();
        for reminder in due_reminders {
            match dispatch(&reminder, ctx).await {
                Ok(()) => report.sent.push(reminder.id),
                Err(e) => {
                    error!("Failed to dispatch reminder: {}. Error: {}", reminder.id, e);
                    report.failed.push((reminder.id, e));
                }
            }
        }

        if report.sent.is_empty() && report.failed.is_empty() {
            debug!("No reminders were due at: {}", now);
        } else {
            info!(
                "Dispatched due reminders at: {}. Sent: {}, failed: {}",
                now,
                report.sent.len(),
                report.failed.len()
            );
        }

        Ok(report)
    }
}
