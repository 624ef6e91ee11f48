mod helpers;

use chrono::{Duration, Utc};
use helpers::setup::spawn_app;
use nudge_sdk::{APIErrorVariant, CreateReminderInput, NudgeSDK, Reminder, ID};

fn reminder_input(email: &str, scheduled_in: Duration) -> CreateReminderInput {
    CreateReminderInput {
        email: email.into(),
        message: format!("Hello {}", email),
        scheduled_time: Utc::now() + scheduled_in,
    }
}

async fn wait_until_sent(sdk: &NudgeSDK, reminder_id: &ID) -> Reminder {
    for _ in 0..50 {
        let reminder = sdk
            .reminder
            .get(reminder_id)
            .await
            .expect("Expected to get reminder")
            .reminder;
        if reminder.sent {
            return reminder;
        }
        actix_web::rt::time::sleep(std::time::Duration::from_millis(200)).await;
    }
    panic!("Reminder: {} was never sent", reminder_id);
}

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk.status.check_health().await.expect("Expected to be up");
    assert!(res.server_timestamp > 0);
}

#[actix_web::test]
async fn test_create_and_get_reminder() {
    let (_, sdk, _) = spawn_app().await;
    let input = reminder_input("someone@example.com", Duration::hours(1));
    let scheduled_time = input.scheduled_time;

    let created = sdk
        .reminder
        .create(input)
        .await
        .expect("Expected to create reminder")
        .reminder;
    assert_eq!(created.email, "someone@example.com");
    assert_eq!(created.message, "Hello someone@example.com");
    assert_eq!(
        created.scheduled_time.timestamp_millis(),
        scheduled_time.timestamp_millis()
    );
    assert!(!created.sent);

    let fetched = sdk
        .reminder
        .get(&created.id)
        .await
        .expect("Expected to get reminder")
        .reminder;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_create_invalid_reminders() {
    let (_, sdk, _) = spawn_app().await;

    let res = sdk
        .reminder
        .create(reminder_input("not an email", Duration::hours(1)))
        .await;
    assert!(matches!(
        res,
        Err(ref e) if matches!(e.variant, APIErrorVariant::BadClientData)
    ));

    let mut input = reminder_input("someone@example.com", Duration::hours(1));
    input.message = "".into();
    let res = sdk.reminder.create(input).await;
    assert!(matches!(
        res,
        Err(ref e) if matches!(e.variant, APIErrorVariant::BadClientData)
    ));

    let reminders = sdk.reminder.list().await.expect("Expected to list").reminders;
    assert!(reminders.is_empty());
}

#[actix_web::test]
async fn test_get_unknown_reminder() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk.reminder.get(&ID::default()).await;
    assert!(matches!(
        res,
        Err(ref e) if matches!(e.variant, APIErrorVariant::NotFound)
    ));
}

#[actix_web::test]
async fn test_list_reminders_sorted_by_scheduled_time() {
    let (_, sdk, _) = spawn_app().await;
    for hours in [3, 1, 2].iter() {
        sdk.reminder
            .create(reminder_input("someone@example.com", Duration::hours(*hours)))
            .await
            .expect("Expected to create reminder");
    }

    let reminders = sdk.reminder.list().await.expect("Expected to list").reminders;
    assert_eq!(reminders.len(), 3);
    assert!(reminders[0].scheduled_time < reminders[1].scheduled_time);
    assert!(reminders[1].scheduled_time < reminders[2].scheduled_time);
}

#[actix_web::test]
async fn test_due_reminder_is_emailed_once() {
    let (app, sdk, _) = spawn_app().await;
    let created = sdk
        .reminder
        .create(reminder_input("someone@example.com", Duration::minutes(-1)))
        .await
        .expect("Expected to create reminder")
        .reminder;

    let sent = wait_until_sent(&sdk, &created.id).await;
    assert!(sent.sent);

    // Give the dispatcher a couple more ticks to make sure it is not sent again
    actix_web::rt::time::sleep(std::time::Duration::from_millis(2500)).await;
    let mails = app.mailer.sent_mails();
    assert_eq!(mails.len(), 1);
    assert_eq!(mails[0].to, "someone@example.com");
    assert_eq!(mails[0].subject, app.config.reminder_subject);
    assert_eq!(mails[0].body, "Hello someone@example.com");
}

#[actix_web::test]
async fn test_future_reminder_is_not_emailed() {
    let (app, sdk, _) = spawn_app().await;
    let created = sdk
        .reminder
        .create(reminder_input("someone@example.com", Duration::hours(1)))
        .await
        .expect("Expected to create reminder")
        .reminder;

    actix_web::rt::time::sleep(std::time::Duration::from_millis(2500)).await;

    let reminder = sdk
        .reminder
        .get(&created.id)
        .await
        .expect("Expected to get reminder")
        .reminder;
    assert!(!reminder.sent);
    assert!(app.mailer.sent_mails().is_empty());
}
