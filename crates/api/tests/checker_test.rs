mod test_utils;

use chrono::Utc;
use gymflow_api::{checker, middleware::auth::AuthUser};
use gymflow_core::{
    errors::GymError,
    models::{
        personal_training::{BookPersonalTrainingRequest, BookingStatus},
        user::Role,
    },
    wall_clock::WallClock,
};
use gymflow_db::{
    mock::MockBookingStore,
    models::{DbUser, NewPersonalTraining},
    BookingStore,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::test_utils::{day, TestContext};

fn caller(user: &DbUser) -> AuthUser {
    AuthUser {
        id: user.id,
        email: user.email.clone(),
        role: Role::User,
    }
}

fn request(trainer_id: i32, time: &str) -> BookPersonalTrainingRequest {
    BookPersonalTrainingRequest {
        trainer_id,
        date: day(),
        time: time.to_string(),
        message: None,
    }
}

fn trainer_row(id: i32) -> DbUser {
    DbUser {
        id,
        email: "trainer@gym.com".to_string(),
        first_name: "Adam".to_string(),
        last_name: "Nowak".to_string(),
        role: "TRAINER".to_string(),
        specialization: None,
        description: None,
        price_per_session: None,
        created_at: Utc::now(),
    }
}

#[rstest]
#[case("11:35", false)]
#[case("11:30", false)]
#[case("13:00", false)]
#[case("14:00", false)]
#[case("14:01", true)]
#[case("11:29", true)]
#[tokio::test]
async fn test_group_session_buffer(#[case] time: &str, #[case] accepted: bool) {
    let ctx = TestContext::new();
    let trainer = ctx.trainer("trainer@gym.com").await;
    let client = ctx.client("client@gym.com").await;
    ctx.group_session(trainer.id, "12:00", "13:30").await;

    let result =
        checker::book_personal_training(ctx.store.as_ref(), &caller(&client), request(trainer.id, time)).await;

    match result {
        Ok(booking) => {
            assert!(accepted, "{} should have been refused", time);
            assert_eq!(booking.time.to_string(), time);
        }
        Err(GymError::SchedulingConflict(message)) => {
            assert!(!accepted, "{} should have been accepted", time);
            assert!(message.contains("group session 12:00-13:30"), "{}", message);
        }
        Err(other) => panic!("unexpected error: {:?}", other),
    }
}

#[rstest]
#[case("09:29", false)]
#[case("08:31", false)]
#[case("10:00", false)]
#[case("10:29", false)]
#[case("09:30", true)]
#[case("08:30", true)]
#[case("10:30", true)]
#[tokio::test]
async fn test_personal_booking_buffer(#[case] time: &str, #[case] accepted: bool) {
    let ctx = TestContext::new();
    let trainer = ctx.trainer("trainer@gym.com").await;
    let client = ctx.client("client@gym.com").await;
    checker::book_personal_training(ctx.store.as_ref(), &caller(&client), request(trainer.id, "09:00"))
        .await
        .unwrap();

    let result =
        checker::book_personal_training(ctx.store.as_ref(), &caller(&client), request(trainer.id, time)).await;

    match result {
        Ok(_) => assert!(accepted, "{} should have been refused", time),
        Err(GymError::SchedulingConflict(message)) => {
            assert!(!accepted, "{} should have been accepted", time);
            assert_eq!(message, "Trainer already has a personal session at 09:00");
        }
        Err(other) => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_session_must_end_by_closing_time() {
    let ctx = TestContext::new();
    let trainer = ctx.trainer("trainer@gym.com").await;
    let client = ctx.client("client@gym.com").await;

    let late =
        checker::book_personal_training(ctx.store.as_ref(), &caller(&client), request(trainer.id, "21:30")).await;
    assert!(matches!(late, Err(GymError::InvalidTimeWindow(_))));

    let last =
        checker::book_personal_training(ctx.store.as_ref(), &caller(&client), request(trainer.id, "21:00")).await;
    assert_eq!(last.unwrap().time, WallClock::from_hm(21, 0).unwrap());
}

#[tokio::test]
async fn test_closing_time_is_checked_before_trainer_lookup() {
    let ctx = TestContext::new();
    let client = ctx.client("client@gym.com").await;

    let result =
        checker::book_personal_training(ctx.store.as_ref(), &caller(&client), request(999, "21:45")).await;

    assert!(matches!(result, Err(GymError::InvalidTimeWindow(_))));
}

#[tokio::test]
async fn test_unknown_trainer_is_not_found() {
    let ctx = TestContext::new();
    let client = ctx.client("client@gym.com").await;

    let unknown =
        checker::book_personal_training(ctx.store.as_ref(), &caller(&client), request(999, "10:00")).await;
    match unknown {
        Err(GymError::NotFound(message)) => assert_eq!(message, "Trainer with ID 999 not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    // A regular user id is not a trainer id
    let not_trainer =
        checker::book_personal_training(ctx.store.as_ref(), &caller(&client), request(client.id, "10:00")).await;
    assert!(matches!(not_trainer, Err(GymError::NotFound(_))));
}

#[tokio::test]
async fn test_malformed_time_is_a_validation_error() {
    let ctx = TestContext::new();
    let trainer = ctx.trainer("trainer@gym.com").await;
    let client = ctx.client("client@gym.com").await;

    for time in ["25:00", "9", "nine", "10:5"] {
        let result =
            checker::book_personal_training(ctx.store.as_ref(), &caller(&client), request(trainer.id, time)).await;
        assert!(matches!(result, Err(GymError::Validation(_))), "{}", time);
    }
}

#[rstest]
#[case(BookingStatus::Cancelled)]
#[case(BookingStatus::Rejected)]
#[tokio::test]
async fn test_inactive_bookings_do_not_block(#[case] status: BookingStatus) {
    let ctx = TestContext::new();
    let trainer = ctx.trainer("trainer@gym.com").await;
    let client = ctx.client("client@gym.com").await;
    ctx.store
        .create_booking(NewPersonalTraining {
            trainer_id: trainer.id,
            client_id: client.id,
            date: day(),
            time: "09:00".parse().unwrap(),
            status,
            message: None,
        })
        .await
        .unwrap();

    let result =
        checker::book_personal_training(ctx.store.as_ref(), &caller(&client), request(trainer.id, "09:00")).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_created_booking_is_pending_for_the_caller() {
    let ctx = TestContext::new();
    let trainer = ctx.trainer("trainer@gym.com").await;
    let client = ctx.client("client@gym.com").await;

    let mut req = request(trainer.id, "10:00");
    req.message = Some("Knee rehab".to_string());
    let booking = checker::book_personal_training(ctx.store.as_ref(), &caller(&client), req)
        .await
        .unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.client_id, client.id);
    assert_eq!(booking.trainer_id, trainer.id);
    assert_eq!(booking.date, day());
    assert_eq!(booking.message.as_deref(), Some("Knee rehab"));
}

#[tokio::test]
async fn test_other_trainers_do_not_interfere() {
    let ctx = TestContext::new();
    let busy = ctx.trainer("busy@gym.com").await;
    let free = ctx.trainer("free@gym.com").await;
    let client = ctx.client("client@gym.com").await;
    ctx.group_session(busy.id, "12:00", "13:30").await;

    let result =
        checker::book_personal_training(ctx.store.as_ref(), &caller(&client), request(free.id, "12:00")).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_store_failure_is_a_database_error() {
    let mut store = MockBookingStore::new();
    store
        .expect_find_trainer()
        .returning(|_| Err(eyre::eyre!("connection refused")));
    store.expect_create_booking().never();

    let client = AuthUser {
        id: 2,
        email: "client@gym.com".to_string(),
        role: Role::User,
    };
    let result = checker::book_personal_training(&store, &client, request(1, "10:00")).await;

    assert!(matches!(result, Err(GymError::Database(_))));
}

#[tokio::test]
async fn test_conflict_never_reaches_insert() {
    let mut store = MockBookingStore::new();
    store
        .expect_find_trainer()
        .returning(|id| Ok(Some(trainer_row(id))));
    store.expect_sessions_for_trainer_on().returning(|_, _| Ok(vec![]));
    store
        .expect_bookings_for_trainer_on()
        .withf(|_, _, statuses| statuses.to_vec() == vec![BookingStatus::Pending, BookingStatus::Confirmed])
        .returning(|trainer_id, date, _| {
            Ok(vec![gymflow_db::models::DbPersonalTraining {
                id: 7,
                trainer_id,
                client_id: 3,
                date,
                time: "10:00".to_string(),
                status: "CONFIRMED".to_string(),
                message: None,
                created_at: Utc::now(),
            }])
        });
    store.expect_create_booking().never();

    let client = AuthUser {
        id: 2,
        email: "client@gym.com".to_string(),
        role: Role::User,
    };
    let result = checker::book_personal_training(&store, &client, request(1, "10:15")).await;

    assert!(matches!(result, Err(GymError::SchedulingConflict(_))));
}

#[tokio::test]
async fn test_free_hours_follow_booking_rules() {
    let ctx = TestContext::new();
    let trainer = ctx.trainer("trainer@gym.com").await;
    let client = ctx.client("client@gym.com").await;
    ctx.group_session(trainer.id, "12:00", "13:30").await;
    checker::book_personal_training(ctx.store.as_ref(), &caller(&client), request(trainer.id, "09:00"))
        .await
        .unwrap();

    let hours = checker::trainer_free_hours(ctx.store.as_ref(), trainer.id, day())
        .await
        .unwrap()
        .into_iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();

    assert_eq!(
        hours,
        vec![
            "06:00", "07:00", "08:00", "11:00", "15:00", "16:00", "17:00", "18:00", "19:00",
            "20:00", "21:00",
        ]
    );
}

#[tokio::test]
async fn test_free_hours_for_unknown_trainer() {
    let ctx = TestContext::new();

    let result = checker::trainer_free_hours(ctx.store.as_ref(), 42, day()).await;

    assert!(matches!(result, Err(GymError::NotFound(_))));
}
