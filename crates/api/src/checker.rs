//! # Availability Checker
//!
//! Accepts or refuses personal-training booking requests. The rules themselves
//! live in [`gymflow_core::availability`]; this module loads the trainer's day
//! from the [`BookingStore`] and persists the booking once every rule passes.
//!
//! ## Consistency
//!
//! The check and the insert are separate store calls with nothing held in
//! between. Two concurrent requests for overlapping slots with the same
//! trainer can both pass the check before either insert commits, and both
//! bookings will then exist. Nothing at this layer closes that window.

use chrono::NaiveDate;
use gymflow_core::{
    availability::{
        bookable_hours, check_closing_time, check_group_sessions, check_personal_bookings,
        BookedSlot, GroupWindow,
    },
    errors::{GymError, GymResult},
    models::{
        personal_training::{
            BookPersonalTrainingRequest, BookingStatus, PersonalTraining, ACTIVE_STATUSES,
        },
        training_session::TrainingSession,
    },
    wall_clock::WallClock,
};
use gymflow_db::{models::NewPersonalTraining, BookingStore};
use tracing::{debug, info};

use crate::middleware::auth::AuthUser;

/// Commitments of one trainer on one date, as the availability rules see them.
struct TrainerDay {
    sessions: Vec<GroupWindow>,
    bookings: Vec<BookedSlot>,
}

async fn load_trainer_day<S>(store: &S, trainer_id: i32, date: NaiveDate) -> GymResult<TrainerDay>
where
    S: BookingStore + ?Sized,
{
    let sessions = store
        .sessions_for_trainer_on(trainer_id, date)
        .await?
        .into_iter()
        .map(|row| TrainingSession::try_from(row).map(|session| session.window()))
        .collect::<eyre::Result<Vec<_>>>()?;

    let bookings = store
        .bookings_for_trainer_on(trainer_id, date, &ACTIVE_STATUSES)
        .await?
        .into_iter()
        .map(|row| PersonalTraining::try_from(row).map(|booking| booking.slot()))
        .collect::<eyre::Result<Vec<_>>>()?;

    debug!(
        trainer_id,
        %date,
        group_sessions = sessions.len(),
        personal_bookings = bookings.len(),
        "Loaded trainer day"
    );

    Ok(TrainerDay { sessions, bookings })
}

fn trainer_not_found(trainer_id: i32) -> GymError {
    GymError::NotFound(format!("Trainer with ID {} not found", trainer_id))
}

/// Validates a booking request for `caller` and stores it as `PENDING`.
///
/// # Errors
///
/// * `GymError::Validation` - `time` is not a valid `HH:MM` value
/// * `GymError::InvalidTimeWindow` - the session would end after 22:00
/// * `GymError::NotFound` - no trainer-role account with the given id
/// * `GymError::SchedulingConflict` - the slot breaks a buffer around a group
///   session or another active personal booking
/// * `GymError::Database` - the store failed
pub async fn book_personal_training<S>(
    store: &S,
    caller: &AuthUser,
    request: BookPersonalTrainingRequest,
) -> GymResult<PersonalTraining>
where
    S: BookingStore + ?Sized,
{
    let requested: WallClock = request.time.parse()?;
    check_closing_time(requested)?;

    let trainer = store
        .find_trainer(request.trainer_id)
        .await?
        .ok_or_else(|| trainer_not_found(request.trainer_id))?;

    let day = load_trainer_day(store, trainer.id, request.date).await?;
    check_group_sessions(requested, &day.sessions)?;
    check_personal_bookings(requested, &day.bookings)?;

    let created = store
        .create_booking(NewPersonalTraining {
            trainer_id: trainer.id,
            client_id: caller.id,
            date: request.date,
            time: requested,
            status: BookingStatus::Pending,
            message: request.message,
        })
        .await?;

    info!(
        booking_id = created.id,
        trainer_id = trainer.id,
        client_id = caller.id,
        date = %request.date,
        time = %requested,
        "Personal training booked"
    );

    Ok(PersonalTraining::try_from(created)?)
}

/// Full hours on `date` at which `book_personal_training` would accept a
/// request for this trainer.
pub async fn trainer_free_hours<S>(
    store: &S,
    trainer_id: i32,
    date: NaiveDate,
) -> GymResult<Vec<WallClock>>
where
    S: BookingStore + ?Sized,
{
    let trainer = store
        .find_trainer(trainer_id)
        .await?
        .ok_or_else(|| trainer_not_found(trainer_id))?;

    let day = load_trainer_day(store, trainer.id, date).await?;
    Ok(bookable_hours(&day.sessions, &day.bookings))
}
