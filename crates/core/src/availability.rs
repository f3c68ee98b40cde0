//! # Trainer Availability Rules
//!
//! Decides whether a trainer can take a one-hour personal session at a given
//! time of day, given the trainer's other commitments on the same date.
//!
//! Three rules apply, in order:
//!
//! 1. The session must end by 22:00.
//! 2. The start time must keep a 30-minute buffer around every group session,
//!    checked as the closed ranges `[s - 30, e]` and `[s, e + 30]`.
//! 3. The start time must keep a 30-minute buffer around every active personal
//!    booking at `u`, checked as `|t - u| < 30` and `|t - (u + 60)| < 30`.
//!
//! The group rule is inclusive at its bounds while the personal rule is strict,
//! so a start exactly 30 minutes after a group session is refused and one
//! exactly 30 minutes after a personal booking's start is allowed.
//!
//! Everything here is pure. Loading the commitments is the caller's job.

use crate::{
    errors::{GymError, GymResult},
    wall_clock::WallClock,
};

/// Minimum gap in minutes kept around every commitment of a trainer.
pub const BUFFER_MINUTES: i32 = 30;

/// Implicit length of a personal training session.
pub const PERSONAL_SESSION_MINUTES: i32 = 60;

/// No personal session may end after this minute of the day (22:00).
pub const CLOSING_TIME_MINUTES: i32 = 22 * 60;

/// First and last full hour offered when listing a trainer's free hours. A
/// session starting at the last one ends exactly at closing time.
pub const FIRST_OFFERED_HOUR: u32 = 6;
pub const LAST_OFFERED_HOUR: u32 = 21;

/// The time window a group session occupies on its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupWindow {
    pub session_id: i32,
    pub start: WallClock,
    pub end: WallClock,
}

/// Start time of an active (pending or confirmed) personal booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedSlot {
    pub booking_id: i32,
    pub time: WallClock,
}

pub fn check_closing_time(requested: WallClock) -> GymResult<()> {
    if requested.minutes() + PERSONAL_SESSION_MINUTES > CLOSING_TIME_MINUTES {
        return Err(GymError::InvalidTimeWindow(format!(
            "A session starting at {} would end after 22:00",
            requested
        )));
    }
    Ok(())
}

pub fn check_group_sessions(requested: WallClock, sessions: &[GroupWindow]) -> GymResult<()> {
    let t = requested.minutes();

    for session in sessions {
        let s = session.start.minutes();
        let e = session.end.minutes();

        let near_start = (s - BUFFER_MINUTES..=e).contains(&t);
        let near_end = (s..=e + BUFFER_MINUTES).contains(&t);

        if near_start || near_end {
            return Err(GymError::SchedulingConflict(format!(
                "Trainer has a group session {}-{}; personal sessions need a {}-minute break around it",
                session.start, session.end, BUFFER_MINUTES
            )));
        }
    }

    Ok(())
}

pub fn check_personal_bookings(requested: WallClock, bookings: &[BookedSlot]) -> GymResult<()> {
    let t = requested.minutes();

    for booking in bookings {
        let u = booking.time.minutes();

        let near_start = (t - u).abs() < BUFFER_MINUTES;
        let near_end = (t - (u + PERSONAL_SESSION_MINUTES)).abs() < BUFFER_MINUTES;

        if near_start || near_end {
            return Err(GymError::SchedulingConflict(format!(
                "Trainer already has a personal session at {}",
                booking.time
            )));
        }
    }

    Ok(())
}

/// Runs every rule against `requested`, returning the first violation.
pub fn check_slot(
    requested: WallClock,
    sessions: &[GroupWindow],
    bookings: &[BookedSlot],
) -> GymResult<()> {
    check_closing_time(requested)?;
    check_group_sessions(requested, sessions)?;
    check_personal_bookings(requested, bookings)
}

/// Full hours between [`FIRST_OFFERED_HOUR`] and [`LAST_OFFERED_HOUR`] that
/// would pass [`check_slot`].
pub fn bookable_hours(sessions: &[GroupWindow], bookings: &[BookedSlot]) -> Vec<WallClock> {
    (FIRST_OFFERED_HOUR..=LAST_OFFERED_HOUR)
        .filter_map(|hour| WallClock::from_hm(hour, 0))
        .filter(|slot| check_slot(*slot, sessions, bookings).is_ok())
        .collect()
}
