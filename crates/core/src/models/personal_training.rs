use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{availability::BookedSlot, errors::GymError, wall_clock::WallClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Rejected,
}

/// Bookings in these states occupy the trainer's time.
pub const ACTIVE_STATUSES: [BookingStatus; 2] = [BookingStatus::Pending, BookingStatus::Confirmed];

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_active(self) -> bool {
        ACTIVE_STATUSES.contains(&self)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = GymError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PENDING" => Ok(BookingStatus::Pending),
            "CONFIRMED" => Ok(BookingStatus::Confirmed),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            "REJECTED" => Ok(BookingStatus::Rejected),
            other => Err(GymError::Validation(format!("Unknown booking status: {}", other))),
        }
    }
}

/// A one-on-one session between a client and a trainer, one hour long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalTraining {
    pub id: i32,
    pub trainer_id: i32,
    pub client_id: i32,
    pub date: NaiveDate,
    pub time: WallClock,
    pub status: BookingStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PersonalTraining {
    pub fn slot(&self) -> BookedSlot {
        BookedSlot {
            booking_id: self.id,
            time: self.time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPersonalTrainingRequest {
    pub trainer_id: i32,
    pub date: NaiveDate,
    /// Requested start, `"HH:MM"` in 24-hour format.
    pub time: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerContact {
    pub first_name: String,
    pub last_name: String,
    pub price_per_session: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A booking as seen by the client who made it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientBooking {
    #[serde(flatten)]
    pub booking: PersonalTraining,
    pub trainer: TrainerContact,
}

/// A booking as seen by the trainer who will run it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerBooking {
    #[serde(flatten)]
    pub booking: PersonalTraining,
    pub client: ClientContact,
}
