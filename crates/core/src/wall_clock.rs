//! Wall-clock times of day as stored for group sessions and personal bookings.
//!
//! Times travel through the API and the database as `"HH:MM"` strings. Inside
//! the domain they are minutes since midnight, which is what the buffer rules
//! compare.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::GymError;

const MINUTES_PER_HOUR: u32 = 60;

/// A time of day with minute precision, always within `00:00..=23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WallClock(u16);

impl WallClock {
    pub fn from_hm(hours: u32, minutes: u32) -> Option<Self> {
        if hours >= 24 || minutes >= MINUTES_PER_HOUR {
            return None;
        }
        Some(WallClock((hours * MINUTES_PER_HOUR + minutes) as u16))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> i32 {
        i32::from(self.0)
    }

    pub fn hours(self) -> u32 {
        u32::from(self.0) / MINUTES_PER_HOUR
    }

    pub fn minute_of_hour(self) -> u32 {
        u32::from(self.0) % MINUTES_PER_HOUR
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minute_of_hour())
    }
}

impl FromStr for WallClock {
    type Err = GymError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || GymError::Validation(format!("Invalid time '{}', expected HH:MM", value));

        let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        if !all_digits(hours) || hours.len() > 2 || !all_digits(minutes) || minutes.len() != 2 {
            return Err(invalid());
        }

        let hours: u32 = hours.parse().map_err(|_| invalid())?;
        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;

        WallClock::from_hm(hours, minutes).ok_or_else(invalid)
    }
}

impl TryFrom<String> for WallClock {
    type Error = GymError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WallClock> for String {
    fn from(value: WallClock) -> Self {
        value.to_string()
    }
}
