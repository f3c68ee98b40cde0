use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{availability::GroupWindow, wall_clock::WallClock};

/// A scheduled group class led by a trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub id: i32,
    pub trainer_id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: WallClock,
    pub end_time: WallClock,
    pub max_participants: i32,
    pub is_recurring: bool,
}

impl TrainingSession {
    pub fn window(&self) -> GroupWindow {
        GroupWindow {
            session_id: self.id,
            start: self.start_time,
            end: self.end_time,
        }
    }
}
