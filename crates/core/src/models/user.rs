use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::GymError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Trainer,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Trainer => "TRAINER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = GymError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "USER" => Ok(Role::User),
            "TRAINER" => Ok(Role::Trainer),
            "ADMIN" => Ok(Role::Admin),
            other => Err(GymError::Validation(format!("Unknown role: {}", other))),
        }
    }
}

/// Public profile of a trainer, as listed to clients choosing whom to book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialization: Option<String>,
    pub description: Option<String>,
    pub price_per_session: Option<f64>,
}
