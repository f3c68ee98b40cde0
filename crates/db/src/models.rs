use chrono::{DateTime, NaiveDate, Utc};
use eyre::{Result, WrapErr};
use gymflow_core::{
    models::{
        personal_training::{
            BookingStatus, ClientBooking, ClientContact, PersonalTraining, TrainerBooking,
            TrainerContact,
        },
        training_session::TrainingSession,
        user::{Role, TrainerSummary},
    },
    wall_clock::WallClock,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub specialization: Option<String>,
    pub description: Option<String>,
    pub price_per_session: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTrainingSession {
    pub id: i32,
    pub trainer_id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub max_participants: i32,
    pub is_recurring: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPersonalTraining {
    pub id: i32,
    pub trainer_id: i32,
    pub client_id: i32,
    pub date: NaiveDate,
    pub time: String,
    pub status: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Booking row joined with the trainer's public details.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClientBooking {
    #[sqlx(flatten)]
    pub booking: DbPersonalTraining,
    pub trainer_first_name: String,
    pub trainer_last_name: String,
    pub trainer_price_per_session: Option<f64>,
}

/// Booking row joined with the client's contact details.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTrainerBooking {
    #[sqlx(flatten)]
    pub booking: DbPersonalTraining,
    pub client_first_name: String,
    pub client_last_name: String,
    pub client_email: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub specialization: Option<String>,
    pub description: Option<String>,
    pub price_per_session: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NewTrainingSession {
    pub trainer_id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: WallClock,
    pub end_time: WallClock,
    pub max_participants: i32,
    pub is_recurring: bool,
}

#[derive(Debug, Clone)]
pub struct NewPersonalTraining {
    pub trainer_id: i32,
    pub client_id: i32,
    pub date: NaiveDate,
    pub time: WallClock,
    pub status: BookingStatus,
    pub message: Option<String>,
}

impl From<DbUser> for TrainerSummary {
    fn from(user: DbUser) -> Self {
        TrainerSummary {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            specialization: user.specialization,
            description: user.description,
            price_per_session: user.price_per_session,
        }
    }
}

impl TryFrom<DbTrainingSession> for TrainingSession {
    type Error = eyre::Report;

    fn try_from(row: DbTrainingSession) -> Result<Self> {
        let start_time = row
            .start_time
            .parse()
            .wrap_err_with(|| format!("Training session {} has an unreadable start time", row.id))?;
        let end_time = row
            .end_time
            .parse()
            .wrap_err_with(|| format!("Training session {} has an unreadable end time", row.id))?;

        Ok(TrainingSession {
            id: row.id,
            trainer_id: row.trainer_id,
            title: row.title,
            date: row.date,
            start_time,
            end_time,
            max_participants: row.max_participants,
            is_recurring: row.is_recurring,
        })
    }
}

impl TryFrom<DbPersonalTraining> for PersonalTraining {
    type Error = eyre::Report;

    fn try_from(row: DbPersonalTraining) -> Result<Self> {
        let time = row
            .time
            .parse()
            .wrap_err_with(|| format!("Personal training {} has an unreadable time", row.id))?;
        let status = row
            .status
            .parse()
            .wrap_err_with(|| format!("Personal training {} has an unreadable status", row.id))?;

        Ok(PersonalTraining {
            id: row.id,
            trainer_id: row.trainer_id,
            client_id: row.client_id,
            date: row.date,
            time,
            status,
            message: row.message,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<DbClientBooking> for ClientBooking {
    type Error = eyre::Report;

    fn try_from(row: DbClientBooking) -> Result<Self> {
        Ok(ClientBooking {
            booking: row.booking.try_into()?,
            trainer: TrainerContact {
                first_name: row.trainer_first_name,
                last_name: row.trainer_last_name,
                price_per_session: row.trainer_price_per_session,
            },
        })
    }
}

impl TryFrom<DbTrainerBooking> for TrainerBooking {
    type Error = eyre::Report;

    fn try_from(row: DbTrainerBooking) -> Result<Self> {
        Ok(TrainerBooking {
            booking: row.booking.try_into()?,
            client: ClientContact {
                first_name: row.client_first_name,
                last_name: row.client_last_name,
                email: row.client_email,
            },
        })
    }
}
