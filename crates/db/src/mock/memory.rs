use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use eyre::{eyre, Result};
use gymflow_core::models::{personal_training::BookingStatus, user::Role};
use tokio::sync::RwLock;

use crate::models::{
    DbClientBooking, DbPersonalTraining, DbTrainerBooking, DbTrainingSession, DbUser,
    NewPersonalTraining, NewTrainingSession, NewUser,
};
use crate::store::BookingStore;

#[derive(Default)]
struct Tables {
    users: Vec<DbUser>,
    sessions: Vec<DbTrainingSession>,
    bookings: Vec<DbPersonalTraining>,
}

impl Tables {
    fn user(&self, id: i32) -> Option<&DbUser> {
        self.users.iter().find(|user| user.id == id)
    }

    // Serial ids start at 1, like the Postgres sequences.
    fn next_id(len: usize) -> i32 {
        len as i32 + 1
    }
}

/// Store kept entirely in memory, mirroring the Postgres queries' filters,
/// ordering and foreign-key failures.
#[derive(Default)]
pub struct InMemoryBookingStore {
    tables: RwLock<Tables>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn find_trainer(&self, trainer_id: i32) -> Result<Option<DbUser>> {
        let tables = self.tables.read().await;
        Ok(tables
            .user(trainer_id)
            .filter(|user| user.role == Role::Trainer.as_str())
            .cloned())
    }

    async fn list_trainers(&self) -> Result<Vec<DbUser>> {
        let tables = self.tables.read().await;
        let mut trainers: Vec<DbUser> = tables
            .users
            .iter()
            .filter(|user| user.role == Role::Trainer.as_str())
            .cloned()
            .collect();
        trainers.sort_by_key(|user| user.id);
        Ok(trainers)
    }

    async fn create_user(&self, user: NewUser) -> Result<DbUser> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|existing| existing.email == user.email) {
            return Err(eyre!("User with email {} already exists", user.email));
        }

        let created = DbUser {
            id: Tables::next_id(tables.users.len()),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role.as_str().to_string(),
            specialization: user.specialization,
            description: user.description,
            price_per_session: user.price_per_session,
            created_at: Utc::now(),
        };
        tables.users.push(created.clone());
        Ok(created)
    }

    async fn create_training_session(&self, session: NewTrainingSession) -> Result<DbTrainingSession> {
        let mut tables = self.tables.write().await;
        if tables.user(session.trainer_id).is_none() {
            return Err(eyre!("User {} does not exist", session.trainer_id));
        }

        let created = DbTrainingSession {
            id: Tables::next_id(tables.sessions.len()),
            trainer_id: session.trainer_id,
            title: session.title,
            date: session.date,
            start_time: session.start_time.to_string(),
            end_time: session.end_time.to_string(),
            max_participants: session.max_participants,
            is_recurring: session.is_recurring,
            created_at: Utc::now(),
        };
        tables.sessions.push(created.clone());
        Ok(created)
    }

    async fn sessions_for_trainer_on(
        &self,
        trainer_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<DbTrainingSession>> {
        let tables = self.tables.read().await;
        let mut sessions: Vec<DbTrainingSession> = tables
            .sessions
            .iter()
            .filter(|session| session.trainer_id == trainer_id && session.date == date)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        Ok(sessions)
    }

    async fn bookings_for_trainer_on(
        &self,
        trainer_id: i32,
        date: NaiveDate,
        statuses: &[BookingStatus],
    ) -> Result<Vec<DbPersonalTraining>> {
        let tables = self.tables.read().await;
        let mut bookings: Vec<DbPersonalTraining> = tables
            .bookings
            .iter()
            .filter(|booking| booking.trainer_id == trainer_id && booking.date == date)
            .filter(|booking| statuses.iter().any(|status| status.as_str() == booking.status))
            .cloned()
            .collect();
        bookings.sort_by(|a, b| a.time.cmp(&b.time));
        Ok(bookings)
    }

    async fn create_booking(&self, booking: NewPersonalTraining) -> Result<DbPersonalTraining> {
        let mut tables = self.tables.write().await;
        for user_id in [booking.trainer_id, booking.client_id] {
            if tables.user(user_id).is_none() {
                return Err(eyre!("User {} does not exist", user_id));
            }
        }

        let created = DbPersonalTraining {
            id: Tables::next_id(tables.bookings.len()),
            trainer_id: booking.trainer_id,
            client_id: booking.client_id,
            date: booking.date,
            time: booking.time.to_string(),
            status: booking.status.as_str().to_string(),
            message: booking.message,
            created_at: Utc::now(),
        };
        tables.bookings.push(created.clone());
        Ok(created)
    }

    async fn get_booking(&self, id: i32) -> Result<Option<DbPersonalTraining>> {
        let tables = self.tables.read().await;
        Ok(tables.bookings.iter().find(|booking| booking.id == id).cloned())
    }

    async fn update_booking_status(&self, id: i32, status: BookingStatus) -> Result<DbPersonalTraining> {
        let mut tables = self.tables.write().await;
        let booking = tables
            .bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or_else(|| eyre!("Personal training {} not found", id))?;

        booking.status = status.as_str().to_string();
        Ok(booking.clone())
    }

    async fn client_bookings(&self, client_id: i32) -> Result<Vec<DbClientBooking>> {
        let tables = self.tables.read().await;
        let mut rows = Vec::new();
        for booking in tables.bookings.iter().filter(|b| b.client_id == client_id) {
            let Some(trainer) = tables.user(booking.trainer_id) else {
                continue;
            };
            rows.push(DbClientBooking {
                booking: booking.clone(),
                trainer_first_name: trainer.first_name.clone(),
                trainer_last_name: trainer.last_name.clone(),
                trainer_price_per_session: trainer.price_per_session,
            });
        }
        rows.sort_by(|a, b| {
            (a.booking.date, &a.booking.time).cmp(&(b.booking.date, &b.booking.time))
        });
        Ok(rows)
    }

    async fn trainer_bookings(&self, trainer_id: i32) -> Result<Vec<DbTrainerBooking>> {
        let tables = self.tables.read().await;
        let mut rows = Vec::new();
        for booking in tables.bookings.iter().filter(|b| b.trainer_id == trainer_id) {
            let Some(client) = tables.user(booking.client_id) else {
                continue;
            };
            rows.push(DbTrainerBooking {
                booking: booking.clone(),
                client_first_name: client.first_name.clone(),
                client_last_name: client.last_name.clone(),
                client_email: client.email.clone(),
            });
        }
        rows.sort_by(|a, b| {
            (a.booking.date, &a.booking.time).cmp(&(b.booking.date, &b.booking.time))
        });
        Ok(rows)
    }
}
