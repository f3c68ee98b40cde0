//! The booking store seam.
//!
//! Handlers and the availability checker never talk to Postgres directly; they
//! receive a `BookingStore` handle built once at startup. `PgBookingStore` is
//! the production implementation, `mock::memory::InMemoryBookingStore` and
//! `mock::repositories::MockBookingStore` stand in for it in tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use gymflow_core::models::personal_training::BookingStatus;

use crate::{
    models::{
        DbClientBooking, DbPersonalTraining, DbTrainerBooking, DbTrainingSession, DbUser,
        NewPersonalTraining, NewTrainingSession, NewUser,
    },
    repositories, DbPool,
};

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Looks up a user by id, returning it only if it has the trainer role.
    async fn find_trainer(&self, trainer_id: i32) -> Result<Option<DbUser>>;

    async fn list_trainers(&self) -> Result<Vec<DbUser>>;

    async fn create_user(&self, user: NewUser) -> Result<DbUser>;

    async fn create_training_session(&self, session: NewTrainingSession) -> Result<DbTrainingSession>;

    async fn sessions_for_trainer_on(
        &self,
        trainer_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<DbTrainingSession>>;

    async fn bookings_for_trainer_on(
        &self,
        trainer_id: i32,
        date: NaiveDate,
        statuses: &[BookingStatus],
    ) -> Result<Vec<DbPersonalTraining>>;

    async fn create_booking(&self, booking: NewPersonalTraining) -> Result<DbPersonalTraining>;

    async fn get_booking(&self, id: i32) -> Result<Option<DbPersonalTraining>>;

    async fn update_booking_status(&self, id: i32, status: BookingStatus) -> Result<DbPersonalTraining>;

    /// Bookings made by `client_id`, oldest date first.
    async fn client_bookings(&self, client_id: i32) -> Result<Vec<DbClientBooking>>;

    /// Bookings assigned to `trainer_id`, oldest date first.
    async fn trainer_bookings(&self, trainer_id: i32) -> Result<Vec<DbTrainerBooking>>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn find_trainer(&self, trainer_id: i32) -> Result<Option<DbUser>> {
        repositories::user::find_trainer_by_id(&self.pool, trainer_id).await
    }

    async fn list_trainers(&self) -> Result<Vec<DbUser>> {
        repositories::user::list_trainers(&self.pool).await
    }

    async fn create_user(&self, user: NewUser) -> Result<DbUser> {
        repositories::user::create_user(&self.pool, &user).await
    }

    async fn create_training_session(&self, session: NewTrainingSession) -> Result<DbTrainingSession> {
        repositories::training_session::create_training_session(&self.pool, &session).await
    }

    async fn sessions_for_trainer_on(
        &self,
        trainer_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<DbTrainingSession>> {
        repositories::training_session::get_sessions_for_trainer_on(&self.pool, trainer_id, date)
            .await
    }

    async fn bookings_for_trainer_on(
        &self,
        trainer_id: i32,
        date: NaiveDate,
        statuses: &[BookingStatus],
    ) -> Result<Vec<DbPersonalTraining>> {
        repositories::personal_training::get_bookings_for_trainer_on(
            &self.pool, trainer_id, date, statuses,
        )
        .await
    }

    async fn create_booking(&self, booking: NewPersonalTraining) -> Result<DbPersonalTraining> {
        repositories::personal_training::create_personal_training(&self.pool, &booking).await
    }

    async fn get_booking(&self, id: i32) -> Result<Option<DbPersonalTraining>> {
        repositories::personal_training::get_personal_training_by_id(&self.pool, id).await
    }

    async fn update_booking_status(&self, id: i32, status: BookingStatus) -> Result<DbPersonalTraining> {
        repositories::personal_training::update_personal_training_status(&self.pool, id, status)
            .await
    }

    async fn client_bookings(&self, client_id: i32) -> Result<Vec<DbClientBooking>> {
        repositories::personal_training::get_client_bookings(&self.pool, client_id).await
    }

    async fn trainer_bookings(&self, trainer_id: i32) -> Result<Vec<DbTrainerBooking>> {
        repositories::personal_training::get_trainer_bookings(&self.pool, trainer_id).await
    }
}
