use async_trait::async_trait;
use chrono::NaiveDate;
use gymflow_core::models::personal_training::BookingStatus;
use mockall::mock;

use crate::models::{
    DbClientBooking, DbPersonalTraining, DbTrainerBooking, DbTrainingSession, DbUser,
    NewPersonalTraining, NewTrainingSession, NewUser,
};
use crate::store::BookingStore;

// Mock store for testing
mock! {
    pub BookingStore {}

    #[async_trait]
    impl BookingStore for BookingStore {
        async fn find_trainer(&self, trainer_id: i32) -> eyre::Result<Option<DbUser>>;

        async fn list_trainers(&self) -> eyre::Result<Vec<DbUser>>;

        async fn create_user(&self, user: NewUser) -> eyre::Result<DbUser>;

        async fn create_training_session(
            &self,
            session: NewTrainingSession,
        ) -> eyre::Result<DbTrainingSession>;

        async fn sessions_for_trainer_on(
            &self,
            trainer_id: i32,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbTrainingSession>>;

        async fn bookings_for_trainer_on(
            &self,
            trainer_id: i32,
            date: NaiveDate,
            statuses: &[BookingStatus],
        ) -> eyre::Result<Vec<DbPersonalTraining>>;

        async fn create_booking(
            &self,
            booking: NewPersonalTraining,
        ) -> eyre::Result<DbPersonalTraining>;

        async fn get_booking(&self, id: i32) -> eyre::Result<Option<DbPersonalTraining>>;

        async fn update_booking_status(
            &self,
            id: i32,
            status: BookingStatus,
        ) -> eyre::Result<DbPersonalTraining>;

        async fn client_bookings(&self, client_id: i32) -> eyre::Result<Vec<DbClientBooking>>;

        async fn trainer_bookings(&self, trainer_id: i32) -> eyre::Result<Vec<DbTrainerBooking>>;
    }
}
