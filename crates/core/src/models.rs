pub mod personal_training;
pub mod training_session;
pub mod user;
