/// Booking, listing and status changes for personal training
pub mod personal_training;
/// Trainer directory and free hours
pub mod trainer;
