/// Liveness and version endpoints
pub mod health;
/// Personal training booking endpoints
pub mod personal_training;
/// Trainer directory endpoints
pub mod trainer;
