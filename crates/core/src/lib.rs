//! # GymFlow Core
//!
//! Domain types shared by the database layer and the HTTP API: wall-clock
//! times, bookings, group sessions, the error type, and the availability rules
//! that guard personal-training bookings.

pub mod availability;
pub mod errors;
pub mod models;
pub mod wall_clock;
