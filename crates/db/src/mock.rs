//! Stand-ins for the Postgres store: an in-memory implementation with the same
//! filtering and ordering, and a `mockall` double for injecting failures.

pub mod memory;
pub mod repositories;

pub use memory::InMemoryBookingStore;
pub use repositories::MockBookingStore;
