//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod destination_repo;
pub mod trip_repo;

pub use destination_repo::DestinationRepo;
pub use trip_repo::TripRepo;
