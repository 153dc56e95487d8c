//! Pure domain logic for the trip planner.
//!
//! Nothing in this crate performs I/O: persistence lives in `tripgenie-db`,
//! the upstream text-generation client in `tripgenie-gemini`.

pub mod error;
pub mod generation;
pub mod materialize;
pub mod pagination;
pub mod types;
