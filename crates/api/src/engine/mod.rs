//! Destination generation engine.
//!
//! Orchestrates trip lookup, the upstream candidate call and the atomic
//! batch insert behind small traits, so the whole flow can be driven by
//! in-memory fakes as well as by Postgres and the real upstream client.

pub mod generation;
