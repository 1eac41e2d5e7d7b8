//! Repository layer
//!
//! Repositories abstract communication with the status API behind a trait
//! so the poll loop can be driven by canned responses in tests.

mod statuses;

pub use statuses::{HttpStatusRepository, StatusRepository};
