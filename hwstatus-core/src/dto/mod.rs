//! Data Transfer Objects
//!
//! The status API answers with loosely typed JSON. The functions here check
//! its shape before any record is interpreted.

pub mod statuses;
