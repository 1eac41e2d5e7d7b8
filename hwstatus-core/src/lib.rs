//! Homework Status Core
//!
//! Core types shared by the status client and the notification bot.
//!
//! This crate contains:
//! - Domain types: recognized statuses, verdicts and the last-sent report
//! - DTOs: validation of the raw status API response
//! - Errors: the response error taxonomy and its kind discriminant

pub mod domain;
pub mod dto;
pub mod error;

pub use error::{ErrorKind, ResponseError};
