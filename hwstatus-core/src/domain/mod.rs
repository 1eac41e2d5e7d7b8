//! Core domain types
//!
//! These types describe what the bot tracks (a homework and its review
//! status) and what it remembers between poll cycles (the last report).

pub mod homework;
pub mod report;
