//! Scheduler layer for the bot
//!
//! This layer polls the status API on a fixed period, decides whether the
//! latest status is new and forwards it to the notifier.

pub mod poller;

pub use poller::StatusPoller;
