//! Service layer
//!
//! Side effects the poll loop depends on: delivering notifications and
//! telling time. Both are trait-based so tests can run many cycles
//! without a network or a wall clock.

mod clock;
mod notifier;

// Re-export traits
pub use clock::Clock;
pub use notifier::Notifier;

// Re-export implementations
pub use clock::SystemClock;
pub use notifier::TelegramNotifier;
