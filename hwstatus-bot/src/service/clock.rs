//! Clock service

use async_trait::async_trait;
use std::time::Duration;

/// Source of the current time and of the pause between cycles
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current Unix time in seconds
    fn now(&self) -> i64;

    /// Waits for `period`
    async fn sleep(&self, period: Duration);
}

/// Wall clock backed by the tokio timer
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }

    async fn sleep(&self, period: Duration) {
        tokio::time::sleep(period).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_now_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now() > 1_577_836_800);
    }

    #[tokio::test(start_paused = true)]
    async fn test_system_clock_sleep_uses_tokio_timer() {
        let start = tokio::time::Instant::now();
        SystemClock.sleep(Duration::from_secs(600)).await;
        assert!(start.elapsed() >= Duration::from_secs(600));
    }
}
