//! Simulated latency for stand-in external services.

use std::time::Duration;

/// Delay applied before a simulated external call returns.
///
/// The payment and notification collaborators stand in for slow external
/// systems. Each carries a `Latency` so production-like wiring can keep a
/// realistic delay while tests run with [`Latency::none`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency(Duration);

impl Latency {
    /// No delay. Calls return immediately.
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    /// Delay of `ms` milliseconds.
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// Returns the configured delay.
    pub fn duration(&self) -> Duration {
        self.0
    }

    /// Returns true if no delay is configured.
    pub fn is_none(&self) -> bool {
        self.0.is_zero()
    }

    /// Waits out the configured delay.
    pub async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_latency_is_none() {
        assert!(Latency::default().is_none());
        assert_eq!(Latency::default(), Latency::none());
    }

    #[test]
    fn from_millis_stores_duration() {
        let latency = Latency::from_millis(100);
        assert_eq!(latency.duration(), Duration::from_millis(100));
        assert!(!latency.is_none());
    }

    #[tokio::test]
    async fn wait_with_none_returns_immediately() {
        let start = std::time::Instant::now();
        Latency::none().wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn wait_sleeps_at_least_the_configured_delay() {
        let start = std::time::Instant::now();
        Latency::from_millis(20).wait().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
