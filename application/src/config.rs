//! Application-level game configuration

use std::time::Duration;

/// Parameters controlling a quiz round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Countdown period for one round, in seconds
    pub timer_period_seconds: i64,
    /// Cadence of the countdown ticks
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timer_period_seconds: 300,
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl GameConfig {
    /// Override the countdown period
    pub fn with_timer_period_seconds(mut self, seconds: i64) -> Self {
        self.timer_period_seconds = seconds;
        self
    }

    /// Override the tick cadence
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.timer_period_seconds, 300);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_builder_overrides() {
        let config = GameConfig::default()
            .with_timer_period_seconds(60)
            .with_tick_interval(Duration::from_millis(500));
        assert_eq!(config.timer_period_seconds, 60);
        assert_eq!(config.tick_interval, Duration::from_millis(500));
    }
}
