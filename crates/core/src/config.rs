//! Poller configuration with the tunable ranges the original tooling exposed.
use std::env;
use std::time::Duration;

use thiserror::Error;

/// Errors produced while validating configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "change interval {actual_ms} ms outside allowed range {min_ms}..={max_ms} ms",
        actual_ms = .0.as_millis(),
        min_ms = PollConfig::MIN_INTERVAL.as_millis(),
        max_ms = PollConfig::MAX_INTERVAL.as_millis()
    )]
    IntervalOutOfRange(Duration),
}

/// How often the watch list is rescanned.
///
/// The interval is wall-clock time, unaffected by any host time scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollConfig {
    pub change_interval: Duration,
}

impl PollConfig {
    /// Shortest supported delay between change checks.
    pub const MIN_INTERVAL: Duration = Duration::from_millis(10);
    /// Longest supported delay between change checks.
    pub const MAX_INTERVAL: Duration = Duration::from_millis(2500);
    /// Default delay between change checks.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(250);

    /// Validating constructor; rejects intervals outside the supported range.
    pub fn new(change_interval: Duration) -> Result<Self, ConfigError> {
        if change_interval < Self::MIN_INTERVAL || change_interval > Self::MAX_INTERVAL {
            return Err(ConfigError::IntervalOutOfRange(change_interval));
        }
        Ok(Self { change_interval })
    }

    /// Saturating constructor; out-of-range intervals snap to the nearest
    /// bound.
    pub fn clamped(change_interval: Duration) -> Self {
        Self {
            change_interval: change_interval.clamp(Self::MIN_INTERVAL, Self::MAX_INTERVAL),
        }
    }

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CURSOR_CHANGE_INTERVAL_MS` - Delay between change checks in
    ///   milliseconds (default: 250, clamped to the supported range)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("CURSOR_CHANGE_INTERVAL_MS") {
            config = Self::clamped(Duration::from_millis(ms));
        }

        config
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            change_interval: Self::DEFAULT_INTERVAL,
        }
    }
}

/// Configuration for the device-aware poller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    pub poll: PollConfig,
    /// Time to wait before polling begins, so the cursor does not flash while
    /// a scene is still loading.
    pub startup_delay: Duration,
    /// Identifier handed to the controller source when querying the last
    /// active device.
    pub player_id: String,
}

impl DeviceConfig {
    pub const DEFAULT_STARTUP_DELAY: Duration = Duration::from_secs(2);
    pub const DEFAULT_PLAYER_ID: &'static str = "DefaultPlayer";

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CURSOR_CHANGE_INTERVAL_MS` - see [`PollConfig::from_env`]
    /// - `CURSOR_STARTUP_DELAY_MS` - Delay before polling begins (default: 2000)
    /// - `CURSOR_PLAYER_ID` - Player identifier (default: "DefaultPlayer")
    pub fn from_env() -> Self {
        let mut config = Self {
            poll: PollConfig::from_env(),
            ..Self::default()
        };

        if let Some(ms) = read_env::<u64>("CURSOR_STARTUP_DELAY_MS") {
            config.startup_delay = Duration::from_millis(ms);
        }
        if let Ok(player_id) = env::var("CURSOR_PLAYER_ID") {
            config.player_id = player_id;
        }

        config
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            poll: PollConfig::default(),
            startup_delay: Self::DEFAULT_STARTUP_DELAY,
            player_id: Self::DEFAULT_PLAYER_ID.to_string(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_in_range_intervals() {
        let config = PollConfig::new(Duration::from_millis(500)).unwrap();
        assert_eq!(config.change_interval, Duration::from_millis(500));

        assert!(PollConfig::new(PollConfig::MIN_INTERVAL).is_ok());
        assert!(PollConfig::new(PollConfig::MAX_INTERVAL).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range_intervals() {
        assert_eq!(
            PollConfig::new(Duration::from_millis(5)),
            Err(ConfigError::IntervalOutOfRange(Duration::from_millis(5)))
        );
        assert!(PollConfig::new(Duration::from_secs(10)).is_err());
    }

    #[test]
    fn clamped_snaps_to_bounds() {
        assert_eq!(
            PollConfig::clamped(Duration::ZERO).change_interval,
            PollConfig::MIN_INTERVAL
        );
        assert_eq!(
            PollConfig::clamped(Duration::from_secs(60)).change_interval,
            PollConfig::MAX_INTERVAL
        );
    }

    #[test]
    fn device_defaults_match_original_tuning() {
        let config = DeviceConfig::default();
        assert_eq!(config.poll.change_interval, Duration::from_millis(250));
        assert_eq!(config.startup_delay, Duration::from_secs(2));
        assert_eq!(config.player_id, "DefaultPlayer");
    }
}
