//! Configuration for network generation and the dashboard heuristics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::BARCELONA_CENTER;

/// Default number of stations in a generated network.
const DEFAULT_STATION_COUNT: usize = 8;

/// Default capacity range (even values only are drawn from it).
const DEFAULT_MIN_CAPACITY: u32 = 16;
const DEFAULT_MAX_CAPACITY: u32 = 24;

/// Default waiting-queue length drawn for the forced stations. Interactive
/// increments may push past this up to `max_waiting + queue_overflow_slack`.
const DEFAULT_MAX_WAITING: u32 = 5;
const DEFAULT_QUEUE_OVERFLOW_SLACK: u32 = 5;

/// Bike-level fractions of capacity: "few bikes" and "critically empty".
const DEFAULT_LOW_BIKE_FRACTION: f64 = 0.25;
const DEFAULT_EMPTY_BIKE_FRACTION: f64 = 0.10;

/// Chance a normal station spawns in the critically-empty band, guaranteeing
/// some rebalancing-incentive candidates every run.
const DEFAULT_VERY_LOW_PROBABILITY: f64 = 0.2;

/// Surplus band (fraction of capacity) that triggers the take-a-bike bonus.
const DEFAULT_SURPLUS_MIN_FRACTION: f64 = 0.40;
const DEFAULT_SURPLUS_MAX_FRACTION: f64 = 0.50;

/// Uniform jitter applied to catalog coordinates for visual spread (degrees).
const DEFAULT_POSITION_JITTER_DEG: f64 = 0.0005;

/// Rejected configuration, reported at configuration time. Generation itself
/// is total over any validated configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid capacity range: min {min} > max {max}")]
    CapacityRange { min: u32, max: u32 },
    #[error("minimum capacity must be even, got {0}")]
    OddMinCapacity(u32),
    #[error("max waiting must be at least 1")]
    ZeroMaxWaiting,
    #[error("fraction `{name}` must be within [0, 1], got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },
    #[error("surplus band is inverted: [{min}, {max}]")]
    InvertedSurplusBand { min: f64, max: f64 },
}

/// Parameters for generating and presenting a station network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub station_count: usize,
    pub min_capacity: u32,
    pub max_capacity: u32,
    pub max_waiting: u32,
    pub queue_overflow_slack: u32,
    pub low_bike_fraction: f64,
    pub empty_bike_fraction: f64,
    pub very_low_probability: f64,
    pub surplus_min_fraction: f64,
    pub surplus_max_fraction: f64,
    pub position_jitter_deg: f64,
    /// Map center for display.
    pub center: (f64, f64),
    /// Seed for RNG (for reproducibility). If None, entropy is used.
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            station_count: DEFAULT_STATION_COUNT,
            min_capacity: DEFAULT_MIN_CAPACITY,
            max_capacity: DEFAULT_MAX_CAPACITY,
            max_waiting: DEFAULT_MAX_WAITING,
            queue_overflow_slack: DEFAULT_QUEUE_OVERFLOW_SLACK,
            low_bike_fraction: DEFAULT_LOW_BIKE_FRACTION,
            empty_bike_fraction: DEFAULT_EMPTY_BIKE_FRACTION,
            very_low_probability: DEFAULT_VERY_LOW_PROBABILITY,
            surplus_min_fraction: DEFAULT_SURPLUS_MIN_FRACTION,
            surplus_max_fraction: DEFAULT_SURPLUS_MAX_FRACTION,
            position_jitter_deg: DEFAULT_POSITION_JITTER_DEG,
            center: BARCELONA_CENTER,
            seed: None,
        }
    }
}

impl NetworkConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_station_count(mut self, count: usize) -> Self {
        self.station_count = count;
        self
    }

    pub fn with_capacity_range(mut self, min: u32, max: u32) -> Self {
        self.min_capacity = min;
        self.max_capacity = max;
        self
    }

    pub fn with_max_waiting(mut self, max_waiting: u32) -> Self {
        self.max_waiting = max_waiting;
        self
    }

    /// Ceiling applied when interactive clicks grow a waiting queue.
    pub fn queue_ceiling(&self) -> u32 {
        self.max_waiting + self.queue_overflow_slack
    }

    /// Reject misconfiguration up front so generation can stay total.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_capacity > self.max_capacity {
            return Err(ConfigError::CapacityRange {
                min: self.min_capacity,
                max: self.max_capacity,
            });
        }
        if self.min_capacity % 2 != 0 {
            return Err(ConfigError::OddMinCapacity(self.min_capacity));
        }
        if self.max_waiting == 0 {
            return Err(ConfigError::ZeroMaxWaiting);
        }
        for (name, value) in [
            ("low_bike_fraction", self.low_bike_fraction),
            ("empty_bike_fraction", self.empty_bike_fraction),
            ("very_low_probability", self.very_low_probability),
            ("surplus_min_fraction", self.surplus_min_fraction),
            ("surplus_max_fraction", self.surplus_max_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::FractionOutOfRange { name, value });
            }
        }
        if self.surplus_min_fraction > self.surplus_max_fraction {
            return Err(ConfigError::InvertedSurplusBand {
                min: self.surplus_min_fraction,
                max: self.surplus_max_fraction,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(NetworkConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_capacity_range() {
        let config = NetworkConfig::default().with_capacity_range(24, 16);
        assert_eq!(
            config.validate(),
            Err(ConfigError::CapacityRange { min: 24, max: 16 })
        );
    }

    #[test]
    fn rejects_odd_min_capacity() {
        let config = NetworkConfig::default().with_capacity_range(15, 24);
        assert_eq!(config.validate(), Err(ConfigError::OddMinCapacity(15)));
    }

    #[test]
    fn rejects_zero_max_waiting() {
        let config = NetworkConfig::default().with_max_waiting(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxWaiting));
    }

    #[test]
    fn rejects_fraction_out_of_range() {
        let mut config = NetworkConfig::default();
        config.low_bike_fraction = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FractionOutOfRange {
                name: "low_bike_fraction",
                ..
            })
        ));
    }

    #[test]
    fn rejects_inverted_surplus_band() {
        let mut config = NetworkConfig::default();
        config.surplus_min_fraction = 0.6;
        config.surplus_max_fraction = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedSurplusBand { .. })
        ));
    }

    #[test]
    fn queue_ceiling_adds_slack() {
        let config = NetworkConfig::default();
        assert_eq!(config.queue_ceiling(), 10);
    }
}
