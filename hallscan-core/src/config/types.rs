//! Configuration type definitions

use crate::error::ConfigError;
use crate::traits::Direction;

/// Micro-steps spanning 180 degrees at 1/16 micro-stepping
pub const DEFAULT_TRAVEL_RANGE_STEPS: u32 = 1600;

/// Readings per acquisition request
pub const DEFAULT_SAMPLE_COUNT: usize = 10;

/// Sweep geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravelConfig {
    /// Micro-steps spanning the full sweep
    pub travel_range_steps: u32,
    /// Fixed number of readings per request
    pub sample_count: usize,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            travel_range_steps: DEFAULT_TRAVEL_RANGE_STEPS,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl TravelConfig {
    /// Check the geometry is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.travel_range_steps == 0 {
            return Err(ConfigError::EmptyTravelRange);
        }
        if self.travel_range_steps > i32::MAX as u32 {
            return Err(ConfigError::TravelRangeTooLarge);
        }
        if self.sample_count == 0 {
            return Err(ConfigError::NoSamples);
        }
        if self.sample_count as u64 > u64::from(self.travel_range_steps) {
            return Err(ConfigError::TooManySamples);
        }
        Ok(())
    }

    /// Check if a position lies inside `[0, travel_range_steps)`
    pub fn contains(&self, position: i32) -> bool {
        position >= 0 && (position as u32) < self.travel_range_steps
    }
}

/// Reference search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HomingConfig {
    /// Direction to travel while looking for the Hall reference
    pub search_direction: Direction,
    /// Micro-steps allowed before homing gives up
    pub max_steps: u32,
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            search_direction: Direction::Backward,
            // One full revolution at 1/16 micro-stepping
            max_steps: 2 * DEFAULT_TRAVEL_RANGE_STEPS,
        }
    }
}

impl HomingConfig {
    /// Check the search is bounded and non-trivial
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::NoHomingBudget);
        }
        Ok(())
    }
}

/// Step timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionTiming {
    /// Wait after every micro-step, in microseconds
    pub step_interval_us: u32,
}

impl Default for MotionTiming {
    fn default() -> Self {
        Self {
            step_interval_us: 800,
        }
    }
}

/// Complete scanner configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScannerConfig {
    pub travel: TravelConfig,
    pub homing: HomingConfig,
    pub timing: MotionTiming,
    /// Step back to position 0 after every sweep
    pub return_to_origin: bool,
}

impl ScannerConfig {
    /// Default configuration with origin return enabled
    pub fn new() -> Self {
        Self {
            return_to_origin: true,
            ..Default::default()
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.travel.validate()?;
        self.homing.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_travel() {
        let travel = TravelConfig::default();
        assert_eq!(travel.travel_range_steps, 1600);
        assert_eq!(travel.sample_count, 10);
        assert!(travel.validate().is_ok());
    }

    #[test]
    fn test_travel_validation() {
        let empty = TravelConfig {
            travel_range_steps: 0,
            ..Default::default()
        };
        assert_eq!(empty.validate(), Err(ConfigError::EmptyTravelRange));

        let no_samples = TravelConfig {
            sample_count: 0,
            ..Default::default()
        };
        assert_eq!(no_samples.validate(), Err(ConfigError::NoSamples));

        let crowded = TravelConfig {
            travel_range_steps: 4,
            sample_count: 5,
        };
        assert_eq!(crowded.validate(), Err(ConfigError::TooManySamples));

        let huge = TravelConfig {
            travel_range_steps: u32::MAX,
            sample_count: 1,
        };
        assert_eq!(huge.validate(), Err(ConfigError::TravelRangeTooLarge));
    }

    #[test]
    fn test_contains() {
        let travel = TravelConfig::default();

        assert!(travel.contains(0));
        assert!(travel.contains(1599));
        assert!(!travel.contains(1600));
        assert!(!travel.contains(-1));
    }

    #[test]
    fn test_homing_validation() {
        assert!(HomingConfig::default().validate().is_ok());

        let unbounded = HomingConfig {
            max_steps: 0,
            ..Default::default()
        };
        assert_eq!(unbounded.validate(), Err(ConfigError::NoHomingBudget));
    }

    #[test]
    fn test_scanner_config_defaults() {
        let config = ScannerConfig::new();
        assert!(config.return_to_origin);
        assert_eq!(config.homing.search_direction, Direction::Backward);
        assert!(config.validate().is_ok());
    }
}
