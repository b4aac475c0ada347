//! Compiled-in configuration
//!
//! `build.rs` validates `scanner.toml` and emits the constants included
//! below. Nothing here can change at runtime.

use hallscan_core::traits::Direction;
use hallscan_core::{HomingConfig, MotionTiming, ScannerConfig, TravelConfig};
use hallscan_drivers::sensor::HallTrigger;
use hallscan_drivers::stepper::GpioStepperConfig;
use hallscan_hal::UartConfig;

include!(concat!(env!("OUT_DIR"), "/scanner_config.rs"));

/// Sleep between idle polls while listening
pub const POLL_INTERVAL_MS: u64 = 5;

/// Scanner configuration from the compiled-in constants
pub fn scanner_config() -> ScannerConfig {
    ScannerConfig {
        travel: TravelConfig {
            travel_range_steps: TRAVEL_RANGE_STEPS,
            sample_count: SAMPLE_COUNT,
        },
        homing: HomingConfig {
            search_direction: HOMING_DIRECTION,
            max_steps: HOMING_MAX_STEPS,
        },
        timing: MotionTiming {
            step_interval_us: STEP_INTERVAL_US,
        },
        return_to_origin: RETURN_TO_ORIGIN,
    }
}

/// Stepper driver configuration
pub fn stepper_config() -> GpioStepperConfig {
    GpioStepperConfig {
        pulse_width_us: PULSE_WIDTH_US,
        ..Default::default()
    }
}

/// Host serial configuration
pub fn uart_config() -> UartConfig {
    UartConfig {
        baudrate: BAUDRATE,
        read_timeout_ms: READ_TIMEOUT_MS,
    }
}
