//! Board-agnostic core logic for the scanner firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (stepper, Hall reference, analog sensor, host link)
//! - Build-time configuration types and their validation
//! - Motion control (homing, bounded absolute stepping)
//! - The sampling sweep
//! - State machine and the scan controller that sequences everything

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod motion;
pub mod sampling;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use config::{HomingConfig, MotionTiming, ScannerConfig, TravelConfig};
pub use controller::{Cycle, ScanController, Startup};
pub use error::{ConfigError, ScanError};
pub use motion::{MotionController, MotorState};
pub use sampling::{ReadingSequence, SamplingEngine, TargetPositions};
