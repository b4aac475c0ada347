//! Configuration types
//!
//! All values are fixed when the firmware is built. The host cannot change
//! them at runtime.

pub mod types;

pub use types::{HomingConfig, MotionTiming, ScannerConfig, TravelConfig};
