//! Stepper motor drivers

pub mod gpio;

pub use gpio::{GpioStepper, GpioStepperConfig};
