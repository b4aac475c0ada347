//! Sensor drivers

pub mod analog;
pub mod hall;

pub use analog::AdcSensor;
pub use hall::{DigitalHall, HallReference, HallTrigger, ThresholdHall};
