//! Collaborator traits
//!
//! These traits are the narrow interfaces between the scanner logic and the
//! hardware: set direction, pulse a step, read the Hall reference, read the
//! analog channel, and exchange bytes and lines with the host.

pub mod link;
pub mod sensor;
pub mod stepper;

pub use link::HostLink;
pub use sensor::{AnalogSensor, ReferenceSensor, SensorError};
pub use stepper::{Direction, StepperDriver};
