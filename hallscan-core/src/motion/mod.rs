//! Motion control
//!
//! Homing against the Hall reference and bounded absolute stepping.

pub mod controller;
pub mod state;

pub use controller::MotionController;
pub use state::MotorState;
