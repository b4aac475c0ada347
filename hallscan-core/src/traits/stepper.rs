//! Stepper motor driver trait
//!
//! Abstracts a step/direction/enable driver (A4988, DRV8825, TMC in
//! standalone mode). Timing between steps belongs to the caller.

/// Travel direction along the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward increasing positions
    Forward,
    /// Toward decreasing positions
    Backward,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Position change produced by one micro-step
    pub fn delta(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Trait for step/direction stepper drivers
pub trait StepperDriver {
    /// Set the rotation direction for subsequent steps
    fn set_direction(&mut self, dir: Direction);

    /// Emit exactly one micro-step pulse
    fn step(&mut self);

    /// Enable or disable the driver outputs
    ///
    /// When disabled, the motor is free to rotate and does not hold position.
    fn enable(&mut self, enabled: bool);
}
