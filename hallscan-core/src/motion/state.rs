//! Motor state owned by the motion controller

use crate::traits::Direction;

/// Authoritative motor state
///
/// `position` is only meaningful once homing has succeeded. After any
/// completed operation it satisfies `0 <= position < travel_range_steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorState {
    /// Micro-steps from the origin
    pub position: i32,
    /// Direction of the last commanded step
    pub direction: Direction,
    /// Driver outputs enabled
    pub enabled: bool,
}

impl Default for MotorState {
    fn default() -> Self {
        Self {
            position: 0,
            direction: Direction::Forward,
            enabled: false,
        }
    }
}
