//! Motion controller
//!
//! Owns the stepper, the Hall reference, and the motor state. Nothing else
//! writes the position counter.
//!
//! Every wait is bounded: homing by its step budget, each micro-step by the
//! fixed step interval.

use embedded_hal::delay::DelayNs;

use crate::config::{HomingConfig, MotionTiming, ScannerConfig, TravelConfig};
use crate::error::ScanError;
use crate::traits::{Direction, ReferenceSensor, StepperDriver};

use super::state::MotorState;

/// Homing and bounded stepping for a single axis
pub struct MotionController<S, R, D> {
    stepper: S,
    reference: R,
    delay: D,
    travel: TravelConfig,
    homing: HomingConfig,
    timing: MotionTiming,
    state: MotorState,
    homed: bool,
}

impl<S, R, D> MotionController<S, R, D>
where
    S: StepperDriver,
    R: ReferenceSensor,
    D: DelayNs,
{
    /// Create a controller with the motor disabled and unhomed
    pub fn new(mut stepper: S, reference: R, delay: D, config: &ScannerConfig) -> Self {
        let state = MotorState::default();
        stepper.enable(false);
        stepper.set_direction(state.direction);

        Self {
            stepper,
            reference,
            delay,
            travel: config.travel,
            homing: config.homing,
            timing: config.timing,
            state,
            homed: false,
        }
    }

    /// Snapshot of the motor state
    pub fn state(&self) -> MotorState {
        self.state
    }

    /// Current position in micro-steps
    pub fn position(&self) -> i32 {
        self.state.position
    }

    /// Check if a homing reference has been established
    pub fn is_homed(&self) -> bool {
        self.homed
    }

    /// Check if the driver outputs are enabled
    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    /// Sweep geometry
    pub fn travel(&self) -> &TravelConfig {
        &self.travel
    }

    /// Establish the origin using the Hall reference
    ///
    /// Searches in the configured direction, polling the reference before the
    /// first micro-step and after every one. On trigger the position becomes
    /// 0. If the step budget runs out, fails with
    /// [`ScanError::HomingTimeout`] and leaves the motor disabled.
    ///
    /// Returns the number of micro-steps taken.
    pub fn home(&mut self) -> Result<u32, ScanError> {
        self.homed = false;
        self.set_enabled(true);
        self.set_direction(self.homing.search_direction);

        let mut steps = 0;
        loop {
            match self.reference.is_triggered() {
                Ok(true) => {
                    self.state.position = 0;
                    self.homed = true;
                    return Ok(steps);
                }
                Ok(false) => {}
                Err(_) => {
                    self.set_enabled(false);
                    return Err(ScanError::SensorFault);
                }
            }

            if steps == self.homing.max_steps {
                self.set_enabled(false);
                return Err(ScanError::HomingTimeout);
            }

            self.pulse();
            steps += 1;
        }
    }

    /// Move to an absolute position one micro-step at a time
    ///
    /// The target must lie in `[0, travel_range_steps)`; it is never clamped.
    /// On error the position is left unchanged.
    pub fn step_to(&mut self, target: i32) -> Result<(), ScanError> {
        if !self.travel.contains(target) {
            return Err(ScanError::OutOfRange);
        }
        if !self.homed {
            return Err(ScanError::NotHomed);
        }

        let delta = target - self.state.position;
        if delta == 0 {
            return Ok(());
        }

        if !self.state.enabled {
            self.set_enabled(true);
        }

        let direction = if delta > 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.set_direction(direction);

        for _ in 0..delta.unsigned_abs() {
            self.pulse();
            self.state.position += direction.delta();
        }

        Ok(())
    }

    /// Step back to position 0
    pub fn return_to_origin(&mut self) -> Result<(), ScanError> {
        self.step_to(0)
    }

    fn pulse(&mut self) {
        self.stepper.step();
        self.delay.delay_us(self.timing.step_interval_us);
    }

    fn set_direction(&mut self, direction: Direction) {
        if self.state.direction != direction {
            self.stepper.set_direction(direction);
            self.state.direction = direction;
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.stepper.enable(enabled);
        self.state.enabled = enabled;
    }
}
