//! Step/direction/enable stepper on plain GPIO
//!
//! Works with A4988, DRV8825, and TMC drivers in standalone mode. One call
//! to [`step`](StepperDriver::step) raises STEP, holds it for the pulse
//! width, and lowers it again.

use embedded_hal::delay::DelayNs;
use hallscan_core::traits::{Direction, StepperDriver};
use hallscan_hal::OutputPin;

/// GPIO stepper configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioStepperConfig {
    /// STEP high time in microseconds
    pub pulse_width_us: u32,
    /// Enable input is active low (A4988/DRV8825 `EN`)
    pub enable_active_low: bool,
    /// Swap the DIR level for a motor wired the other way round
    pub invert_direction: bool,
}

impl Default for GpioStepperConfig {
    fn default() -> Self {
        Self {
            pulse_width_us: 2,
            enable_active_low: true,
            invert_direction: false,
        }
    }
}

/// Stepper driven by three output pins
pub struct GpioStepper<DIR, STEP, EN, D> {
    dir: DIR,
    step: STEP,
    enable: EN,
    delay: D,
    config: GpioStepperConfig,
}

impl<DIR, STEP, EN, D> GpioStepper<DIR, STEP, EN, D>
where
    DIR: OutputPin,
    STEP: OutputPin,
    EN: OutputPin,
    D: DelayNs,
{
    /// Create a new stepper, outputs disabled and STEP low
    pub fn new(dir: DIR, step: STEP, enable: EN, delay: D, config: GpioStepperConfig) -> Self {
        let mut stepper = Self {
            dir,
            step,
            enable,
            delay,
            config,
        };
        stepper.step.set_low();
        stepper.enable(false);
        stepper
    }
}

impl<DIR, STEP, EN, D> StepperDriver for GpioStepper<DIR, STEP, EN, D>
where
    DIR: OutputPin,
    STEP: OutputPin,
    EN: OutputPin,
    D: DelayNs,
{
    fn set_direction(&mut self, dir: Direction) {
        let high = (dir == Direction::Backward) != self.config.invert_direction;
        self.dir.set_level(high);
    }

    fn step(&mut self) {
        self.step.set_high();
        self.delay.delay_us(self.config.pulse_width_us);
        self.step.set_low();
    }

    fn enable(&mut self, enabled: bool) {
        self.enable.set_level(enabled != self.config.enable_active_low);
    }
}
