//! GPIO wrappers
//!
//! Thin newtypes over embassy-rp pins implementing the shared pin traits.

use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;

/// Push-pull digital output
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    /// Configure a pin as output, starting low
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self(Output::new(pin, Level::Low))
    }
}

impl hallscan_hal::OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input
pub struct RpInput<'d>(Input<'d>);

impl<'d> RpInput<'d> {
    /// Configure a pin as input with the given pull
    ///
    /// Open-collector Hall sensors need `Pull::Up`.
    pub fn new(pin: Peri<'d, impl Pin>, pull: Pull) -> Self {
        Self(Input::new(pin, pull))
    }
}

impl hallscan_hal::InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
