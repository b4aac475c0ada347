//! Hall-effect position references
//!
//! Two wirings are common: a latching or switching sensor (A3144, US1881)
//! on a digital input, and a linear sensor (SS49E) on an ADC channel
//! compared against a threshold.

use hallscan_core::traits::{ReferenceSensor, SensorError};
use hallscan_hal::{AdcInput, InputPin};

/// Trigger condition for a Hall reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HallTrigger {
    /// Digital input reads low near the magnet (open-collector sensors)
    DigitalLow,
    /// Digital input reads high near the magnet
    DigitalHigh,
    /// Analog reading at or above the threshold
    AnalogAbove(u16),
    /// Analog reading at or below the threshold
    AnalogBelow(u16),
}

impl HallTrigger {
    /// Check if this trigger needs an ADC channel
    pub fn is_analog(&self) -> bool {
        matches!(self, HallTrigger::AnalogAbove(_) | HallTrigger::AnalogBelow(_))
    }
}

/// Switching Hall sensor on a digital input
pub struct DigitalHall<P> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> DigitalHall<P> {
    /// Create a reference that triggers on the given level
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }
}

impl<P: InputPin> ReferenceSensor for DigitalHall<P> {
    fn is_triggered(&mut self) -> Result<bool, SensorError> {
        let level = self.pin.is_high();
        Ok(level != self.active_low)
    }
}

/// Linear Hall sensor compared against a threshold
pub struct ThresholdHall<A> {
    adc: A,
    threshold: u16,
    above: bool,
}

impl<A: AdcInput> ThresholdHall<A> {
    /// Trigger when the raw reading is at or above `threshold`
    pub fn above(adc: A, threshold: u16) -> Self {
        Self {
            adc,
            threshold,
            above: true,
        }
    }

    /// Trigger when the raw reading is at or below `threshold`
    pub fn below(adc: A, threshold: u16) -> Self {
        Self {
            adc,
            threshold,
            above: false,
        }
    }
}

impl<A: AdcInput> ReferenceSensor for ThresholdHall<A> {
    fn is_triggered(&mut self) -> Result<bool, SensorError> {
        let raw = self
            .adc
            .read_raw()
            .map_err(|_| SensorError::ConversionFailed)?;

        Ok(if self.above {
            raw >= self.threshold
        } else {
            raw <= self.threshold
        })
    }
}

/// Hall reference chosen at bring-up from the configured trigger
pub enum HallReference<P, A> {
    Digital(DigitalHall<P>),
    Threshold(ThresholdHall<A>),
}

impl<P: InputPin, A: AdcInput> HallReference<P, A> {
    /// Reference on a digital input
    ///
    /// Returns `None` if `trigger` is an analog mode.
    pub fn digital(pin: P, trigger: HallTrigger) -> Option<Self> {
        match trigger {
            HallTrigger::DigitalLow => Some(Self::Digital(DigitalHall::new(pin, true))),
            HallTrigger::DigitalHigh => Some(Self::Digital(DigitalHall::new(pin, false))),
            _ => None,
        }
    }

    /// Reference on an ADC channel
    ///
    /// Returns `None` if `trigger` is a digital mode.
    pub fn analog(adc: A, trigger: HallTrigger) -> Option<Self> {
        match trigger {
            HallTrigger::AnalogAbove(threshold) => {
                Some(Self::Threshold(ThresholdHall::above(adc, threshold)))
            }
            HallTrigger::AnalogBelow(threshold) => {
                Some(Self::Threshold(ThresholdHall::below(adc, threshold)))
            }
            _ => None,
        }
    }
}

impl<P: InputPin, A: AdcInput> ReferenceSensor for HallReference<P, A> {
    fn is_triggered(&mut self) -> Result<bool, SensorError> {
        match self {
            HallReference::Digital(hall) => hall.is_triggered(),
            HallReference::Threshold(hall) => hall.is_triggered(),
        }
    }
}
