//! Analog sensor channel
//!
//! Reads one ADC channel and rescales the raw value to the resolution the
//! host expects, so a 12-bit converter can stand in for a 10-bit one.

use hallscan_core::traits::{AnalogSensor, SensorError};
use hallscan_hal::AdcInput;

/// ADC-backed sensor with resolution scaling
pub struct AdcSensor<A> {
    adc: A,
    output_bits: u8,
}

impl<A: AdcInput> AdcSensor<A> {
    /// Create a sensor reporting `output_bits` of resolution
    ///
    /// Output resolution is capped at 16 bits.
    pub fn new(adc: A, output_bits: u8) -> Self {
        Self {
            adc,
            output_bits: output_bits.min(16),
        }
    }

    /// Scale a raw reading to the output resolution
    fn scale(&self, raw: u16) -> u16 {
        let native = self.adc.resolution_bits();
        if native >= self.output_bits {
            return raw >> (native - self.output_bits);
        }

        // Widening maps full scale onto full scale, rounding to nearest
        let native_max = u64::from(self.adc.max_raw());
        if native_max == 0 {
            return 0;
        }
        let output_max = (1u64 << self.output_bits) - 1;
        ((u64::from(raw) * output_max + native_max / 2) / native_max) as u16
    }
}

impl<A: AdcInput> AnalogSensor for AdcSensor<A> {
    fn read(&mut self) -> Result<u16, SensorError> {
        let raw = self
            .adc
            .read_raw()
            .map_err(|_| SensorError::ConversionFailed)?;
        Ok(self.scale(raw.min(self.adc.max_raw())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockAdc {
        bits: u8,
        value: Result<u16, ()>,
    }

    impl AdcInput for MockAdc {
        type Error = ();

        fn resolution_bits(&self) -> u8 {
            self.bits
        }

        fn read_raw(&mut self) -> Result<u16, ()> {
            self.value
        }
    }

    #[test]
    fn test_twelve_to_ten_bits() {
        let mut sensor = AdcSensor::new(MockAdc { bits: 12, value: Ok(4095) }, 10);
        assert_eq!(sensor.read(), Ok(1023));

        sensor.adc.value = Ok(2048);
        assert_eq!(sensor.read(), Ok(512));

        sensor.adc.value = Ok(0);
        assert_eq!(sensor.read(), Ok(0));
    }

    #[test]
    fn test_native_resolution_passthrough() {
        let mut sensor = AdcSensor::new(MockAdc { bits: 10, value: Ok(700) }, 10);
        assert_eq!(sensor.read(), Ok(700));
    }

    #[test]
    fn test_widening_keeps_full_scale() {
        let mut sensor = AdcSensor::new(MockAdc { bits: 10, value: Ok(1023) }, 12);
        assert_eq!(sensor.read(), Ok(4095));

        sensor.adc.value = Ok(0);
        assert_eq!(sensor.read(), Ok(0));
    }

    #[test]
    fn test_widening_far_past_native_width() {
        let mut sensor = AdcSensor::new(MockAdc { bits: 4, value: Ok(15) }, 16);
        assert_eq!(sensor.read(), Ok(65535));

        sensor.adc.value = Ok(8);
        assert_eq!(sensor.read(), Ok(34952));

        sensor.adc.value = Ok(0);
        assert_eq!(sensor.read(), Ok(0));
    }

    #[test]
    fn test_out_of_range_raw_clamped() {
        let mut sensor = AdcSensor::new(MockAdc { bits: 10, value: Ok(5000) }, 10);
        assert_eq!(sensor.read(), Ok(1023));
    }

    #[test]
    fn test_conversion_failure() {
        let mut sensor = AdcSensor::new(MockAdc { bits: 12, value: Err(()) }, 10);
        assert_eq!(sensor.read(), Err(SensorError::ConversionFailed));
    }
}
