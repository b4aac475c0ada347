//! Sensor traits

/// Errors that can occur reading a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Converter reported a failure
    ConversionFailed,
}

/// Analog channel sampled once per sweep stop
pub trait AnalogSensor {
    /// Take one reading
    fn read(&mut self) -> Result<u16, SensorError>;
}

/// Position reference used for homing
///
/// The trigger condition (digital level, analog threshold) is the
/// implementation's choice.
pub trait ReferenceSensor {
    /// Check whether the reference is currently detected
    fn is_triggered(&mut self) -> Result<bool, SensorError>;
}
