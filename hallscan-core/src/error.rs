//! Scanner error taxonomy

use hallscan_protocol::Response;

/// Motion and sampling failures
///
/// All of these are caught at the acquisition boundary and turned into a
/// host-visible response line. None of them stop the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanError {
    /// Hall reference not seen within the homing step budget
    HomingTimeout,
    /// Motion or sampling attempted without a homing reference
    NotHomed,
    /// Target position outside `[0, travel_range_steps)`
    OutOfRange,
    /// Hall or analog sensor read failed
    SensorFault,
}

impl From<ScanError> for Response<'static> {
    fn from(error: ScanError) -> Self {
        match error {
            ScanError::HomingTimeout => Response::HomingFailed,
            ScanError::NotHomed => Response::NotHomed,
            ScanError::OutOfRange => Response::OutOfRange,
            ScanError::SensorFault => Response::SensorFault,
        }
    }
}

/// Build-time configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Travel range must span at least one micro-step
    EmptyTravelRange,
    /// Travel range does not fit the signed position counter
    TravelRangeTooLarge,
    /// At least one sample per request is required
    NoSamples,
    /// More samples than micro-steps; targets would collide
    TooManySamples,
    /// Sample count exceeds the reading buffer capacity
    SampleBufferTooSmall,
    /// Homing needs a non-zero step budget
    NoHomingBudget,
}
