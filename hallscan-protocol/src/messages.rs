//! Outbound response lines
//!
//! Every response is exactly one line. [`Response::write_to`] renders the
//! body; the transport appends [`LINE_TERMINATOR`](crate::LINE_TERMINATOR).

use core::fmt::{self, Write};

use crate::line::encode_readings;

/// Notice sent once the serial link is up
pub const READY_NOTICE: &str = "Serial port initialized successfully!";

/// Notice sent for any command other than acquire
pub const UNKNOWN_COMMAND_NOTICE: &str = "Unknown command. Setting back to listen mode";

/// Sent once at startup when homing exhausts its step budget
pub const HOMING_FAILED_NOTICE: &str = "ERROR: homing failed";

/// Sent instead of readings when the axis has no reference
pub const NOT_HOMED_NOTICE: &str = "ERROR: not homed";

/// Sent instead of readings when a target falls outside the travel window
pub const OUT_OF_RANGE_NOTICE: &str = "ERROR: position out of range";

/// Sent instead of readings when a sensor read fails
pub const SENSOR_FAULT_NOTICE: &str = "ERROR: sensor fault";

/// A single line sent from the device to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response<'a> {
    /// Transport is ready
    Ready,
    /// Successful acquisition
    Readings(&'a [u16]),
    /// Command was not recognised
    UnknownCommand,
    /// Startup homing did not find the reference
    HomingFailed,
    /// Acquisition refused, axis not homed
    NotHomed,
    /// Acquisition aborted on a target outside the travel window
    OutOfRange,
    /// Acquisition aborted on a sensor read failure
    SensorFault,
}

impl Response<'_> {
    /// Fixed notice text, if this response has one
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Response::Ready => Some(READY_NOTICE),
            Response::Readings(_) => None,
            Response::UnknownCommand => Some(UNKNOWN_COMMAND_NOTICE),
            Response::HomingFailed => Some(HOMING_FAILED_NOTICE),
            Response::NotHomed => Some(NOT_HOMED_NOTICE),
            Response::OutOfRange => Some(OUT_OF_RANGE_NOTICE),
            Response::SensorFault => Some(SENSOR_FAULT_NOTICE),
        }
    }

    /// Render the line body (without terminator)
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        match (self, self.notice()) {
            (Response::Readings(readings), _) => encode_readings(readings, out),
            (_, Some(text)) => out.write_str(text),
            (_, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;

    fn render(response: Response<'_>) -> String<64> {
        let mut line = String::new();
        response.write_to(&mut line).unwrap();
        line
    }

    #[test]
    fn test_readings_line() {
        assert_eq!(render(Response::Readings(&[1, 22, 333])).as_str(), "1,22,333");
        assert_eq!(render(Response::Readings(&[])).as_str(), "");
    }

    #[test]
    fn test_notices() {
        assert_eq!(render(Response::Ready).as_str(), READY_NOTICE);
        assert_eq!(render(Response::UnknownCommand).as_str(), UNKNOWN_COMMAND_NOTICE);
        assert_eq!(render(Response::NotHomed).as_str(), NOT_HOMED_NOTICE);
        assert_eq!(render(Response::HomingFailed).as_str(), HOMING_FAILED_NOTICE);
    }

    #[test]
    fn test_notices_are_not_reading_lines() {
        // A host must never mistake a notice for data
        let notices = [
            Response::Ready,
            Response::UnknownCommand,
            Response::HomingFailed,
            Response::NotHomed,
            Response::OutOfRange,
            Response::SensorFault,
        ];

        for response in notices {
            let text = response.notice().unwrap();
            assert!(text.bytes().any(|b| b.is_ascii_alphabetic()));
        }
    }
}
