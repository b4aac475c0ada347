//! Board pin map
//!
//! Fixed assignments for the scanner board. The stepper header matches the
//! SKR Pico X driver slot; the sensors sit on the ADC-capable pins.

/// Host UART TX (UART0)
pub const UART_TX: u8 = 0;
/// Host UART RX (UART0)
pub const UART_RX: u8 = 1;

/// Stepper direction output
pub const STEP_DIR: u8 = 10;
/// Stepper step pulse output
pub const STEP_PULSE: u8 = 11;
/// Stepper driver enable output
pub const STEP_ENABLE: u8 = 12;

/// Hall reference input (ADC0, also usable as digital)
pub const HALL: u8 = 26;
/// Analog sensor input (ADC1)
pub const SENSOR: u8 = 27;
/// Radio module data line (ADC2)
///
/// Wired on the board but never read by the firmware.
pub const RADIO: u8 = 28;
