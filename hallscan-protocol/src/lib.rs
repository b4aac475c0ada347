//! Host Serial Line Protocol
//!
//! This crate defines the text protocol spoken between the scanner and its
//! host over the serial link. It is independent of motion and sampling.
//!
//! # Protocol Overview
//!
//! Host to device: ASCII digits forming a non-negative integer, ended by any
//! non-digit byte or by the end of the read window.
//!
//! ```text
//! 1\n        run one acquisition cycle
//! <other>\n  answered with the unknown-command notice
//! ```
//!
//! Device to host: one text line per response, terminated by `\r\n`.
//!
//! ```text
//! Serial port initialized successfully!     (once, at startup)
//! 512,498,1023,0,...                        (readings, no trailing comma)
//! Unknown command. Setting back to listen mode
//! ERROR: not homed
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod messages;

pub use command::{decode_command, Command, CommandParser, Decoded, ProtocolError};
pub use line::{encode_readings, LINE_TERMINATOR, MAX_VALUE_DIGITS, SEPARATOR};
pub use messages::Response;
