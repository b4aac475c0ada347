//! Host link drivers

pub mod serial;

pub use serial::SerialLink;
