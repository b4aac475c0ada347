//! Embassy async tasks

pub mod scanner;

pub use scanner::{scanner_task, HostSerial, Scanner};
