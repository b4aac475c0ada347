//! RP2040-specific HAL for the scanner firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `hallscan-hal` traits, plus the board pin map:
//!
//! - GPIO wrappers for step/direction/enable outputs and the Hall input
//! - Blocking ADC channels sharing the single converter
//! - Serial port with a bounded per-byte read window

#![no_std]

pub mod adc;
pub mod gpio;
pub mod pins;
pub mod uart;

// Re-export shared traits from hallscan-hal for convenience
pub use hallscan_hal::{AdcInput, InputPin, OutputPin, UartConfig, UartRx, UartTx};
