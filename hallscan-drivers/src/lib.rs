//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator traits
//! defined in hallscan-core, built on the pin, ADC, and UART traits from
//! hallscan-hal:
//!
//! - Step/direction/enable stepper driver on GPIO
//! - Hall references (digital level, analog threshold)
//! - Analog sensor channel with resolution scaling
//! - Serial host link

#![no_std]
#![deny(unsafe_code)]

pub mod link;
pub mod sensor;
pub mod stepper;
