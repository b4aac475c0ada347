//! Test doubles shared by the unit tests
//!
//! [`Axis`] is the simulated mechanism: the mock stepper turns it and the
//! mock reference and sensor look at it, so homing and sweeps can be
//! checked against where the shaft physically is.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::traits::{AnalogSensor, Direction, HostLink, ReferenceSensor, SensorError, StepperDriver};

#[derive(Debug, Default)]
struct AxisInner {
    angle: Cell<i64>,
    steps: Cell<u64>,
    forward: Cell<bool>,
    enabled: Cell<bool>,
}

/// Shared simulated shaft
#[derive(Debug, Clone, Default)]
pub struct Axis(Rc<AxisInner>);

impl Axis {
    pub fn new() -> Self {
        let axis = Self::default();
        axis.0.forward.set(true);
        axis
    }

    /// Shaft angle in micro-steps from power-on
    pub fn angle(&self) -> i64 {
        self.0.angle.get()
    }

    /// Total pulses emitted
    pub fn steps_taken(&self) -> u64 {
        self.0.steps.get()
    }

    pub fn enabled(&self) -> bool {
        self.0.enabled.get()
    }
}

pub struct MockStepper {
    axis: Axis,
}

impl MockStepper {
    pub fn new(axis: &Axis) -> Self {
        Self { axis: axis.clone() }
    }
}

impl StepperDriver for MockStepper {
    fn set_direction(&mut self, dir: Direction) {
        self.axis.0.forward.set(dir == Direction::Forward);
    }

    fn step(&mut self) {
        let inner = &self.axis.0;
        inner.steps.set(inner.steps.get() + 1);
        if inner.enabled.get() {
            let delta = if inner.forward.get() { 1 } else { -1 };
            inner.angle.set(inner.angle.get() + delta);
        }
    }

    fn enable(&mut self, enabled: bool) {
        self.axis.0.enabled.set(enabled);
    }
}

enum ReferenceMode {
    Magnet(i64),
    Never,
    Faulty,
}

pub struct MockReference {
    axis: Axis,
    mode: ReferenceMode,
}

impl MockReference {
    /// Triggers when the shaft sits at `angle`
    pub fn at(axis: &Axis, angle: i64) -> Self {
        Self {
            axis: axis.clone(),
            mode: ReferenceMode::Magnet(angle),
        }
    }

    pub fn never(axis: &Axis) -> Self {
        Self {
            axis: axis.clone(),
            mode: ReferenceMode::Never,
        }
    }

    pub fn faulty(axis: &Axis) -> Self {
        Self {
            axis: axis.clone(),
            mode: ReferenceMode::Faulty,
        }
    }
}

impl ReferenceSensor for MockReference {
    fn is_triggered(&mut self) -> Result<bool, SensorError> {
        match self.mode {
            ReferenceMode::Magnet(angle) => Ok(self.axis.angle() == angle),
            ReferenceMode::Never => Ok(false),
            ReferenceMode::Faulty => Err(SensorError::ConversionFailed),
        }
    }
}

/// Analog channel returning a fixed value and recording where it was read
pub struct MockSensor {
    axis: Axis,
    value: u16,
    fail_after: Option<usize>,
    pub read_at: Vec<i64>,
}

impl MockSensor {
    pub fn constant(axis: &Axis, value: u16) -> Self {
        Self {
            axis: axis.clone(),
            value,
            fail_after: None,
            read_at: Vec::new(),
        }
    }

    /// Fails on the read following `reads` successful ones
    pub fn failing_after(axis: &Axis, reads: usize) -> Self {
        Self {
            fail_after: Some(reads),
            ..Self::constant(axis, 0)
        }
    }
}

impl AnalogSensor for MockSensor {
    fn read(&mut self) -> Result<u16, SensorError> {
        if self.fail_after == Some(self.read_at.len()) {
            return Err(SensorError::ConversionFailed);
        }
        self.read_at.push(self.axis.angle());
        Ok(self.value)
    }
}

#[derive(Debug, Default)]
pub struct MockDelay {
    ns: u64,
}

impl MockDelay {
    pub fn total_us(&self) -> u64 {
        self.ns / 1000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns += u64::from(ns);
    }
}

/// Host side of the serial link
#[derive(Debug, Default)]
pub struct MockLink {
    pub input: VecDeque<u8>,
    pub output: String,
    pub fail_writes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkDown;

impl MockLink {
    pub fn send(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    /// Completed lines written by the device, oldest first
    pub fn lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self.output.split("\r\n").collect();
        // Text after the last terminator is an unfinished line
        lines.pop();
        lines
    }

    pub fn take_lines(&mut self) -> Vec<String> {
        let lines = self.lines().into_iter().map(String::from).collect();
        self.output.clear();
        lines
    }
}

impl HostLink for MockLink {
    type Error = LinkDown;

    fn input_available(&mut self) -> bool {
        !self.input.is_empty()
    }

    fn read_byte(&mut self) -> Result<Option<u8>, LinkDown> {
        Ok(self.input.pop_front())
    }

    fn write_str(&mut self, text: &str) -> Result<(), LinkDown> {
        if self.fail_writes {
            return Err(LinkDown);
        }
        self.output.push_str(text);
        Ok(())
    }
}
