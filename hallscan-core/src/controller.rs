//! Scan controller
//!
//! Top-level cooperative loop. Each call to [`ScanController::poll`] runs
//! one state to completion:
//!
//! - `Listen`: if input is waiting, decode one command
//! - `Acquire`: sweep, return to the origin, report readings or the failure
//! - `Error`: report the unknown-command notice
//!
//! Motion and sampling errors never leave this module as errors; they become
//! response lines. Only transport errors propagate.

use core::fmt;

use embedded_hal::delay::DelayNs;
use hallscan_protocol::{decode_command, Command, Decoded, ProtocolError, Response};

use crate::config::ScannerConfig;
use crate::error::{ConfigError, ScanError};
use crate::motion::MotionController;
use crate::sampling::SamplingEngine;
use crate::state::{Event, State};
use crate::traits::{AnalogSensor, HostLink, ReferenceSensor, StepperDriver};

/// Bytes read for one command before the parser is closed
pub const MAX_COMMAND_BYTES: usize = 32;

/// Outcome of startup homing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Startup {
    /// Reference found after this many micro-steps
    Homed { steps: u32 },
    /// No reference; every acquisition will report not-homed
    Failed(ScanError),
}

/// What one poll did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cycle {
    /// Listening with no input waiting
    Idle,
    /// A command was read; `Err` means it decoded to [`Command::NONE`]
    Received(Result<Command, ProtocolError>),
    /// A sweep ran; `Ok` carries the number of readings sent
    Acquired(Result<usize, ScanError>),
    /// The unknown-command notice was sent for this command
    Rejected(Command),
}

/// Sequences homing, sweeps, and host responses
pub struct ScanController<S, R, D, A, const N: usize> {
    motion: MotionController<S, R, D>,
    sampler: SamplingEngine<A>,
    state: State,
    sample_count: usize,
    return_to_origin: bool,
    last_command: Command,
    /// Byte read past the last command's delimiter
    pending: Option<u8>,
}

impl<S, R, D, A, const N: usize> ScanController<S, R, D, A, N>
where
    S: StepperDriver,
    R: ReferenceSensor,
    D: DelayNs,
    A: AnalogSensor,
{
    /// Create a controller in `Listen`
    ///
    /// `N` is the reading buffer capacity and must cover the sample count.
    pub fn new(
        motion: MotionController<S, R, D>,
        sampler: SamplingEngine<A>,
        config: &ScannerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.travel.sample_count > N {
            return Err(ConfigError::SampleBufferTooSmall);
        }

        Ok(Self {
            motion,
            sampler,
            state: State::Listen,
            sample_count: config.travel.sample_count,
            return_to_origin: config.return_to_origin,
            last_command: Command::NONE,
            pending: None,
        })
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Motion controller
    pub fn motion(&self) -> &MotionController<S, R, D> {
        &self.motion
    }

    /// Announce the link and home the axis
    ///
    /// Run exactly once before the first [`poll`](Self::poll). A homing
    /// failure is reported to the host here and nowhere else.
    pub fn startup<L: HostLink>(&mut self, link: &mut L) -> Result<Startup, L::Error> {
        send(link, Response::Ready)?;

        match self.motion.home() {
            Ok(steps) => Ok(Startup::Homed { steps }),
            Err(error) => {
                send(link, error.into())?;
                Ok(Startup::Failed(error))
            }
        }
    }

    /// Run the current state once
    pub fn poll<L: HostLink>(&mut self, link: &mut L) -> Result<Cycle, L::Error> {
        match self.state {
            State::Listen => {
                if self.pending.is_none() && !link.input_available() {
                    return Ok(Cycle::Idle);
                }
                let decoded = read_command(link, self.pending.take())?;
                self.pending = decoded.leftover;
                self.last_command = decoded.command;
                self.state = self
                    .state
                    .transition(Event::CommandReceived(self.last_command));
                Ok(Cycle::Received(decoded.result()))
            }
            State::Acquire => {
                let (sent, outcome) = self.acquire(link);
                self.state = self.state.transition(Event::AcquisitionFinished);
                sent?;
                Ok(Cycle::Acquired(outcome))
            }
            State::Error => {
                let sent = send(link, Response::UnknownCommand);
                self.state = self.state.transition(Event::NoticeSent);
                sent?;
                Ok(Cycle::Rejected(self.last_command))
            }
        }
    }

    fn acquire<L: HostLink>(
        &mut self,
        link: &mut L,
    ) -> (Result<(), L::Error>, Result<usize, ScanError>) {
        let mut result = self
            .sampler
            .sweep::<N, S, R, D>(&mut self.motion, self.sample_count);

        if self.return_to_origin && self.motion.is_homed() {
            if let Err(error) = self.motion.return_to_origin() {
                result = Err(error);
            }
        }

        match result {
            Ok(readings) => (
                send(link, Response::Readings(&readings)),
                Ok(readings.len()),
            ),
            Err(error) => (send(link, error.into()), Err(error)),
        }
    }
}

/// Decode one command, starting with a byte carried over from the last one
fn read_command<L: HostLink>(link: &mut L, mut pending: Option<u8>) -> Result<Decoded, L::Error> {
    decode_command(MAX_COMMAND_BYTES, || match pending.take() {
        Some(byte) => Ok(Some(byte)),
        None => link.read_byte(),
    })
}

/// Write one response line
fn send<L: HostLink>(link: &mut L, response: Response<'_>) -> Result<(), L::Error> {
    let mut writer = LineWriter { link, error: None };
    if response.write_to(&mut writer).is_err() {
        if let Some(error) = writer.error {
            return Err(error);
        }
    }
    link.end_line()
}

/// Adapts a host link to `core::fmt::Write`, keeping the transport error
struct LineWriter<'a, L: HostLink> {
    link: &'a mut L,
    error: Option<L::Error>,
}

impl<L: HostLink> fmt::Write for LineWriter<'_, L> {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.link.write_str(text).map_err(|error| {
            self.error = Some(error);
            fmt::Error
        })
    }
}
