//! State machine definition

use super::events::Event;

/// Command loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Waiting for host input
    #[default]
    Listen,
    /// Running one sweep and reporting it
    Acquire,
    /// Reporting an unrecognised command
    Error,
}

impl State {
    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Listen, CommandReceived(command)) if command.is_acquire() => Acquire,
            (Listen, CommandReceived(_)) => Error,

            (Acquire, AcquisitionFinished) => Listen,

            (Error, NoticeSent) => Listen,

            // Default: stay in current state
            _ => self,
        }
    }
}
