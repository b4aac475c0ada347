//! Events that trigger state transitions

use hallscan_protocol::Command;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A command was decoded from the host input
    CommandReceived(Command),
    /// Sweep finished and its response was sent (readings or failure)
    AcquisitionFinished,
    /// Unknown-command notice was sent
    NoticeSent,
}
