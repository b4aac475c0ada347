//! Host link trait

use hallscan_protocol::LINE_TERMINATOR;

/// Byte-in, line-out connection to the host
///
/// Implementations bound every wait: [`read_byte`](HostLink::read_byte)
/// gives up after one read window.
pub trait HostLink {
    /// Transport error
    type Error;

    /// Check whether inbound bytes are waiting
    fn input_available(&mut self) -> bool;

    /// Read one byte, or `Ok(None)` once the read window elapses
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Queue text for transmission
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Terminate the current line
    fn end_line(&mut self) -> Result<(), Self::Error> {
        self.write_str(LINE_TERMINATOR)
    }
}
