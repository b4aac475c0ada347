//! UART host link

use hallscan_core::traits::HostLink;
use hallscan_hal::{UartRx, UartTx};
use hallscan_protocol::LINE_TERMINATOR;

/// Host link over a UART
///
/// Text goes out as written; every line ends with the protocol terminator.
pub struct SerialLink<U> {
    uart: U,
}

impl<U, E> SerialLink<U>
where
    U: UartTx<Error = E> + UartRx<Error = E>,
{
    /// Wrap a configured UART
    pub fn new(uart: U) -> Self {
        Self { uart }
    }
}

impl<U, E> HostLink for SerialLink<U>
where
    U: UartTx<Error = E> + UartRx<Error = E>,
{
    type Error = E;

    fn input_available(&mut self) -> bool {
        self.uart.bytes_available()
    }

    fn read_byte(&mut self) -> Result<Option<u8>, E> {
        self.uart.read_byte_timeout()
    }

    fn write_str(&mut self, text: &str) -> Result<(), E> {
        self.uart.write_blocking(text.as_bytes())
    }

    fn end_line(&mut self) -> Result<(), E> {
        self.uart.write_blocking(LINE_TERMINATOR.as_bytes())?;
        self.uart.flush()
    }
}
