//! Serial port with a bounded read window
//!
//! Wraps any `embedded-io` port (the buffered RP2040 UART in practice) and
//! gives every single-byte read an upper bound in time. Readiness is polled
//! against an [`Instant`] deadline so the receive never blocks forever.

use embassy_time::{Duration, Instant};
use embedded_io::{Read, ReadReady, Write};

use hallscan_hal::UartConfig;

/// Serial port with a per-byte read window
pub struct TimedSerial<T> {
    port: T,
    window: Duration,
}

impl<T> TimedSerial<T>
where
    T: Read + ReadReady + Write,
{
    /// Wrap an already configured port
    pub fn new(port: T, config: &UartConfig) -> Self {
        Self {
            port,
            window: Duration::from_millis(config.read_timeout_ms as u64),
        }
    }

    /// Read window for a single byte
    pub fn window(&self) -> Duration {
        self.window
    }
}

impl<T> hallscan_hal::UartTx for TimedSerial<T>
where
    T: Read + ReadReady + Write,
{
    type Error = T::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), T::Error> {
        self.port.write_all(data)
    }

    fn flush(&mut self) -> Result<(), T::Error> {
        self.port.flush()
    }
}

impl<T> hallscan_hal::UartRx for TimedSerial<T>
where
    T: Read + ReadReady + Write,
{
    type Error = T::Error;

    fn bytes_available(&mut self) -> bool {
        self.port.read_ready().unwrap_or(false)
    }

    fn read_byte_timeout(&mut self) -> Result<Option<u8>, T::Error> {
        let deadline = Instant::now() + self.window;

        loop {
            if self.port.read_ready()? {
                let mut byte = [0u8; 1];
                let n = self.port.read(&mut byte)?;
                if n == 1 {
                    return Ok(Some(byte[0]));
                }
            }

            if Instant::now() >= deadline {
                return Ok(None);
            }

            core::hint::spin_loop();
        }
    }
}
