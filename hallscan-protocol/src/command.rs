//! Inbound command decoding
//!
//! A command is a non-negative decimal integer. Parsing follows the usual
//! serial integer-parse convention:
//!
//! - non-digit bytes before the first digit are skipped
//! - digits accumulate into the value
//! - the first non-digit after a digit ends the command and is consumed
//! - if the read window elapses, whatever digits were seen form the command
//!
//! Timeout policy: a read window that ends with no digits at all, or a value
//! that does not fit in `u32`, is a [`ProtocolError`]. [`decode_command`]
//! maps both to [`Command::NONE`] (`0`), which is never a recognised command,
//! so the controller answers it with the unknown-command notice.
//!
//! A `\r\n` pair after the digits is one delimiter, so hosts that end lines
//! the way this device does send exactly one command per line.

/// A decoded host command
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command(pub u32);

impl Command {
    /// Fallback for absent or malformed input
    pub const NONE: Command = Command(0);

    /// Run one acquisition cycle
    pub const ACQUIRE: Command = Command(1);

    /// Raw integer value
    pub fn value(self) -> u32 {
        self.0
    }

    /// Check if this command requests an acquisition
    pub fn is_acquire(self) -> bool {
        self == Self::ACQUIRE
    }
}

impl From<u32> for Command {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Errors that can occur while decoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// Read window ended before any digit arrived
    NoDigits,
    /// Digits describe a value larger than `u32::MAX`
    Overflow,
}

/// State machine for parsing an inbound command byte by byte
#[derive(Debug, Clone)]
pub struct CommandParser {
    state: ParseState,
    value: u32,
    overflowed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Skipping bytes until the first digit
    WaitingForDigit,
    /// At least one digit seen
    ReadingDigits,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    /// Create a new command parser
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForDigit,
            value: 0,
            overflowed: false,
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForDigit;
        self.value = 0;
        self.overflowed = false;
    }

    /// Check if any digit has been seen since the last reset
    pub fn has_digits(&self) -> bool {
        self.state == ParseState::ReadingDigits
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(command))` when a delimiter completes a command,
    /// `Ok(None)` when more bytes are needed, or `Err` if the completed
    /// digits overflowed.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Command>, ProtocolError> {
        match (self.state, byte) {
            (_, b'0'..=b'9') => {
                self.state = ParseState::ReadingDigits;
                let digit = u32::from(byte - b'0');
                match self.value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                    Some(v) => self.value = v,
                    None => self.overflowed = true,
                }
                Ok(None)
            }
            // Leading noise (whitespace, stray line endings, signs)
            (ParseState::WaitingForDigit, _) => Ok(None),
            (ParseState::ReadingDigits, _) => self.complete().map(Some),
        }
    }

    /// Close the command because the read window elapsed
    pub fn finish(&mut self) -> Result<Command, ProtocolError> {
        if !self.has_digits() {
            self.reset();
            return Err(ProtocolError::NoDigits);
        }
        self.complete()
    }

    fn complete(&mut self) -> Result<Command, ProtocolError> {
        let result = if self.overflowed {
            Err(ProtocolError::Overflow)
        } else {
            Ok(Command(self.value))
        };
        self.reset();
        result
    }
}

/// Outcome of reading one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decoded {
    /// Command to act on, [`Command::NONE`] when decoding failed
    pub command: Command,
    /// Why decoding failed, if it did
    pub error: Option<ProtocolError>,
    /// Byte read past the delimiter that starts the next command
    pub leftover: Option<u8>,
}

impl Decoded {
    fn new(result: Result<Command, ProtocolError>, leftover: Option<u8>) -> Self {
        match result {
            Ok(command) => Self {
                command,
                error: None,
                leftover,
            },
            // Timeout policy: no digits or overflow decodes to 0
            Err(error) => Self {
                command: Command::NONE,
                error: Some(error),
                leftover,
            },
        }
    }

    /// The command, or the protocol error that forced it to `0`
    pub fn result(&self) -> Result<Command, ProtocolError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.command),
        }
    }
}

/// Decode one command from a fallible byte source
///
/// `next_byte` returns `Ok(None)` once the read window elapses. At most
/// `max_bytes` bytes are consumed before the parser is closed.
///
/// A `\r` delimiter is paired with the byte after it, so a `\r\n`
/// terminated command consumes both bytes. If that byte is anything other
/// than `\n` it is returned in [`Decoded::leftover`]. A bare `\r` at the end
/// of input costs one extra read window.
///
/// Transport errors from `next_byte` are returned as the outer `Err`.
pub fn decode_command<E, F>(max_bytes: usize, mut next_byte: F) -> Result<Decoded, E>
where
    F: FnMut() -> Result<Option<u8>, E>,
{
    let mut parser = CommandParser::new();

    for _ in 0..max_bytes {
        let Some(byte) = next_byte()? else {
            return Ok(Decoded::new(parser.finish(), None));
        };

        let result = match parser.feed(byte) {
            Ok(None) => continue,
            Ok(Some(command)) => Ok(command),
            Err(error) => Err(error),
        };

        let leftover = if byte == b'\r' {
            match next_byte()? {
                Some(b'\n') | None => None,
                other => other,
            }
        } else {
            None
        };
        return Ok(Decoded::new(result, leftover));
    }

    Ok(Decoded::new(parser.finish(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use proptest::prelude::*;

    const MAX_BYTES: usize = 32;

    fn decode<I: Iterator<Item = u8>>(bytes: &mut I) -> Decoded {
        decode_command(MAX_BYTES, || Ok::<_, Infallible>(bytes.next())).unwrap()
    }

    #[test]
    fn test_decode_acquire() {
        let mut bytes = b"1\n".iter().copied();
        let decoded = decode(&mut bytes);
        assert_eq!(decoded.command, Command::ACQUIRE);
        assert_eq!(decoded.result(), Ok(Command::ACQUIRE));
        assert!(bytes.next().is_none());
    }

    #[test]
    fn test_decode_unknown_value() {
        let mut bytes = b"9\n".iter().copied();
        let command = decode(&mut bytes).command;
        assert_eq!(command, Command(9));
        assert!(!command.is_acquire());
    }

    #[test]
    fn test_timeout_without_digits_defaults_to_zero() {
        let decoded = decode(&mut core::iter::empty());
        assert_eq!(decoded.command, Command::NONE);
        assert_eq!(decoded.result(), Err(ProtocolError::NoDigits));
    }

    #[test]
    fn test_timeout_with_only_noise_defaults_to_zero() {
        let mut bytes = b"abc\r\n".iter().copied();
        let decoded = decode(&mut bytes);
        assert_eq!(decoded.command, Command::NONE);
        assert_eq!(decoded.error, Some(ProtocolError::NoDigits));
    }

    #[test]
    fn test_timeout_after_digits_completes_command() {
        // No delimiter: the window closing ends the number
        let mut bytes = b"42".iter().copied();
        assert_eq!(decode(&mut bytes).result(), Ok(Command(42)));
    }

    #[test]
    fn test_leading_noise_skipped() {
        let mut bytes = b"\r\n  -7x".iter().copied();
        assert_eq!(decode(&mut bytes).result(), Ok(Command(7)));
    }

    #[test]
    fn test_remaining_bytes_left_in_stream() {
        let mut bytes = b"1\n9\n".iter().copied();
        assert_eq!(decode(&mut bytes).command, Command(1));
        assert_eq!(decode(&mut bytes).command, Command(9));
        assert_eq!(decode(&mut bytes).command, Command::NONE);
    }

    #[test]
    fn test_crlf_consumed_as_one_delimiter() {
        let mut bytes = b"1\r\n".iter().copied();
        let decoded = decode(&mut bytes);
        assert_eq!(decoded.command, Command::ACQUIRE);
        assert_eq!(decoded.leftover, None);
        assert!(bytes.next().is_none());
    }

    #[test]
    fn test_byte_after_cr_is_leftover() {
        let mut bytes = b"1\r9\n".iter().copied();
        let decoded = decode(&mut bytes);
        assert_eq!(decoded.command, Command::ACQUIRE);
        assert_eq!(decoded.leftover, Some(b'9'));
        assert_eq!(bytes.next(), Some(b'\n'));
    }

    #[test]
    fn test_bare_cr_at_end_of_input() {
        let mut bytes = b"1\r".iter().copied();
        let decoded = decode(&mut bytes);
        assert_eq!(decoded.command, Command::ACQUIRE);
        assert_eq!(decoded.leftover, None);
    }

    #[test]
    fn test_overflow_defaults_to_zero() {
        let mut bytes = b"99999999999\n".iter().copied();
        let decoded = decode(&mut bytes);
        assert_eq!(decoded.command, Command::NONE);
        assert_eq!(decoded.error, Some(ProtocolError::Overflow));
    }

    #[test]
    fn test_u32_max_fits() {
        let mut bytes = b"4294967295\n".iter().copied();
        assert_eq!(decode(&mut bytes).result(), Ok(Command(u32::MAX)));
    }

    #[test]
    fn test_byte_budget_closes_command() {
        let mut bytes = b"12345\n".iter().copied();
        let decoded = decode_command(3, || Ok::<_, Infallible>(bytes.next())).unwrap();
        assert_eq!(decoded.command, Command(123));
        assert_eq!(bytes.next(), Some(b'4'));
    }

    #[test]
    fn test_source_error_propagates() {
        let result = decode_command(MAX_BYTES, || Err::<Option<u8>, _>("link down"));
        assert_eq!(result, Err("link down"));
    }

    #[test]
    fn test_parser_resets_after_command() {
        let mut parser = CommandParser::new();
        assert_eq!(parser.feed(b'1'), Ok(None));
        assert!(parser.has_digits());
        assert_eq!(parser.feed(b'\n'), Ok(Some(Command(1))));
        assert!(!parser.has_digits());
        assert_eq!(parser.finish(), Err(ProtocolError::NoDigits));
    }

    #[test]
    fn test_leading_zeros() {
        let mut bytes = b"0001\n".iter().copied();
        assert_eq!(decode(&mut bytes).command, Command::ACQUIRE);
    }

    proptest! {
        #[test]
        fn prop_decimal_value_decodes(value: u32, delimiter in "[\r\n ,;]") {
            let text = format!("{}{}", value, delimiter);
            let mut bytes = text.bytes();
            prop_assert_eq!(decode(&mut bytes).result(), Ok(Command(value)));
        }
    }
}
