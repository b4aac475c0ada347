//! Reading line encoding
//!
//! A reading line is the decimal rendering of each value, separated by a
//! single comma. There is no trailing separator, no padding, and no decimal
//! point. The terminator is appended by the transport.

use core::fmt::{self, Write};

/// Widest rendering of a single value (`65535`)
pub const MAX_VALUE_DIGITS: usize = 5;

/// Separator between consecutive values
pub const SEPARATOR: char = ',';

/// Line terminator appended to every outbound line
pub const LINE_TERMINATOR: &str = "\r\n";

/// Stream the readings into any formatter
///
/// Writes nothing for an empty slice.
pub fn encode_readings<W: Write>(readings: &[u16], out: &mut W) -> fmt::Result {
    let mut values = readings.iter();
    if let Some(first) = values.next() {
        write!(out, "{}", first)?;
        for value in values {
            out.write_char(SEPARATOR)?;
            write!(out, "{}", value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;
    use proptest::prelude::*;

    /// Ten worst-case values and their separators
    const TEN: usize = 10 * MAX_VALUE_DIGITS + 9;

    fn encode<const CAP: usize>(readings: &[u16]) -> Result<String<CAP>, fmt::Error> {
        let mut line = String::new();
        encode_readings(readings, &mut line)?;
        Ok(line)
    }

    #[test]
    fn test_encode_constant_readings() {
        let line = encode::<TEN>(&[512; 10]).unwrap();
        assert_eq!(line.as_str(), "512,512,512,512,512,512,512,512,512,512");
    }

    #[test]
    fn test_encode_empty() {
        let line = encode::<TEN>(&[]).unwrap();
        assert_eq!(line.as_str(), "");
    }

    #[test]
    fn test_encode_single_value() {
        let line = encode::<TEN>(&[7]).unwrap();
        assert_eq!(line.as_str(), "7");
    }

    #[test]
    fn test_encode_no_padding() {
        let line = encode::<TEN>(&[0, 5, 65535, 1023]).unwrap();
        assert_eq!(line.as_str(), "0,5,65535,1023");
    }

    #[test]
    fn test_short_writer_reports_error() {
        assert!(encode::<4>(&[65535]).is_err());
    }

    #[test]
    fn test_worst_case_length() {
        let line = encode::<TEN>(&[u16::MAX; 10]).unwrap();
        assert_eq!(line.len(), TEN);
    }

    fn is_reading_line(line: &str) -> bool {
        line.split(SEPARATOR).all(|field| {
            !field.is_empty()
                && field.len() <= MAX_VALUE_DIGITS
                && field.bytes().all(|b| b.is_ascii_digit())
        })
    }

    proptest! {
        #[test]
        fn prop_line_shape(readings in proptest::collection::vec(any::<u16>(), 1..=32)) {
            let line = encode::<192>(&readings).unwrap();

            prop_assert!(is_reading_line(&line));
            prop_assert_eq!(line.matches(SEPARATOR).count(), readings.len() - 1);
            prop_assert!(!line.ends_with(SEPARATOR));
        }

        #[test]
        fn prop_values_preserved_in_order(readings in proptest::collection::vec(any::<u16>(), 1..=32)) {
            let line = encode::<192>(&readings).unwrap();
            let decoded: Vec<u16> = line.split(SEPARATOR).map(|f| f.parse().unwrap()).collect();
            prop_assert_eq!(decoded, readings);
        }
    }
}
