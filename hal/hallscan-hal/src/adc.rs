//! Analog input abstraction

/// Single analog input channel
///
/// Each implementation owns one channel. Reads are one-shot conversions.
pub trait AdcInput {
    /// Error type for conversions
    type Error;

    /// Native converter resolution in bits (10 for AVR, 12 for RP2040)
    fn resolution_bits(&self) -> u8;

    /// Perform one conversion and return the raw value
    fn read_raw(&mut self) -> Result<u16, Self::Error>;

    /// Largest raw value this channel can return
    fn max_raw(&self) -> u16 {
        ((1u32 << self.resolution_bits()) - 1) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAdc {
        bits: u8,
    }

    impl AdcInput for FixedAdc {
        type Error = ();

        fn resolution_bits(&self) -> u8 {
            self.bits
        }

        fn read_raw(&mut self) -> Result<u16, ()> {
            Ok(0)
        }
    }

    #[test]
    fn test_max_raw() {
        assert_eq!(FixedAdc { bits: 10 }.max_raw(), 1023);
        assert_eq!(FixedAdc { bits: 12 }.max_raw(), 4095);
        assert_eq!(FixedAdc { bits: 16 }.max_raw(), 65535);
    }
}
