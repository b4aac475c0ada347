//! ADC channel management
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! The Hall reference and the analog sensor may both sit on ADC pins, so the
//! converter lives behind a blocking mutex and each [`RpAdcChannel`] borrows
//! it for one conversion at a time.

use core::cell::RefCell;

use embassy_rp::adc::{Adc, Blocking, Channel, Error};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// Native ADC resolution
pub const ADC_BITS: u8 = 12;

/// Converter shared between channels
pub type SharedAdc = Mutex<CriticalSectionRawMutex, RefCell<Adc<'static, Blocking>>>;

/// Wrap a blocking converter for sharing
pub fn shared(adc: Adc<'static, Blocking>) -> SharedAdc {
    Mutex::new(RefCell::new(adc))
}

/// One analog input on the shared converter
pub struct RpAdcChannel<'a> {
    adc: &'a SharedAdc,
    channel: Channel<'static>,
}

impl<'a> RpAdcChannel<'a> {
    /// Bind a channel to the shared converter
    pub fn new(adc: &'a SharedAdc, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl hallscan_hal::AdcInput for RpAdcChannel<'_> {
    type Error = Error;

    fn resolution_bits(&self) -> u8 {
        ADC_BITS
    }

    fn read_raw(&mut self) -> Result<u16, Error> {
        let channel = &mut self.channel;
        self.adc
            .lock(|adc| adc.borrow_mut().blocking_read(channel))
    }
}
