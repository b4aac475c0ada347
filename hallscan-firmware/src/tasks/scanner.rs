//! Scanner task
//!
//! Homes once, then polls the scan controller forever. Each poll runs one
//! state to completion; the outcome is logged here since the library crates
//! stay silent.

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::uart::BufferedUart;
use embassy_time::{Delay, Duration, Timer};

use hallscan_core::{Cycle, ScanController, Startup};
use hallscan_drivers::link::SerialLink;
use hallscan_drivers::sensor::{AdcSensor, HallReference};
use hallscan_drivers::stepper::GpioStepper;
use hallscan_hal_rp2040::adc::RpAdcChannel;
use hallscan_hal_rp2040::gpio::{RpInput, RpOutput};
use hallscan_hal_rp2040::uart::TimedSerial;

use crate::config::{POLL_INTERVAL_MS, SAMPLE_COUNT};

pub type Stepper = GpioStepper<RpOutput<'static>, RpOutput<'static>, RpOutput<'static>, Delay>;
pub type Reference = HallReference<RpInput<'static>, RpAdcChannel<'static>>;
pub type Sensor = AdcSensor<RpAdcChannel<'static>>;
pub type Scanner = ScanController<Stepper, Reference, Delay, Sensor, SAMPLE_COUNT>;
pub type HostSerial = SerialLink<TimedSerial<BufferedUart>>;

/// Scanner task
///
/// Motion is blocking; the task yields between polls and sleeps while the
/// host is silent.
#[embassy_executor::task]
pub async fn scanner_task(mut scanner: Scanner, mut link: HostSerial) {
    info!("Scanner task started");

    match scanner.startup(&mut link) {
        Ok(Startup::Homed { steps }) => info!("Homed after {} steps", steps),
        Ok(Startup::Failed(e)) => {
            error!("Homing failed: {:?}, acquisitions will report not homed", e)
        }
        Err(e) => error!("Host link error during startup: {:?}", e),
    }

    let idle = Duration::from_millis(POLL_INTERVAL_MS);
    let mut last_state = scanner.state();

    loop {
        match scanner.poll(&mut link) {
            Ok(Cycle::Idle) => {
                trace!("Listening");
                Timer::after(idle).await;
            }
            Ok(Cycle::Received(Ok(command))) => debug!("Command {}", command.value()),
            Ok(Cycle::Received(Err(e))) => warn!("Command not decoded: {:?}", e),
            Ok(Cycle::Acquired(Ok(count))) => info!("Sent {} readings", count),
            Ok(Cycle::Acquired(Err(e))) => warn!("Acquisition failed: {:?}", e),
            Ok(Cycle::Rejected(command)) => warn!("Unknown command {}", command.value()),
            Err(e) => error!("Host link error: {:?}", e),
        }

        let state = scanner.state();
        if state != last_state {
            debug!("State: {:?} -> {:?}", last_state, state);
            last_state = state;
        }

        yield_now().await;
    }
}
