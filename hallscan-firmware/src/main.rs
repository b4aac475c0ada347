//! Hallscan - Hall-referenced scanner firmware
//!
//! Main firmware binary for RP2040-based single-axis scanners. The motor is
//! homed once against a Hall sensor; afterwards each acquisition request
//! from the host sweeps the axis and answers with one line of readings.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as RpUartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use hallscan_core::{MotionController, SamplingEngine, ScanController};
use hallscan_drivers::link::SerialLink;
use hallscan_drivers::sensor::{AdcSensor, HallReference};
use hallscan_drivers::stepper::GpioStepper;
use hallscan_hal_rp2040::adc::{self as rp_adc, RpAdcChannel, SharedAdc};
use hallscan_hal_rp2040::gpio::{RpInput, RpOutput};
use hallscan_hal_rp2040::pins;
use hallscan_hal_rp2040::uart::TimedSerial;

mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

// Converter shared by the Hall and sensor channels
static ADC: StaticCell<SharedAdc> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hallscan firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let scanner_config = config::scanner_config();
    info!(
        "Scanner config: {} samples over {} steps, homing budget {} steps",
        scanner_config.travel.sample_count,
        scanner_config.travel.travel_range_steps,
        scanner_config.homing.max_steps
    );

    // Host serial on UART0 (GPIO0 TX, GPIO1 RX)
    let uart_config = config::uart_config();
    let mut rp_uart_config = RpUartConfig::default();
    rp_uart_config.baudrate = uart_config.baudrate;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, rp_uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let serial = TimedSerial::new(uart, &uart_config);

    info!(
        "UART initialized on TX={} RX={}: {} baud, {} ms read window",
        pins::UART_TX,
        pins::UART_RX,
        uart_config.baudrate,
        serial.window().as_millis()
    );

    let link = SerialLink::new(serial);

    // Stepper driver (DIR=GPIO10, STEP=GPIO11, EN=GPIO12)
    let stepper = GpioStepper::new(
        RpOutput::new(p.PIN_10),
        RpOutput::new(p.PIN_11),
        RpOutput::new(p.PIN_12),
        Delay,
        config::stepper_config(),
    );

    info!(
        "Stepper initialized on DIR={} STEP={} EN={}",
        pins::STEP_DIR,
        pins::STEP_PULSE,
        pins::STEP_ENABLE
    );

    // Sensors on the shared ADC (Hall=GPIO26, sensor=GPIO27)
    let adc: &'static SharedAdc = ADC.init(rp_adc::shared(Adc::new_blocking(
        p.ADC,
        AdcConfig::default(),
    )));

    let sensor = AdcSensor::new(
        RpAdcChannel::new(adc, Channel::new_pin(p.PIN_27, Pull::None)),
        config::OUTPUT_BITS,
    );

    let reference = if config::HALL_TRIGGER.is_analog() {
        HallReference::analog(
            RpAdcChannel::new(adc, Channel::new_pin(p.PIN_26, Pull::None)),
            config::HALL_TRIGGER,
        )
    } else {
        // Open-collector sensors pull the line low near the magnet
        HallReference::digital(RpInput::new(p.PIN_26, Pull::Up), config::HALL_TRIGGER)
    };
    let reference = unwrap!(reference);

    info!(
        "Hall reference on GPIO{}: {:?}, sensor on GPIO{} at {} bits",
        pins::HALL,
        config::HALL_TRIGGER,
        pins::SENSOR,
        config::OUTPUT_BITS
    );

    // GPIO28 carries the radio module; it is left unconfigured
    debug!("Radio input on GPIO{} reserved", pins::RADIO);

    let motion = MotionController::new(stepper, reference, Delay, &scanner_config);
    let sampler = SamplingEngine::new(sensor);
    let scanner: tasks::Scanner = unwrap!(ScanController::new(motion, sampler, &scanner_config));

    spawner.spawn(tasks::scanner_task(scanner, link)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in the scanner task
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
