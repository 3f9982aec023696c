#![no_std]
#![no_main]

use defmt::{error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::peripherals::{I2C0, USB};
use embassy_rp::usb::Driver;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker, Timer};
use embassy_usb::class::hid::State;
use embassy_usb::{Builder, Config as UsbConfig};
use picopad::{
    board, configure_usb_hid, GamepadReport, InputConfig, OutputSink, Pcf8591Input, PinBank,
    ReportAssembler, UsbHidOutput,
};
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => embassy_rp::i2c::InterruptHandler<I2C0>;
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

/// Signal for passing reports from the poll task to the output task.
/// Using Signal instead of Channel provides "latest value wins" semantics,
/// which is appropriate for gamepad state where we only care about the most recent input.
static REPORT_SIGNAL: StaticCell<Signal<CriticalSectionRawMutex, GamepadReport>> =
    StaticCell::new();

/// USB device configuration buffer.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state.
static HID_STATE: StaticCell<State> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("picopad starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // Initialize the report signal (latest-value semantics)
    let signal = REPORT_SIGNAL.init(Signal::new());

    // --- Input configuration ---
    let config = match InputConfig::new(&board::INPUT_SOURCES) {
        Ok(config) => config,
        Err(e) => defmt::panic!("invalid input configuration: {}", e),
    };
    let assembler = ReportAssembler::new(config);

    // --- Button and dpad pins (pull-up, pressed = low) ---
    let mut pins = PinBank::new();
    pins.add(16, Input::new(p.PIN_16, Pull::Up)); // dpad left
    pins.add(17, Input::new(p.PIN_17, Pull::Up)); // dpad down
    pins.add(18, Input::new(p.PIN_18, Pull::Up)); // dpad up
    pins.add(19, Input::new(p.PIN_19, Pull::Up)); // dpad right
    pins.add(5, Input::new(p.PIN_5, Pull::Up)); // north
    pins.add(6, Input::new(p.PIN_6, Pull::Up)); // west
    pins.add(7, Input::new(p.PIN_7, Pull::Up)); // south
    pins.add(8, Input::new(p.PIN_8, Pull::Up)); // east
    pins.add(9, Input::new(p.PIN_9, Pull::Up)); // mode
    pins.add(22, Input::new(p.PIN_22, Pull::Up)); // select
    pins.add(26, Input::new(p.PIN_26, Pull::Up)); // start

    // Every pin the input table names must be wired up above
    for source in config.sources() {
        match *source {
            picopad::InputSource::Digital { pin, .. } => {
                defmt::assert!(pins.contains(pin), "pin {} not in bank", pin);
            }
            picopad::InputSource::Dpad { pins: dpad_pins } => {
                for pin in dpad_pins {
                    defmt::assert!(pins.contains(pin), "pin {} not in bank", pin);
                }
            }
            picopad::InputSource::Axis { .. } => {}
        }
    }

    // --- I2C / ADC bring-up ---
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = board::I2C_FREQUENCY;
    let i2c = I2c::new_async(p.I2C0, p.PIN_21, p.PIN_20, Irqs, i2c_config);

    info!("probing PCF8591 on I2C0 (SDA {}, SCL {})", board::SDA_PIN, board::SCL_PIN);
    let mut adc = Pcf8591Input::new(i2c);
    let mut found = adc.probe().await;
    let mut tries = 0;
    while !found && tries < board::PROBE_RETRIES {
        tries += 1;
        warn!("PCF8591 not answering, retry {}", tries);
        Timer::after_millis(board::PROBE_RETRY_DELAY_MS).await;
        found = adc.probe().await;
    }
    // A missing ADC is not fatal: the assembler degrades to centered axes
    info!("PCF8591 found: {}", found);

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    let mut usb_config = UsbConfig::new(0x1209, 0x0001); // pid.codes test VID/PID
    usb_config.manufacturer = Some("picopad");
    usb_config.product = Some("Pico HID Gamepad");
    usb_config.serial_number = Some("001");
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    // Configure HID class
    let hid_state = HID_STATE.init(State::new());
    let hid_writer = configure_usb_hid(&mut builder, hid_state);

    // Build the USB device
    let usb_device = builder.build();

    // Create output
    let usb_output = UsbHidOutput::new(hid_writer);

    // Optional: LED for error indication (on-board LED on Pico)
    let led = Output::new(p.PIN_25, Level::Low);

    // Spawn tasks
    spawner.spawn(usb_task(usb_device)).unwrap();
    spawner.spawn(poll_task(assembler, pins, adc, signal)).unwrap();
    spawner.spawn(output_task(usb_output, signal, led)).unwrap();

    info!("picopad initialized, polling inputs...");
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// Poll task - assembles one report per tick and signals the latest state.
#[embassy_executor::task]
async fn poll_task(
    mut assembler: ReportAssembler<'static>,
    pins: PinBank,
    mut adc: Pcf8591Input,
    signal: &'static Signal<CriticalSectionRawMutex, GamepadReport>,
) {
    let mut ticker = Ticker::every(Duration::from_millis(board::POLL_INTERVAL_MS));
    loop {
        let report = assembler.assemble(&pins, &mut adc).await;
        // Signal the latest report (overwrites any pending value)
        signal.signal(report);
        ticker.next().await;
    }
}

/// Output task - waits for report signals and sends them to USB HID.
#[embassy_executor::task]
async fn output_task(
    mut output: UsbHidOutput<'static>,
    signal: &'static Signal<CriticalSectionRawMutex, GamepadReport>,
    mut led: Output<'static>,
) {
    // Wait for USB to be ready
    output.wait_ready().await;
    info!("USB HID ready, forwarding reports...");

    loop {
        // Wait for the next report (blocks until signaled)
        let report = signal.wait().await;
        if let Err(e) = output.send(&report).await {
            error!("Output error: {:?}", e);
            // Toggle LED to indicate error
            led.toggle();
        }
    }
}
