//! RP2040 USB HID gamepad firmware.
//!
//! Reads GPIO buttons and a directional pad plus two analog sticks behind a
//! PCF8591 I2C ADC, and reports them to the host as a USB HID gamepad.

#![no_std]

// Re-export core types for convenience
pub use pad_core::{
    map_axis, AnalogReader, AxisConfig, AxisId, Buttons, ConfigError, GamepadReport, HatState,
    InputConfig, InputSource, OutputError, OutputSink, PinReader, ReadError, ReportAssembler,
};

pub mod adc;
pub mod board;
pub mod gpio;
pub mod usb_output;

pub use adc::Pcf8591Input;
pub use gpio::PinBank;
pub use usb_output::{configure_usb_hid, HidReport, PadRequestHandler, UsbHidOutput};
