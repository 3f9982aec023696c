//! Board wiring: which GPIO feeds which input, and the ADC bus pins.
//!
//! The table below is the single source of truth for the controller layout.
//! All button and dpad pins are inputs with pull-ups (pressed = low). The
//! sticks sit behind a PCF8591 on I2C0; the left stick's Y axis is wired
//! upside down and inverted in software.

use pad_core::{AxisConfig, AxisId, Buttons, InputSource};

/// I2C0 SDA, to the PCF8591.
pub const SDA_PIN: u8 = 20;
/// I2C0 SCL, to the PCF8591.
pub const SCL_PIN: u8 = 21;
/// PCF8591 bus speed.
pub const I2C_FREQUENCY: u32 = 100_000;

/// Polling tick interval.
pub const POLL_INTERVAL_MS: u64 = 10;

/// ADC probe retry policy at startup.
pub const PROBE_RETRIES: u32 = 10;
pub const PROBE_RETRY_DELAY_MS: u64 = 100;

/// The complete input layout.
///
/// Every pin named here must also be registered in the [`PinBank`]
/// constructed by `main` (checked at startup).
///
/// [`PinBank`]: crate::gpio::PinBank
pub static INPUT_SOURCES: [InputSource; 12] = [
    InputSource::Dpad {
        pins: [
            18, // Up
            19, // Right
            17, // Down
            16, // Left
        ],
    },
    InputSource::Digital { action: Buttons::SOUTH, pin: 7 },
    InputSource::Digital { action: Buttons::EAST, pin: 8 },
    InputSource::Digital { action: Buttons::NORTH, pin: 5 },
    InputSource::Digital { action: Buttons::WEST, pin: 6 },
    InputSource::Digital { action: Buttons::MODE, pin: 9 },
    InputSource::Digital { action: Buttons::SELECT, pin: 22 },
    InputSource::Digital { action: Buttons::START, pin: 26 },
    InputSource::Axis {
        axis: AxisId::LeftX,
        config: AxisConfig { channel: 2, invert: false },
    },
    InputSource::Axis {
        axis: AxisId::LeftY,
        config: AxisConfig { channel: 3, invert: true },
    },
    InputSource::Axis {
        axis: AxisId::RightX,
        config: AxisConfig { channel: 1, invert: false },
    },
    InputSource::Axis {
        axis: AxisId::RightY,
        config: AxisConfig { channel: 0, invert: false },
    },
];
