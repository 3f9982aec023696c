//! Pull-up GPIO inputs keyed by pin number.

use embassy_rp::gpio::Input;
use heapless::Vec;
use pad_core::PinReader;

/// Capacity of the pin bank; the board uses 11 input pins.
pub const MAX_INPUT_PINS: usize = 16;

/// A fixed table of configured input pins, looked up by GPIO number.
///
/// Built once at startup; every pin the input table names must be added
/// here before the first polling tick.
pub struct PinBank {
    pins: Vec<(u8, Input<'static>), MAX_INPUT_PINS>,
}

impl PinBank {
    #[must_use]
    pub const fn new() -> Self {
        Self { pins: Vec::new() }
    }

    /// Register a configured input under its GPIO number.
    ///
    /// Panics if the bank is full; the board table is fixed, so this can
    /// only trip when the firmware wiring table grows past
    /// [`MAX_INPUT_PINS`].
    pub fn add(&mut self, gpio: u8, input: Input<'static>) {
        if self.pins.push((gpio, input)).is_err() {
            defmt::panic!("pin bank full, raise MAX_INPUT_PINS");
        }
    }

    /// Check whether a GPIO number is registered.
    #[must_use]
    pub fn contains(&self, gpio: u8) -> bool {
        self.pins.iter().any(|(number, _)| *number == gpio)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

impl Default for PinBank {
    fn default() -> Self {
        Self::new()
    }
}

impl PinReader for PinBank {
    /// Read the level of a registered pin. Unregistered pins read as idle
    /// (high), matching the pull-up wiring.
    fn read_pin(&self, pin: u8) -> bool {
        self.pins
            .iter()
            .find(|(number, _)| *number == pin)
            .map(|(_, input)| input.is_high())
            .unwrap_or(true)
    }
}
