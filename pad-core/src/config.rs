//! The input source registry: configured sources and construction-time
//! validation.

use crate::axis::AxisConfig;
use crate::input::ANALOG_CHANNELS;
use crate::types::{AxisId, Buttons};

/// Highest user GPIO number on the target (RP2040 bank 0).
pub const MAX_GPIO_PIN: u8 = 29;

/// One configured input source.
///
/// Each source owns a disjoint part of the report, so registry order does
/// not affect the result; it only has to be stable for deterministic
/// assembly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputSource {
    /// One physical pin setting one action bit.
    Digital { action: Buttons, pin: u8 },
    /// Four physical pins in fixed order: up, right, down, left.
    Dpad { pins: [u8; 4] },
    /// One analog channel feeding one axis slot.
    Axis { axis: AxisId, config: AxisConfig },
}

/// Error type for registry validation.
///
/// A malformed configuration is a startup-time contract violation; none of
/// these can occur mid-tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No directional pad configured (exactly one is required).
    NoDpad,
    /// More than one directional pad configured.
    MultipleDpads,
    /// GPIO pin number outside 0..=[`MAX_GPIO_PIN`].
    PinOutOfRange(u8),
    /// Analog channel outside the converter's 0..=3 range.
    ChannelOutOfRange(u8),
    /// Two axis sources read the same analog channel.
    DuplicateChannel(u8),
    /// Two sources write the same axis slot.
    DuplicateAxis(AxisId),
}

/// A validated, ordered, read-only input source registry.
///
/// Constructed once at startup from a fixed source table; there is no
/// runtime editing. Construction enforces the registry invariants:
/// exactly one [`InputSource::Dpad`], every pin within the GPIO range, and
/// analog channels unique and within the converter's range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputConfig<'a> {
    sources: &'a [InputSource],
}

impl<'a> InputConfig<'a> {
    /// Validate a source table and wrap it as a registry.
    pub fn new(sources: &'a [InputSource]) -> Result<Self, ConfigError> {
        let mut dpads = 0usize;
        let mut channels_seen = 0u8;
        let mut axes_seen = 0u8;

        for source in sources {
            match *source {
                InputSource::Digital { pin, .. } => check_pin(pin)?,
                InputSource::Dpad { pins } => {
                    dpads += 1;
                    for pin in pins {
                        check_pin(pin)?;
                    }
                }
                InputSource::Axis { axis, config } => {
                    if config.channel as usize >= ANALOG_CHANNELS {
                        return Err(ConfigError::ChannelOutOfRange(config.channel));
                    }
                    let channel_bit = 1u8 << config.channel;
                    if channels_seen & channel_bit != 0 {
                        return Err(ConfigError::DuplicateChannel(config.channel));
                    }
                    channels_seen |= channel_bit;

                    let axis_bit = 1u8 << axis as u8;
                    if axes_seen & axis_bit != 0 {
                        return Err(ConfigError::DuplicateAxis(axis));
                    }
                    axes_seen |= axis_bit;
                }
            }
        }

        match dpads {
            0 => Err(ConfigError::NoDpad),
            1 => Ok(Self { sources }),
            _ => Err(ConfigError::MultipleDpads),
        }
    }

    /// Iterate the sources in insertion order.
    pub fn sources(&self) -> impl Iterator<Item = &'a InputSource> {
        self.sources.iter()
    }

    /// Number of configured sources.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn check_pin(pin: u8) -> Result<(), ConfigError> {
    if pin > MAX_GPIO_PIN {
        Err(ConfigError::PinOutOfRange(pin))
    } else {
        Ok(())
    }
}
