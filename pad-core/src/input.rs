//! Collaborator traits for reading digital pins and analog channels.

use core::future::Future;

/// Number of analog channels the converter provides.
pub const ANALOG_CHANNELS: usize = 4;

/// Error type for analog read operations.
///
/// Read errors are transient and recovered locally by the assembler; they
/// never abort a polling tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError {
    /// Bus I/O error.
    Io,
    /// Device did not acknowledge.
    Nack,
}

/// Synchronous digital pin reader.
///
/// Pins are inputs with pull-ups: `true` means electrically high (idle),
/// `false` means driven low (pressed). Pin initialization is the
/// implementor's responsibility and happens once before the first tick.
pub trait PinReader {
    /// Read the current level of the given GPIO pin.
    fn read_pin(&self, pin: u8) -> bool;
}

/// Async trait for the analog-to-digital converter collaborator.
///
/// This trait abstracts the converter peripheral, allowing different bus
/// implementations (or host-side mocks) to be used interchangeably.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait AnalogReader {
    /// Read a single channel sample.
    fn read_one(&mut self, channel: u8) -> impl Future<Output = Result<u8, ReadError>>;

    /// Read all channels in one batch; index *i* corresponds to channel *i*.
    fn read_all(&mut self) -> impl Future<Output = Result<[u8; ANALOG_CHANNELS], ReadError>>;

    /// Check if the converter answered its last transaction.
    fn is_connected(&self) -> bool;
}
