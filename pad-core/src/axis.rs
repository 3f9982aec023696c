//! Raw ADC sample to signed axis value mapping.

/// Raw sample corresponding to a perfectly centered stick.
pub const NEUTRAL_RAW: u8 = 128;

/// Dead-zone half-width: centered values in the open interval
/// (-DEAD_ZONE, DEAD_ZONE) collapse to 0.
pub const DEAD_ZONE: i16 = 8;

/// Per-axis mapping configuration: which ADC channel feeds the axis and
/// whether the raw value is flipped before centering.
///
/// By default low raw values map to left/up (negative). Setting `invert`
/// flips the raw byte first, for sticks wired the other way around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisConfig {
    /// ADC channel index (0..=3).
    pub channel: u8,
    /// Flip the raw value before centering.
    pub invert: bool,
}

/// Map a raw 8-bit ADC sample to a signed axis value.
///
/// The transform is pure integer arithmetic, total over all byte inputs:
///
/// 1. Flip the raw byte if the axis is inverted.
/// 2. Center on 128, yielding [-128, 127].
/// 3. Collapse the dead zone (-8, 8) exclusive to exactly 0, so an idle
///    stick reports neutral despite ADC noise.
///
/// # Example
///
/// ```
/// use pad_core::{map_axis, AxisConfig};
///
/// let cfg = AxisConfig { channel: 0, invert: false };
/// assert_eq!(map_axis(128, cfg), 0);   // center
/// assert_eq!(map_axis(135, cfg), 0);   // inside dead zone
/// assert_eq!(map_axis(136, cfg), 8);   // first value outside
/// assert_eq!(map_axis(0, cfg), -128);  // full deflection
/// ```
#[must_use]
pub fn map_axis(raw: u8, config: AxisConfig) -> i8 {
    let effective = if config.invert { 255 - raw } else { raw };
    let centered = effective as i16 - 128;
    if centered > -DEAD_ZONE && centered < DEAD_ZONE {
        0
    } else {
        centered as i8
    }
}
