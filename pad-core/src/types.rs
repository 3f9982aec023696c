//! Core gamepad types: Buttons, HatState, AnalogStick, GamepadReport.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Button state represented as a bitfield for efficiency.
///
/// Supports up to 16 buttons. The named constants follow the usual HID
/// gamepad bit layout (south/east/north/west face buttons, shoulders,
/// select/start/mode, stick clicks), so a report's bitmask can be sent to
/// the host without translation.
///
/// # Example
///
/// ```
/// use pad_core::Buttons;
///
/// let buttons = Buttons::SOUTH | Buttons::START;
/// assert!(buttons.contains(Buttons::SOUTH));
/// assert!(!buttons.contains(Buttons::EAST));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u16);

impl Buttons {
    pub const SOUTH: Self = Self(1 << 0); // A
    pub const EAST: Self = Self(1 << 1); // B
    pub const NORTH: Self = Self(1 << 3); // X
    pub const WEST: Self = Self(1 << 4); // Y
    pub const TL: Self = Self(1 << 6); // Left shoulder
    pub const TR: Self = Self(1 << 7); // Right shoulder
    pub const SELECT: Self = Self(1 << 10);
    pub const START: Self = Self(1 << 11);
    pub const MODE: Self = Self(1 << 12); // Guide/Home
    pub const THUMBL: Self = Self(1 << 13); // Left stick press
    pub const THUMBR: Self = Self(1 << 14); // Right stick press

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: Buttons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Set or clear button(s).
    #[inline]
    pub fn set(&mut self, button: Buttons, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    /// Get the raw u16 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Buttons {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Buttons {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Buttons {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// Identifies one of the four analog axis slots in a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AxisId {
    LeftX = 0,
    LeftY = 1,
    RightX = 2,
    RightY = 3,
}

/// Directional pad state: centered or one of the 8 compass directions.
///
/// The discriminants follow the HID hat-switch convention (1 = up,
/// clockwise through 8 = up-left, 0 = null/centered), so [`Self::to_wire`]
/// is a plain cast.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HatState {
    #[default]
    Centered = 0,
    Up = 1,
    UpRight = 2,
    Right = 3,
    DownRight = 4,
    Down = 5,
    DownLeft = 6,
    Left = 7,
    UpLeft = 8,
}

impl HatState {
    /// Resolve four pressed flags (up, right, down, left) to one hat state.
    ///
    /// Precedence is fixed: up/down win over left/right, and on a diagonal
    /// the left pin is checked before the right one. Contradictory
    /// combinations (up+down pressed together) cannot occur with a single
    /// 4-pin pad but still resolve deterministically through the same order.
    #[must_use]
    pub const fn from_pressed(up: bool, right: bool, down: bool, left: bool) -> Self {
        if up {
            if left {
                Self::UpLeft
            } else if right {
                Self::UpRight
            } else {
                Self::Up
            }
        } else if down {
            if left {
                Self::DownLeft
            } else if right {
                Self::DownRight
            } else {
                Self::Down
            }
        } else if left {
            Self::Left
        } else if right {
            Self::Right
        } else {
            Self::Centered
        }
    }

    /// HID hat-switch encoding of this state.
    #[inline]
    #[must_use]
    pub const fn to_wire(self) -> u8 {
        self as u8
    }
}

/// Analog stick with X/Y axes.
///
/// Range: [-128, 127], centered at 0.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogStick {
    pub x: i8,
    pub y: i8,
}

impl AnalogStick {
    pub const NEUTRAL: Self = Self { x: 0, y: 0 };
}

/// Complete gamepad report for one polling tick.
///
/// Contains all inputs for the device:
/// - 16 buttons (bitfield)
/// - directional pad (hat state)
/// - 2 analog sticks (left/right, each with X/Y)
///
/// A report is constructed fresh each tick, filled in by the assembler and
/// then handed off to the output sink; no report survives across ticks.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadReport {
    pub buttons: Buttons,
    pub hat: HatState,
    pub left_stick: AnalogStick,
    pub right_stick: AnalogStick,
}

impl GamepadReport {
    /// Create a neutral report (no buttons pressed, hat centered, sticks at 0).
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            buttons: Buttons::NONE,
            hat: HatState::Centered,
            left_stick: AnalogStick::NEUTRAL,
            right_stick: AnalogStick::NEUTRAL,
        }
    }

    /// Write one axis slot.
    #[inline]
    pub fn set_axis(&mut self, axis: AxisId, value: i8) {
        match axis {
            AxisId::LeftX => self.left_stick.x = value,
            AxisId::LeftY => self.left_stick.y = value,
            AxisId::RightX => self.right_stick.x = value,
            AxisId::RightY => self.right_stick.y = value,
        }
    }

    /// Read one axis slot.
    #[inline]
    #[must_use]
    pub const fn axis(&self, axis: AxisId) -> i8 {
        match axis {
            AxisId::LeftX => self.left_stick.x,
            AxisId::LeftY => self.left_stick.y,
            AxisId::RightX => self.right_stick.x,
            AxisId::RightY => self.right_stick.y,
        }
    }

    /// Check if nothing is pressed and all axes are centered.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_set_clear() {
        let mut buttons = Buttons::NONE;
        buttons.set(Buttons::SOUTH, true);
        assert!(buttons.contains(Buttons::SOUTH));
        buttons.set(Buttons::SOUTH, false);
        assert!(buttons.is_empty());
    }

    #[test]
    fn test_buttons_bitwise_or() {
        let buttons = Buttons::SOUTH | Buttons::MODE;
        assert!(buttons.contains(Buttons::SOUTH));
        assert!(buttons.contains(Buttons::MODE));
        assert!(!buttons.contains(Buttons::EAST));
        assert_eq!(buttons.raw(), (1 << 0) | (1 << 12));
    }

    #[test]
    fn test_hat_idle_is_centered() {
        assert_eq!(HatState::from_pressed(false, false, false, false), HatState::Centered);
    }

    #[test]
    fn test_hat_single_directions() {
        assert_eq!(HatState::from_pressed(true, false, false, false), HatState::Up);
        assert_eq!(HatState::from_pressed(false, true, false, false), HatState::Right);
        assert_eq!(HatState::from_pressed(false, false, true, false), HatState::Down);
        assert_eq!(HatState::from_pressed(false, false, false, true), HatState::Left);
    }

    #[test]
    fn test_hat_diagonals() {
        assert_eq!(HatState::from_pressed(true, false, false, true), HatState::UpLeft);
        assert_eq!(HatState::from_pressed(true, true, false, false), HatState::UpRight);
        assert_eq!(HatState::from_pressed(false, false, true, true), HatState::DownLeft);
        assert_eq!(HatState::from_pressed(false, true, true, false), HatState::DownRight);
    }

    #[test]
    fn test_hat_precedence_up_wins() {
        // up + down + left + right: up is checked first, then left before right
        assert_eq!(HatState::from_pressed(true, true, true, true), HatState::UpLeft);
        // down + left + right without up: down wins, left before right
        assert_eq!(HatState::from_pressed(false, true, true, true), HatState::DownLeft);
        // left + right without up/down: left wins
        assert_eq!(HatState::from_pressed(false, true, false, true), HatState::Left);
    }

    #[test]
    fn test_hat_wire_encoding() {
        assert_eq!(HatState::Centered.to_wire(), 0);
        assert_eq!(HatState::Up.to_wire(), 1);
        assert_eq!(HatState::DownRight.to_wire(), 4);
        assert_eq!(HatState::UpLeft.to_wire(), 8);
    }

    #[test]
    fn test_report_axis_slots() {
        let mut report = GamepadReport::neutral();
        assert!(report.is_neutral());

        report.set_axis(AxisId::LeftY, -100);
        report.set_axis(AxisId::RightX, 42);
        assert_eq!(report.left_stick.y, -100);
        assert_eq!(report.right_stick.x, 42);
        assert_eq!(report.axis(AxisId::LeftY), -100);
        assert_eq!(report.axis(AxisId::LeftX), 0);
        assert!(!report.is_neutral());
    }
}
