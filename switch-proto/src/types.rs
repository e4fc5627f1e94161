//! Core report types: Buttons, Hat, Stick, Report, OutputReport.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Button state represented as a bitfield.
///
/// Bit positions follow the Pokken pad descriptor, which the Switch maps onto
/// the Pro Controller layout.
///
/// # Example
///
/// ```
/// use switch_proto::Buttons;
///
/// let buttons = Buttons::L | Buttons::R;
/// assert!(buttons.contains(Buttons::L));
/// assert!(!buttons.contains(Buttons::A));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u16);

impl Buttons {
    pub const Y: Self = Self(1 << 0);
    pub const B: Self = Self(1 << 1);
    pub const A: Self = Self(1 << 2);
    pub const X: Self = Self(1 << 3);
    pub const L: Self = Self(1 << 4);
    pub const R: Self = Self(1 << 5);
    pub const ZL: Self = Self(1 << 6);
    pub const ZR: Self = Self(1 << 7);
    pub const MINUS: Self = Self(1 << 8);
    pub const PLUS: Self = Self(1 << 9);
    pub const LCLICK: Self = Self(1 << 10); // Left stick press
    pub const RCLICK: Self = Self(1 << 11); // Right stick press
    pub const HOME: Self = Self(1 << 12);
    pub const CAPTURE: Self = Self(1 << 13);

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

/// Directional pad value: eight directions clockwise from up, plus centered.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Hat {
    Up = 0,
    UpRight = 1,
    Right = 2,
    DownRight = 3,
    Down = 4,
    DownLeft = 5,
    Left = 6,
    UpLeft = 7,
    #[default]
    Center = 8,
}

impl Hat {
    /// Raw wire value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Parse a raw wire value. Values above 8 are rejected.
    #[must_use]
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Up,
            1 => Self::UpRight,
            2 => Self::Right,
            3 => Self::DownRight,
            4 => Self::Down,
            5 => Self::DownLeft,
            6 => Self::Left,
            7 => Self::UpLeft,
            8 => Self::Center,
            _ => return None,
        })
    }

    /// Horizontal component: `1` for any rightward direction, `-1` for any
    /// leftward one, `0` otherwise.
    #[must_use]
    pub const fn dx(self) -> i32 {
        match self {
            Self::UpRight | Self::Right | Self::DownRight => 1,
            Self::UpLeft | Self::Left | Self::DownLeft => -1,
            _ => 0,
        }
    }

    /// Vertical component in screen coordinates: `-1` for up, `1` for down.
    #[must_use]
    pub const fn dy(self) -> i32 {
        match self {
            Self::UpLeft | Self::Up | Self::UpRight => -1,
            Self::DownLeft | Self::Down | Self::DownRight => 1,
            _ => 0,
        }
    }
}

/// Minimum stick axis value (full left / full up).
pub const STICK_MIN: u8 = 0;
/// Resting stick axis value.
pub const STICK_CENTER: u8 = 128;
/// Maximum stick axis value (full right / full down).
pub const STICK_MAX: u8 = 255;

/// Analog stick with X/Y axes in `[STICK_MIN, STICK_MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stick {
    pub x: u8,
    pub y: u8,
}

impl Stick {
    pub const CENTER: Self = Self {
        x: STICK_CENTER,
        y: STICK_CENTER,
    };

    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl Default for Stick {
    fn default() -> Self {
        Self::CENTER
    }
}

/// One input report sent to the host per poll tick.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    pub buttons: Buttons,
    pub hat: Hat,
    pub left_stick: Stick,
    pub right_stick: Stick,
}

impl Report {
    /// No buttons pressed, hat centered, both sticks at rest.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            buttons: Buttons::NONE,
            hat: Hat::Center,
            left_stick: Stick::CENTER,
            right_stick: Stick::CENTER,
        }
    }

    /// Reset every field to its neutral value.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::neutral();
    }

    /// Return the hat and both sticks to rest, keeping the buttons.
    #[inline]
    pub fn center(&mut self) {
        self.hat = Hat::Center;
        self.left_stick = Stick::CENTER;
        self.right_stick = Stick::CENTER;
    }

    /// Check whether the report carries no input at all.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }
}

/// Output report received from the host.
///
/// The Switch sends these but nothing in them is acted on.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputReport(pub [u8; 8]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_bitwise_or() {
        let buttons = Buttons::L | Buttons::R;
        assert!(buttons.contains(Buttons::L));
        assert!(buttons.contains(Buttons::R));
        assert!(buttons.contains(Buttons::L | Buttons::R));
        assert!(!buttons.contains(Buttons::A));
    }

    #[test]
    fn test_buttons_set_clear() {
        let mut buttons = Buttons::NONE;
        buttons.set(Buttons::MINUS, true);
        assert!(buttons.contains(Buttons::MINUS));
        buttons.set(Buttons::MINUS, false);
        assert!(buttons.is_empty());
    }

    #[test]
    fn test_pokken_bit_positions() {
        assert_eq!(Buttons::A.raw(), 0x0004);
        assert_eq!(Buttons::L.raw(), 0x0010);
        assert_eq!(Buttons::MINUS.raw(), 0x0100);
        assert_eq!(Buttons::CAPTURE.raw(), 0x2000);
    }

    #[test]
    fn test_hat_components() {
        assert_eq!((Hat::Right.dx(), Hat::Right.dy()), (1, 0));
        assert_eq!((Hat::UpLeft.dx(), Hat::UpLeft.dy()), (-1, -1));
        assert_eq!((Hat::DownRight.dx(), Hat::DownRight.dy()), (1, 1));
        assert_eq!((Hat::Center.dx(), Hat::Center.dy()), (0, 0));
    }

    #[test]
    fn test_hat_from_raw() {
        assert_eq!(Hat::from_raw(4), Some(Hat::Down));
        assert_eq!(Hat::from_raw(8), Some(Hat::Center));
        assert_eq!(Hat::from_raw(9), None);
    }

    #[test]
    fn test_report_neutral() {
        let report = Report::neutral();
        assert!(report.buttons.is_empty());
        assert_eq!(report.hat, Hat::Center);
        assert_eq!(report.left_stick, Stick::new(STICK_CENTER, STICK_CENTER));
        assert_eq!(report.right_stick, Stick::CENTER);
        assert_eq!(Report::default(), report);
    }

    #[test]
    fn test_report_center_keeps_buttons() {
        let mut report = Report::neutral();
        report.buttons |= Buttons::A;
        report.hat = Hat::DownLeft;
        report.right_stick = Stick::new(STICK_MAX, STICK_MIN);

        report.center();
        assert_eq!(report.buttons, Buttons::A);
        assert_eq!(report.hat, Hat::Center);
        assert_eq!(report.right_stick, Stick::CENTER);
    }

    #[test]
    fn test_report_clear() {
        let mut report = Report::neutral();
        report.buttons |= Buttons::HOME;
        report.hat = Hat::Left;
        report.left_stick = Stick::new(STICK_MIN, STICK_MAX);
        assert!(!report.is_neutral());

        report.clear();
        assert!(report.is_neutral());
    }
}
