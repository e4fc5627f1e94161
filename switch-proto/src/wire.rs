//! Byte packing for input and output reports.

use crate::types::{Buttons, Hat, OutputReport, Report, Stick};

/// Size of an input report on the wire.
pub const REPORT_SIZE: usize = 8;

/// Size of an output report on the wire.
pub const OUTPUT_REPORT_SIZE: usize = 8;

/// Error type for decoding reports from bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// The buffer is not exactly one report long.
    Length,
    /// The hat byte is outside `0..=8`.
    Hat,
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Length => write!(f, "invalid report length"),
            Self::Hat => write!(f, "invalid hat value"),
        }
    }
}

impl Report {
    /// Pack the report into its 8-byte wire form. The vendor byte is zero.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; REPORT_SIZE] {
        let buttons = self.buttons.raw().to_le_bytes();
        [
            buttons[0],
            buttons[1],
            self.hat.raw(),
            self.left_stick.x,
            self.left_stick.y,
            self.right_stick.x,
            self.right_stick.y,
            0,
        ]
    }

    /// Unpack a report from its wire form, ignoring the vendor byte.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Length`] for a buffer that is not
    /// [`REPORT_SIZE`] bytes and [`DecodeError::Hat`] for an unknown hat value.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let bytes: &[u8; REPORT_SIZE] = bytes.try_into().map_err(|_| DecodeError::Length)?;
        let hat = Hat::from_raw(bytes[2]).ok_or(DecodeError::Hat)?;
        Ok(Self {
            buttons: Buttons(u16::from_le_bytes([bytes[0], bytes[1]])),
            hat,
            left_stick: Stick::new(bytes[3], bytes[4]),
            right_stick: Stick::new(bytes[5], bytes[6]),
        })
    }
}

impl OutputReport {
    /// Copy an output report out of a received packet.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Length`] if the packet is not
    /// [`OUTPUT_REPORT_SIZE`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let bytes: [u8; OUTPUT_REPORT_SIZE] =
            bytes.try_into().map_err(|_| DecodeError::Length)?;
        Ok(Self(bytes))
    }
}
