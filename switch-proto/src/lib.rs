//! Report types and wire packing for a HORI Pokken Tournament pad.
//!
//! Since system update 3.0.0 the Nintendo Switch accepts this pad as a Pro
//! Controller, which makes it a convenient identity for an emulated
//! controller. This crate only models the reports:
//!
//! - **Types**: [`Buttons`], [`Hat`], [`Stick`], [`Report`], [`OutputReport`]
//! - **Wire format**: [`Report::to_bytes`] / [`Report::from_bytes`]
//!
//! # Input report layout (8 bytes)
//!
//! ```text
//! | 0..2    | 2   | 3  | 4  | 5  | 6  | 7      |
//! | buttons | hat | lx | ly | rx | ry | vendor |
//! ```
//!
//! Buttons are little-endian. The hat uses `0..=7` clockwise from up and `8`
//! for centered. Stick axes are unsigned with [`STICK_CENTER`] at rest.
//!
//! # Example
//!
//! ```
//! use switch_proto::{Buttons, Hat, Report};
//!
//! let mut report = Report::neutral();
//! report.buttons |= Buttons::A;
//! report.hat = Hat::Right;
//!
//! let bytes = report.to_bytes();
//! assert_eq!(bytes, [0x04, 0x00, 0x02, 128, 128, 128, 128, 0]);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod types;
pub mod wire;

pub use types::{Buttons, Hat, OutputReport, Report, Stick, STICK_CENTER, STICK_MAX, STICK_MIN};
pub use wire::{DecodeError, OUTPUT_REPORT_SIZE, REPORT_SIZE};
