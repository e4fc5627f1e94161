//! Nintendo Switch fightstick emulator for RP2040.
//!
//! The board enumerates as a HORI Pokken pad and plays one payload, chosen at
//! build time: the `macro` feature replays a scripted step list forever, the
//! `printer` feature draws the embedded image onto the console's drawing
//! canvas and then blinks the on-board LED.

#![no_std]

#[cfg(all(feature = "macro", feature = "printer"))]
compile_error!("features `macro` and `printer` are mutually exclusive");
#[cfg(not(any(feature = "macro", feature = "printer")))]
compile_error!("enable one of the `macro` or `printer` features");

// Re-export core types for convenience
pub use fightstick_core::{
    Action, Bitmap, BitmapError, CompletionIndicator, Config, ConfigError, EchoLayer,
    MacroSession, OutputError, OutputSink, PrintSession, ReportPump, ReportSource, Step,
    SweepMode,
};

pub mod payload;
pub mod status;
pub mod usb_output;

pub use payload::{PayloadError, CONFIG};
pub use status::{CompletionFlag, LedIndicator};
pub use usb_output::{configure_usb_hid, OutputReportHandler, UsbHidOutput};
