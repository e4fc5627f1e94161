//! Output sink trait and error types.

use core::fmt;
use core::future::Future;
use switch_proto::Report;

/// Error type for output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// USB/communication I/O error.
    Io,
    /// Device not ready (e.g., USB not enumerated).
    NotReady,
    /// Host went away (e.g., cable pulled or console suspended the port).
    Disconnected,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => f.write_str("I/O error on the report endpoint"),
            Self::NotReady => f.write_str("device not configured by the host"),
            Self::Disconnected => f.write_str("host disconnected"),
        }
    }
}

/// Async trait for report sinks.
///
/// Abstracts the transport that carries input reports to the console. The
/// firmware implements it over a USB HID interrupt endpoint; tests record
/// into a vector.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait OutputSink {
    /// Send one input report.
    ///
    /// Completes once the host has picked the report up, which paces the
    /// caller at the host's polling interval.
    fn send(&mut self, report: &Report) -> impl Future<Output = Result<(), OutputError>>;

    /// Wait until the host can receive reports (e.g., USB enumerated).
    fn wait_ready(&mut self) -> impl Future<Output = ()>;

    /// Check if the output is ready to accept data.
    fn is_ready(&self) -> bool;
}
