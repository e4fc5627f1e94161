//! Platform-agnostic report generation for an emulated Switch controller.
//!
//! The crate turns either a scripted list of button presses or a 1-bit image
//! into the stream of input reports a USB transport sends to the console, one
//! report per poll tick. It performs no I/O and no allocation, so the same
//! code runs in the firmware and in host tests.
//!
//! # Overview
//!
//! - [`timing`]: converts milliseconds into report ticks ([`ticks_for`])
//! - [`config`]: echo factor, poll interval and sweep mode ([`Config`])
//! - [`sequencer`]: walks a list of [`Step`]s ([`Sequencer`])
//! - [`bitmap`]: read-only bit grid ([`Bitmap`])
//! - [`printer`]: simple and zig-zag traversal of a bitmap ([`Printer`])
//! - [`session`]: lifecycle state machines ([`MacroSession`], [`PrintSession`])
//! - [`echo`]: retransmits every fresh report ([`EchoLayer`])
//! - [`output`]: transport-facing sink trait ([`OutputSink`])
//! - [`indicator`]: completion side channel ([`CompletionIndicator`])
//! - [`pump`]: drives the echo layer into a sink ([`ReportPump`])
//!
//! # Example
//!
//! ```rust
//! use fightstick_core::{Action, Config, EchoLayer, MacroSession, Step, SweepMode};
//!
//! static STEPS: &[Step] = &[Step::new(Action::A, 5), Step::new(Action::Nothing, 1)];
//!
//! let config = Config::new(2, 8, SweepMode::Simple).unwrap();
//! let mut echo = EchoLayer::new(MacroSession::new(config, STEPS), config.echo_factor());
//!
//! let first = echo.next_report();
//! assert_eq!(echo.next_report(), first);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and phase-transition logging

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod bitmap;
pub mod config;
pub mod echo;
pub mod indicator;
pub mod output;
pub mod printer;
pub mod pump;
pub mod sequencer;
pub mod session;
pub mod timing;

// Re-export main types at crate root
pub use bitmap::{BitOrder, Bitmap, BitmapError};
pub use config::{Config, ConfigError, SweepMode};
pub use echo::EchoLayer;
pub use indicator::{CompletionIndicator, NoIndicator};
pub use output::{OutputError, OutputSink};
pub use printer::{zigzag_direction, zigzag_pattern_len, Cursor, Printer, SweepProgress};
pub use pump::ReportPump;
pub use sequencer::{Action, Progress, Sequencer, Step};
pub use session::{MacroPhase, MacroSession, PrintPhase, PrintSession, ReportSource};
pub use switch_proto::{Buttons, Hat, Report, Stick, STICK_CENTER, STICK_MAX, STICK_MIN};
pub use timing::{effective_poll_ms, ticks_for, POLL_GRANULARITY_MS};
