//! Raster printing session: handshake, cursor homing, drawing, done.

use super::sync::{sync_controller_tick, sync_position_tick, Handshake};
use super::ReportSource;
use crate::bitmap::Bitmap;
use crate::config::{Config, ConfigError};
use crate::indicator::{CompletionIndicator, NoIndicator};
use crate::printer::{Printer, SweepProgress};
use switch_proto::{Buttons, Report};

const HANDSHAKE: Handshake = Handshake {
    sync: Buttons(Buttons::L.raw() | Buttons::R.raw()),
    confirm: Buttons::A,
};

/// Lifecycle of a [`PrintSession`].
#[derive(Debug, Clone)]
pub enum PrintPhase<'a> {
    /// Handshake; `count` is the number of ticks spent so far.
    SyncController { count: u32 },
    /// Driving the canvas cursor into the top-left corner.
    SyncPosition { count: u32 },
    /// Sweeping the bitmap.
    Drawing(Printer<'a>),
    /// Terminal: neutral reports and the completion signal.
    Done,
}

impl PrintPhase<'_> {
    /// Short label for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SyncController { .. } => "SyncController",
            Self::SyncPosition { .. } => "SyncPosition",
            Self::Drawing(_) => "Drawing",
            Self::Done => "Done",
        }
    }
}

/// Prints one bitmap, then idles.
pub struct PrintSession<'a, I = NoIndicator> {
    config: Config,
    origin: Printer<'a>,
    phase: PrintPhase<'a>,
    indicator: I,
}

impl<'a> PrintSession<'a, NoIndicator> {
    /// Create a session without a completion indicator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OddZigZagWidth`] if the configured sweep cannot
    /// traverse `bitmap`.
    pub fn new(config: Config, bitmap: Bitmap<'a>) -> Result<Self, ConfigError> {
        Self::with_indicator(config, bitmap, NoIndicator)
    }
}

impl<'a, I: CompletionIndicator> PrintSession<'a, I> {
    /// Create a session that signals `indicator` on every tick once done.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OddZigZagWidth`] if the configured sweep cannot
    /// traverse `bitmap`.
    pub fn with_indicator(
        config: Config,
        bitmap: Bitmap<'a>,
        indicator: I,
    ) -> Result<Self, ConfigError> {
        let origin = Printer::new(bitmap, config.sweep_mode())?;
        Ok(Self {
            config,
            origin,
            phase: PrintPhase::SyncController { count: 0 },
            indicator,
        })
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> &PrintPhase<'a> {
        &self.phase
    }

    /// The active printer, while drawing.
    #[must_use]
    pub fn printer(&self) -> Option<&Printer<'a>> {
        match &self.phase {
            PrintPhase::Drawing(printer) => Some(printer),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn enter(&mut self, phase: PrintPhase<'a>) {
        #[cfg(feature = "defmt")]
        defmt::debug!("print: {} -> {}", self.phase.name(), phase.name());
        self.phase = phase;
    }
}

impl<I: CompletionIndicator> ReportSource for PrintSession<'_, I> {
    fn populate(&mut self, report: &mut Report) {
        match &mut self.phase {
            PrintPhase::SyncController { count } => {
                if sync_controller_tick(count, &self.config, HANDSHAKE, report) {
                    self.enter(PrintPhase::SyncPosition { count: 0 });
                }
            }
            PrintPhase::SyncPosition { count } => {
                if sync_position_tick(count, &self.config, report) {
                    // Fresh printer: cursor back at the origin, ink it right away.
                    let printer = self.origin.clone();
                    printer.ink(report);
                    self.enter(PrintPhase::Drawing(printer));
                }
            }
            PrintPhase::Drawing(printer) => {
                if printer.step(report) == SweepProgress::Finished {
                    report.clear();
                    #[cfg(feature = "defmt")]
                    defmt::info!("print finished");
                    self.enter(PrintPhase::Done);
                }
            }
            PrintPhase::Done => self.indicator.signal_completion(),
        }
    }

    fn is_finished(&self) -> bool {
        matches!(self.phase, PrintPhase::Done)
    }
}
