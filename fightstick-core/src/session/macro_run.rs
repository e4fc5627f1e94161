//! Scripted macro session: handshake, then the step list on repeat.

use super::sync::{sync_controller_tick, Handshake};
use super::ReportSource;
use crate::config::Config;
use crate::sequencer::{Progress, Sequencer, Step};
use switch_proto::{Buttons, Report};

const HANDSHAKE: Handshake = Handshake {
    sync: Buttons::L,
    confirm: Buttons::A,
};

/// Lifecycle of a [`MacroSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroPhase {
    /// Handshake; `count` is the number of ticks spent so far.
    SyncController { count: u32 },
    /// One idle report before the step list (re)starts.
    Breathe,
    /// Walking the step list.
    Process,
}

/// Runs a step list forever, with one idle tick between repetitions.
#[derive(Debug, Clone)]
pub struct MacroSession<'a> {
    config: Config,
    sequencer: Sequencer<'a>,
    phase: MacroPhase,
}

impl<'a> MacroSession<'a> {
    #[must_use]
    pub const fn new(config: Config, steps: &'a [Step]) -> Self {
        Self {
            config,
            sequencer: Sequencer::new(steps),
            phase: MacroPhase::SyncController { count: 0 },
        }
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> MacroPhase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub fn sequencer(&self) -> &Sequencer<'a> {
        &self.sequencer
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn enter(&mut self, phase: MacroPhase) {
        #[cfg(feature = "defmt")]
        defmt::debug!("macro: {} -> {}", self.phase, phase);
        self.phase = phase;
    }
}

impl ReportSource for MacroSession<'_> {
    fn populate(&mut self, report: &mut Report) {
        match &mut self.phase {
            MacroPhase::SyncController { count } => {
                if sync_controller_tick(count, &self.config, HANDSHAKE, report) {
                    self.enter(MacroPhase::Breathe);
                }
            }
            MacroPhase::Breathe => self.enter(MacroPhase::Process),
            MacroPhase::Process => {
                let progress = self.sequencer.apply(report);
                if progress == Progress::Exhausted || self.sequencer.is_exhausted() {
                    // The last step's final tick: keep its buttons, release the axes.
                    self.sequencer.reset();
                    report.center();
                    self.enter(MacroPhase::Breathe);
                }
            }
        }
    }
}
