//! Echo layer: every fresh report is followed by `echo_factor` replays.
//!
//! The console samples controller state slower than the USB poll rate, so a
//! report that appears on a single poll can be missed. The echo layer sits
//! between the transport and the session and replays each computed report
//! for `echo_factor` extra polls before asking for the next one.

use crate::session::ReportSource;
use switch_proto::Report;

/// Replays each report produced by `S` a fixed number of times.
pub struct EchoLayer<S> {
    source: S,
    last_report: Report,
    remaining: u8,
    echo_factor: u8,
}

impl<S: ReportSource> EchoLayer<S> {
    /// Wrap a report source. An echo factor of zero disables replays.
    pub fn new(source: S, echo_factor: u8) -> Self {
        Self {
            source,
            last_report: Report::neutral(),
            remaining: 0,
            echo_factor,
        }
    }

    /// Fill a transport-provided buffer with the report for this poll.
    ///
    /// The buffer is overwritten entirely; its previous contents never leak
    /// into the output.
    pub fn fill(&mut self, report: &mut Report) {
        if self.remaining > 0 {
            self.remaining -= 1;
            *report = self.last_report;
            return;
        }

        report.clear();
        self.source.populate(report);
        self.last_report = *report;
        self.remaining = self.echo_factor;
    }

    /// Produce the report for this poll.
    pub fn next_report(&mut self) -> Report {
        let mut report = Report::neutral();
        self.fill(&mut report);
        report
    }

    /// True while the next poll will replay the last report.
    #[inline]
    #[must_use]
    pub fn is_replaying(&self) -> bool {
        self.remaining > 0
    }

    /// The most recently computed report.
    #[inline]
    #[must_use]
    pub fn last_report(&self) -> &Report {
        &self.last_report
    }

    /// Get a reference to the wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the wrapped source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Decompose the layer into its source.
    pub fn into_inner(self) -> S {
        self.source
    }
}
