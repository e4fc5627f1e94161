//! Completion indicator hook for the printing session.

/// Notified once per tick after a print has finished.
///
/// Implementations are expected to be cheap; the firmware sets a flag that an
/// LED task picks up.
pub trait CompletionIndicator {
    fn signal_completion(&mut self);
}

/// Indicator that does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoIndicator;

impl CompletionIndicator for NoIndicator {
    #[inline]
    fn signal_completion(&mut self) {}
}
