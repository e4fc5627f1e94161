//! Completion flag shared between the report pump and the LED task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use fightstick_core::CompletionIndicator;
use portable_atomic::{AtomicBool, Ordering};

/// One-shot latch raised when the print has finished.
///
/// The printing session signals completion on every tick once done; only the
/// first call wakes the waiter.
pub struct CompletionFlag {
    raised: AtomicBool,
    signal: Signal<CriticalSectionRawMutex, ()>,
}

impl CompletionFlag {
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
            signal: Signal::new(),
        }
    }

    /// Raise the flag. Idempotent.
    pub fn raise(&self) {
        if !self.raised.swap(true, Ordering::AcqRel) {
            self.signal.signal(());
        }
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Wait until the flag has been raised.
    pub async fn wait(&self) {
        if !self.is_raised() {
            self.signal.wait().await;
        }
    }
}

impl Default for CompletionFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Completion indicator that raises a static [`CompletionFlag`].
#[derive(Clone, Copy)]
pub struct LedIndicator {
    flag: &'static CompletionFlag,
}

impl LedIndicator {
    pub const fn new(flag: &'static CompletionFlag) -> Self {
        Self { flag }
    }
}

impl CompletionIndicator for LedIndicator {
    fn signal_completion(&mut self) {
        self.flag.raise();
    }
}
