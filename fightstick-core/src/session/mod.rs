//! Session state machines: one fresh report per call, from handshake to done.
//!
//! Both sessions start with the controller-sync handshake that makes the
//! console accept the pad, then hand over to their payload:
//!
//! - [`MacroSession`]: `SyncController → Breathe → Process → Breathe → …`
//! - [`PrintSession`]: `SyncController → SyncPosition → Drawing → Done`
//!
//! Sessions receive an already-neutral report and only touch the fields their
//! current phase owns.

mod macro_run;
mod print_run;
mod sync;

pub use macro_run::{MacroPhase, MacroSession};
pub use print_run::{PrintPhase, PrintSession};

use switch_proto::Report;

/// Producer of fresh reports, one per call.
pub trait ReportSource {
    /// Fill `report`, which the caller has reset to neutral, for the next tick.
    fn populate(&mut self, report: &mut Report);

    /// True once the source will only ever produce neutral reports.
    fn is_finished(&self) -> bool {
        false
    }
}
