//! Handshake and homing ticks shared by both sessions.

use crate::config::Config;
use switch_proto::{Buttons, Report, Stick, STICK_MIN};

/// Length of the controller-sync handshake.
pub(crate) const SYNC_CONTROLLER_MS: u32 = 2000;
/// Length of the cursor-homing phase.
pub(crate) const SYNC_POSITION_MS: u32 = 4000;

/// Buttons pressed during the controller-sync handshake.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Handshake {
    /// Pressed at the 25 % and 50 % marks.
    pub sync: Buttons,
    /// Pressed at the 75 % and 100 % marks.
    pub confirm: Buttons,
}

/// Button that clears the drawing canvas.
pub(crate) const CLEAR_BUTTON: Buttons = Buttons::MINUS;

/// One tick of the controller-sync handshake.
///
/// Returns `true`, leaving the report neutral and resetting `count`, once the
/// count has passed the phase budget.
pub(crate) fn sync_controller_tick(
    count: &mut u32,
    config: &Config,
    handshake: Handshake,
    report: &mut Report,
) -> bool {
    if *count > config.ticks_for(SYNC_CONTROLLER_MS) {
        *count = 0;
        return true;
    }

    if *count == config.ticks_for(500) || *count == config.ticks_for(1000) {
        report.buttons |= handshake.sync;
    } else if *count == config.ticks_for(1500) || *count == config.ticks_for(2000) {
        report.buttons |= handshake.confirm;
    }
    *count += 1;
    false
}

/// One tick of cursor homing: full up-left on the left stick, clearing the
/// canvas at the 37.5 % and 75 % marks.
///
/// Returns `true`, leaving the report neutral and resetting `count`, once the
/// count has passed the phase budget.
pub(crate) fn sync_position_tick(count: &mut u32, config: &Config, report: &mut Report) -> bool {
    if *count > config.ticks_for(SYNC_POSITION_MS) {
        *count = 0;
        return true;
    }

    report.left_stick = Stick::new(STICK_MIN, STICK_MIN);
    if *count == config.ticks_for(1500) || *count == config.ticks_for(3000) {
        report.buttons |= CLEAR_BUTTON;
    }
    *count += 1;
    false
}
