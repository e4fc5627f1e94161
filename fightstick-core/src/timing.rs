//! Conversion from wall-clock durations to report ticks.
//!
//! Budgets divide by `echo_factor` and by the poll interval, which the
//! transport only guarantees in multiples of [`POLL_GRANULARITY_MS`]. A
//! logical report occupies `echo_factor + 1` polls on the wire, so a phase
//! runs `(echo_factor + 1) / echo_factor` times its nominal duration. Every
//! phase budget in the sessions is derived here so elapsed time has a single
//! definition.

/// Smallest poll interval the transport honours, in milliseconds.
pub const POLL_GRANULARITY_MS: u32 = 8;

/// Poll interval rounded to the transport granularity, never below it.
///
/// ```
/// use fightstick_core::effective_poll_ms;
///
/// assert_eq!(effective_poll_ms(1), 8);
/// assert_eq!(effective_poll_ms(15), 8);
/// assert_eq!(effective_poll_ms(16), 16);
/// ```
#[inline]
#[must_use]
pub const fn effective_poll_ms(poll_interval_ms: u8) -> u32 {
    let poll = poll_interval_ms as u32;
    let poll = if poll > POLL_GRANULARITY_MS {
        poll
    } else {
        POLL_GRANULARITY_MS
    };
    poll / POLL_GRANULARITY_MS * POLL_GRANULARITY_MS
}

/// Number of fresh reports covering `ms` milliseconds.
///
/// Computed as `ms / echo_factor / effective_poll_ms(poll_interval_ms)` with
/// floor division at each step. Transitions derived from it may fire up to
/// one tick early. An echo factor of zero is treated as one.
///
/// ```
/// use fightstick_core::ticks_for;
///
/// assert_eq!(ticks_for(2000, 2, 8), 125);
/// assert_eq!(ticks_for(1500, 2, 8), 93);
/// ```
#[inline]
#[must_use]
pub const fn ticks_for(ms: u32, echo_factor: u8, poll_interval_ms: u8) -> u32 {
    let echo = if echo_factor == 0 { 1 } else { echo_factor as u32 };
    ms / echo / effective_poll_ms(poll_interval_ms)
}
