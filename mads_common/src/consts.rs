//! System-wide timing constants.

/// Nominal arbitration tick rate [Hz].
///
/// One producer performs `tick` at this cadence; the arbiter itself holds
/// no timers.
pub const TICK_RATE_HZ: u32 = 100;

/// Nominal tick period [µs].
pub const TICK_PERIOD_US: u64 = 1_000_000 / TICK_RATE_HZ as u64;
