//! # MADS Lateral-Control Arbitration Core
//!
//! Decides, on every control tick, whether the driver-assistance system may
//! actuate the vehicle's steering independently of its throttle/brake. The
//! core reconciles three asynchronous signal sources (a toggle button, the
//! ACC main switch, brake pressure), tracks the reason for each
//! disengagement, and produces an idempotent verdict with strict priority
//! and edge-detection rules.
//!
//! ## Architecture
//!
//! 1. **Edge detector** — boolean/tri-state inputs → rising/falling edges
//! 2. **Input tracker** — last observed value + last transition per signal
//! 3. **Disengage ledger** — current/previous reason, re-engagement gate
//! 4. **Arbiter** — the per-tick protocol over request latch and grant
//!
//! ## Totality
//!
//! The arbiter cannot fail: every input combination is defined, every
//! operation is infallible, and `tick` executes to completion with no
//! allocation, suspension, or I/O. The only `Result`-bearing surface in
//! this crate is TOML configuration loading for the harness binary.

pub mod arbiter;
pub mod config;
pub mod edge;
pub mod ledger;
pub mod tracker;
