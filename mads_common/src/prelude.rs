//! Prelude module for common re-exports.
//!
//! This module provides convenient re-exports of commonly used types
//! so that consumers can do `use mads_common::prelude::*;` and get
//! the most important types without listing individual paths.
//!
//! # Usage
//!
//! ```rust
//! use mads_common::prelude::*;
//! ```

// ─── States ─────────────────────────────────────────────────────────
pub use crate::arbiter::state::{ArbiterPhase, ButtonState, DisengageReason, Transition};

// ─── Flags ──────────────────────────────────────────────────────────
pub use crate::arbiter::flags::{AltExperience, StateFlags};

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::arbiter::config::MadsConfig;

// ─── System Constants ───────────────────────────────────────────────
pub use crate::consts::{TICK_PERIOD_US, TICK_RATE_HZ};
