//! # MADS Common Library
//!
//! This crate provides the shared vocabulary types for the MADS workspace:
//! the tri-state button model, edge transitions, the disengagement taxonomy,
//! feature/availability bitflags, and the arbiter configuration.
//!
//! # Module Structure
//!
//! - [`arbiter`] - Arbitration core types (states, flags, configuration)
//! - [`consts`] - System-wide timing constants
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! mads_common = { path = "../mads_common" }
//! ```
//!
//! Then import:
//! ```rust
//! use mads_common::prelude::*;
//! ```

pub mod arbiter;
pub mod consts;
pub mod prelude;
