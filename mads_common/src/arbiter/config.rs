//! Arbiter configuration, consumed once at init.

use serde::{Deserialize, Serialize};

use super::flags::AltExperience;

/// The two configuration bits of the arbitration core.
///
/// Set by the safety harness at init, either directly or decoded from the
/// alternative-experience bitmask. Re-init replaces them wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MadsConfig {
    /// Overall feature gate; false suppresses every grant.
    pub enabled: bool,
    /// If false, a brake press never disengages lateral control.
    pub disengage_lateral_on_brake: bool,
}

impl MadsConfig {
    /// Build a config from explicit bits.
    #[inline]
    pub const fn new(enabled: bool, disengage_lateral_on_brake: bool) -> Self {
        Self {
            enabled,
            disengage_lateral_on_brake,
        }
    }

    /// Decode the config from the harness feature bitmask.
    #[inline]
    pub fn from_alt_experience(flags: AltExperience) -> Self {
        Self {
            enabled: flags.contains(AltExperience::ENABLE_MADS),
            disengage_lateral_on_brake: !flags
                .contains(AltExperience::DISABLE_DISENGAGE_LATERAL_ON_BRAKE),
        }
    }

    /// Decode the config from a raw bitmask word, ignoring unknown bits.
    #[inline]
    pub fn from_raw_alt_experience(bits: u32) -> Self {
        Self::from_alt_experience(AltExperience::from_bits_truncate(bits))
    }
}

impl Default for MadsConfig {
    /// Disabled, with the brake-disengage policy on.
    fn default() -> Self {
        Self {
            enabled: false,
            disengage_lateral_on_brake: true,
        }
    }
}
