//! Bitflag words exchanged with the safety harness.
//!
//! `AltExperience` is the harness-side feature bitmask consumed once at
//! init; `StateFlags` is the runtime availability word reported back for
//! telemetry.

use bitflags::bitflags;

bitflags! {
    /// Alternative-experience feature bitmask set by the safety harness.
    ///
    /// Only the two MADS bits are interpreted here; the remaining bits
    /// belong to other subsystems and are ignored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AltExperience: u32 {
        /// Permit lateral control independently of longitudinal control.
        const ENABLE_MADS = 1024;
        /// Invert the default brake-disengage policy.
        const DISABLE_DISENGAGE_LATERAL_ON_BRAKE = 2048;
    }
}

impl Default for AltExperience {
    fn default() -> Self {
        Self::empty()
    }
}

bitflags! {
    /// Runtime availability flags, latched as the producer posts inputs.
    ///
    /// Telemetry only; never consulted by the arbitration rules.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StateFlags: u32 {
        const RESERVED = 1;
        /// A non-unavailable main button value has been posted.
        const MAIN_BUTTON_AVAILABLE = 1 << 1;
        /// A non-unavailable steering toggle value has been posted.
        const STEERING_TOGGLE_AVAILABLE = 1 << 2;
    }
}

impl Default for StateFlags {
    fn default() -> Self {
        Self::empty()
    }
}
