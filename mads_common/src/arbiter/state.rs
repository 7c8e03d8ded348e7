//! State enums for the arbitration core.
//!
//! All enums use a fixed `#[repr]` for compact memory layout and stable
//! exchange with the safety harness. Includes the tri-state button model,
//! edge transitions, the disengagement taxonomy, and the derived arbiter
//! phase.

use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;

// ─── Tri-State Button ───────────────────────────────────────────────

/// Sampled state of a vehicle toggle button.
///
/// `Unavailable` means the vehicle does not expose this control on the
/// current tick; it must be ignored for edge purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum ButtonState {
    /// Control not exposed by the vehicle.
    Unavailable = -1,
    /// Button released.
    NotPressed = 0,
    /// Button pressed.
    Pressed = 1,
}

impl ButtonState {
    /// Convert from a raw wire value. Out-of-range values are treated
    /// as `Unavailable`.
    #[inline]
    pub const fn from_raw(value: i8) -> Self {
        match value {
            0 => Self::NotPressed,
            1 => Self::Pressed,
            _ => Self::Unavailable,
        }
    }

    /// Whether the button is currently pressed.
    #[inline]
    pub const fn is_pressed(&self) -> bool {
        matches!(self, Self::Pressed)
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::Unavailable
    }
}

assert_eq_size!(ButtonState, i8);

// ─── Edge Transition ────────────────────────────────────────────────

/// Transition of a boolean signal between two consecutive ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Transition {
    /// No edge observed.
    NoChange = 0,
    /// false → true.
    Rising = 1,
    /// true → false.
    Falling = 2,
}

impl Transition {
    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::NoChange),
            1 => Some(Self::Rising),
            2 => Some(Self::Falling),
            _ => None,
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::NoChange
    }
}

// ─── Disengagement Taxonomy ─────────────────────────────────────────

/// Category of the event that last revoked the lateral grant.
///
/// Gates re-engagement (`Brake`) and feeds telemetry; the ledger keeps the
/// current and the immediately-previous reason, nothing older.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DisengageReason {
    /// No disengagement pending; set on successful grant.
    None = 0,
    /// Driver brake while the brake-disengage policy is active.
    Brake = 1,
    /// Driver toggled lateral control off.
    Button = 2,
    /// ACC main switch fell.
    AccMainOff = 3,
    /// Injected by the harness on stale input frames.
    Lag = 4,
}

impl DisengageReason {
    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Brake),
            2 => Some(Self::Button),
            3 => Some(Self::AccMainOff),
            4 => Some(Self::Lag),
            _ => None,
        }
    }
}

impl Default for DisengageReason {
    fn default() -> Self {
        Self::None
    }
}

assert_eq_size!(DisengageReason, u8);

// ─── Arbiter Phase ──────────────────────────────────────────────────

/// Derived view of the arbiter substate.
///
/// `Disabled` exits only via re-init; the other three cycle with the
/// request latch and the grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ArbiterPhase {
    /// System feature gate is off; all grants suppressed.
    Disabled = 0,
    /// Request latch clear, nothing pending.
    Idle = 1,
    /// Request latch set, grant blocked by a disengage reason.
    Requested = 2,
    /// Request latch set, grant held.
    Active = 3,
}

impl ArbiterPhase {
    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Disabled),
            1 => Some(Self::Idle),
            2 => Some(Self::Requested),
            3 => Some(Self::Active),
            _ => None,
        }
    }
}
