//! Disengagement ledger.
//!
//! Records the current and the immediately-previous disengage reason and
//! gates re-engagement. Only `Brake` actively blocks a re-grant; every
//! other reason leaves re-engagement to the request latch.

use mads_common::arbiter::state::DisengageReason;

/// Current + previous disengage reason.
///
/// The ledger itself is mechanical: `record` and `clear` both shift
/// current into previous. First-cause-wins gating is the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisengageLedger {
    current: DisengageReason,
    previous: DisengageReason,
}

impl DisengageLedger {
    /// Create an empty ledger.
    pub const fn new() -> Self {
        Self {
            current: DisengageReason::None,
            previous: DisengageReason::None,
        }
    }

    /// Reason for the pending disengagement.
    #[inline]
    pub const fn current(&self) -> DisengageReason {
        self.current
    }

    /// Reason immediately prior to the current one.
    #[inline]
    pub const fn previous(&self) -> DisengageReason {
        self.previous
    }

    /// Record a new disengage reason, demoting the current one.
    #[inline]
    pub fn record(&mut self, reason: DisengageReason) {
        self.previous = self.current;
        self.current = reason;
    }

    /// Clear the pending reason on a successful grant, demoting it.
    #[inline]
    pub fn clear(&mut self) {
        self.previous = self.current;
        self.current = DisengageReason::None;
    }

    /// Whether the pending reason permits a re-grant.
    ///
    /// `Brake` clears only once the driver releases the brake while the
    /// brake-disengage policy is active (with the policy off, `Brake` is
    /// never recorded, so that branch is unreachable). Every other reason
    /// defers to the request latch.
    #[inline]
    pub const fn can_re_engage(
        &self,
        is_braking: bool,
        disengage_lateral_on_brake: bool,
    ) -> bool {
        match self.current {
            DisengageReason::Brake => !is_braking && disengage_lateral_on_brake,
            _ => true,
        }
    }
}
