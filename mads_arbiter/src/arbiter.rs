//! Per-tick lateral-control arbitration.
//!
//! The arbiter reconciles the ACC main switch, two tri-state toggle
//! buttons, the longitudinal-enable hint, and brake pressure into a single
//! verdict: may the steering actuators be driven on this tick. The request
//! latch records that the driver asked for lateral control; the grant
//! records that the request is currently honored. A disengagement revokes
//! the grant and leaves a reason in the ledger; re-engagement is gated on
//! that reason.
//!
//! The state object is explicitly constructed and owned by the safety
//! harness; there is no process-wide singleton. `tick` is constant-time,
//! allocation-free, and infallible.

use mads_common::arbiter::config::MadsConfig;
use mads_common::arbiter::flags::StateFlags;
use mads_common::arbiter::state::{ArbiterPhase, ButtonState, DisengageReason, Transition};

use crate::edge::edge;
use crate::ledger::DisengageLedger;
use crate::tracker::{ButtonTracker, SignalTracker};

// ─── Tick Inputs ────────────────────────────────────────────────────

/// Pre-validated inputs sampled by the producer for one tick.
///
/// The tri-state buttons are posted separately via the setters before the
/// tick so per-vehicle translation layers can write them as their frames
/// arrive.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInputs {
    /// Vehicle is moving; sharpens the brake policy only.
    pub vehicle_moving: bool,
    /// ACC main switch ("cruise master").
    pub main_cruise: bool,
    /// Driver brake pressure.
    pub brake_pressed: bool,
    /// Host controller has granted longitudinal control.
    pub longitudinal_allowed: bool,
}

// ─── Arbiter State ──────────────────────────────────────────────────

/// The MADS arbitration state machine.
///
/// Created by [`MadsArbiter::new`], mutated exclusively by [`tick`],
/// [`force_disengage`], and the button setters, and replaced wholesale by
/// [`reinit`]. Consumers read the verdict via [`lateral_allowed`].
///
/// [`tick`]: MadsArbiter::tick
/// [`force_disengage`]: MadsArbiter::force_disengage
/// [`reinit`]: MadsArbiter::reinit
/// [`lateral_allowed`]: MadsArbiter::lateral_allowed
#[derive(Debug, Clone)]
pub struct MadsArbiter {
    // ── Configuration (set at init, immutable until re-init) ──
    system_enabled: bool,
    disengage_lateral_on_brake: bool,

    // ── Posted tri-state inputs (persist until re-posted) ──
    main_button_input: ButtonState,
    steering_toggle_input: ButtonState,

    // ── Signal trackers ──
    main_button: ButtonTracker,
    steering_toggle: ButtonTracker,
    acc_main: SignalTracker,
    longitudinal: SignalTracker,

    // ── Arbitration state ──
    is_braking: bool,
    controls_requested_lat: bool,
    controls_allowed_lat: bool,
    ledger: DisengageLedger,
    state_flags: StateFlags,
}

impl MadsArbiter {
    /// Create a zeroed arbiter with the given configuration bits.
    pub const fn new(config: &MadsConfig) -> Self {
        Self {
            system_enabled: config.enabled,
            disengage_lateral_on_brake: config.disengage_lateral_on_brake,
            main_button_input: ButtonState::Unavailable,
            steering_toggle_input: ButtonState::Unavailable,
            main_button: ButtonTracker::new(),
            steering_toggle: ButtonTracker::new(),
            acc_main: SignalTracker::new(),
            longitudinal: SignalTracker::new(),
            is_braking: false,
            controls_requested_lat: false,
            controls_allowed_lat: false,
            ledger: DisengageLedger::new(),
            state_flags: StateFlags::empty(),
        }
    }

    /// Discard all state and re-apply configuration. Safe at any time.
    pub fn reinit(&mut self, config: &MadsConfig) {
        *self = Self::new(config);
    }

    // ── Producer-side setters ───────────────────────────────────────

    /// Post the sampled main button value for the next tick.
    ///
    /// The value persists until re-posted.
    #[inline]
    pub fn set_main_button(&mut self, state: ButtonState) {
        self.main_button_input = state;
    }

    /// Post the sampled steering toggle value for the next tick.
    ///
    /// The value persists until re-posted.
    #[inline]
    pub fn set_steering_toggle(&mut self, state: ButtonState) {
        self.steering_toggle_input = state;
    }

    // ── Per-tick protocol ───────────────────────────────────────────

    /// Run one arbitration tick over the sampled inputs.
    ///
    /// No-op while the system is disabled; the only exit from that state
    /// is [`reinit`](Self::reinit).
    pub fn tick(&mut self, inputs: TickInputs) {
        if !self.system_enabled {
            return;
        }

        // 1. Transitions against the immediately-previous tick.
        let acc_main = self.acc_main.update(inputs.main_cruise);
        let longitudinal = self.longitudinal.update(inputs.longitudinal_allowed);

        if self.main_button_input != ButtonState::Unavailable {
            self.state_flags.insert(StateFlags::MAIN_BUTTON_AVAILABLE);
        }
        if self.steering_toggle_input != ButtonState::Unavailable {
            self.state_flags.insert(StateFlags::STEERING_TOGGLE_AVAILABLE);
        }
        let main_button = self.main_button.update(self.main_button_input);
        let steering_toggle = self.steering_toggle.update(self.steering_toggle_input);

        // 2. Request latch, in priority order: a simultaneous ACC-main-off
        //    and toggle press must still end disengaged. The toggles read
        //    the grant as it stood at the start of the tick, so two
        //    presses in one tick both mean "turn off", not off-then-on.
        let was_allowed = self.controls_allowed_lat;
        match acc_main {
            Transition::Rising => self.controls_requested_lat = true,
            Transition::Falling => {
                self.controls_requested_lat = false;
                self.exit_controls(DisengageReason::AccMainOff);
            }
            Transition::NoChange => {}
        }
        if main_button == Transition::Rising {
            self.toggle_request(was_allowed);
        }
        if steering_toggle == Transition::Rising {
            self.toggle_request(was_allowed);
        }
        if longitudinal == Transition::Rising {
            self.controls_requested_lat = true;
        }

        // 3. Brake interaction. Only a fresh press, or any braking while
        //    moving, counts; a brake held at standstill does not re-trigger.
        let was_braking = self.is_braking;
        if inputs.brake_pressed
            && (!was_braking || inputs.vehicle_moving)
            && self.disengage_lateral_on_brake
        {
            self.exit_controls(DisengageReason::Brake);
        }
        self.is_braking = inputs.brake_pressed;

        // 4. Grant attempt.
        if self.controls_requested_lat
            && !self.controls_allowed_lat
            && self
                .ledger
                .can_re_engage(self.is_braking, self.disengage_lateral_on_brake)
        {
            self.controls_allowed_lat = true;
            self.ledger.clear();
        }
    }

    /// Out-of-band disengagement (e.g. `Lag` when the harness detects
    /// stale frames). Retracts the request latch; re-engagement requires a
    /// fresh request edge.
    pub fn force_disengage(&mut self, reason: DisengageReason) {
        if !self.system_enabled {
            return;
        }
        self.controls_requested_lat = false;
        self.exit_controls(reason);
    }

    /// Revoke the grant, recording the cause.
    ///
    /// The first cause wins until re-engagement clears it: an existing
    /// reason is never overwritten, but a reason may land on an empty
    /// ledger so a brake pressed in the same tick as an engage request
    /// still blocks the grant.
    fn exit_controls(&mut self, reason: DisengageReason) {
        if self.controls_allowed_lat {
            self.ledger.record(reason);
            self.controls_allowed_lat = false;
        } else if self.ledger.current() == DisengageReason::None {
            self.ledger.record(reason);
        }
    }

    /// Toggle the request latch against the grant observed at tick start:
    /// press to turn off an actively engaged system, press to request
    /// otherwise.
    fn toggle_request(&mut self, was_allowed: bool) {
        self.controls_requested_lat = !was_allowed;
        if was_allowed {
            self.exit_controls(DisengageReason::Button);
        }
    }

    // ── Consumer queries ────────────────────────────────────────────

    /// The arbitration verdict: may lateral actuators be driven.
    #[inline]
    pub const fn lateral_allowed(&self) -> bool {
        self.system_enabled && self.controls_allowed_lat
    }

    /// Reason for the pending disengagement (telemetry; not for gating).
    #[inline]
    pub const fn current_disengage_reason(&self) -> DisengageReason {
        self.ledger.current()
    }

    /// Reason immediately prior to the current one (telemetry).
    #[inline]
    pub const fn previous_disengage_reason(&self) -> DisengageReason {
        self.ledger.previous()
    }

    /// Whether the driver's lateral request is currently latched.
    #[inline]
    pub const fn controls_requested_lat(&self) -> bool {
        self.controls_requested_lat
    }

    /// Brake state latched on the last tick.
    #[inline]
    pub const fn is_braking(&self) -> bool {
        self.is_braking
    }

    /// Overall feature gate.
    #[inline]
    pub const fn system_enabled(&self) -> bool {
        self.system_enabled
    }

    /// Button availability flags latched so far (telemetry).
    #[inline]
    pub const fn state_flags(&self) -> StateFlags {
        self.state_flags
    }

    /// Derived arbiter substate.
    #[inline]
    pub const fn phase(&self) -> ArbiterPhase {
        if !self.system_enabled {
            ArbiterPhase::Disabled
        } else if !self.controls_requested_lat {
            ArbiterPhase::Idle
        } else if self.controls_allowed_lat {
            ArbiterPhase::Active
        } else {
            ArbiterPhase::Requested
        }
    }

    /// This tick's brake edge, computed against the latched brake state.
    #[inline]
    pub fn brake_edge(&self, brake_pressed: bool) -> Transition {
        edge(brake_pressed, self.is_braking)
    }
}

impl Default for MadsArbiter {
    /// Disabled arbiter with the brake-disengage policy on.
    fn default() -> Self {
        Self::new(&MadsConfig::default())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
