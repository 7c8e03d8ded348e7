//! Integration test: brake interaction policy.
//!
//! A fresh brake press, or any braking while moving, revokes the grant;
//! a brake held at standstill does not re-trigger; release re-engages on
//! the same tick when the request latch survived.

use mads_arbiter::arbiter::MadsArbiter;
use mads_common::arbiter::config::MadsConfig;
use mads_common::arbiter::state::DisengageReason;

use super::{enabled_arbiter, engage_via_main, tick};

#[test]
fn brake_while_moving_disengages_and_release_re_engages() {
    let mut arbiter = enabled_arbiter();
    engage_via_main(&mut arbiter);

    tick(&mut arbiter, true, true, false, true);
    assert!(!arbiter.lateral_allowed());
    assert_eq!(arbiter.current_disengage_reason(), DisengageReason::Brake);

    tick(&mut arbiter, true, false, false, true);
    assert!(arbiter.lateral_allowed());
    assert_eq!(arbiter.current_disengage_reason(), DisengageReason::None);
    assert_eq!(arbiter.previous_disengage_reason(), DisengageReason::Brake);
}

#[test]
fn brake_held_at_standstill_does_not_re_trigger() {
    let mut arbiter = enabled_arbiter();
    engage_via_main(&mut arbiter);

    tick(&mut arbiter, true, true, false, false);
    assert!(!arbiter.lateral_allowed());
    assert_eq!(arbiter.current_disengage_reason(), DisengageReason::Brake);

    // Holding the brake at a standstill is a steady state.
    for _ in 0..10 {
        tick(&mut arbiter, true, true, false, false);
        assert!(!arbiter.lateral_allowed());
        assert_eq!(arbiter.current_disengage_reason(), DisengageReason::Brake);
        assert_eq!(arbiter.previous_disengage_reason(), DisengageReason::None);
    }
}

#[test]
fn no_grant_while_brake_reason_holds() {
    let mut arbiter = enabled_arbiter();
    engage_via_main(&mut arbiter);
    tick(&mut arbiter, true, true, false, true);

    // While braking, no input combination may restore the grant.
    tick(&mut arbiter, true, true, true, true);
    assert!(!arbiter.lateral_allowed());
    tick(&mut arbiter, false, true, false, true);
    tick(&mut arbiter, true, true, false, true);
    assert!(!arbiter.lateral_allowed());

    // Only a tick with the brake released clears the block.
    tick(&mut arbiter, true, false, false, true);
    assert!(arbiter.lateral_allowed());
}

#[test]
fn main_rise_with_brake_rise_ends_brake_disengaged() {
    let mut arbiter = enabled_arbiter();
    tick(&mut arbiter, false, false, false, true);

    tick(&mut arbiter, true, true, false, true);
    assert!(!arbiter.lateral_allowed());
    assert_eq!(arbiter.current_disengage_reason(), DisengageReason::Brake);
}

#[test]
fn brake_policy_disabled_ignores_brake() {
    let mut arbiter = MadsArbiter::new(&MadsConfig::new(true, false));
    tick(&mut arbiter, false, false, false, true);
    tick(&mut arbiter, true, false, false, true);
    assert!(arbiter.lateral_allowed());

    for _ in 0..5 {
        tick(&mut arbiter, true, true, false, true);
        assert!(arbiter.lateral_allowed());
        assert_eq!(arbiter.current_disengage_reason(), DisengageReason::None);
    }
}

#[test]
fn rolling_brake_taps_disengage_each_time() {
    let mut arbiter = enabled_arbiter();
    engage_via_main(&mut arbiter);

    for _ in 0..3 {
        tick(&mut arbiter, true, true, false, true);
        assert!(!arbiter.lateral_allowed());
        tick(&mut arbiter, true, false, false, true);
        assert!(arbiter.lateral_allowed());
    }
}
