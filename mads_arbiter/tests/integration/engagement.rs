//! Integration test: engagement and disengagement paths.
//!
//! Walks the request latch through every engagement source (ACC main,
//! steering toggle, main button, longitudinal hint) and checks the
//! disengage reason trail a telemetry reader would observe.

use mads_common::arbiter::state::{ArbiterPhase, ButtonState, DisengageReason};

use super::{enabled_arbiter, engage_via_main, tick};

#[test]
fn main_switch_engages_then_disengages() {
    let mut arbiter = enabled_arbiter();

    tick(&mut arbiter, false, false, false, false);
    assert!(!arbiter.lateral_allowed());

    tick(&mut arbiter, true, false, false, false);
    assert!(arbiter.lateral_allowed());
    assert_eq!(arbiter.current_disengage_reason(), DisengageReason::None);

    tick(&mut arbiter, false, false, false, false);
    assert!(!arbiter.lateral_allowed());
    assert!(!arbiter.controls_requested_lat());
    assert_eq!(arbiter.current_disengage_reason(), DisengageReason::AccMainOff);
}

#[test]
fn longitudinal_grant_also_engages_lateral() {
    let mut arbiter = enabled_arbiter();
    tick(&mut arbiter, false, false, false, true);
    tick(&mut arbiter, false, false, true, true);
    assert!(arbiter.lateral_allowed());
}

#[test]
fn held_main_produces_no_second_engagement() {
    let mut arbiter = enabled_arbiter();
    engage_via_main(&mut arbiter);

    // Toggle off while main stays high; the held switch must not
    // re-request on its own.
    arbiter.set_steering_toggle(ButtonState::Pressed);
    tick(&mut arbiter, true, false, false, true);
    assert!(!arbiter.lateral_allowed());
    assert_eq!(arbiter.current_disengage_reason(), DisengageReason::Button);

    arbiter.set_steering_toggle(ButtonState::NotPressed);
    for _ in 0..5 {
        tick(&mut arbiter, true, false, false, true);
        assert!(!arbiter.lateral_allowed());
    }
}

#[test]
fn toggle_cycle_engages_then_disengages() {
    let mut arbiter = enabled_arbiter();
    tick(&mut arbiter, false, false, false, false);

    arbiter.set_steering_toggle(ButtonState::Pressed);
    tick(&mut arbiter, false, false, false, false);
    assert!(arbiter.lateral_allowed());
    assert_eq!(arbiter.phase(), ArbiterPhase::Active);

    arbiter.set_steering_toggle(ButtonState::NotPressed);
    tick(&mut arbiter, false, false, false, false);
    assert!(arbiter.lateral_allowed());

    arbiter.set_steering_toggle(ButtonState::Pressed);
    tick(&mut arbiter, false, false, false, false);
    assert!(!arbiter.lateral_allowed());
    assert_eq!(arbiter.current_disengage_reason(), DisengageReason::Button);
    assert_eq!(arbiter.phase(), ArbiterPhase::Idle);
}

#[test]
fn both_buttons_share_toggle_semantics() {
    let mut arbiter = enabled_arbiter();
    tick(&mut arbiter, false, false, false, false);

    // Engage with the main button, disengage with the steering toggle.
    arbiter.set_main_button(ButtonState::Pressed);
    tick(&mut arbiter, false, false, false, false);
    assert!(arbiter.lateral_allowed());

    arbiter.set_main_button(ButtonState::NotPressed);
    arbiter.set_steering_toggle(ButtonState::Pressed);
    tick(&mut arbiter, false, false, false, false);
    assert!(!arbiter.lateral_allowed());
    assert_eq!(arbiter.current_disengage_reason(), DisengageReason::Button);
}

#[test]
fn simultaneous_main_off_and_toggle_press_ends_disengaged() {
    let mut arbiter = enabled_arbiter();
    engage_via_main(&mut arbiter);

    arbiter.set_steering_toggle(ButtonState::Pressed);
    tick(&mut arbiter, false, false, false, true);
    assert!(!arbiter.lateral_allowed());
    assert!(!arbiter.controls_requested_lat());
    assert_eq!(arbiter.current_disengage_reason(), DisengageReason::AccMainOff);
}

#[test]
fn reason_trail_distinguishes_main_cycle_from_brake_then_main_off() {
    // User cycles the main switch: current reason is AccMainOff.
    let mut arbiter = enabled_arbiter();
    engage_via_main(&mut arbiter);
    tick(&mut arbiter, false, false, false, true);
    assert_eq!(arbiter.current_disengage_reason(), DisengageReason::AccMainOff);

    // Brake followed by main off: the first cause (Brake) wins.
    let mut arbiter = enabled_arbiter();
    engage_via_main(&mut arbiter);
    tick(&mut arbiter, true, true, false, true);
    tick(&mut arbiter, false, true, false, true);
    assert_eq!(arbiter.current_disengage_reason(), DisengageReason::Brake);
}

#[test]
fn unavailable_toggle_never_contributes_a_transition() {
    let mut arbiter = enabled_arbiter();
    engage_via_main(&mut arbiter);

    // The vehicle does not expose the toggle; dozens of ticks change
    // nothing.
    for _ in 0..20 {
        tick(&mut arbiter, true, false, false, true);
    }
    assert!(arbiter.lateral_allowed());
    assert!(arbiter.state_flags().is_empty());
}
