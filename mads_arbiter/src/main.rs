//! # MADS Arbiter Binary
//!
//! Drives the lateral-control arbitration core through a scripted
//! engagement scenario at the configured tick cadence, logging every
//! verdict transition. Stands in for the safety harness during bench
//! testing.
//!
//! # Usage
//!
//! ```bash
//! # Run the scripted scenario with the default config
//! mads_arbiter --config config/mads.toml
//!
//! # Verbose logging
//! mads_arbiter -c config/mads.toml -v
//! ```

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

use mads_arbiter::arbiter::{MadsArbiter, TickInputs};
use mads_arbiter::config::load_config;
use mads_common::arbiter::state::ButtonState;

/// MADS lateral-control arbitration core demo harness
#[derive(Parser, Debug)]
#[command(name = "mads_arbiter")]
#[command(version)]
#[command(about = "MADS lateral-control arbitration core demo harness")]
struct Args {
    /// Path to arbiter configuration file (mads.toml)
    #[arg(short, long, default_value = "config/mads.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

/// One stretch of the scripted drive.
struct ScriptStep {
    label: &'static str,
    ticks: u32,
    inputs: TickInputs,
    steering_toggle: Option<ButtonState>,
}

fn script() -> Vec<ScriptStep> {
    vec![
        ScriptStep {
            label: "idle",
            ticks: 10,
            inputs: TickInputs::default(),
            steering_toggle: None,
        },
        ScriptStep {
            label: "acc main on",
            ticks: 50,
            inputs: TickInputs {
                main_cruise: true,
                vehicle_moving: true,
                ..TickInputs::default()
            },
            steering_toggle: None,
        },
        ScriptStep {
            label: "brake while moving",
            ticks: 20,
            inputs: TickInputs {
                main_cruise: true,
                vehicle_moving: true,
                brake_pressed: true,
                ..TickInputs::default()
            },
            steering_toggle: None,
        },
        ScriptStep {
            label: "brake released",
            ticks: 30,
            inputs: TickInputs {
                main_cruise: true,
                vehicle_moving: true,
                ..TickInputs::default()
            },
            steering_toggle: None,
        },
        ScriptStep {
            label: "steering toggle pressed",
            ticks: 1,
            inputs: TickInputs {
                main_cruise: true,
                vehicle_moving: true,
                ..TickInputs::default()
            },
            steering_toggle: Some(ButtonState::Pressed),
        },
        ScriptStep {
            label: "steering toggle released",
            ticks: 20,
            inputs: TickInputs {
                main_cruise: true,
                vehicle_moving: true,
                ..TickInputs::default()
            },
            steering_toggle: Some(ButtonState::NotPressed),
        },
        ScriptStep {
            label: "acc main off",
            ticks: 10,
            inputs: TickInputs {
                vehicle_moving: true,
                ..TickInputs::default()
            },
            steering_toggle: None,
        },
    ]
}

fn main() {
    if let Err(e) = run() {
        error!("arbiter harness failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    setup_tracing(&args);

    info!("MADS arbiter v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args.config)?;
    info!(
        enabled = config.enabled,
        disengage_lateral_on_brake = config.disengage_lateral_on_brake,
        tick_rate_hz = config.tick_rate_hz,
        "configuration loaded"
    );

    let period = Duration::from_micros(config.tick_period_us());
    let mut arbiter = MadsArbiter::new(&config.mads_config());

    for step in script() {
        info!(step = step.label, ticks = step.ticks, "script step");
        if let Some(toggle) = step.steering_toggle {
            arbiter.set_steering_toggle(toggle);
        }
        for _ in 0..step.ticks {
            let before = arbiter.lateral_allowed();
            arbiter.tick(step.inputs);
            let after = arbiter.lateral_allowed();
            if before != after {
                info!(
                    lateral_allowed = after,
                    reason = ?arbiter.current_disengage_reason(),
                    phase = ?arbiter.phase(),
                    "verdict changed"
                );
            }
            thread::sleep(period);
        }
    }

    info!(
        lateral_allowed = arbiter.lateral_allowed(),
        reason = ?arbiter.current_disengage_reason(),
        previous = ?arbiter.previous_disengage_reason(),
        "script complete"
    );
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
