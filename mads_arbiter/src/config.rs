//! TOML configuration loader with validation.
//!
//! Loads `ArbiterConfig` for the harness binary. The arbitration core
//! itself never reads files; it receives a [`MadsConfig`] at init.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use mads_common::arbiter::config::MadsConfig;
use mads_common::consts::TICK_RATE_HZ;

// ─── Error Type ─────────────────────────────────────────────────────

/// Configuration loading/validation error.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found or unreadable.
    #[error("failed to read configuration file: {0}")]
    FileNotFound(String),

    /// TOML parsing failed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("configuration validation failed: {0}")]
    ValidationError(String),
}

// ─── Arbiter Config ─────────────────────────────────────────────────

/// Harness-side configuration for the arbitration core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArbiterConfig {
    /// Overall MADS feature gate.
    #[serde(default)]
    pub enabled: bool,
    /// Brake-disengage policy.
    #[serde(default = "default_brake_policy")]
    pub disengage_lateral_on_brake: bool,
    /// Producer tick cadence [Hz].
    #[serde(default = "default_tick_rate")]
    pub tick_rate_hz: u32,
}

fn default_brake_policy() -> bool {
    true
}

fn default_tick_rate() -> u32 {
    TICK_RATE_HZ
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            disengage_lateral_on_brake: true,
            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl ArbiterConfig {
    /// Check parameter bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_hz == 0 || self.tick_rate_hz > 1000 {
            return Err(ConfigError::ValidationError(format!(
                "tick_rate_hz {} out of range [1, 1000]",
                self.tick_rate_hz
            )));
        }
        Ok(())
    }

    /// The two config bits consumed by the arbiter at init.
    #[inline]
    pub const fn mads_config(&self) -> MadsConfig {
        MadsConfig::new(self.enabled, self.disengage_lateral_on_brake)
    }

    /// Tick period [µs] at the configured cadence.
    #[inline]
    pub const fn tick_period_us(&self) -> u64 {
        1_000_000 / self.tick_rate_hz as u64
    }
}

// ─── Loading Functions ──────────────────────────────────────────────

/// Load and validate the arbiter configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ArbiterConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::FileNotFound(format!("{}: {e}", path.display())))?;
    load_config_from_str(&raw)
}

/// Load and validate the arbiter configuration from a TOML string.
pub fn load_config_from_str(raw: &str) -> Result<ArbiterConfig, ConfigError> {
    let config: ArbiterConfig =
        toml::from_str(raw).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
