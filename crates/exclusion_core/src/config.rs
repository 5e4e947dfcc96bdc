//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every section is optional; missing keys fall back
//! to the defaults below.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags (override both, applied by the binary)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [lattice]
//! length = 100
//! particles = 50
//! seed = 42
//!
//! [rates]
//! p = 0.8
//! q = 0.2
//!
//! [run]
//! total_steps = 5000
//! sample_every = 10
//! ```

use crate::error::{Result, SimError};
use exclusion_data::RateParameters;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ring geometry and initial placement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LatticeConfig {
    /// Number of sites `L`.
    pub length: usize,
    /// Number of particles `N`.
    pub particles: usize,
    /// RNG seed. `None` draws one from OS entropy at startup.
    pub seed: Option<u64>,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            length: 100,
            particles: 50,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RateConfig {
    /// Right-hop rate.
    pub p: f64,
    /// Left-hop rate.
    pub q: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self { p: 0.8, q: 0.2 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub total_steps: u64,
    /// Trajectory sampling stride, in steps.
    pub sample_every: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            total_steps: 5000,
            sample_every: 10,
        }
    }
}

/// Where and how results are written. Not used or checked by the engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Trajectory file; `.gz` suffix enables compression.
    pub trajectory: Option<String>,
    /// Space-time diagram as a PGM image.
    pub spacetime_image: Option<String>,
    /// Draw the space-time diagram and density profile after a run.
    pub show_plots: bool,
    /// Frames per second for terminal animation playback.
    pub animation_fps: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            trajectory: None,
            spacetime_image: None,
            show_plots: true,
            animation_fps: 20,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub lattice: LatticeConfig,
    pub rates: RateConfig,
    pub run: RunConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Validates all simulation parameters.
    ///
    /// # Validation Rules
    /// - Lattice length must be positive and particles must not exceed it
    /// - Rates must be finite, non-negative and not both zero
    /// - Step count and sampling stride must be positive
    pub fn validate(&self) -> Result<()> {
        if self.lattice.length == 0 {
            return Err(SimError::invalid("lattice length must be positive"));
        }
        if self.lattice.particles > self.lattice.length {
            return Err(SimError::invalid(format!(
                "particle count {} exceeds lattice length {}",
                self.lattice.particles, self.lattice.length
            )));
        }
        self.rate_parameters()?;
        if self.run.total_steps == 0 {
            return Err(SimError::invalid("total_steps must be positive"));
        }
        if self.run.sample_every == 0 {
            return Err(SimError::invalid("sample_every must be positive"));
        }
        Ok(())
    }

    pub fn rate_parameters(&self) -> Result<RateParameters> {
        Ok(RateParameters::new(self.rates.p, self.rates.q)?)
    }

    /// Parses a TOML document.
    ///
    /// Only the syntax and field types are checked here. Call
    /// [`AppConfig::validate`] once all overrides have been applied.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str::<Self>(content)?)
    }

    /// Parses `path`, returning defaults when the file is absent.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(SimError::invalid(format!(
                "cannot read {}: {e}",
                path.display()
            ))),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| SimError::invalid(e.to_string()))
    }

    /// The configured seed, or a fresh one from OS entropy.
    pub fn resolved_seed(&self) -> u64 {
        self.lattice.seed.unwrap_or_else(|| {
            let seed = rand::random();
            tracing::info!(seed, "No seed configured, drew one from entropy");
            seed
        })
    }

    /// SHA-256 digest of the parameters that determine a trajectory.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.lattice).as_bytes());
        hasher.update(format!("{:?}", self.rates).as_bytes());
        hasher.update(format!("{:?}", self.run).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_too_many_particles() {
        let config = AppConfig {
            lattice: LatticeConfig {
                length: 10,
                particles: 11,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_zero_length() {
        let config = AppConfig {
            lattice: LatticeConfig {
                length: 0,
                particles: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_both_rates_zero() {
        let config = AppConfig {
            rates: RateConfig { p: 0.0, q: 0.0 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_sampling_stride() {
        let config = AppConfig {
            run: RunConfig {
                sample_every: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("[rates]\np = 1.0\nq = 0.0\n").unwrap();
        assert_eq!(config.rates.p, 1.0);
        assert_eq!(config.lattice.length, 100);
        assert_eq!(config.run.sample_every, 10);
    }

    #[test]
    fn test_partial_toml_is_validated_after_overrides() {
        let mut config = AppConfig::from_toml("[lattice]\nlength = 10\n").unwrap();
        assert!(config.validate().is_err());
        config.lattice.particles = 5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_particles_rejected() {
        let result = AppConfig::from_toml("[lattice]\nparticles = -3\n");
        assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.lattice.seed = Some(7);
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load("/nonexistent/exclusion/config.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_fingerprint_tracks_parameters() {
        let a = AppConfig::default();
        let mut b = AppConfig::default();
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.rates.q = 0.3;
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_resolved_seed_prefers_configured() {
        let mut config = AppConfig::default();
        config.lattice.seed = Some(99);
        assert_eq!(config.resolved_seed(), 99);
    }
}
