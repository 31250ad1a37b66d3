//! Top-level simulation configuration.
//!
//! # Time model
//!
//! The core advances with an *adaptive* timestep: every tick the integrator
//! picks `dt` in `[dt_min, dt_max]` from the fastest agent's current speed
//! (see the integrator's docs).  `SimConfig` only carries the bounds; the
//! accumulated simulated time lives on the simulation itself.

use crate::{CrowdError, CrowdResult};

/// Top-level simulation configuration.
///
/// Typically constructed by the application crate (from CLI flags or a
/// config file) and passed to the simulation builder, which calls
/// [`validate`](SimConfig::validate).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Lower bound on the adaptive timestep, seconds.
    pub dt_min: f64,

    /// Upper bound on the adaptive timestep, seconds.  Also the step used
    /// when every agent is at rest.
    pub dt_max: f64,

    /// Master RNG seed.  The simulation builder re-derives every per-agent
    /// RNG stream from this value, so the same seed always produces
    /// identical results.
    pub seed: u64,

    /// Worker thread count for the dedicated Rayon pool the simulation
    /// builder creates when the `parallel` feature of `crowd-sim` is
    /// enabled.  `None` runs on the global pool (all logical cores).
    pub num_threads: Option<usize>,
}

impl SimConfig {
    /// Check the timestep bounds: both finite, `0 < dt_min <= dt_max`.
    ///
    /// Fails fast — a non-positive or inverted bound would silently corrupt
    /// every subsequent integration step.
    pub fn validate(&self) -> CrowdResult<()> {
        if !self.dt_min.is_finite() || !self.dt_max.is_finite() {
            return Err(CrowdError::Config(format!(
                "timestep bounds must be finite (dt_min={}, dt_max={})",
                self.dt_min, self.dt_max
            )));
        }
        if self.dt_min <= 0.0 || self.dt_max < self.dt_min {
            return Err(CrowdError::Config(format!(
                "require 0 < dt_min <= dt_max, got dt_min={}, dt_max={}",
                self.dt_min, self.dt_max
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt_min: 0.001,
            dt_max: 0.01,
            seed: 0,
            num_threads: None,
        }
    }
}
