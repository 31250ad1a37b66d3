//! Per-agent body and motion parameters.

use std::f64::consts::PI;

use crate::{AgentError, AgentResult};

// Three-circle body proportions relative to the bounding radius.
// Torso carries most of the width; shoulders sit at ±r_ts from the center.
const RATIO_TORSO: f64 = 0.5882;
const RATIO_SHOULDER: f64 = 0.3725;
const RATIO_TORSO_SHOULDER: f64 = 0.6275;

/// Validated parameter set for one agent, passed to [`AgentStore::add`].
///
/// [`AgentStore::add`]: crate::AgentStore::add
///
/// Defaults describe an average adult pedestrian.  Construct with struct
/// update syntax to override individual fields:
///
/// ```rust
/// use crowd_agent::AgentParams;
///
/// let slow = AgentParams { target_velocity: 0.8, ..AgentParams::default() };
/// assert!(slow.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentParams {
    /// Body mass, kg.  Must be positive.
    pub mass: f64,
    /// Bounding radius, m.  Must be positive.
    pub radius: f64,
    /// Torso circle radius (three-circle model).
    pub r_t: f64,
    /// Shoulder circle radius (three-circle model).
    pub r_s: f64,
    /// Torso-center-to-shoulder-center offset (three-circle model).
    pub r_ts: f64,
    /// Rotational moment of inertia, kg·m².
    pub inertia_rot: f64,

    /// Preferred walking speed, m/s.
    pub target_velocity: f64,
    /// Preferred turning rate, rad/s.
    pub target_angular_velocity: f64,

    /// Translational relaxation time for the adjusting force, s.  Positive.
    pub tau_adj: f64,
    /// Rotational relaxation time for the adjusting torque, s.
    pub tau_rot: f64,
    /// Social-force coupling strength (dimensionless).
    pub k_soc: f64,
    /// Interaction time horizon of the power-law potential, s.  Positive.
    pub tau_0: f64,
    /// Contact compression coefficient.
    pub mu: f64,
    /// Contact sliding-friction coefficient.
    pub kappa: f64,
    /// Contact normal damping coefficient.
    pub damping: f64,
    /// Fluctuation force standard deviation, N.
    pub std_rand_force: f64,
    /// Fluctuation torque standard deviation, N·m.
    pub std_rand_torque: f64,
    /// Social force magnitude cap, N.
    pub f_soc_max: f64,
    /// Interaction cutoff distance, m.  Also sizes the spatial-hash cells.
    pub sight: f64,
}

impl AgentParams {
    /// Defaults scaled to a custom bounding radius: the three-circle radii
    /// and rotational inertia follow the radius, everything else keeps its
    /// default.
    pub fn with_radius(radius: f64) -> Self {
        let base = Self::default();
        Self {
            radius,
            r_t: RATIO_TORSO * radius,
            r_s: RATIO_SHOULDER * radius,
            r_ts: RATIO_TORSO_SHOULDER * radius,
            inertia_rot: 4.0 * base.mass * radius * radius,
            ..base
        }
    }

    /// Check the invariants the force model and integrator rely on.
    ///
    /// radius, mass, tau_adj, tau_0 must be strictly positive; everything
    /// else must at least be finite and non-negative.
    pub fn validate(&self) -> AgentResult<()> {
        let positive: [(&'static str, f64); 6] = [
            ("mass", self.mass),
            ("radius", self.radius),
            ("tau_adj", self.tau_adj),
            ("tau_0", self.tau_0),
            ("inertia_rot", self.inertia_rot),
            ("tau_rot", self.tau_rot),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(AgentError::InvalidParameter(name));
            }
        }
        let non_negative: [(&'static str, f64); 12] = [
            ("r_t", self.r_t),
            ("r_s", self.r_s),
            ("r_ts", self.r_ts),
            ("target_velocity", self.target_velocity),
            ("target_angular_velocity", self.target_angular_velocity),
            ("k_soc", self.k_soc),
            ("mu", self.mu),
            ("kappa", self.kappa),
            ("damping", self.damping),
            ("std_rand_force", self.std_rand_force),
            ("std_rand_torque", self.std_rand_torque),
            ("sight", self.sight),
        ];
        for (name, v) in non_negative {
            if !(v.is_finite() && v >= 0.0) {
                return Err(AgentError::InvalidParameter(name));
            }
        }
        if !(self.f_soc_max.is_finite() && self.f_soc_max > 0.0) {
            return Err(AgentError::InvalidParameter("f_soc_max"));
        }
        Ok(())
    }
}

impl Default for AgentParams {
    fn default() -> Self {
        let mass = 73.5;
        let radius = 0.27;
        Self {
            mass,
            radius,
            r_t: RATIO_TORSO * radius,
            r_s: RATIO_SHOULDER * radius,
            r_ts: RATIO_TORSO_SHOULDER * radius,
            inertia_rot: 4.0 * mass * radius * radius,
            target_velocity: 1.2,
            target_angular_velocity: 4.0 * PI,
            tau_adj: 0.5,
            tau_rot: 0.2,
            k_soc: 1.5,
            tau_0: 3.0,
            mu: 1.2e5,
            kappa: 4.0e4,
            damping: 500.0,
            std_rand_force: 0.1,
            std_rand_torque: 0.1,
            f_soc_max: 2.0e3,
            sight: 7.0,
        }
    }
}
