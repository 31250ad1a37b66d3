//! Adaptive-timestep integration of translational and rotational state.

use crowd_agent::{AgentStore, ShapeModel};
use crowd_core::{Vec2, wrap_to_pi};

// ── Scheme ────────────────────────────────────────────────────────────────────

/// Which advance rule the integrator applies each tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scheme {
    /// Single-evaluation explicit step.
    #[default]
    Euler,
    /// Velocity Verlet: averages the previous and current tick's forces for
    /// the velocity update.  Seeds its force history with one Euler step.
    VelocityVerlet,
}

/// Force/torque history carried between Verlet ticks.
#[derive(Debug)]
struct PrevState {
    force:  Vec<Vec2>,
    torque: Vec<f64>,
}

// ── Integrator ────────────────────────────────────────────────────────────────

/// Advances all active agents by one adaptive timestep.
///
/// The timestep shrinks when agents move fast and relaxes back to `dt_max`
/// when they slow down, so a crowd squeezing through a bottleneck is
/// resolved finely without penalizing the free-flow phase:
///
/// `dt = clamp(dx_max / v_max, dt_min, dt_max)` with
/// `dx_max = 1.1 · dt_max · max(target_velocity)`.  When nothing moves
/// (`v_max == 0`) the step is simply `dt_max`.
#[derive(Debug)]
pub struct Integrator {
    pub scheme: Scheme,
    dt_min:     f64,
    dt_max:     f64,
    prev:       Option<PrevState>,
}

impl Integrator {
    pub fn new(scheme: Scheme, dt_min: f64, dt_max: f64) -> Self {
        Self { scheme, dt_min, dt_max, prev: None }
    }

    /// The timestep the next [`step`](Integrator::step) call will use.
    pub fn adaptive_timestep(&self, store: &AgentStore) -> f64 {
        let v_max = store.max_speed();
        if v_max == 0.0 {
            return self.dt_max;
        }
        let dx_max = 1.1 * self.dt_max * store.max_target_velocity();
        (dx_max / v_max).clamp(self.dt_min, self.dt_max)
    }

    /// Advance positions, velocities, orientations, and angular velocities
    /// from the accumulated `force`/`torque`.  Returns the `dt` used.
    ///
    /// Shoulder positions are recomputed afterward, so the store is
    /// immediately ready for the next tick's distance queries.
    pub fn step(&mut self, store: &mut AgentStore) -> f64 {
        let dt = self.adaptive_timestep(store);
        match self.scheme {
            Scheme::Euler => Self::step_euler(store, dt),
            Scheme::VelocityVerlet => match self.prev.take() {
                // First tick has no force history; bootstrap with Euler.
                None => {
                    Self::step_euler(store, dt);
                    self.prev = Some(PrevState {
                        force:  store.force.clone(),
                        torque: store.torque.clone(),
                    });
                }
                Some(mut prev) => {
                    Self::step_verlet(store, dt, &prev);
                    let n = store.len();
                    prev.force[..n].copy_from_slice(&store.force[..n]);
                    prev.torque[..n].copy_from_slice(&store.torque[..n]);
                    self.prev = Some(prev);
                }
            },
        }
        if store.shape == ShapeModel::ThreeCircle {
            store.update_all_shoulders();
        }
        dt
    }

    fn step_euler(store: &mut AgentStore, dt: f64) {
        for i in 0..store.len() {
            if !store.active[i] {
                continue;
            }
            let a = store.force[i] / store.mass[i];
            store.velocity[i] += a * dt;
            store.position[i] += store.velocity[i] * dt + a * (0.5 * dt * dt);

            if store.shape == ShapeModel::ThreeCircle {
                let alpha = store.torque[i] / store.inertia_rot[i];
                store.angular_velocity[i] += alpha * dt;
                store.orientation[i] = wrap_to_pi(
                    store.orientation[i]
                        + store.angular_velocity[i] * dt
                        + alpha * (0.5 * dt * dt),
                );
            }
        }
    }

    fn step_verlet(store: &mut AgentStore, dt: f64, prev: &PrevState) {
        for i in 0..store.len() {
            if !store.active[i] {
                continue;
            }
            let f_new = store.force[i];
            let f_avg = (prev.force[i] + f_new) * 0.5;
            store.velocity[i] += f_avg / store.mass[i] * dt;
            store.position[i] +=
                store.velocity[i] * dt + f_new / store.mass[i] * (0.5 * dt * dt);

            if store.shape == ShapeModel::ThreeCircle {
                let m_new = store.torque[i];
                let m_avg = 0.5 * (prev.torque[i] + m_new);
                store.angular_velocity[i] += m_avg / store.inertia_rot[i] * dt;
                store.orientation[i] = wrap_to_pi(
                    store.orientation[i]
                        + store.angular_velocity[i] * dt
                        + m_new / store.inertia_rot[i] * (0.5 * dt * dt),
                );
            }
        }
    }
}
