//! Desired-motion ("adjusting") force and torque.
//!
//! Relaxes each agent's velocity toward `target_velocity * target_direction`
//! over the timescale `tau_adj`, and (three-circle only) the body heading
//! toward `target_orientation` over `tau_rot`.  The navigation collaborator
//! refreshes the targets before this pass runs.

use std::f64::consts::PI;

use crowd_agent::{AgentStore, ShapeModel};
use crowd_core::wrap_to_pi;

/// Accumulate the adjusting force (and torque, for three-circle stores)
/// onto every active agent.
///
/// Translational: `f = mass/tau_adj * (target_velocity*target_direction - velocity)`.
/// Rotational:    `M = inertia_rot/tau_rot * (wrap_to_pi(Δφ)/π * ω_target - ω)`.
pub fn adjusting_forces(store: &mut AgentStore) {
    let rotational = store.shape == ShapeModel::ThreeCircle;

    for i in 0..store.len() {
        if !store.active[i] {
            continue;
        }

        let desired = store.target_direction[i] * store.target_velocity[i];
        store.force[i] += (desired - store.velocity[i]) * (store.mass[i] / store.tau_adj[i]);

        if rotational {
            let delta = wrap_to_pi(store.target_orientation[i] - store.orientation[i]);
            let desired_omega = delta / PI * store.target_angular_velocity[i];
            store.torque[i] += store.inertia_rot[i] / store.tau_rot[i]
                * (desired_omega - store.angular_velocity[i]);
        }
    }
}
