//! Per-pair and per-obstacle force evaluators.
//!
//! These functions read the store immutably and *return* contributions; the
//! interaction engine owns the accumulation (sequentially, or merged from
//! per-thread buffers under the `parallel` feature of `crowd-sim`).

use crowd_agent::{AgentStore, ShapeModel};
use crowd_core::Vec2;
use crowd_geom::{
    LineObstacle, distance_circle_circle, distance_circle_line, distance_three_circle,
    distance_three_circle_line,
};

use crate::contact::contact_force;
use crate::social::{social_circular, social_three_circle};

/// Force/torque contributions of one agent-agent pair evaluation.
#[derive(Copy, Clone, Debug, Default)]
pub struct PairForces {
    pub force0: Vec2,
    pub force1: Vec2,
    pub torque0: f64,
    pub torque1: f64,
}

impl PairForces {
    pub const ZERO: PairForces = PairForces {
        force0: Vec2::ZERO,
        force1: Vec2::ZERO,
        torque0: 0.0,
        torque1: 0.0,
    };

    /// `true` if this evaluation produced no contribution at all.
    pub fn is_zero(&self) -> bool {
        self.force0 == Vec2::ZERO
            && self.force1 == Vec2::ZERO
            && self.torque0 == 0.0
            && self.torque1 == 0.0
    }
}

/// Social + contact interaction between agents `i` and `j`.
///
/// Skipped entirely (zero result) when the current skin-to-skin distance
/// exceeds both agents' sight; each side's social force additionally
/// respects its own `sight` cutoff.  Contact applies whenever `h < 0`.
pub fn agent_agent(store: &AgentStore, i: usize, j: usize) -> PairForces {
    match store.shape {
        ShapeModel::Circular => agent_agent_circular(store, i, j),
        ShapeModel::ThreeCircle => agent_agent_three_circle(store, i, j),
    }
}

fn agent_agent_circular(store: &AgentStore, i: usize, j: usize) -> PairForces {
    let (h, n) = distance_circle_circle(
        store.position[i],
        store.radius[i],
        store.position[j],
        store.radius[j],
    );
    if h > store.sight[i] && h > store.sight[j] {
        return PairForces::ZERO;
    }

    let mut out = PairForces::ZERO;
    let x_rel = store.position[i] - store.position[j];
    let v_rel = store.velocity[i] - store.velocity[j];

    let (f_soc_i, f_soc_j) = social_circular(
        x_rel,
        v_rel,
        store.radius[i] + store.radius[j],
        [store.mass[i], store.mass[j]],
        [store.k_soc[i], store.k_soc[j]],
        [store.tau_0[i], store.tau_0[j]],
        [store.f_soc_max[i], store.f_soc_max[j]],
    );
    if h <= store.sight[i] {
        out.force0 += f_soc_i;
    }
    if h <= store.sight[j] {
        out.force1 += f_soc_j;
    }

    if h < 0.0 {
        out.force0 += contact_force(h, n, v_rel, store.mu[i], store.kappa[i], store.damping[i]);
        out.force1 += contact_force(h, -n, -v_rel, store.mu[j], store.kappa[j], store.damping[j]);
    }
    out
}

fn agent_agent_three_circle(store: &AgentStore, i: usize, j: usize) -> PairForces {
    let (xi, ri) = store.circles(i);
    let (xj, rj) = store.circles(j);

    let d = distance_three_circle(&xi, &ri, &xj, &rj);
    if d.h > store.sight[i] && d.h > store.sight[j] {
        return PairForces::ZERO;
    }

    let mut out = PairForces::ZERO;
    let v_rel = store.velocity[i] - store.velocity[j];

    let (f_soc_i, f_soc_j, m_soc_i, m_soc_j) = social_three_circle(
        &xi,
        &ri,
        &xj,
        &rj,
        v_rel,
        [store.mass[i], store.mass[j]],
        [store.k_soc[i], store.k_soc[j]],
        [store.tau_0[i], store.tau_0[j]],
        [store.f_soc_max[i], store.f_soc_max[j]],
    );
    if d.h <= store.sight[i] {
        out.force0 += f_soc_i;
        out.torque0 += m_soc_i;
    }
    if d.h <= store.sight[j] {
        out.force1 += f_soc_j;
        out.torque1 += m_soc_j;
    }

    if d.h < 0.0 {
        let f_i = contact_force(d.h, d.n, v_rel, store.mu[i], store.kappa[i], store.damping[i]);
        let f_j = contact_force(d.h, -d.n, -v_rel, store.mu[j], store.kappa[j], store.damping[j]);
        out.force0 += f_i;
        out.force1 += f_j;
        out.torque0 += d.moment0.cross(f_i);
        out.torque1 += d.moment1.cross(f_j);
    }
    out
}

/// Contact interaction between agent `i` and a static wall segment.
///
/// Returns `(force, torque)`; zero when the agent does not overlap the
/// segment.  The wall is static, so the relative velocity is the agent's
/// own velocity.
pub fn agent_obstacle(store: &AgentStore, i: usize, obstacle: &LineObstacle) -> (Vec2, f64) {
    match store.shape {
        ShapeModel::Circular => {
            let (h, n) = distance_circle_line(
                store.position[i],
                store.radius[i],
                obstacle.p0,
                obstacle.p1,
            );
            if h >= 0.0 {
                return (Vec2::ZERO, 0.0);
            }
            let f = contact_force(
                h,
                n,
                store.velocity[i],
                store.mu[i],
                store.kappa[i],
                store.damping[i],
            );
            (f, 0.0)
        }
        ShapeModel::ThreeCircle => {
            let (xs, rs) = store.circles(i);
            let d = distance_three_circle_line(&xs, &rs, obstacle.p0, obstacle.p1);
            if d.h >= 0.0 {
                return (Vec2::ZERO, 0.0);
            }
            let f = contact_force(
                d.h,
                d.n,
                store.velocity[i],
                store.mu[i],
                store.kappa[i],
                store.damping[i],
            );
            (f, d.moment.cross(f))
        }
    }
}
