//! Anticipatory collision-avoidance force.
//!
//! # Model
//!
//! Pedestrians do not repel each other by proximity; they repel by
//! *predicted collision*.  For a pair with relative position `x`, relative
//! velocity `v`, and combined radius `r_tot`, the time to collision τ under
//! constant velocities solves
//!
//! ```text
//! a τ² + 2 b τ + c = 0,   a = v·v,  b = -x·v,  c = x·x - r_tot²
//! ```
//!
//! with the earlier root `τ = (b - √d)/a`, `d = b² - a c`.  A negative or
//! vanishing discriminant (a tangent graze counts as a miss) or a near-zero
//! `a` means the pair never touches on current course — defined as zero
//! force, not an error.  The interaction energy is
//! the power-law potential `E(τ) = k·exp(-τ/τ₀)/τ²`, whose (negated) spatial
//! gradient gives the force
//!
//! ```text
//! f = -m k · mag(τ) · ∇τ,   mag(τ) = -(2/τ + 1/τ₀)·exp(-τ/τ₀)/τ²
//! ∇τ = (-v + (b v + a x)/√d) / a
//! ```
//!
//! The two sides scale the *same* gradient by their own mass and `k_soc`
//! (and evaluate `mag` with their own `τ₀`), so the reaction is not a strict
//! Newton pair — this asymmetry is part of the model and reproduced as-is.

use crowd_core::Vec2;

/// Predicted collisions further than this are ignored, seconds.
pub const TAU_MAX: f64 = 30.0;

/// Below this `v_rel·v_rel` the quadratic is treated as degenerate
/// (effectively parallel motion at constant separation).
const A_EPS: f64 = 1e-8;

/// Discriminants below this count as a miss.  The gradient divides by `√d`,
/// so an exactly-tangent grazing encounter (`d == 0` with τ in range) would
/// otherwise blow up into non-finite force components.
const D_EPS: f64 = 1e-12;

/// Overlapping pairs shrink `r_tot` to this fraction of the actual center
/// distance so the quadratic stays well-posed (`c < 0` would put the
/// "collision" in the past).
const OVERLAP_SHRINK: f64 = 0.99;

/// Outcome of a time-to-collision evaluation for one pair.
#[derive(Copy, Clone, Debug)]
pub struct SocialForce {
    /// Predicted time to collision, seconds.
    pub tau: f64,
    /// Gradient of τ with respect to the relative position of body 0.
    pub grad: Vec2,
}

/// Solve for the time to collision and its spatial gradient.
///
/// Returns `None` for every "no predicted collision" case: negative or
/// vanishing discriminant, near-zero relative speed, collision in the past,
/// or beyond [`TAU_MAX`].
pub fn time_to_collision(x_rel: Vec2, v_rel: Vec2, r_tot: f64) -> Option<SocialForce> {
    // Shrink r_tot if the bodies already overlap.
    let dist = x_rel.length();
    let r_tot = if dist < r_tot { OVERLAP_SHRINK * dist } else { r_tot };

    let a = v_rel.dot(v_rel);
    let b = -x_rel.dot(v_rel);
    let c = x_rel.dot(x_rel) - r_tot * r_tot;
    let d = b * b - a * c;

    if d < D_EPS || a < A_EPS {
        return None;
    }
    let d_sqrt = d.sqrt();
    let tau = (b - d_sqrt) / a;
    if tau <= 0.0 || tau > TAU_MAX {
        return None;
    }

    // ∇τ = (-v + (b v + a x)/√d) / a; √d is bounded away from zero by the
    // D_EPS guard above, so the gradient is always finite.
    let grad = (v_rel * (-1.0) + (v_rel * b + x_rel * a) / d_sqrt) / a;
    Some(SocialForce { tau, grad })
}

/// Power-law interaction magnitude `(2/τ + 1/τ₀)·exp(-τ/τ₀)/τ²`.
#[inline]
pub(crate) fn magnitude(tau: f64, tau_0: f64) -> f64 {
    (2.0 / tau + 1.0 / tau_0) * (-tau / tau_0).exp() / (tau * tau)
}

/// Social force pair for two circular bodies.
///
/// Returns `(force0, force1)` — each side scaled by its own mass, `k_soc`,
/// `τ₀`, and capped at its own `f_soc_max`.
#[allow(clippy::too_many_arguments)]
pub fn social_circular(
    x_rel: Vec2,
    v_rel: Vec2,
    r_tot: f64,
    mass: [f64; 2],
    k_soc: [f64; 2],
    tau_0: [f64; 2],
    f_soc_max: [f64; 2],
) -> (Vec2, Vec2) {
    match time_to_collision(x_rel, v_rel, r_tot) {
        None => (Vec2::ZERO, Vec2::ZERO),
        Some(SocialForce { tau, grad }) => {
            let f0 = (grad * (mass[0] * k_soc[0] * magnitude(tau, tau_0[0])))
                .truncate(f_soc_max[0]);
            let f1 = (grad * (-mass[1] * k_soc[1] * magnitude(tau, tau_0[1])))
                .truncate(f_soc_max[1]);
            (f0, f1)
        }
    }
}

/// Social force pair for two three-circle bodies, plus torques.
///
/// Evaluates τ over all nine torso/shoulder circle combinations with the
/// bodies' (translational) velocities, keeps the minimum-τ pair, and offsets
/// the gradient by that pair's circle centers.  Torque arises because the
/// force acts at the contact circle, not the torso center:
/// `torque = (circle_center - torso_center) × force`.
#[allow(clippy::too_many_arguments)]
pub fn social_three_circle(
    x0: &[Vec2; 3],
    r0: &[f64; 3],
    x1: &[Vec2; 3],
    r1: &[f64; 3],
    v_rel: Vec2,
    mass: [f64; 2],
    k_soc: [f64; 2],
    tau_0: [f64; 2],
    f_soc_max: [f64; 2],
) -> (Vec2, Vec2, f64, f64) {
    // Find the circle pair that collides first.
    let mut best: Option<(SocialForce, Vec2, Vec2)> = None;
    for (&c0, &rr0) in x0.iter().zip(r0.iter()) {
        for (&c1, &rr1) in x1.iter().zip(r1.iter()) {
            if let Some(sf) = time_to_collision(c0 - c1, v_rel, rr0 + rr1) {
                match best {
                    Some((b, _, _)) if b.tau <= sf.tau => {}
                    _ => best = Some((sf, c0, c1)),
                }
            }
        }
    }

    match best {
        None => (Vec2::ZERO, Vec2::ZERO, 0.0, 0.0),
        Some((SocialForce { tau, grad }, c0, c1)) => {
            let f0 = (grad * (mass[0] * k_soc[0] * magnitude(tau, tau_0[0])))
                .truncate(f_soc_max[0]);
            let f1 = (grad * (-mass[1] * k_soc[1] * magnitude(tau, tau_0[1])))
                .truncate(f_soc_max[1]);
            let torque0 = (c0 - x0[0]).cross(f0);
            let torque1 = (c1 - x1[0]).cross(f1);
            (f0, f1, torque0, torque1)
        }
    }
}
