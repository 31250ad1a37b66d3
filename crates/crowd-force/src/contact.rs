//! Physical contact force for overlapping bodies.
//!
//! Applies only when the surface gap `h` is negative.  Three terms:
//! compression pushing the bodies apart along the contact normal, sliding
//! friction opposing tangential relative motion, and damping on the normal
//! component of the relative velocity:
//!
//! ```text
//! f = -h·(μ·n - κ·(v·t)·t) + c·(v·n)·n,    t = rotate90(n)
//! ```
//!
//! Each agent applies its own `μ`/`κ`/`damping` to its half of the pair,
//! with the normal and relative velocity flipped for the second body.

use crowd_core::Vec2;

/// Contact force on the body that `n` points toward.
///
/// `h` must be negative (the caller gates on overlap); `v_rel` is this
/// body's velocity relative to the other.
#[inline]
pub fn contact_force(h: f64, n: Vec2, v_rel: Vec2, mu: f64, kappa: f64, damping: f64) -> Vec2 {
    let t = n.rotate90();
    (n * mu - t * (kappa * v_rel.dot(t))) * (-h) + n * (damping * v_rel.dot(n))
}
