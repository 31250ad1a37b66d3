//! Skin-to-skin distance and contact normals.
//!
//! # Conventions
//!
//! - `h` is the signed gap between body *surfaces*: positive when apart,
//!   negative when overlapping, and always `>= -(r0 + r1)`.
//! - The normal `n` is a unit vector pointing from the second body toward
//!   the first (the direction that pushes body 0 apart from body 1).  The
//!   single degenerate case — coincident centers — yields a zero normal.
//! - Three-circle bodies are passed as `[torso, left shoulder, right
//!   shoulder]` center/radius triplets; index 0 must be the torso because
//!   moment arms are measured from it.
//! - Moment arms point from the torso center *to* the contact point — the
//!   `r` of the usual `r × F` torque rule.  The direction is deliberate:
//!   `torque = moment.cross(force)` everywhere downstream, so reversing an
//!   arm here would flip the sign of every torque.

use crowd_core::Vec2;

// ── circle ↔ circle ───────────────────────────────────────────────────────────

/// Surface gap and contact normal between two circles.
///
/// `n` points from `x1` toward `x0`; zero if the centers coincide.
#[inline]
pub fn distance_circle_circle(x0: Vec2, r0: f64, x1: Vec2, r1: f64) -> (f64, Vec2) {
    let d = x0 - x1;
    let dist = d.length();
    let h = dist - (r0 + r1);
    let n = if dist > 0.0 { d / dist } else { Vec2::ZERO };
    (h, n)
}

// ── three-circle ↔ three-circle ───────────────────────────────────────────────

/// Result of a three-circle vs. three-circle distance query.
#[derive(Copy, Clone, Debug)]
pub struct ThreeCircleDistance {
    /// Minimum surface gap over the 3×3 circle pairs.
    pub h: f64,
    /// Contact normal of the minimizing pair, pointing toward body 0.
    pub n: Vec2,
    /// Contact point minus body 0's torso center — the torque arm for body 0.
    /// Torso-to-contact, not the reverse: it is the `r` in `r × F`.
    pub moment0: Vec2,
    /// Contact point minus body 1's torso center — the torque arm for body 1,
    /// same torso-to-contact direction as `moment0`.
    pub moment1: Vec2,
}

/// Minimum surface gap between two three-circle bodies.
///
/// Evaluates all nine torso/shoulder circle pairs and keeps the pair with
/// the smallest `h`.  The moment arms locate that pair's contact points
/// relative to each body's torso center, so callers can derive torque as
/// `moment.cross(force)`.
pub fn distance_three_circle(
    x0: &[Vec2; 3],
    r0: &[f64; 3],
    x1: &[Vec2; 3],
    r1: &[f64; 3],
) -> ThreeCircleDistance {
    let mut best = ThreeCircleDistance {
        h: f64::MAX,
        n: Vec2::ZERO,
        moment0: Vec2::ZERO,
        moment1: Vec2::ZERO,
    };

    for (&c0, &rr0) in x0.iter().zip(r0.iter()) {
        for (&c1, &rr1) in x1.iter().zip(r1.iter()) {
            let (h, n) = distance_circle_circle(c0, rr0, c1, rr1);
            if h < best.h {
                // Contact points sit on each circle's surface along the normal.
                let contact0 = c0 - n * rr0;
                let contact1 = c1 + n * rr1;
                best = ThreeCircleDistance {
                    h,
                    n,
                    moment0: contact0 - x0[0],
                    moment1: contact1 - x1[0],
                };
            }
        }
    }
    best
}

// ── circle ↔ line segment ─────────────────────────────────────────────────────

/// Surface gap and normal between a circle and a line segment.
///
/// Three branches: center projects beyond `p0`, beyond `p1`, or onto the
/// interior (perpendicular foot).  `n` points from the segment toward the
/// circle center.
pub fn distance_circle_line(x: Vec2, r: f64, p0: Vec2, p1: Vec2) -> (f64, Vec2) {
    let d = p1 - p0;
    let len_sq = d.length_squared();

    // Degenerate zero-length segment reduces to a point obstacle.
    let closest = if len_sq == 0.0 {
        p0
    } else {
        let t = (x - p0).dot(d) / len_sq;
        if t <= 0.0 {
            p0
        } else if t >= 1.0 {
            p1
        } else {
            p0 + d * t
        }
    };

    let to_center = x - closest;
    let dist = to_center.length();
    let h = dist - r;
    let n = if dist > 0.0 { to_center / dist } else { Vec2::ZERO };
    (h, n)
}

// ── three-circle ↔ line segment ───────────────────────────────────────────────

/// Result of a three-circle vs. line-segment distance query.
#[derive(Copy, Clone, Debug)]
pub struct ThreeCircleLineDistance {
    /// Minimum surface gap over the three circles.
    pub h: f64,
    /// Contact normal of the minimizing circle, pointing away from the segment.
    pub n: Vec2,
    /// Contact point minus the torso center — the torque arm, pointing
    /// torso-to-contact (the `r` in `r × F`).
    pub moment: Vec2,
}

/// Minimum surface gap between a three-circle body and a line segment.
pub fn distance_three_circle_line(
    xs: &[Vec2; 3],
    rs: &[f64; 3],
    p0: Vec2,
    p1: Vec2,
) -> ThreeCircleLineDistance {
    let mut best = ThreeCircleLineDistance {
        h: f64::MAX,
        n: Vec2::ZERO,
        moment: Vec2::ZERO,
    };

    for (&c, &r) in xs.iter().zip(rs.iter()) {
        let (h, n) = distance_circle_line(c, r, p0, p1);
        if h < best.h {
            let contact = c - n * r;
            best = ThreeCircleLineDistance { h, n, moment: contact - xs[0] };
        }
    }
    best
}
