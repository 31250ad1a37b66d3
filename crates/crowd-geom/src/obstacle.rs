//! Static line obstacles.

use crowd_core::{CrowdError, CrowdResult, Vec2};

/// An immutable wall segment from `p0` to `p1`.
///
/// Obstacles are read-only scene geometry: the interaction engine evaluates
/// contact forces against them every tick but never mutates them.  Scene
/// construction (polygon decomposition into segments) is a collaborator's
/// job; this core only consumes the finished segment list.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineObstacle {
    pub p0: Vec2,
    pub p1: Vec2,
}

impl LineObstacle {
    /// Create a segment, rejecting non-finite endpoints.
    ///
    /// A NaN endpoint would poison every distance query against the scene,
    /// so this is checked once at the construction boundary rather than in
    /// the per-tick hot path.
    pub fn new(p0: Vec2, p1: Vec2) -> CrowdResult<Self> {
        if !p0.is_finite() || !p1.is_finite() {
            return Err(CrowdError::NonFinite("obstacle endpoint"));
        }
        Ok(Self { p0, p1 })
    }

    /// Segment length in metres.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.p1 - self.p0).length()
    }
}
