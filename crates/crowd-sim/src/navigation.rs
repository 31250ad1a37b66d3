//! Navigation seam: the collaborator that steers agents.
//!
//! The core does not compute routes or potential fields; it only consumes a
//! per-agent unit `target_direction` (and, for three-circle bodies, a
//! `target_orientation`).  A [`Navigation`] implementation refreshes those
//! fields at the start of every tick.  Route planners, flow fields, and
//! exit-choice strategies all plug in here.

use crowd_agent::{AgentStore, ShapeModel};
use crowd_core::Vec2;

/// Refreshes `target_direction` / `target_orientation` each tick.
pub trait Navigation {
    fn update(&self, store: &mut AgentStore);
}

/// Leaves the targets exactly as they were seeded at `add` time.
///
/// Useful for tests and for scenarios where the caller drives the target
/// arrays directly between ticks.
#[derive(Debug)]
pub struct StaticNavigation;

impl Navigation for StaticNavigation {
    fn update(&self, _store: &mut AgentStore) {}
}

/// Steers every active agent straight toward a single goal point.
///
/// Agents within `arrival_radius` of the goal get a zero target direction and
/// relax to a stop through the adjusting force.
pub struct PointNavigation {
    pub target:         Vec2,
    pub arrival_radius: f64,
}

impl PointNavigation {
    pub fn new(target: Vec2) -> Self {
        Self { target, arrival_radius: 0.5 }
    }

    pub fn with_arrival_radius(mut self, radius: f64) -> Self {
        self.arrival_radius = radius;
        self
    }
}

impl Navigation for PointNavigation {
    fn update(&self, store: &mut AgentStore) {
        for i in 0..store.len() {
            if !store.active[i] {
                continue;
            }
            let to_goal = self.target - store.position[i];
            if to_goal.length() <= self.arrival_radius {
                store.target_direction[i] = Vec2::ZERO;
                continue;
            }
            let dir = to_goal.normalize_or_zero();
            store.target_direction[i] = dir;
            if store.shape == ShapeModel::ThreeCircle {
                store.target_orientation[i] = dir.angle();
            }
        }
    }
}
