//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use crowd_agent::{AgentParams, AgentStoreBuilder, ShapeModel};
//! use crowd_core::Vec2;
//!
//! let (mut store, mut rngs) = AgentStoreBuilder::new(100, /*seed=*/ 42)
//!     .shape(ShapeModel::ThreeCircle)
//!     .build();
//!
//! let id = store
//!     .add(Vec2::new(1.0, 2.0), 0.0, &AgentParams::default())
//!     .unwrap();
//! assert!(store.is_active(id));
//! assert_eq!(rngs.len(), 100);
//! ```

use crate::{AgentRngs, AgentStore, ShapeModel};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// All arrays are pre-allocated at `capacity` so [`AgentStore::add`] never
/// reallocates — slots are claimed by indexed assignment, not pushes.
pub struct AgentStoreBuilder {
    capacity: usize,
    seed: u64,
    shape: ShapeModel,
}

impl AgentStoreBuilder {
    /// Create a builder for up to `capacity` agents using `seed` as the
    /// global RNG seed.  The shape model defaults to `Circular`.
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self {
            capacity,
            seed,
            shape: ShapeModel::Circular,
        }
    }

    /// Select the body geometry for every agent in this store.
    pub fn shape(mut self, shape: ShapeModel) -> Self {
        self.shape = shape;
        self
    }

    /// Construct the empty store and its per-agent RNGs.
    ///
    /// Slots are claimed afterward via [`AgentStore::add`]; spawn sampling
    /// (where agents start) is a collaborator's job.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let store = AgentStore::new(self.capacity, self.shape);
        let rngs = AgentRngs::new(self.capacity, self.seed);
        (store, rngs)
    }
}
