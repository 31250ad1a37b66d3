//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The fluctuation force needs `&mut AgentRngs` (exclusive mutable access to
//! each agent's RNG) and `&mut AgentStore` (the force accumulators)
//! simultaneously.  Rust's borrow checker forbids this if both live inside a
//! single struct.  Keeping RNGs in a separate `AgentRngs` struct resolves
//! the conflict cleanly:
//!
//! ```ignore
//! // crowd-force fluctuation pass (simplified):
//! for i in 0..store.len() {
//!     let rng = rngs.get_mut(AgentId(i as u32));
//!     store.force[i] += random_force(rng, store.std_rand_force[i]);
//! }
//! ```

use crowd_core::{AgentId, AgentRng, Vec2, wrap_to_pi};

use crate::{AgentError, AgentParams, AgentResult};

// ── ShapeModel ────────────────────────────────────────────────────────────────

/// Body geometry used by *all* agents in a store.
///
/// The discriminant lives on the store, not on each agent: hot loops match
/// on it once per pass instead of once per agent, and the two variants never
/// mix within a simulation (their pairwise distance math differs).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeModel {
    /// Single disk of `radius`.
    Circular,
    /// Torso disk plus two shoulder disks with an orientation angle.
    ThreeCircle,
}

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to enable
/// simultaneous `&mut AgentRngs` + `&mut AgentStore` borrows in the
/// fluctuation pass.
///
/// `AgentRngs` is `Send` but intentionally not `Sync` — per-agent RNG state
/// must never be shared between threads.
#[derive(Debug)]
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Re-derive every per-agent stream from a new global seed, discarding
    /// any state already consumed.
    ///
    /// The simulation builder calls this with its config's seed, making that
    /// one value authoritative for the whole run.
    pub fn reseed(&mut self, global_seed: u64) {
        for (i, rng) in self.inner.iter_mut().enumerate() {
            *rng = AgentRng::new(global_seed, AgentId(i as u32));
        }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `capacity` elements; the `AgentId` value is
/// the index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Slots `0..len()` have been claimed by [`add`](AgentStore::add); of those,
/// only slots with `active[i] == true` participate in the simulation.
/// Deactivation (agents leaving the domain) is owned by an external
/// collaborator — this core only reads the flag.
///
/// The rotational arrays (`orientation`, `torque`, shoulder positions, …)
/// are allocated for both shape models but only driven when
/// `shape == ShapeModel::ThreeCircle`.
#[derive(Debug)]
pub struct AgentStore {
    /// Body geometry shared by every agent in this store.
    pub shape: ShapeModel,

    capacity: usize,
    count: usize,

    /// Participation mask.  Inactive slots are skipped by every pass.
    pub active: Vec<bool>,

    // ── Translational state ───────────────────────────────────────────────
    pub position: Vec<Vec2>,
    pub velocity: Vec<Vec2>,
    /// Force accumulator, zeroed by [`reset_motion`](AgentStore::reset_motion).
    pub force: Vec<Vec2>,
    pub mass: Vec<f64>,
    /// Bounding radius (the full body fits inside it for both shape models).
    pub radius: Vec<f64>,

    // ── Navigation inputs (refreshed by a collaborator each tick) ─────────
    /// Preferred speed, m/s (scalar — direction comes from `target_direction`).
    pub target_velocity: Vec<f64>,
    /// Unit vector toward the agent's goal.
    pub target_direction: Vec<Vec2>,

    // ── Rotational / three-circle state ───────────────────────────────────
    /// Body heading, kept wrapped to `[-π, π]`.
    pub orientation: Vec<f64>,
    pub angular_velocity: Vec<f64>,
    pub target_orientation: Vec<f64>,
    pub target_angular_velocity: Vec<f64>,
    /// Torque accumulator, zeroed together with `force`.
    pub torque: Vec<f64>,
    pub inertia_rot: Vec<f64>,
    /// Torso disk radius.
    pub r_t: Vec<f64>,
    /// Shoulder disk radius.
    pub r_s: Vec<f64>,
    /// Torso-center-to-shoulder-center offset.
    pub r_ts: Vec<f64>,
    /// Left/right shoulder centers — a pure function of
    /// `position`/`orientation`/`r_ts`, recomputed whenever either changes.
    pub position_ls: Vec<Vec2>,
    pub position_rs: Vec<Vec2>,

    // ── Motion parameters ─────────────────────────────────────────────────
    pub tau_adj: Vec<f64>,
    pub tau_rot: Vec<f64>,
    pub k_soc: Vec<f64>,
    pub tau_0: Vec<f64>,
    pub mu: Vec<f64>,
    pub kappa: Vec<f64>,
    pub damping: Vec<f64>,
    pub std_rand_force: Vec<f64>,
    pub std_rand_torque: Vec<f64>,
    pub f_soc_max: Vec<f64>,
    pub sight: Vec<f64>,
}

impl AgentStore {
    /// Number of claimed slots (active or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Total slot capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Indices of all active agents in ascending order.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.count).filter(|&i| self.active[i])
    }

    /// `true` if `agent` is a claimed, active slot.
    #[inline]
    pub fn is_active(&self, agent: AgentId) -> bool {
        agent.index() < self.count && self.active[agent.index()]
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Claim the next free slot for a new agent.
    ///
    /// Validates `params` and the position/orientation, fills every SoA
    /// field, derives the shoulder positions, and marks the slot active.
    /// The agent starts at rest with `target_direction` facing along
    /// `orientation`.
    ///
    /// Returns [`AgentError::CapacityExhausted`] when no slot remains —
    /// array growth policy is the caller's responsibility.
    pub fn add(
        &mut self,
        position: Vec2,
        orientation: f64,
        params: &AgentParams,
    ) -> AgentResult<AgentId> {
        if self.count >= self.capacity {
            return Err(AgentError::CapacityExhausted { capacity: self.capacity });
        }
        if !position.is_finite() {
            return Err(AgentError::InvalidParameter("position"));
        }
        if !orientation.is_finite() {
            return Err(AgentError::InvalidParameter("orientation"));
        }
        params.validate()?;

        let i = self.count;
        self.count += 1;
        self.active[i] = true;

        self.position[i] = position;
        self.velocity[i] = Vec2::ZERO;
        self.force[i] = Vec2::ZERO;
        self.mass[i] = params.mass;
        self.radius[i] = params.radius;

        self.target_velocity[i] = params.target_velocity;
        self.target_direction[i] = Vec2::from_angle(orientation);

        self.orientation[i] = wrap_to_pi(orientation);
        self.angular_velocity[i] = 0.0;
        self.target_orientation[i] = self.orientation[i];
        self.target_angular_velocity[i] = params.target_angular_velocity;
        self.torque[i] = 0.0;
        self.inertia_rot[i] = params.inertia_rot;
        self.r_t[i] = params.r_t;
        self.r_s[i] = params.r_s;
        self.r_ts[i] = params.r_ts;

        self.tau_adj[i] = params.tau_adj;
        self.tau_rot[i] = params.tau_rot;
        self.k_soc[i] = params.k_soc;
        self.tau_0[i] = params.tau_0;
        self.mu[i] = params.mu;
        self.kappa[i] = params.kappa;
        self.damping[i] = params.damping;
        self.std_rand_force[i] = params.std_rand_force;
        self.std_rand_torque[i] = params.std_rand_torque;
        self.f_soc_max[i] = params.f_soc_max;
        self.sight[i] = params.sight;

        self.update_shoulders(i);
        Ok(AgentId(i as u32))
    }

    /// Mark an agent as no longer participating.  The slot is not reused.
    pub fn deactivate(&mut self, agent: AgentId) -> AgentResult<()> {
        if agent.index() >= self.count {
            return Err(AgentError::OutOfBounds(agent));
        }
        self.active[agent.index()] = false;
        Ok(())
    }

    // ── Per-tick state management ─────────────────────────────────────────

    /// Zero all force and torque accumulators.
    ///
    /// Hard invariant: this must run before any force pass each tick — the
    /// pipeline accumulates additively and never overwrites.
    pub fn reset_motion(&mut self) {
        for i in 0..self.count {
            self.force[i] = Vec2::ZERO;
            self.torque[i] = 0.0;
        }
    }

    /// Recompute one agent's shoulder centers from position/orientation.
    ///
    /// `position ∓ rotate270(unit(orientation)) · r_ts`: the left shoulder
    /// uses `-`, the right `+`.
    #[inline]
    pub fn update_shoulders(&mut self, i: usize) {
        let offset = Vec2::from_angle(self.orientation[i]).rotate270() * self.r_ts[i];
        self.position_ls[i] = self.position[i] - offset;
        self.position_rs[i] = self.position[i] + offset;
    }

    /// Recompute every active agent's shoulder centers.  Called by the
    /// integrator after positions and orientations have advanced.
    pub fn update_all_shoulders(&mut self) {
        for i in 0..self.count {
            if self.active[i] {
                self.update_shoulders(i);
            }
        }
    }

    /// Center/radius triplet `[torso, left shoulder, right shoulder]` for
    /// the three-circle distance primitives.
    #[inline]
    pub fn circles(&self, i: usize) -> ([Vec2; 3], [f64; 3]) {
        (
            [self.position[i], self.position_ls[i], self.position_rs[i]],
            [self.r_t[i], self.r_s[i], self.r_s[i]],
        )
    }

    // ── Aggregates used by the integrator and spatial index ───────────────

    /// Fastest current speed among active agents (0 when none).
    pub fn max_speed(&self) -> f64 {
        self.active_indices()
            .map(|i| self.velocity[i].length())
            .fold(0.0, f64::max)
    }

    /// Largest preferred speed among active agents (0 when none).
    pub fn max_target_velocity(&self) -> f64 {
        self.active_indices()
            .map(|i| self.target_velocity[i])
            .fold(0.0, f64::max)
    }

    /// Largest interaction cutoff among active agents (0 when none).
    pub fn max_sight(&self) -> f64 {
        self.active_indices()
            .map(|i| self.sight[i])
            .fold(0.0, f64::max)
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(capacity: usize, shape: ShapeModel) -> Self {
        Self {
            shape,
            capacity,
            count: 0,
            active: vec![false; capacity],
            position: vec![Vec2::ZERO; capacity],
            velocity: vec![Vec2::ZERO; capacity],
            force: vec![Vec2::ZERO; capacity],
            mass: vec![0.0; capacity],
            radius: vec![0.0; capacity],
            target_velocity: vec![0.0; capacity],
            target_direction: vec![Vec2::ZERO; capacity],
            orientation: vec![0.0; capacity],
            angular_velocity: vec![0.0; capacity],
            target_orientation: vec![0.0; capacity],
            target_angular_velocity: vec![0.0; capacity],
            torque: vec![0.0; capacity],
            inertia_rot: vec![0.0; capacity],
            r_t: vec![0.0; capacity],
            r_s: vec![0.0; capacity],
            r_ts: vec![0.0; capacity],
            position_ls: vec![Vec2::ZERO; capacity],
            position_rs: vec![Vec2::ZERO; capacity],
            tau_adj: vec![0.0; capacity],
            tau_rot: vec![0.0; capacity],
            k_soc: vec![0.0; capacity],
            tau_0: vec![0.0; capacity],
            mu: vec![0.0; capacity],
            kappa: vec![0.0; capacity],
            damping: vec![0.0; capacity],
            std_rand_force: vec![0.0; capacity],
            std_rand_torque: vec![0.0; capacity],
            f_soc_max: vec![0.0; capacity],
            sight: vec![0.0; capacity],
        }
    }
}
