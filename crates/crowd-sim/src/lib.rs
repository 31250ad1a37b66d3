//! `crowd-sim` — tick loop orchestrator for the crowd_sim core.
//!
//! # The tick pipeline
//!
//! ```text
//! for each tick:
//!   ① Navigation  — collaborator refreshes target_direction / target_orientation.
//!   ② Reset       — zero every force/torque accumulator.
//!   ③ Fluctuation — per-agent truncated-normal random force.
//!   ④ Adjusting   — relax velocity/heading toward the targets.
//!   ⑤ Agent-agent — block-list pair pass: social + contact forces
//!                   (parallel with the `parallel` feature).
//!   ⑥ Obstacles   — agent × wall-segment contact forces.
//!   ⑦ Integrate   — adaptive-dt Euler / velocity Verlet advance.
//! ```
//!
//! The order is a hard invariant: later stages consume forces accumulated by
//! earlier ones.  Cancellation is checked only between ticks — a partially
//! applied tick would leave the accumulators inconsistent.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                               |
//! |------------|------------------------------------------------------|
//! | `parallel` | Runs the agent-agent pass on Rayon's thread pool.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use crowd_agent::{AgentParams, AgentStoreBuilder};
//! use crowd_core::{SimConfig, Vec2};
//! use crowd_sim::{NoopObserver, PointNavigation, SimulationBuilder};
//!
//! let (mut store, rngs) = AgentStoreBuilder::new(100, 42).build();
//! store.add(Vec2::ZERO, 0.0, &AgentParams::default())?;
//! let mut sim = SimulationBuilder::new(
//!         SimConfig::default(), store, rngs,
//!         PointNavigation::new(Vec2::new(50.0, 0.0)),
//!     )
//!     .build()?;
//! sim.run_steps(1_000, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod integrator;
pub mod interaction;
pub mod navigation;
pub mod observer;
pub mod sim;


pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use integrator::{Integrator, Scheme};
pub use navigation::{Navigation, PointNavigation, StaticNavigation};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulation;
