//! `crowd-core` — foundational types for the `crowd_sim` pedestrian-dynamics
//! core.
//!
//! This crate is a dependency of every other `crowd-*` crate.  It intentionally
//! has no `crowd-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `ObstacleId`                              |
//! | [`vec2`]   | `Vec2` math, `wrap_to_pi`                            |
//! | [`config`] | `SimConfig` (timestep bounds, seed, thread count)    |
//! | [`rng`]    | `AgentRng` (per-agent deterministic streams)         |
//! | [`error`]  | `CrowdError`, `CrowdResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CrowdError, CrowdResult};
pub use ids::{AgentId, ObstacleId};
pub use rng::AgentRng;
pub use vec2::{Vec2, wrap_to_pi};
