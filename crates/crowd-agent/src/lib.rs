//! `crowd-agent` — Structure-of-Arrays agent storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA state), `AgentRngs`, `ShapeModel`    |
//! | [`params`]  | `AgentParams` (validated motion/body parameters)       |
//! | [`builder`] | `AgentStoreBuilder`                                    |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                         |
//!
//! # Ownership model
//!
//! `AgentStore` is the single shared-mutable resource of a simulation.  All
//! other components address agents by index (`AgentId`), never by per-agent
//! pointer, so force contributions from independent interaction pairs are
//! additive accumulation into the `force`/`torque` arrays — not aliasing.
//! `reset_motion()` must run before any force is summed each tick.

pub mod builder;
pub mod error;
pub mod params;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use params::AgentParams;
pub use store::{AgentRngs, AgentStore, ShapeModel};
