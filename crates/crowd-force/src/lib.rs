//! `crowd-force` — the force model of the pedestrian-dynamics core.
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`adjust`]      | desired-motion force and torque                      |
//! | [`fluctuation`] | truncated-normal random force and torque             |
//! | [`social`]      | time-to-collision power-law avoidance force          |
//! | [`contact`]     | compression + friction + damping on overlap          |
//! | [`pair`]        | per-pair and per-obstacle evaluators for the engine  |
//!
//! # Pipeline contract
//!
//! The per-tick force pipeline is a hard invariant, not an implementation
//! detail: `reset_motion` → fluctuation → adjusting → agent-agent
//! (social + contact) → agent-obstacle (contact).  Every pass *accumulates*
//! into `force`/`torque`; nothing overwrites.  Numerically degenerate cases
//! inside the formulas (negative discriminant, near-zero relative velocity)
//! are model semantics — "no interaction", zero force — never errors.

pub mod adjust;
pub mod contact;
pub mod fluctuation;
pub mod pair;
pub mod social;


pub use adjust::adjusting_forces;
pub use contact::contact_force;
pub use fluctuation::fluctuation_forces;
pub use pair::{PairForces, agent_agent, agent_obstacle};
pub use social::{SocialForce, TAU_MAX, social_circular, social_three_circle, time_to_collision};
