//! `crowd-spatial` — uniform-grid spatial hashing for neighbor pruning.
//!
//! # Crate layout
//!
//! | Module         | Contents                                       |
//! |----------------|------------------------------------------------|
//! | [`block_list`] | `BlockList`, `CellKey`, `FORWARD_NEIGHBORS`    |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`             |
//!
//! The block list turns the O(N²) all-pairs interaction scan into O(N):
//! with cell side equal to the interaction cutoff, every interacting pair is
//! guaranteed to sit in the same cell or in adjacent cells, so a pass over
//! each occupied cell and its forward half-neighborhood visits every
//! unordered pair exactly once.

pub mod block_list;
pub mod error;

#[cfg(test)]
mod tests;

pub use block_list::{BlockList, CellKey, FORWARD_NEIGHBORS};
pub use error::{SpatialError, SpatialResult};
