//! The interaction engine: block-list pair pass and obstacle pass.
//!
//! Both passes *accumulate* into the store's `force`/`torque` arrays on top
//! of whatever the fluctuation and adjusting passes already wrote.
//!
//! The agent-agent pass evaluates pairs through scratch accumulator buffers
//! rather than writing to the store mid-traversal: a pair evaluation reads
//! both agents' state, so in-place writes would alias the reads, and under
//! the `parallel` feature two threads may touch the same agent.  Per-thread
//! buffers merged in a reduction make the parallel result identical to the
//! sequential one up to float-addition order.

use crowd_agent::AgentStore;
use crowd_core::{AgentId, Vec2};
use crowd_force::{agent_agent, agent_obstacle};
use crowd_geom::LineObstacle;
use crowd_spatial::BlockList;

use crate::SimResult;

/// Social + contact forces between all interacting agent pairs.
///
/// Rebuilds the block list with cell size equal to the largest sight among
/// active agents, so any pair a per-agent cutoff could admit lands in
/// neighboring cells.  A store with all-zero sight (or fewer than two active
/// agents) interacts with nothing and the pass is a no-op.
pub fn agent_agent_pass(store: &mut AgentStore) -> SimResult<()> {
    let cell_size = store.max_sight();
    if cell_size <= 0.0 {
        return Ok(());
    }

    let mut grid = BlockList::new(cell_size)?;
    for i in store.active_indices() {
        grid.insert(AgentId(i as u32), store.position[i]);
    }
    if grid.len() < 2 {
        return Ok(());
    }

    let n = store.len();
    let (force, torque) = accumulate_pairs(store, &grid, n);

    for i in 0..n {
        store.force[i] += force[i];
        store.torque[i] += torque[i];
    }
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn accumulate_pairs(store: &AgentStore, grid: &BlockList, n: usize) -> (Vec<Vec2>, Vec<f64>) {
    let mut force = vec![Vec2::ZERO; n];
    let mut torque = vec![0.0; n];
    grid.for_each_pair(|a, b| {
        let (i, j) = (a.index(), b.index());
        let out = agent_agent(store, i, j);
        if out.is_zero() {
            return;
        }
        force[i] += out.force0;
        force[j] += out.force1;
        torque[i] += out.torque0;
        torque[j] += out.torque1;
    });
    (force, torque)
}

#[cfg(feature = "parallel")]
fn accumulate_pairs(store: &AgentStore, grid: &BlockList, n: usize) -> (Vec<Vec2>, Vec<f64>) {
    use rayon::prelude::*;

    // Materialize the pair list sequentially (cheap: two usizes per pair),
    // then evaluate the expensive distance + force math on the pool.
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    grid.for_each_pair(|a, b| pairs.push((a.index(), b.index())));

    pairs
        .par_iter()
        .fold(
            || (vec![Vec2::ZERO; n], vec![0.0; n]),
            |(mut force, mut torque), &(i, j)| {
                let out = agent_agent(store, i, j);
                if !out.is_zero() {
                    force[i] += out.force0;
                    force[j] += out.force1;
                    torque[i] += out.torque0;
                    torque[j] += out.torque1;
                }
                (force, torque)
            },
        )
        .reduce(
            || (vec![Vec2::ZERO; n], vec![0.0; n]),
            |(mut fa, mut ta), (fb, tb)| {
                for i in 0..n {
                    fa[i] += fb[i];
                    ta[i] += tb[i];
                }
                (fa, ta)
            },
        )
}

/// Contact forces between every active agent and every wall segment.
///
/// Walls are sparse and the distance check is cheap, so this pass runs a
/// plain nested loop with no spatial pruning.
pub fn agent_obstacle_pass(store: &mut AgentStore, obstacles: &[LineObstacle]) {
    if obstacles.is_empty() {
        return;
    }
    for i in 0..store.len() {
        if !store.active[i] {
            continue;
        }
        let mut f_acc = Vec2::ZERO;
        let mut m_acc = 0.0;
        for obstacle in obstacles {
            let (f, m) = agent_obstacle(store, i, obstacle);
            f_acc += f;
            m_acc += m;
        }
        store.force[i] += f_acc;
        store.torque[i] += m_acc;
    }
}
