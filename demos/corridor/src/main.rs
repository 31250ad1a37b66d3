//! corridor — smallest runnable scenario for the crowd_sim core.
//!
//! 24 three-circle pedestrians walk a 20 m × 4 m corridor toward a goal
//! beyond the far end, squeezing past each other and the walls on the way.
//! Scale comment: the same loop runs tens of thousands of agents; enable the
//! `parallel` feature of `crowd-sim` to spread the pair pass across cores.

use std::ops::ControlFlow;
use std::time::Instant;

use anyhow::Result;

use crowd_agent::{AgentParams, AgentStore, AgentStoreBuilder, ShapeModel};
use crowd_core::{SimConfig, Vec2};
use crowd_geom::LineObstacle;
use crowd_sim::{PointNavigation, Scheme, SimObserver, SimulationBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:     usize = 24;
const SEED:            u64   = 42;
const CORRIDOR_LENGTH: f64   = 20.0;
const CORRIDOR_WIDTH:  f64   = 4.0;
const T_END_SECS:      f64   = 60.0;
const GOAL:            Vec2  = Vec2 { x: 25.0, y: 2.0 };
const ARRIVAL_RADIUS:  f64   = 1.5;
const REPORT_INTERVAL: u64   = 500;

// ── Progress observer ─────────────────────────────────────────────────────────

struct Progress {
    t:        f64,
    arrivals: usize,
}

impl Progress {
    fn new() -> Self {
        Self { t: 0.0, arrivals: 0 }
    }
}

impl SimObserver for Progress {
    fn on_step_end(&mut self, step: u64, dt: f64, store: &AgentStore) -> ControlFlow<()> {
        self.t += dt;
        self.arrivals = store
            .active_indices()
            .filter(|&i| (store.position[i] - GOAL).length() <= ARRIVAL_RADIUS)
            .count();

        if step % REPORT_INTERVAL == 0 {
            let mean_speed: f64 = store
                .active_indices()
                .map(|i| store.velocity[i].length())
                .sum::<f64>()
                / store.len() as f64;
            println!(
                "  step {step:>5}  t = {:>6.2} s  mean speed = {mean_speed:.2} m/s  arrived = {}/{AGENT_COUNT}",
                self.t, self.arrivals
            );
        }

        if self.arrivals == AGENT_COUNT {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

// ── Scene setup ───────────────────────────────────────────────────────────────

fn corridor_walls() -> Result<Vec<LineObstacle>> {
    Ok(vec![
        LineObstacle::new(Vec2::new(0.0, 0.0), Vec2::new(CORRIDOR_LENGTH, 0.0))?,
        LineObstacle::new(Vec2::new(0.0, CORRIDOR_WIDTH), Vec2::new(CORRIDOR_LENGTH, CORRIDOR_WIDTH))?,
    ])
}

/// Seed agents on a staggered grid at the corridor entrance, facing the goal.
fn spawn_agents(store: &mut AgentStore) -> Result<()> {
    let params = AgentParams::default();
    let cols = 4;
    for k in 0..AGENT_COUNT {
        let row = k / cols;
        let col = k % cols;
        let x = 0.8 + col as f64 * 0.8 + (row % 2) as f64 * 0.4;
        let y = 0.7 + row as f64 * 0.45;
        store.add(Vec2::new(x, y), 0.0, &params)?;
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== corridor — crowd_sim pedestrian core ===");
    println!("Agents: {AGENT_COUNT}  |  Corridor: {CORRIDOR_LENGTH} m × {CORRIDOR_WIDTH} m  |  Seed: {SEED}");
    println!();

    let (mut store, rngs) = AgentStoreBuilder::new(AGENT_COUNT, SEED)
        .shape(ShapeModel::ThreeCircle)
        .build();
    spawn_agents(&mut store)?;

    let config = SimConfig {
        dt_min: 0.001,
        dt_max: 0.01,
        seed: SEED,
        num_threads: None,
    };

    let mut sim = SimulationBuilder::new(
        config,
        store,
        rngs,
        PointNavigation::new(GOAL).with_arrival_radius(ARRIVAL_RADIUS),
    )
    .scheme(Scheme::VelocityVerlet)
    .obstacles(corridor_walls()?)
    .build()?;

    let t0 = Instant::now();
    let mut progress = Progress::new();
    sim.run_until(T_END_SECS, &mut progress)?;
    let elapsed = t0.elapsed();

    println!();
    println!(
        "Simulated {:.2} s in {} steps ({:.3} s wall clock)",
        sim.time_total(),
        sim.step_count(),
        elapsed.as_secs_f64()
    );
    println!("Arrived: {}/{AGENT_COUNT}", progress.arrivals);
    println!();

    println!("{:<8} {:>8} {:>8} {:>8}", "Agent", "x", "y", "speed");
    println!("{}", "-".repeat(36));
    for i in 0..AGENT_COUNT {
        println!(
            "{:<8} {:>8.2} {:>8.2} {:>8.2}",
            i,
            sim.agents.position[i].x,
            sim.agents.position[i].y,
            sim.agents.velocity[i].length(),
        );
    }

    Ok(())
}
