//! The `Simulation` struct and its tick loop.

use crowd_agent::{AgentRngs, AgentStore};
use crowd_core::SimConfig;
use crowd_force::{adjusting_forces, fluctuation_forces};
use crowd_geom::LineObstacle;

use crate::interaction::{agent_agent_pass, agent_obstacle_pass};
use crate::{Integrator, Navigation, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Simulation<N>` holds all simulation state and drives the tick pipeline:
///
/// 1. **Navigation**: `N` refreshes `target_direction`/`target_orientation`.
/// 2. **Reset**: zero every force/torque accumulator.
/// 3. **Fluctuation**: per-agent truncated-normal random force and torque.
/// 4. **Adjusting**: relaxation toward the preferred velocity and heading.
/// 5. **Agent-agent** (optionally parallel with the `parallel` feature):
///    block-list pair pass accumulating social and contact forces.
/// 6. **Obstacles**: contact force from every wall segment.
/// 7. **Integrate**: adaptive-dt Euler / velocity Verlet advance.
///
/// Create via [`SimulationBuilder`][crate::SimulationBuilder].
#[derive(Debug)]
pub struct Simulation<N: Navigation> {
    /// Global configuration (timestep bounds, seed, thread hint).
    pub config: SimConfig,

    /// All per-agent state (SoA arrays).
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Static wall segments.
    pub obstacles: Vec<LineObstacle>,

    /// The navigation collaborator.  Called once at the start of every tick.
    pub navigation: N,

    /// Adaptive-timestep integrator (holds the Verlet force history).
    pub integrator: Integrator,

    /// Dedicated Rayon pool sized from `config.num_threads`; `None` runs the
    /// pair pass on the global pool.
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,

    step: u64,
    time_total: f64,
}

impl<N: Navigation> Simulation<N> {
    pub(crate) fn new(
        config:     SimConfig,
        agents:     AgentStore,
        rngs:       AgentRngs,
        obstacles:  Vec<LineObstacle>,
        navigation: N,
        integrator: Integrator,
    ) -> Self {
        Self {
            config,
            agents,
            rngs,
            obstacles,
            navigation,
            integrator,
            #[cfg(feature = "parallel")]
            pool: None,
            step: 0,
            time_total: 0.0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Ticks completed so far.
    #[inline]
    pub fn step_count(&self) -> u64 {
        self.step
    }

    /// Accumulated simulated time in seconds (sum of all adaptive `dt`s).
    #[inline]
    pub fn time_total(&self) -> f64 {
        self.time_total
    }

    /// Advance the simulation by one tick.  Returns the `dt` used.
    pub fn step(&mut self) -> SimResult<f64> {
        self.navigation.update(&mut self.agents);
        self.agents.reset_motion();
        fluctuation_forces(&mut self.agents, &mut self.rngs);
        adjusting_forces(&mut self.agents);
        self.agent_agent()?;
        agent_obstacle_pass(&mut self.agents, &self.obstacles);
        let dt = self.integrator.step(&mut self.agents);

        self.step += 1;
        self.time_total += dt;
        Ok(dt)
    }

    /// The agent-agent pair pass, routed through the dedicated pool when one
    /// was configured.
    fn agent_agent(&mut self) -> SimResult<()> {
        #[cfg(feature = "parallel")]
        {
            let agents = &mut self.agents;
            return match &self.pool {
                Some(pool) => pool.install(|| agent_agent_pass(agents)),
                None => agent_agent_pass(agents),
            };
        }
        #[cfg(not(feature = "parallel"))]
        agent_agent_pass(&mut self.agents)
    }

    /// Run exactly `n` ticks, or fewer if the observer breaks.
    ///
    /// Observer hooks run at every tick boundary; use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let step = self.step;
            observer.on_step_start(step);
            let dt = self.step()?;
            if observer.on_step_end(step, dt, &self.agents).is_break() {
                break;
            }
        }
        observer.on_sim_end(self.step, self.time_total);
        Ok(())
    }

    /// Run until `time_total` reaches `t_end` seconds, or the observer
    /// breaks.  The final tick may overshoot `t_end` by at most `dt_max`.
    pub fn run_until<O: SimObserver>(&mut self, t_end: f64, observer: &mut O) -> SimResult<()> {
        while self.time_total < t_end {
            let step = self.step;
            observer.on_step_start(step);
            let dt = self.step()?;
            if observer.on_step_end(step, dt, &self.agents).is_break() {
                break;
            }
        }
        observer.on_sim_end(self.step, self.time_total);
        Ok(())
    }
}
