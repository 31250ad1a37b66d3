//! Fluent builder for constructing a [`Simulation`].

use crowd_agent::{AgentRngs, AgentStore};
use crowd_core::SimConfig;
use crowd_geom::LineObstacle;

use crate::{Integrator, Navigation, Scheme, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation<N>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — timestep bounds, seed, thread hint
/// - [`AgentStore`] + [`AgentRngs`] — from [`crowd_agent::AgentStoreBuilder`]
/// - `N: Navigation` — the steering collaborator
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default          |
/// |------------------|------------------|
/// | `.scheme(s)`     | `Scheme::Euler`  |
/// | `.obstacles(v)`  | No walls         |
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = AgentStoreBuilder::new(n, seed).build();
/// let mut sim = SimulationBuilder::new(config, store, rngs, StaticNavigation)
///     .scheme(Scheme::VelocityVerlet)
///     .obstacles(walls)
///     .build()?;
/// sim.run_steps(1_000, &mut NoopObserver)?;
/// ```
pub struct SimulationBuilder<N: Navigation> {
    config:     SimConfig,
    agents:     AgentStore,
    rngs:       AgentRngs,
    navigation: N,
    scheme:     Scheme,
    obstacles:  Vec<LineObstacle>,
}

impl<N: Navigation> SimulationBuilder<N> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agents: AgentStore, rngs: AgentRngs, navigation: N) -> Self {
        Self {
            config,
            agents,
            rngs,
            navigation,
            scheme:    Scheme::Euler,
            obstacles: Vec::new(),
        }
    }

    /// Select the integration scheme (default: Euler).
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Supply the static wall segments.
    pub fn obstacles(mut self, obstacles: Vec<LineObstacle>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Validate inputs and return a ready-to-run [`Simulation`].
    ///
    /// Re-derives every per-agent RNG stream from `config.seed`, so the
    /// config's seed — not whatever the store builder was seeded with — is
    /// what a run's reproducibility hangs on.  With the `parallel` feature,
    /// also builds the dedicated Rayon pool from `config.num_threads`.
    pub fn build(self) -> SimResult<Simulation<N>> {
        self.config.validate()?;
        if self.rngs.len() != self.agents.capacity() {
            return Err(SimError::AgentCountMismatch {
                expected: self.agents.capacity(),
                got:      self.rngs.len(),
                what:     "per-agent RNGs",
            });
        }

        let mut rngs = self.rngs;
        rngs.reseed(self.config.seed);

        let integrator = Integrator::new(self.scheme, self.config.dt_min, self.config.dt_max);
        #[allow(unused_mut)]
        let mut sim = Simulation::new(
            self.config,
            self.agents,
            rngs,
            self.obstacles,
            self.navigation,
            integrator,
        );
        #[cfg(feature = "parallel")]
        if let Some(n) = sim.config.num_threads {
            sim.pool = Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(format!("Rayon pool: {e}")))?,
            );
        }
        Ok(sim)
    }
}
