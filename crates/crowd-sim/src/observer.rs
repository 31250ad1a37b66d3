//! Simulation observer trait for progress reporting and data collection.

use std::ops::ControlFlow;

use crowd_agent::AgentStore;

/// Callbacks invoked by [`Simulation`][crate::Simulation] at tick boundaries.
///
/// All methods have default implementations so implementors only need to
/// override what they care about.  `on_step_end` returns a [`ControlFlow`];
/// returning `ControlFlow::Break(())` stops the run cleanly after the current
/// tick (the tick itself is never interrupted — a partially applied tick
/// would leave the force accumulators inconsistent).
///
/// # Example — trajectory recorder with early exit
///
/// ```rust,ignore
/// struct Recorder { track: Vec<Vec2>, t_max: f64, t: f64 }
///
/// impl SimObserver for Recorder {
///     fn on_step_end(&mut self, _step: u64, dt: f64, store: &AgentStore) -> ControlFlow<()> {
///         self.track.push(store.position[0]);
///         self.t += dt;
///         if self.t >= self.t_max { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any force pass.
    fn on_step_start(&mut self, _step: u64) {}

    /// Called after each tick has fully integrated.
    ///
    /// `dt` is the adaptive timestep the tick actually used.  Return
    /// `ControlFlow::Break(())` to stop the run.
    fn on_step_end(&mut self, _step: u64, _dt: f64, _store: &AgentStore) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once after the final tick (normal completion or observer break).
    fn on_sim_end(&mut self, _steps: u64, _time_total: f64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run_steps`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
