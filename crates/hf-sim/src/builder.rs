//! Fluent builder for constructing a [`Simulation`].

use tracing::info;

use hf_core::{SimConfig, SimRng};
use hf_graph::Graph;
use hf_grow::{Agent, BfsPlanner, FrontierPlanner, GrowthStepper};
use hf_layout::Layout;

use crate::{Controller, SimResult, Simulation, TimingConfig};

/// Fluent builder for [`Simulation<P>`].
///
/// # Example
///
/// ```rust,ignore
/// let grid = compute_hex_grid_layout(600, 200, &HexGridConfig::default())?;
/// let mut sim = SimBuilder::new(grid.layout, SimConfig::with_seed(7)).build()?;
/// sim.run_until(Millis(60_000), 16, &mut NoopObserver);
/// ```
pub struct SimBuilder<P: FrontierPlanner = BfsPlanner> {
    layout:  Layout,
    config:  SimConfig,
    planner: P,
}

impl SimBuilder<BfsPlanner> {
    pub fn new(layout: Layout, config: SimConfig) -> Self {
        Self { layout, config, planner: BfsPlanner }
    }
}

impl<P: FrontierPlanner> SimBuilder<P> {
    /// Replace the nearest-frontier planner.
    pub fn planner<Q: FrontierPlanner>(self, planner: Q) -> SimBuilder<Q> {
        SimBuilder { layout: self.layout, config: self.config, planner }
    }

    /// Validate the configuration, derive the graph, and register
    /// `config.agent_count` fresh agents.
    pub fn build(self) -> SimResult<Simulation<P>> {
        self.config.validate()?;

        let graph = Graph::from_layout(&self.layout);
        let stepper = GrowthStepper::with_planner(
            SimRng::new(self.config.seed),
            self.config.clamped_prefer_new_probability(),
            self.planner,
        );
        let mut controller = Controller::new(stepper, TimingConfig::from_config(&self.config));
        for _ in 0..self.config.agent_count {
            controller.add_agent(Agent::new())?;
        }

        info!(
            seed     = self.config.seed,
            vertices = graph.vertex_count(),
            edges    = graph.edge_count(),
            agents   = self.config.agent_count,
            "simulation built"
        );

        Ok(Simulation {
            config: self.config,
            layout: self.layout,
            graph,
            controller,
            last_update: None,
        })
    }
}
