//! The `Simulation` struct and its frame loop.

use tracing::debug;

use hf_core::{Millis, SimConfig};
use hf_graph::Graph;
use hf_grow::{BfsPlanner, FrontierPlanner};
use hf_layout::Layout;

use crate::render::{AgentDrawable, EdgeStroke, edge_strokes};
use crate::{Controller, NoopObserver, SimObserver, SimView};

/// A complete run: the layout, the shared graph, and the controller.
///
/// The host loop calls [`update`][Self::update] once per frame with a
/// non-decreasing timestamp, or hands control to
/// [`run_until`][Self::run_until] for headless runs.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<P: FrontierPlanner = BfsPlanner> {
    pub(crate) config:      SimConfig,
    pub(crate) layout:      Layout,
    pub(crate) graph:       Graph,
    pub(crate) controller:  Controller<P>,
    pub(crate) last_update: Option<Millis>,
}

impl<P: FrontierPlanner> Simulation<P> {
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn controller(&self) -> &Controller<P> {
        &self.controller
    }

    /// Timestamp of the latest update, if any.
    pub fn now(&self) -> Option<Millis> {
        self.last_update
    }

    pub fn all_stopped(&self) -> bool {
        self.controller.all_stopped()
    }

    pub fn view(&self) -> SimView<'_> {
        self.controller.view(&self.layout, &self.graph)
    }

    pub fn drawables(&self) -> Vec<AgentDrawable> {
        self.controller.drawables()
    }

    pub fn edge_strokes(&self) -> Vec<EdgeStroke> {
        edge_strokes(&self.layout, &self.graph)
    }

    /// One scheduler tick.
    pub fn update(&mut self, now: Millis) {
        self.update_observed(now, &mut NoopObserver);
    }

    pub fn update_observed<O: SimObserver>(&mut self, now: Millis, observer: &mut O) {
        self.controller.update_observed(now, &self.layout, &mut self.graph, observer);
        self.last_update = Some(now);
    }

    /// Tick every `frame_ms` up to and including `end`, or until every agent
    /// has stopped.  Returns the timestamp of the last tick.
    ///
    /// The first tick is at `0` for a fresh simulation, otherwise one frame
    /// after the latest update.
    pub fn run_until<O: SimObserver>(&mut self, end: Millis, frame_ms: u64, observer: &mut O) -> Millis {
        let frame_ms = frame_ms.max(1);
        let mut now = match self.last_update {
            Some(last) => last + frame_ms,
            None => Millis::ZERO,
        };

        while now <= end {
            self.update_observed(now, observer);
            observer.on_frame_end(now, &self.view());
            if self.all_stopped() {
                debug!(%now, "all agents stopped");
                break;
            }
            now = now + frame_ms;
        }

        let last = self.last_update.unwrap_or(Millis::ZERO);
        observer.on_sim_end(last, &self.view());
        last
    }
}
