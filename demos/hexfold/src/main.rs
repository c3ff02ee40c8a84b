//! hexfold: grow a maze over a honeycomb and report what the agents built.
//!
//! Runs the simulation headless on a fixed 60 fps frame clock until every
//! agent has stopped (the frontier is empty) or the time cap is reached.
//! Configuration comes from `HEXFOLD_*` environment variables, see
//! [`config`].  Set `HEXFOLD_OUTPUT_DIR` to also write CSV snapshots.
//!
//! ```text
//! RUST_LOG=debug HEXFOLD_SEED=7 HEXFOLD_AGENTS=2 cargo run --release
//! ```

mod config;

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hf_core::{AgentId, Millis};
use hf_grow::{Agent, StepOutcome};
use hf_layout::compute_hex_grid_layout;
use hf_output::{CsvWriter, SimOutputObserver};
use hf_sim::{NoopObserver, SimBuilder, SimObserver, SimView, Simulation};

use config::RunConfig;

// ── Constants ─────────────────────────────────────────────────────────────────

const WINDOW_WIDTH: u32 = 600;
const WINDOW_HEIGHT: u32 = 200;
const FRAME_MS: u64 = 16;
/// One simulated hour.
const MAX_SIM_MS: u64 = 60 * 60 * 1000;
/// Snapshot cadence when CSV output is enabled.
const OUTPUT_INTERVAL_MS: u64 = 1_000;

// ── CountingObserver ──────────────────────────────────────────────────────────

#[derive(Default, Debug)]
struct RunStats {
    started:        usize,
    grew:           usize,
    new_edges:      usize,
    travel_hops:    usize,
    replans:        usize,
    resumed:        usize,
    stalls:         usize,
    stopped_agents: usize,
}

/// Tallies step outcomes and forwards every callback to `inner`.
struct CountingObserver<O: SimObserver> {
    inner: O,
    stats: RunStats,
}

impl<O: SimObserver> CountingObserver<O> {
    fn new(inner: O) -> Self {
        Self { inner, stats: RunStats::default() }
    }
}

impl<O: SimObserver> SimObserver for CountingObserver<O> {
    fn on_step(&mut self, agent: AgentId, outcome: StepOutcome, state: &Agent) {
        match outcome {
            StepOutcome::Started => self.stats.started += 1,
            StepOutcome::Grew { new_edge } => {
                self.stats.grew += 1;
                if new_edge {
                    self.stats.new_edges += 1;
                }
            }
            StepOutcome::Travelled { replanned } => {
                self.stats.travel_hops += 1;
                if replanned {
                    self.stats.replans += 1;
                }
            }
            StepOutcome::Resumed => self.stats.resumed += 1,
            StepOutcome::Stalled => self.stats.stalls += 1,
            StepOutcome::FrontierExhausted => {}
        }
        self.inner.on_step(agent, outcome, state);
    }

    fn on_agent_stopped(&mut self, agent: AgentId, now: Millis) {
        self.stats.stopped_agents += 1;
        self.inner.on_agent_stopped(agent, now);
    }

    fn on_frame_end(&mut self, now: Millis, view: &SimView<'_>) {
        self.inner.on_frame_end(now, view);
    }

    fn on_sim_end(&mut self, now: Millis, view: &SimView<'_>) {
        self.inner.on_sim_end(now, view);
    }
}

fn run<O: SimObserver>(sim: &mut Simulation, inner: O) -> (Millis, CountingObserver<O>) {
    let mut obs = CountingObserver::new(inner);
    let last = sim.run_until(Millis(MAX_SIM_MS), FRAME_MS, &mut obs);
    (last, obs)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RunConfig::from_env();
    info!(
        seed   = cfg.sim.seed,
        random = cfg.seed_is_random,
        cols   = cfg.grid.target_cols,
        rows   = cfg.grid.target_rows,
        agents = cfg.sim.agent_count,
        "hexfold configuration"
    );

    // 1. Honeycomb layout for the default window.
    let grid = compute_hex_grid_layout(WINDOW_WIDTH, WINDOW_HEIGHT, &cfg.grid)
        .context("building hex grid layout")?;
    info!(
        radius_px = grid.radius_px,
        hexes     = grid.centers.len(),
        vertices  = grid.layout.vertex_count(),
        edges     = grid.layout.edge_count(),
        "layout ready"
    );

    // 2. Simulation.
    let mut sim = SimBuilder::new(grid.layout, cfg.sim.clone()).build()?;

    // 3. Run, with or without CSV output.
    let t0 = Instant::now();
    let (last, stats) = match &cfg.output_dir {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("opening output directory {}", dir.display()))?;
            let (last, mut obs) = run(&mut sim, SimOutputObserver::new(writer, OUTPUT_INTERVAL_MS));
            if let Some(e) = obs.inner.take_error() {
                warn!(error = %e, "output error");
            }
            (last, obs.stats)
        }
        None => {
            let (last, obs) = run(&mut sim, NoopObserver);
            (last, obs.stats)
        }
    };
    let elapsed = t0.elapsed();

    // 4. Summary.
    let graph = sim.graph();
    let total_traffic: u64 = graph.active_edges().map(|(_, e)| e.traffic()).sum();
    let busiest = graph.active_edges().map(|(_, e)| e.traffic()).max().unwrap_or(0);

    if !sim.all_stopped() {
        warn!(%last, frontier = graph.frontier_count(), "time cap reached before the maze was complete");
    }

    println!("Simulation complete in {:.3} s (simulated {last})", elapsed.as_secs_f64());
    println!("  seed           : {}", sim.config().seed);
    println!(
        "  edges          : {} / {} materialized",
        graph.active_edge_count(),
        graph.edge_count()
    );
    println!("  frontier left  : {}", graph.frontier_count());
    println!("  traffic        : {total_traffic} traversals, busiest edge {busiest}");
    println!(
        "  steps          : {} grow ({} new edges), {} travel hops ({} replans)",
        stats.grew, stats.new_edges, stats.travel_hops, stats.replans
    );
    println!(
        "  other          : {} started, {} resumed, {} stalled, {} stopped",
        stats.started, stats.resumed, stats.stalls, stats.stopped_agents
    );
    if let Some(dir) = &cfg.output_dir {
        println!("  output         : {}", dir.display());
    }

    Ok(())
}
