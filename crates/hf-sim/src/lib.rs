//! `hf-sim`: wall-clock animation scheduler for hexfold.
//!
//! # Two-layer loop
//!
//! ```text
//! host frame loop (now_ms)
//!   └─ Controller::update(now)                agents in registration order
//!        └─ Animator::update(now)             Idle / Moving / Dwelling / Stopped
//!             └─ GrowthStepper::step(agent)   at most once per transition
//! ```
//!
//! The discrete layer moves an agent one vertex per step.  The animator
//! spreads that step over `edge_traverse_ms` of wall-clock time and adds a
//! dwell after travel hops.  Nothing suspends: every deadline is polled
//! against the timestamp the host supplies.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hf_core::{Millis, SimConfig};
//! use hf_layout::{HexGridConfig, compute_hex_grid_layout};
//! use hf_sim::{NoopObserver, SimBuilder};
//!
//! let grid = compute_hex_grid_layout(600, 200, &HexGridConfig::default())?;
//! let mut sim = SimBuilder::new(grid.layout, SimConfig::with_seed(42)).build()?;
//! let last = sim.run_until(Millis(120_000), 16, &mut NoopObserver);
//! ```

pub mod animator;
pub mod builder;
pub mod controller;
pub mod error;
pub mod observer;
pub mod render;
pub mod sim;
pub mod timing;
pub mod view;


pub use animator::{Animator, Move, Phase, STALL_RETRY_MS};
pub use builder::SimBuilder;
pub use controller::{AgentRuntime, Controller};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use render::{AgentDrawable, EdgeStroke, edge_strokes, stroke_width};
pub use sim::Simulation;
pub use timing::TimingConfig;
pub use view::SimView;
