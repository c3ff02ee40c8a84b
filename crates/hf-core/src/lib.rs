//! `hf-core`: foundational types for the `hexfold` maze-growth simulation.
//!
//! This crate is a dependency of every other `hf-*` crate.  It has no `hf-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `VertexKey`, `EdgeKey`, `AgentId`                     |
//! | [`geo`]      | `PixelPoint`, interpolation, y-up deltas              |
//! | [`time`]     | `Millis` timestamps                                   |
//! | [`rng`]      | `SimRng` (single shared decision stream)              |
//! | [`mode`]     | `AgentMode` label (`Grow` / `Travel`)                 |
//! | [`config`]   | `SimConfig` construction-time parameters              |
//! | [`error`]    | `HfError`, `HfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod mode;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{HfError, HfResult};
pub use geo::PixelPoint;
pub use ids::{AgentId, EdgeKey, VertexKey};
pub use mode::AgentMode;
pub use rng::SimRng;
pub use time::Millis;
