//! `hf-layout`: the immutable lattice the simulation grows over.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`layout`] | `Layout` (positions, static edges), `LayoutBuilder`           |
//! | [`hex`]    | `HexGridConfig`, `HexGrid`, `compute_hex_grid_layout`         |
//! | [`error`]  | `LayoutError`, `LayoutResult<T>`                              |
//!
//! The simulation core only asks two things of a layout: the pixel position
//! of a vertex and the static undirected edge set.  It never mutates it.

pub mod error;
pub mod hex;
pub mod layout;


pub use error::{LayoutError, LayoutResult};
pub use hex::{HexGrid, HexGridConfig, compute_hex_grid_layout};
pub use layout::{Layout, LayoutBuilder};
