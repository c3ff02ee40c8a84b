//! `hf-grow`: the discrete growth/travel stepper.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`agent`]     | `Agent`, tagged `Mode` (`Grow` / `Travel`), `TravelPlan`      |
//! | [`steer`]     | Left/right ordering of forward candidates                     |
//! | [`planner`]   | `FrontierPlanner` trait, default `BfsPlanner`, `Route`        |
//! | [`stepper`]   | `GrowthStepper`, `StepOutcome`                                |
//!
//! # Step model
//!
//! [`GrowthStepper::step`] advances one agent by at most one hop and performs
//! at most one graph mutation.  An agent in `Grow` mode walks forward,
//! preferring edges that do not exist yet; when it is blocked it switches to
//! `Travel` in the same call and walks existing edges towards the nearest
//! frontier vertex.  A travel plan is never notified when it goes stale: the
//! stepper compares the target's `version` with the stamp taken at planning
//! time the next time the agent travels.

pub mod agent;
pub mod planner;
pub mod steer;
pub mod stepper;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Mode, TravelPlan};
pub use planner::{BfsPlanner, FrontierPlanner, Route};
pub use steer::{cross_z, order_left_right};
pub use stepper::{GrowthStepper, StepOutcome};
