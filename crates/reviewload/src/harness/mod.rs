//! Load harness: spawns virtual users, paces their iterations and collects
//! their outcomes.

pub mod attack;
pub mod pacing;
pub mod stats;
