//! Scenario logic.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

pub mod classifier;
mod context;
pub mod recorder;
mod scenario;
pub mod schedule;
pub mod use_cases;

pub use context::CoreContext;
pub use scenario::Scenario;
use shaku::module;
use use_cases::{
    pulls::run_workflow_iteration::RunWorkflowIteration,
    team::register_team::RegisterTeam, users::run_virtual_user::RunVirtualUser,
};

module! {
    pub CoreModule {
        components = [RegisterTeam, RunWorkflowIteration, RunVirtualUser],
        providers = []
    }
}
