//! Wire types.

mod pull_request;
mod response;

pub use pull_request::{PullRequestCreated, PullRequestCreation, PullRequestReassignment};
pub use response::ApiResponse;
