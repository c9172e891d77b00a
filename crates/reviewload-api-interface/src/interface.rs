use async_trait::async_trait;
use reviewload_models::Team;

use crate::{
    types::{ApiResponse, PullRequestCreation, PullRequestReassignment},
    Result,
};

/// Review assignment service interface.
///
/// Every call returns the raw status and body: deciding whether a status is
/// acceptable belongs to the caller.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Register a team (`POST /team/add`).
    async fn team_add(&self, team: &Team) -> Result<ApiResponse>;
    /// Create a pull request (`POST /pullRequest/create`).
    async fn pull_request_create(&self, request: &PullRequestCreation) -> Result<ApiResponse>;
    /// Reassign a reviewer (`POST /pullRequest/reassign`).
    async fn pull_request_reassign(
        &self,
        request: &PullRequestReassignment,
    ) -> Result<ApiResponse>;
}
