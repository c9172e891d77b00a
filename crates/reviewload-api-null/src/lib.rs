//! Null driver for the review assignment service.
//!
//! Answers every call locally with the nominal response, which lets the whole
//! scenario run without a target service.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use reviewload_api_interface::{
    types::{ApiResponse, PullRequestCreation, PullRequestReassignment},
    ApiService, Result,
};
use reviewload_models::Team;
use serde_json::json;

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn team_add(&self, team: &Team) -> Result<ApiResponse> {
        Ok(ApiResponse::new(200, json!({ "team": team }).to_string()))
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_request_create(&self, request: &PullRequestCreation) -> Result<ApiResponse> {
        Ok(ApiResponse::new(
            201,
            json!({
                "pr": {
                    "pull_request_id": request.pull_request_id,
                    "pull_request_name": request.pull_request_name,
                    "author_id": request.author_id,
                    "status": "OPEN",
                    "assigned_reviewers": []
                }
            })
            .to_string(),
        ))
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_request_reassign(
        &self,
        request: &PullRequestReassignment,
    ) -> Result<ApiResponse> {
        Ok(ApiResponse::new(
            409,
            json!({
                "error": {
                    "code": "NOT_ASSIGNED",
                    "message": "reviewer is not assigned to this PR"
                }
            })
            .to_string(),
        ))
    }
}
