//! HTTP adapter

use async_trait::async_trait;
use reqwest::Client;
use reviewload_api_interface::{
    types::{ApiResponse, PullRequestCreation, PullRequestReassignment},
    ApiService, Result,
};
use reviewload_config::Config;
use reviewload_models::{Endpoint, Team};
use serde::Serialize;

use crate::{
    client::{build_url, get_client_builder},
    errors::HttpError,
};

/// HTTP implementation of the review assignment service.
#[derive(Clone)]
pub struct HttpApiService {
    config: Config,
    client: Client,
}

impl HttpApiService {
    /// Creates a new HTTP adapter.
    pub fn new(config: Config) -> Result<Self, HttpError> {
        let client = get_client_builder(&config).build()?;
        Ok(Self { config, client })
    }

    async fn post<T: Serialize + ?Sized>(&self, endpoint: Endpoint, body: &T) -> Result<ApiResponse> {
        let response = self
            .client
            .post(build_url(&self.config, endpoint.path()))
            .json(body)
            .send()
            .await
            .map_err(HttpError::from)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(HttpError::from)?;

        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl ApiService for HttpApiService {
    #[tracing::instrument(skip_all, fields(team_name = %team.team_name), ret)]
    async fn team_add(&self, team: &Team) -> Result<ApiResponse> {
        self.post(Endpoint::TeamAdd, team).await
    }

    #[tracing::instrument(skip_all, fields(pull_request_id = %request.pull_request_id), ret)]
    async fn pull_request_create(&self, request: &PullRequestCreation) -> Result<ApiResponse> {
        self.post(Endpoint::CreatePr, request).await
    }

    #[tracing::instrument(skip_all, fields(pull_request_id = %request.pull_request_id, old_user_id = %request.old_user_id), ret)]
    async fn pull_request_reassign(
        &self,
        request: &PullRequestReassignment,
    ) -> Result<ApiResponse> {
        self.post(Endpoint::Reassign, request).await
    }
}
