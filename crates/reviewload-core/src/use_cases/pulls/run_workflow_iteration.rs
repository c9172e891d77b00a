use std::time::Instant;

use async_trait::async_trait;
use reviewload_api_interface::types::{
    PullRequestCreated, PullRequestCreation, PullRequestReassignment,
};
use reviewload_models::{Endpoint, Outcome, RecordedOutcome};
use serde_json::Value;
use shaku::{Component, Interface};
use tracing::debug;
use uuid::Uuid;

use crate::{
    classifier::{classify_error, classify_response},
    CoreContext,
};

/// Create a pull request, then ask to replace its first assigned reviewer.
///
/// Returns the outcome of each request sent: one when the creation fails or
/// nobody was assigned, two otherwise.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RunWorkflowIterationInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Vec<RecordedOutcome>;
}

#[derive(Component)]
#[shaku(interface = RunWorkflowIterationInterface)]
pub(crate) struct RunWorkflowIteration;

#[async_trait]
impl RunWorkflowIterationInterface for RunWorkflowIteration {
    #[tracing::instrument(skip_all, ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Vec<RecordedOutcome> {
        let creation = self.build_creation(ctx);

        let (outcome, reviewers) = self.create_pull_request(ctx, &creation).await;
        let mut outcomes = vec![outcome];

        let Some(old_user_id) = reviewers.and_then(|r| r.into_iter().next()) else {
            return outcomes;
        };

        let reassignment = PullRequestReassignment {
            pull_request_id: creation.pull_request_id,
            old_user_id,
        };
        outcomes.push(self.reassign_reviewer(ctx, &reassignment).await);

        outcomes
    }
}

impl RunWorkflowIteration {
    fn build_creation(&self, ctx: &CoreContext<'_>) -> PullRequestCreation {
        let pull_request_id = format!("pr-{}", Uuid::new_v4());

        PullRequestCreation {
            pull_request_name: format!("Test {pull_request_id}"),
            pull_request_id,
            author_id: ctx.scenario.author_id.clone(),
        }
    }

    /// Reviewers are only returned when the creation counts as a success.
    async fn create_pull_request(
        &self,
        ctx: &CoreContext<'_>,
        creation: &PullRequestCreation,
    ) -> (RecordedOutcome, Option<Vec<String>>) {
        let started = Instant::now();
        let response = ctx.api_service.pull_request_create(creation).await;
        let elapsed = started.elapsed();
        let recorded = |outcome| RecordedOutcome::new(Endpoint::CreatePr, outcome, elapsed);

        let response = match response {
            Ok(response) => response,
            Err(e) => return (recorded(classify_error(Endpoint::CreatePr, &e)), None),
        };

        let outcome = classify_response(Endpoint::CreatePr, &response);
        if !outcome.is_success() {
            return (recorded(outcome), None);
        }

        match response.json::<Value>() {
            Ok(body) => {
                let reviewers = PullRequestCreated::from(&body).assigned_reviewers;
                if reviewers.is_empty() {
                    debug!(
                        pull_request_id = %creation.pull_request_id,
                        "No reviewer assigned, skipping reassignment"
                    );
                }

                (recorded(Outcome::Success), Some(reviewers))
            }
            Err(e) => (
                recorded(Outcome::failure(format!(
                    "Failed to parse JSON on {}: {e}, body={}",
                    Endpoint::CreatePr,
                    response.body
                ))),
                None,
            ),
        }
    }

    async fn reassign_reviewer(
        &self,
        ctx: &CoreContext<'_>,
        reassignment: &PullRequestReassignment,
    ) -> RecordedOutcome {
        let started = Instant::now();
        let response = ctx.api_service.pull_request_reassign(reassignment).await;
        let elapsed = started.elapsed();

        let outcome = match response {
            Ok(response) => classify_response(Endpoint::Reassign, &response),
            Err(e) => classify_error(Endpoint::Reassign, &e),
        };

        RecordedOutcome::new(Endpoint::Reassign, outcome, elapsed)
    }
}
