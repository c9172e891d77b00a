use std::time::Instant;

use async_trait::async_trait;
use reviewload_models::{Endpoint, RecordedOutcome};
use shaku::{Component, Interface};

use crate::{
    classifier::{classify_error, classify_response},
    CoreContext,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RegisterTeamInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> RecordedOutcome;
}

#[derive(Component)]
#[shaku(interface = RegisterTeamInterface)]
pub(crate) struct RegisterTeam;

#[async_trait]
impl RegisterTeamInterface for RegisterTeam {
    #[tracing::instrument(skip_all, fields(team_name = %ctx.scenario.team.team_name), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> RecordedOutcome {
        let started = Instant::now();
        let response = ctx.api_service.team_add(&ctx.scenario.team).await;
        let elapsed = started.elapsed();

        let outcome = match response {
            Ok(response) => classify_response(Endpoint::TeamAdd, &response),
            Err(e) => classify_error(Endpoint::TeamAdd, &e),
        };

        RecordedOutcome::new(Endpoint::TeamAdd, outcome, elapsed)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reviewload_api_interface::{types::ApiResponse, ApiError, MockApiService};
    use reviewload_models::{Outcome, Team};

    use super::*;
    use crate::context::tests::CoreContextTest;

    fn arrange(status: u16, body: &'static str) -> CoreContextTest {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_team_add()
                .once()
                .withf(|team| team == &Team::with_default_members("payments"))
                .return_once(move |_| Ok(ApiResponse::new(status, body)));
            svc
        };

        ctx
    }

    #[tokio::test]
    async fn created() {
        let ctx = arrange(200, "{}");
        let recorded = RegisterTeam.run(&ctx.as_context()).await;

        assert_eq!(recorded.endpoint, Endpoint::TeamAdd);
        assert_eq!(recorded.outcome, Outcome::Success);
    }

    #[tokio::test]
    async fn already_exists() {
        let ctx = arrange(400, r#"{"error":{"code":"TEAM_EXISTS"}}"#);
        let recorded = RegisterTeam.run(&ctx.as_context()).await;

        assert_eq!(recorded.outcome, Outcome::Success);
    }

    #[tokio::test]
    async fn unexpected_status() {
        let ctx = arrange(401, "unauthorized");
        let recorded = RegisterTeam.run(&ctx.as_context()).await;

        assert_eq!(
            recorded.outcome,
            Outcome::failure("Unexpected status code for team_add: 401, body=unauthorized")
        );
    }

    #[tokio::test]
    async fn transport_error() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_team_add().once().return_once(|_| {
                Err(ApiError::TransportError {
                    source: "connection refused".into(),
                })
            });
            svc
        };

        let recorded = RegisterTeam.run(&ctx.as_context()).await;

        assert!(!recorded.outcome.is_success());
    }
}
