use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use crate::{
    recorder::OutcomeRecorder,
    schedule::IterationSchedule,
    use_cases::{pulls::RunWorkflowIterationInterface, team::RegisterTeamInterface},
    CoreContext,
};

/// Summary of one virtual user lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VirtualUserReport {
    pub iterations: u64,
}

/// Whole lifetime of a virtual user: register the team once, then run
/// workflow iterations for as long as the schedule allows.
#[async_trait]
pub trait RunVirtualUserInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        recorder: &dyn OutcomeRecorder,
        schedule: &mut dyn IterationSchedule,
    ) -> VirtualUserReport;
}

#[derive(Component)]
#[shaku(interface = RunVirtualUserInterface)]
pub(crate) struct RunVirtualUser;

#[async_trait]
impl RunVirtualUserInterface for RunVirtualUser {
    #[tracing::instrument(skip_all, ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        recorder: &dyn OutcomeRecorder,
        schedule: &mut dyn IterationSchedule,
    ) -> VirtualUserReport {
        let register_team: &dyn RegisterTeamInterface = ctx.core_module.resolve_ref();
        let run_workflow_iteration: &dyn RunWorkflowIterationInterface =
            ctx.core_module.resolve_ref();

        // A failed registration is recorded, the user keeps going.
        let setup = register_team.run(ctx).await;
        if !setup.outcome.is_success() {
            info!(outcome = ?setup.outcome, "Team registration failed");
        }
        recorder.record(setup);

        let mut report = VirtualUserReport::default();
        while schedule.next_iteration().await {
            for outcome in run_workflow_iteration.run(ctx).await {
                recorder.record(outcome);
            }

            report.iterations += 1;
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    use pretty_assertions::assert_eq;
    use reviewload_api_interface::{types::ApiResponse, MockApiService};
    use reviewload_models::{Endpoint, Outcome, RecordedOutcome};

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        recorder::MemoryRecorder,
        schedule::{IterationLimit, MockIterationSchedule},
        use_cases::{pulls::MockRunWorkflowIterationInterface, team::MockRegisterTeamInterface},
        CoreModule,
    };

    fn outcomes_of(recorder: &MemoryRecorder) -> Vec<(Endpoint, Outcome)> {
        recorder
            .outcomes()
            .into_iter()
            .map(|r| (r.endpoint, r.outcome))
            .collect()
    }

    #[tokio::test]
    async fn end_to_end() {
        let calls = Arc::new(Mutex::new(Vec::new()));

        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();

            let log = calls.clone();
            svc.expect_team_add().once().return_once(move |_| {
                log.lock().unwrap().push("team_add".to_string());
                Ok(ApiResponse::new(200, "{}"))
            });

            let log = calls.clone();
            svc.expect_pull_request_create()
                .once()
                .return_once(move |_| {
                    log.lock().unwrap().push("create_pr".to_string());
                    Ok(ApiResponse::new(
                        201,
                        r#"{"pr": {"assigned_reviewers": ["u2"]}}"#,
                    ))
                });

            let log = calls.clone();
            svc.expect_pull_request_reassign()
                .once()
                .withf(|reassignment| reassignment.old_user_id == "u2")
                .return_once(move |reassignment| {
                    log.lock()
                        .unwrap()
                        .push(format!("reassign {}", reassignment.old_user_id));
                    Ok(ApiResponse::new(409, "no candidate"))
                });

            svc
        };

        let recorder = MemoryRecorder::new();
        let report = RunVirtualUser
            .run(&ctx.as_context(), &recorder, &mut IterationLimit::new(1))
            .await;

        assert_eq!(report, VirtualUserReport { iterations: 1 });
        assert_eq!(
            outcomes_of(&recorder),
            vec![
                (Endpoint::TeamAdd, Outcome::Success),
                (Endpoint::CreatePr, Outcome::Success),
                (Endpoint::Reassign, Outcome::Success),
            ]
        );
        assert_eq!(
            *calls.lock().unwrap(),
            vec!["team_add", "create_pr", "reassign u2"]
        );
    }

    #[tokio::test]
    async fn registers_team_once_before_iterations() {
        let calls = Arc::new(Mutex::new(Vec::new()));

        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();

            let log = calls.clone();
            svc.expect_team_add().once().return_once(move |_| {
                log.lock().unwrap().push(Endpoint::TeamAdd);
                Ok(ApiResponse::new(400, "TEAM_EXISTS"))
            });

            let log = calls.clone();
            svc.expect_pull_request_create()
                .times(3)
                .returning(move |_| {
                    log.lock().unwrap().push(Endpoint::CreatePr);
                    Ok(ApiResponse::new(201, r#"{"pr": {"assigned_reviewers": []}}"#))
                });

            svc.expect_pull_request_reassign().never();
            svc
        };

        let recorder = MemoryRecorder::new();
        let report = RunVirtualUser
            .run(&ctx.as_context(), &recorder, &mut IterationLimit::new(3))
            .await;

        assert_eq!(report.iterations, 3);
        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                Endpoint::TeamAdd,
                Endpoint::CreatePr,
                Endpoint::CreatePr,
                Endpoint::CreatePr
            ]
        );
        assert!(recorder.outcomes().iter().all(|r| r.outcome.is_success()));
    }

    #[tokio::test]
    async fn setup_failure_does_not_stop_the_user() {
        let mut ctx = CoreContextTest::new();

        let register_team = {
            let mut mock = MockRegisterTeamInterface::new();
            mock.expect_run().once().return_once(|_| {
                RecordedOutcome::new(
                    Endpoint::TeamAdd,
                    Outcome::failure("Unexpected status code for team_add: 500, body="),
                    Duration::ZERO,
                )
            });
            mock
        };

        let run_workflow_iteration = {
            let mut mock = MockRunWorkflowIterationInterface::new();
            mock.expect_run().times(2).returning(|_| {
                vec![RecordedOutcome::new(
                    Endpoint::CreatePr,
                    Outcome::Success,
                    Duration::ZERO,
                )]
            });
            mock
        };

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn RegisterTeamInterface>(Box::new(register_team))
            .with_component_override::<dyn RunWorkflowIterationInterface>(Box::new(
                run_workflow_iteration,
            ))
            .build();

        let recorder = MemoryRecorder::new();
        let report = RunVirtualUser
            .run(&ctx.as_context(), &recorder, &mut IterationLimit::new(2))
            .await;

        assert_eq!(report.iterations, 2);
        assert_eq!(
            outcomes_of(&recorder),
            vec![
                (
                    Endpoint::TeamAdd,
                    Outcome::failure("Unexpected status code for team_add: 500, body=")
                ),
                (Endpoint::CreatePr, Outcome::Success),
                (Endpoint::CreatePr, Outcome::Success),
            ]
        );
    }

    #[tokio::test]
    async fn stopped_before_first_iteration() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_team_add()
                .once()
                .return_once(|_| Ok(ApiResponse::new(200, "{}")));
            svc.expect_pull_request_create().never();
            svc
        };

        let mut schedule = MockIterationSchedule::new();
        schedule.expect_next_iteration().once().return_const(false);

        let recorder = MemoryRecorder::new();
        let report = RunVirtualUser
            .run(&ctx.as_context(), &recorder, &mut schedule)
            .await;

        assert_eq!(report.iterations, 0);
        assert_eq!(recorder.outcomes().len(), 1);
    }
}
