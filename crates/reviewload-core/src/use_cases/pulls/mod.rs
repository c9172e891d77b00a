pub mod run_workflow_iteration;

#[cfg(any(test, feature = "testkit"))]
pub use run_workflow_iteration::MockRunWorkflowIterationInterface;
pub use run_workflow_iteration::RunWorkflowIterationInterface;
