use std::time::Duration;

use crate::Endpoint;

/// Load test verdict for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure { message: String },
}

impl Outcome {
    pub fn failure<T: Into<String>>(message: T) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Outcome of a named request, handed over to the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedOutcome {
    pub endpoint: Endpoint,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

impl RecordedOutcome {
    pub fn new(endpoint: Endpoint, outcome: Outcome, elapsed: Duration) -> Self {
        Self {
            endpoint,
            outcome,
            elapsed,
        }
    }
}
